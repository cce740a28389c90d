//! Shared utility functions.

/// Convert a slug to title case.
///
/// Splits on `-` and `_`, capitalizes each word.
/// "hello-world" -> "Hello World"
/// "my_first_post" -> "My First Post"
pub fn title_case(s: &str) -> String {
    s.split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello-world"), "Hello World");
        assert_eq!(title_case("my_first_post"), "My First Post");
        assert_eq!(title_case("notes"), "Notes");
        assert_eq!(title_case("README"), "README");
    }
}
