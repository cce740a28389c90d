use std::fs;

use crate::{InitArgs, config::SiteConfig};

const POST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{{ title }} - {{ site.name }}</title>
  {% if description %}<meta name="description" content="{{ description }}">{% endif %}
  {% if image %}<meta property="og:image" content="{{ image }}">{% endif %}
  <link rel="stylesheet" href="../style.css">
</head>
<body>
  <header>
    <h1>{{ title }}</h1>
    <p class="date">{{ date }}</p>
  </header>
  <main>
{{ content | safe }}
  </main>
  <footer><a href="../">{{ site.name }}</a></footer>
</body>
</html>
"#;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{{ site.name }}</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <h1>{{ site.name }}</h1>
  <ul>
  {% for post in posts %}
    <li><a href="{{ post.url }}">{{ post.title }}</a> <span class="date">{{ post.date }}</span></li>
  {% endfor %}
  </ul>
</body>
</html>
"#;

const SAMPLE_POST: &str = r#"---
title: Hello World
date: 2024-01-01
description: The first post on this site
---

# Hello

Welcome to your new site. Put each post in its own folder under
`posts/`, one markdown file per folder; everything else in the folder is
copied to the output next to the rendered page.
"#;

const SAMPLE_STYLESHEET: &str = "body { max-width: 42rem; margin: 0 auto; font-family: sans-serif; }\n.date { color: #666; }\n";

pub fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            fs::create_dir_all(&path)?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    println!("Initializing site in {}", path.display());

    let config_text = serde_yaml::to_string(&SiteConfig::default())?;
    fs::write(path.join("hellfire.yaml"), config_text)?;

    fs::create_dir_all(path.join("templates"))?;
    fs::write(path.join("templates/post.html"), POST_TEMPLATE)?;
    fs::write(path.join("templates/index.html"), INDEX_TEMPLATE)?;

    fs::create_dir_all(path.join("posts/hello-world"))?;
    fs::write(path.join("posts/hello-world/index.md"), SAMPLE_POST)?;

    fs::write(path.join("style.css"), SAMPLE_STYLESHEET)?;

    println!("Created a starter site; run `hellfire build` inside it");

    Ok(())
}
