use std::fs;

use crate::{CleanArgs, build::base_path_from_config, config::SiteConfig};

pub fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let (config, config_path) = SiteConfig::load_from_arg(args.config_file.as_deref())?;
    let base_path = base_path_from_config(&config_path);

    let output_dir = config.output_dir(&base_path);
    if output_dir.exists() {
        if args.dry_run {
            println!("Would delete {}", output_dir.display());
        } else {
            fs::remove_dir_all(&output_dir)?;
            println!("Deleted {}", output_dir.display());
        }
    } else {
        println!("Nothing to clean at {}", output_dir.display());
    }

    Ok(())
}
