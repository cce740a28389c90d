use std::fs;

use crate::{
    BuildArgs,
    build::{Builder, base_path_from_config},
    config::SiteConfig,
};

pub fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    let (mut config, config_path) = SiteConfig::load_from_arg(args.config_file.as_deref())?;

    // CLI flags override the config file
    if let Some(source) = &args.source {
        config.source = source.clone();
    }
    if let Some(out) = &args.out {
        config.output = out.clone();
    }

    let base_path = base_path_from_config(&config_path);
    let builder = Builder::new(config, base_path);

    // A clean build removes the output directory first, so no stale
    // artifacts from deleted posts survive.
    if args.clean {
        let output_dir = builder.output_dir();
        if output_dir.exists() {
            fs::remove_dir_all(&output_dir)?;
        }
    }

    let report = builder.build()?;

    println!(
        "Built site to {} ({} post(s), {} static file(s))",
        report.output_dir.display(),
        report.posts_built,
        report.assets_copied
    );

    Ok(())
}
