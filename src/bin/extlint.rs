use anyhow::Context;
use clap::{Arg, Command};
use extension_lint::{LintConfig, PathUtils, ValidationRun};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("extlint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pre-publish validator for Gemini CLI extension packages")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .help("Extension package root (defaults to two levels above the executable)"),
        )
        .get_matches();

    let root = match matches.get_one::<String>("root") {
        Some(root) => PathBuf::from(root),
        None => PathUtils::default_package_root()
            .context("cannot determine the extension package root; pass --root")?,
    };

    let config = LintConfig::new(root);
    let report = ValidationRun::new(config).execute();

    print!("{}", report.render());

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
