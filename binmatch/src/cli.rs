//! Command line definition

use clap::{Arg, ArgAction, Command};

/// Reference directory used when `--database` is not given
pub const DEFAULT_DATABASE_DIR: &str = "database_images";

pub fn build_cli() -> Command {
    Command::new("binmatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify an image by its Otsu foreground area")
        .arg(
            Arg::new("query")
                .help("Image to classify (PNG or JPEG)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("DIR")
                .help("Directory of reference images, created if missing")
                .default_value(DEFAULT_DATABASE_DIR),
        )
        .arg(
            Arg::new("labels")
                .short('l')
                .long("labels")
                .value_name("FILE")
                .help("JSON object mapping reference filenames to labels"),
        )
        .arg(
            Arg::new("mask-out")
                .short('m')
                .long("mask-out")
                .value_name("FILE")
                .help("Write the query's binary mask as PNG"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
}
