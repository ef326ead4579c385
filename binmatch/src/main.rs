//! binmatch command line tool
//!
//! Usage:
//! binmatch photo.jpg
//! binmatch photo.jpg --database ./refs --labels demos/labels.json
//! binmatch photo.jpg --mask-out mask.png -vv

mod cli;
mod logging;
mod report;

use binmatch::io::{decode_image, load_database, write_png};
use binmatch::recog::{ClassifyReport, LabelTable, classify};
use clap::ArgMatches;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

fn main() {
    let matches = cli::build_cli().get_matches();

    if let Err(e) = logging::init_log(logging::level_for(matches.get_count("verbose"))) {
        eprintln!("warning: logging disabled: {}", e);
    }

    if let Err(e) = run(&matches) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let query_path = matches
        .get_one::<String>("query")
        .ok_or("missing query image")?;
    let db_dir = matches
        .get_one::<String>("database")
        .map(String::as_str)
        .unwrap_or(cli::DEFAULT_DATABASE_DIR);

    let labels = match matches.get_one::<String>("labels") {
        Some(path) => LabelTable::from_path(path)?,
        None => LabelTable::new(),
    };

    let stdout = io::stdout();
    let report = classify_file(&mut stdout.lock(), db_dir, query_path, &labels)?;

    if let (Some(path), Some(report)) = (matches.get_one::<String>("mask-out"), &report) {
        match &report.mask {
            Some(mask) => {
                write_png(mask.as_pix(), BufWriter::new(File::create(path)?))?;
                log::info!("wrote mask to {}", path);
            }
            None => log::warn!("no mask written: query could not be decoded"),
        }
    }

    Ok(())
}

/// Classify the image at `query_path` against the references in `db_dir`
/// and write the report to `out`.
///
/// An empty database prints a warning and yields `None` without touching
/// the query file.
fn classify_file<W: Write>(
    out: &mut W,
    db_dir: &str,
    query_path: &str,
    labels: &LabelTable,
) -> Result<Option<ClassifyReport>, Box<dyn Error>> {
    let database = load_database(db_dir)?;
    if database.is_empty() {
        writeln!(
            out,
            "warning: no images found in '{}'. Add PNG or JPEG files to that directory.",
            db_dir
        )?;
        return Ok(None);
    }

    let bytes = fs::read(query_path)?;
    let query = decode_image(&bytes);
    let report = classify(&database, query.as_ref())?;
    report::write_report(out, query_path, query.as_ref(), &report, labels)?;
    Ok(Some(report))
}
