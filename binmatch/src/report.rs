//! Plain-text rendering of a classification report

use binmatch::Pix;
use binmatch::recog::{ClassifyReport, LabelTable};
use std::io::{self, Write};

/// Write the query summary, every comparison, and the verdict.
pub fn write_report<W: Write>(
    out: &mut W,
    query_name: &str,
    query: Option<&Pix>,
    report: &ClassifyReport,
    labels: &LabelTable,
) -> io::Result<()> {
    match query {
        Some(pix) => writeln!(
            out,
            "Query: {} ({}x{}, {} bpp)",
            query_name,
            pix.width(),
            pix.height(),
            pix.depth().bits()
        )?,
        None => writeln!(out, "Query: {} (could not be decoded)", query_name)?,
    }
    if let Some(mask) = &report.mask {
        writeln!(out, "Otsu threshold: {}", mask.threshold())?;
    }
    writeln!(out, "Feature (foreground pixels): {}", report.feature)?;
    writeln!(out, "---")?;

    for c in &report.comparisons {
        writeln!(
            out,
            "Distance to {}: {:.2} (feature {})",
            c.name, c.distance, c.feature
        )?;
    }
    writeln!(out, "---")?;

    match report.best() {
        Some(best) => {
            let name = best.name.as_deref().unwrap_or_default();
            writeln!(
                out,
                "Best match: {} (distance {:.2})",
                name, best.distance
            )?;
            if let Some(label) = labels.label(name) {
                writeln!(out, "Label: {}", label)?;
            }
        }
        None => writeln!(out, "error: no valid match found")?,
    }

    Ok(())
}
