//! Reference image directory loading
//!
//! Scans a directory for PNG and JPEG files and decodes each into an
//! [`ImageDatabase`] entry named after its file.

use crate::{IoError, IoResult, read_image};
use binmatch_core::ImageDatabase;
use std::fs;
use std::path::Path;

/// Filename suffixes accepted by the loader (compared case-insensitively)
pub const SUPPORTED_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Check whether a filename ends in a supported image suffix.
///
/// The comparison is case-insensitive; the name itself is not altered.
pub fn is_supported_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Load every supported image in `dir` into a database.
///
/// - A missing directory is created (with parents) and yields an empty
///   database; an existing empty directory also yields an empty database.
/// - Only regular files with a supported suffix are considered.
/// - Entries are inserted in lexical filename order, so enumeration and
///   tie-breaking are reproducible across platforms.
/// - Files that cannot be read or decoded are skipped with a warning.
///
/// # Errors
///
/// Returns an error only if the directory itself cannot be created or
/// listed.
pub fn load_database<P: AsRef<Path>>(dir: P) -> IoResult<ImageDatabase> {
    let dir = dir.as_ref();
    let mut db = ImageDatabase::new();

    if !dir.exists() {
        fs::create_dir_all(dir)?;
        log::info!("created database directory {}", dir.display());
        return Ok(db);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::warn!("skipping non UTF-8 filename {:?}", raw);
                continue;
            }
        };
        if !is_supported_image_name(&name) {
            log::debug!("skipping {}: unsupported suffix", name);
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            log::debug!("skipping {}: not a regular file", name);
            continue;
        }
        files.push((name, path));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path) in files {
        let decoded = fs::read(&path)
            .map_err(IoError::from)
            .and_then(|data| read_image(&data));
        match decoded {
            Ok(pix) => {
                log::debug!(
                    "loaded {} ({}x{}, {} bpp)",
                    name,
                    pix.width(),
                    pix.height(),
                    pix.depth().bits()
                );
                db.insert(name, pix);
            }
            Err(e) => log::warn!("skipping {}: {}", path.display(), e),
        }
    }

    log::info!("loaded {} images from {}", db.len(), dir.display());
    Ok(db)
}
