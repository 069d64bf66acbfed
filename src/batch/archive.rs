//! Zip bundling of composited mockups.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::types::NamedBuffer;
use crate::error::{MockupError, MockupResult};

/// Write every buffer as its own deflated entry, in order, into one zip.
///
/// Repeated names get a ` (n)` suffix before the extension instead of
/// shadowing an earlier entry.
pub fn write_archive(entries: &[NamedBuffer]) -> MockupResult<Vec<u8>> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut used = HashSet::new();

    for entry in entries {
        let name = unique_entry_name(&entry.file_name, &mut used);
        writer.start_file(name.as_str(), options)?;
        writer
            .write_all(&entry.bytes)
            .map_err(|e| MockupError::ArchiveError(format!("{}: {}", name, e)))?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn unique_entry_name(name: &str, used: &mut HashSet<String>) -> String {
    if used.insert(name.to_string()) {
        return name.to_string();
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    let mut n = 2;
    loop {
        let candidate = match ext {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", name, n),
        };
        if used.insert(candidate.clone()) {
            log::warn!("[BATCH] Duplicate entry {} stored as {}", name, candidate);
            return candidate;
        }
        n += 1;
    }
}
