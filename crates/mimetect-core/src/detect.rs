//! File-backed detection: bounded prefix reads and the fallback seam.
//!
//! The registry itself never touches the filesystem; everything here is a
//! thin collaborator layer that reads a document prefix and hands it to
//! the query surface.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::mime_type::MimeType;
use crate::registry::MimeRegistry;

/// How many bytes [`detect_file`] reads when the registry's own minimum
/// is smaller.
pub const DEFAULT_PREFIX_LEN: usize = 1024;

/// Last-resort type source, consulted when the registry finds nothing.
///
/// Implementations typically wrap a platform sniffer or an external tool.
/// Whatever name they return is resolved against the registry's name
/// index, so a name the registry does not know still yields `None`.
pub trait FallbackSniffer {
    /// A content-type name for the document at `path`, if the sniffer has
    /// an opinion.
    fn sniff(&self, path: &Path) -> Option<String>;
}

/// Read at most `max` leading bytes of the file at `path`.
pub fn read_prefix(path: &Path, max: usize) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    File::open(path)?.take(max as u64).read_to_end(&mut data)?;
    Ok(data)
}

/// Detect the type of the file at `path` from its name and leading bytes.
///
/// Reads enough of the file to let every registered magic pattern be
/// evaluated, and at least [`DEFAULT_PREFIX_LEN`] bytes.
pub fn detect_file<'r>(
    registry: &'r MimeRegistry,
    path: &Path,
) -> io::Result<Option<&'r MimeType>> {
    let prefix_len = registry.min_length().max(DEFAULT_PREFIX_LEN);
    let data = read_prefix(path, prefix_len)?;
    let name = path.to_string_lossy();
    Ok(registry.lookup(&name, &data))
}

/// Like [`detect_file`], consulting `fallback` when the registry finds
/// nothing on its own.
pub fn detect_file_with<'r>(
    registry: &'r MimeRegistry,
    path: &Path,
    fallback: &dyn FallbackSniffer,
) -> io::Result<Option<&'r MimeType>> {
    if let Some(found) = detect_file(registry, path)? {
        return Ok(Some(found));
    }
    Ok(fallback
        .sniff(path)
        .and_then(|name| registry.for_name(&name)))
}
