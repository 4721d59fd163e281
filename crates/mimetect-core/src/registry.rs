//! The type registry: indexes over registered [`MimeType`]s and the
//! read-only query surface built on them.

use std::collections::HashMap;

use crate::mime_type::MimeType;

/// The fallback type name for content nothing else claims.
pub const DEFAULT: &str = "application/octet-stream";

/// Accumulates registrations, then freezes into a [`MimeRegistry`].
///
/// Registration is the only mutating phase; it is expected to run once,
/// sequentially, before any queries are issued.
#[derive(Debug, Default)]
pub struct MimeRegistryBuilder {
    /// Every registered type, in registration order. Indices into this
    /// arena are what the other fields store.
    types: Vec<MimeType>,
    by_name: HashMap<String, usize>,
    by_extension: HashMap<String, Vec<usize>>,
    magic_candidates: Vec<usize>,
    min_length: usize,
}

impl MimeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one type, updating every index.
    ///
    /// Registering a second type under an already-used name replaces the
    /// name-index entry only; extension and magic entries added by the
    /// earlier registration stay in place and keep resolving to it.
    pub fn register(&mut self, mime_type: MimeType) -> &mut Self {
        let idx = self.types.len();
        self.by_name.insert(mime_type.name().to_string(), idx);
        for ext in mime_type.extensions() {
            self.by_extension.entry(ext.clone()).or_default().push(idx);
        }
        if mime_type.has_magic() {
            self.magic_candidates.push(idx);
        }
        self.min_length = self.min_length.max(mime_type.min_length());
        self.types.push(mime_type);
        self
    }

    pub fn register_all(&mut self, types: impl IntoIterator<Item = MimeType>) -> &mut Self {
        for mime_type in types {
            self.register(mime_type);
        }
        self
    }

    /// Freeze into a read-only registry.
    pub fn build(self) -> MimeRegistry {
        MimeRegistry {
            types: self.types,
            by_name: self.by_name,
            by_extension: self.by_extension,
            magic_candidates: self.magic_candidates,
            min_length: self.min_length,
        }
    }
}

/// An immutable registry of content types.
///
/// Built once via [`MimeRegistryBuilder`], then queried freely; with no
/// interior mutability it is safe to share across threads without locking.
#[derive(Debug)]
pub struct MimeRegistry {
    types: Vec<MimeType>,
    by_name: HashMap<String, usize>,
    by_extension: HashMap<String, Vec<usize>>,
    magic_candidates: Vec<usize>,
    min_length: usize,
}

impl MimeRegistry {
    /// Look up a type by its canonical `primary/sub` name.
    pub fn for_name(&self, name: &str) -> Option<&MimeType> {
        self.by_name.get(name).map(|&idx| &self.types[idx])
    }

    /// Every type whose declared extensions cover `name`'s extension, in
    /// registration order. Empty when `name` has no extension (no `.`, or
    /// a trailing `.`) or the extension is unknown. The extension match is
    /// case-sensitive and exact.
    pub fn candidates_for_name(&self, name: &str) -> Vec<&MimeType> {
        extension_of(name)
            .and_then(|ext| self.by_extension.get(ext))
            .map(|indices| indices.iter().map(|&idx| &self.types[idx]).collect())
            .unwrap_or_default()
    }

    /// Find a type from a document name alone.
    ///
    /// When several types declare the same extension the first-registered
    /// one wins. This is a documented arbitrary tie-break, not a ranking.
    pub fn lookup_by_name(&self, name: &str) -> Option<&MimeType> {
        let ext = extension_of(name)?;
        let idx = *self.by_extension.get(ext)?.first()?;
        Some(&self.types[idx])
    }

    /// Find a type from the leading bytes of a document.
    ///
    /// Scans magic-bearing types in registration order and returns the
    /// first whose patterns match - registration order decides ties, not
    /// pattern length or specificity. An empty buffer never matches.
    ///
    /// Supply at least [`min_length`](Self::min_length) bytes to give every
    /// registered pattern a chance; patterns reaching past a shorter buffer
    /// are treated as non-matches.
    pub fn lookup_by_content(&self, data: &[u8]) -> Option<&MimeType> {
        if data.is_empty() {
            return None;
        }
        self.magic_candidates
            .iter()
            .map(|&idx| &self.types[idx])
            .find(|mime_type| mime_type.matches(data))
    }

    /// Find a type from a document name and its leading bytes.
    ///
    /// The name is authoritative: with exactly one extension candidate the
    /// content is never inspected, and with several candidates the
    /// first-registered one wins without content disambiguation. Content
    /// matching runs only when the name yields no candidate at all.
    pub fn lookup(&self, name: &str, data: &[u8]) -> Option<&MimeType> {
        self.lookup_by_name(name)
            .or_else(|| self.lookup_by_content(data))
    }

    /// Minimum number of leading bytes a caller should supply so that
    /// every registered magic pattern can be evaluated.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Registered types, in registration order.
    pub fn types(&self) -> impl Iterator<Item = &MimeType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// The extension of a document name: the substring after the last `.`.
/// A name without a `.`, or ending in one, has no extension.
fn extension_of(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => Some(&name[idx + 1..]),
        _ => None,
    }
}
