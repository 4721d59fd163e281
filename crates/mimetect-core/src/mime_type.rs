//! The MIME type descriptor: a `primary/sub` name plus matching metadata.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{MimeError, Result};
use crate::magic::{MagicKind, MagicPattern};

/// Separator between the primary type and the sub type.
const SEPARATOR: char = '/';

/// Separator that introduces optional content-type parameters.
const PARAMS_SEP: char = ';';

/// Characters not allowed in either half of a content-type name.
const SPECIALS: &str = "()<>@,;:\\\"/[]?=";

/// One registered content type and the metadata used to detect it.
///
/// The canonical name is `primary/sub` with any `;`-delimited parameters
/// stripped at construction. Extensions and magic patterns accumulate
/// during the dataset build phase; after registration the descriptor is
/// only ever read.
///
/// Equality and hashing are by canonical name, case-sensitively.
#[derive(Debug, Clone)]
pub struct MimeType {
    /// Canonical `primary/sub` form.
    name: String,
    /// Byte index of the separator within `name`.
    slash: usize,
    description: Option<String>,
    extensions: Vec<String>,
    magic: Vec<MagicPattern>,
    min_length: usize,
}

impl MimeType {
    /// Parse a content-type string, splitting on the first `/`.
    pub fn new(name: &str) -> Result<Self> {
        match name.split_once(SEPARATOR) {
            Some((primary, sub)) => Self::from_parts(primary, sub),
            None => Err(MimeError::MalformedType {
                name: name.to_string(),
                detail: if name.is_empty() {
                    "empty type".to_string()
                } else {
                    "missing `/` separator".to_string()
                },
            }),
        }
    }

    /// Build a type from its primary and sub halves.
    ///
    /// The sub half has any `;`-delimited parameter suffix stripped before
    /// validation, so `from_parts("text", "plain; charset=utf-8")` yields
    /// `text/plain`.
    pub fn from_parts(primary: &str, sub: &str) -> Result<Self> {
        if !is_valid_part(primary) {
            return Err(MimeError::MalformedType {
                name: format!("{primary}{SEPARATOR}{sub}"),
                detail: format!("invalid primary type `{primary}`"),
            });
        }
        let cleared = sub.split(PARAMS_SEP).next().unwrap_or_default();
        if !is_valid_part(cleared) {
            // Report the caller's input, not the parameter-stripped form.
            return Err(MimeError::MalformedType {
                name: format!("{primary}{SEPARATOR}{sub}"),
                detail: format!("invalid sub type `{cleared}`"),
            });
        }
        Ok(Self {
            name: format!("{primary}{SEPARATOR}{cleared}"),
            slash: primary.len(),
            description: None,
            extensions: Vec::new(),
            magic: Vec::new(),
            min_length: 0,
        })
    }

    /// Canonicalize a content-type string, dropping optional parameters.
    ///
    /// ```
    /// use mimetect_core::MimeType;
    ///
    /// let name = MimeType::clean("text/plain; charset=utf-8")?;
    /// assert_eq!(name, "text/plain");
    /// # Ok::<(), mimetect_core::MimeError>(())
    /// ```
    pub fn clean(name: &str) -> Result<String> {
        Ok(Self::new(name)?.name)
    }

    /// The canonical `primary/sub` name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_type(&self) -> &str {
        &self.name[..self.slash]
    }

    pub fn sub_type(&self) -> &str {
        &self.name[self.slash + 1..]
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Declared extensions, in declaration order. Duplicates are preserved.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Magic patterns, in declaration order.
    pub fn magic_patterns(&self) -> &[MagicPattern] {
        &self.magic
    }

    /// Shortest buffer that lets every pattern of this type be evaluated.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn has_magic(&self) -> bool {
        !self.magic.is_empty()
    }

    /// Append an extension. No deduplication, no validation.
    pub fn add_extension(&mut self, ext: impl Into<String>) {
        self.extensions.push(ext.into());
    }

    /// Decode a dataset literal and append it as a magic pattern.
    ///
    /// An empty literal is silently ignored. A literal that fails to decode
    /// leaves the descriptor unchanged and returns the decode error, so the
    /// caller can skip that one pattern and keep the rest.
    pub fn add_magic(&mut self, offset: usize, kind: MagicKind, literal: &str) -> Result<()> {
        if literal.is_empty() {
            return Ok(());
        }
        let pattern = MagicPattern::new(offset, kind, literal)?;
        self.min_length = self.min_length.max(pattern.required_len());
        self.magic.push(pattern);
        Ok(())
    }

    /// True iff any of this type's magic patterns matches `data`. Patterns
    /// are tried in declaration order.
    pub fn matches(&self, data: &[u8]) -> bool {
        self.magic.iter().any(|pattern| pattern.matches(data))
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for MimeType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MimeType {}

impl Hash for MimeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A half is valid when it is non-empty after trimming and free of control
/// characters (code points <= 0x1A) and reserved specials.
fn is_valid_part(part: &str) -> bool {
    !part.trim().is_empty()
        && !part
            .chars()
            .any(|c| c <= '\u{1A}' || SPECIALS.contains(c))
}
