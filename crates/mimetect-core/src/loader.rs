//! Loading mime-type datasets from their declarative TOML form.
//!
//! A dataset is a list of `[[mime-type]]` tables:
//!
//! ```toml
//! [[mime-type]]
//! name = "application/zip"
//! description = "ZIP Compressed Archive"
//! ext = ["zip"]
//! magic = [{ offset = 0, type = "byte", value = "504b0304" }]
//! ```
//!
//! `type` selects how `value` is decoded: `"byte"` for paired hex digits,
//! `"string"` (the default) for literal UTF-8 text.

use serde::Deserialize;
use tracing::warn;

use crate::error::LoadError;
use crate::magic::MagicKind;
use crate::mime_type::MimeType;

/// The dataset bundled into the library.
const BUILTIN: &str = include_str!("../data/mime-types.toml");

#[derive(Debug, Deserialize)]
struct MimeTypesFile {
    #[serde(rename = "mime-type", default)]
    types: Vec<MimeTypeDef>,
}

#[derive(Debug, Deserialize)]
struct MimeTypeDef {
    name: String,
    description: Option<String>,
    #[serde(default)]
    ext: Vec<String>,
    #[serde(default)]
    magic: Vec<MagicDef>,
}

#[derive(Debug, Deserialize)]
struct MagicDef {
    offset: usize,
    #[serde(rename = "type", default)]
    kind: MagicKind,
    value: String,
}

/// Parse a dataset from its TOML text.
///
/// Syntax errors are fatal. Recoverable problems are local: a definition
/// whose name fails validation is dropped with a warning, and a magic
/// literal that fails to decode costs only that one pattern. No
/// deduplication happens here - precedence between entries sharing a name
/// is decided at registration.
pub fn load_str(input: &str) -> Result<Vec<MimeType>, LoadError> {
    let file: MimeTypesFile = toml::from_str(input)?;
    let mut types = Vec::with_capacity(file.types.len());
    for def in file.types {
        if let Some(mime_type) = build_type(def) {
            types.push(mime_type);
        }
    }
    Ok(types)
}

fn build_type(def: MimeTypeDef) -> Option<MimeType> {
    let mut mime_type = match MimeType::new(&def.name) {
        Ok(mime_type) => mime_type,
        Err(err) => {
            warn!(name = %def.name, %err, "dropping mime-type definition");
            return None;
        }
    };
    if let Some(description) = def.description {
        mime_type.set_description(description);
    }
    for ext in def.ext {
        mime_type.add_extension(ext);
    }
    for magic in def.magic {
        if let Err(err) = mime_type.add_magic(magic.offset, magic.kind, &magic.value) {
            warn!(name = %mime_type.name(), %err, "skipping magic pattern");
        }
    }
    Some(mime_type)
}

/// Read and parse a dataset file.
#[cfg(feature = "filesystem")]
pub fn load_file(path: &std::path::Path) -> Result<Vec<MimeType>, LoadError> {
    let input = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&input)
}

/// The types declared by the embedded dataset.
pub fn builtin() -> Vec<MimeType> {
    load_str(BUILTIN).expect("embedded mime-types dataset is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_parses() {
        let types = builtin();
        assert!(!types.is_empty());
        assert!(types.iter().any(|t| t.name() == "application/pdf"));
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        assert!(matches!(load_str("[[mime-type"), Err(LoadError::Parse(_))));
    }
}
