//! # mimetect-core
//!
//! MIME type detection from file extensions and magic bytes.
//!
//! A [`MimeRegistry`] owns [`MimeType`] descriptors loaded from a
//! declarative TOML dataset. Each descriptor carries the file extensions
//! and [`MagicPattern`]s that identify its type. Queries resolve a
//! document name, a byte prefix, or both to a descriptor; "not found" is
//! always a normal `None`, never an error.
//!
//! ```
//! use mimetect_core::builtin_registry;
//!
//! let registry = builtin_registry();
//!
//! let zip = registry.lookup("archive.zip", &[]).unwrap();
//! assert_eq!(zip.name(), "application/zip");
//!
//! let pdf = registry.lookup_by_content(b"%PDF-1.7").unwrap();
//! assert_eq!(pdf.primary_type(), "application");
//! assert_eq!(pdf.sub_type(), "pdf");
//! ```
//!
//! Custom datasets load through [`loader`] and build through
//! [`MimeRegistryBuilder`]; [`registry_for`] memoizes one registry per
//! dataset path for the life of the process.

pub mod cache;
#[cfg(feature = "filesystem")]
pub mod detect;
pub mod error;
pub mod loader;
pub mod magic;
pub mod mime_type;
pub mod registry;

pub use cache::builtin_registry;
#[cfg(feature = "filesystem")]
pub use cache::registry_for;
#[cfg(feature = "filesystem")]
pub use detect::{DEFAULT_PREFIX_LEN, FallbackSniffer, detect_file, detect_file_with};
pub use error::{LoadError, MimeError, Result};
pub use magic::{MagicKind, MagicPattern};
pub use mime_type::MimeType;
pub use registry::{DEFAULT, MimeRegistry, MimeRegistryBuilder};
