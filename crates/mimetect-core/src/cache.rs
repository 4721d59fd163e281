//! Process-wide registry instances, built once per dataset.
//!
//! Registries are cheap to query but not to build, so callers that resolve
//! the same dataset repeatedly share one instance per source. Construction
//! is guarded so concurrent first callers observe a single completed
//! registry, never a partially built one.

use std::sync::OnceLock;

use crate::loader;
use crate::mime_type::MimeType;
use crate::registry::{MimeRegistry, MimeRegistryBuilder};

fn build_registry(types: Vec<MimeType>) -> MimeRegistry {
    let mut builder = MimeRegistryBuilder::new();
    builder.register_all(types);
    builder.build()
}

/// The registry built from the embedded dataset, constructed on first use.
pub fn builtin_registry() -> &'static MimeRegistry {
    static REGISTRY: OnceLock<MimeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| build_registry(loader::builtin()))
}

/// One registry per dataset path, shared by every caller of that path.
///
/// The cache lock is held across construction, so only one instance is
/// ever built per key. Failed loads are not cached; a later call may
/// succeed once the file is fixed.
#[cfg(feature = "filesystem")]
pub fn registry_for(
    path: &std::path::Path,
) -> Result<std::sync::Arc<MimeRegistry>, crate::error::LoadError> {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    static INSTANCES: OnceLock<Mutex<HashMap<PathBuf, Arc<MimeRegistry>>>> = OnceLock::new();
    let instances = INSTANCES.get_or_init(Mutex::default);

    let mut cache = instances.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(instance) = cache.get(path) {
        return Ok(Arc::clone(instance));
    }
    let instance = Arc::new(build_registry(loader::load_file(path)?));
    cache.insert(path.to_path_buf(), Arc::clone(&instance));
    Ok(instance)
}
