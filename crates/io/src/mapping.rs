//! Mapping template loader.

use std::path::Path;

use statera_core::Mapping;
use tracing::info;

use crate::error::LoadError;

/// Loads and validates a JSON mapping template.
pub fn load_mapping(path: &Path) -> Result<Mapping, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mapping = Mapping::from_json_str(&json)?;
    info!(
        path = %path.display(),
        line_items = mapping.locations().len(),
        "Mapping loaded"
    );
    Ok(mapping)
}
