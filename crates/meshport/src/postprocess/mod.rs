pub mod container;
pub mod strip;

use std::path::Path;

use serde_json::value::RawValue;

use crate::config::BatchOptions;
use crate::error::PostProcessError;
pub use container::GlbDocument;

/// Applies the post-conversion edits to a converter-produced GLB.
///
/// Edits happen in place: the file is parsed, mutated and written back over
/// the converter's output.
pub struct GlbPostProcessor {
    keep_materials: bool,
    strip_textures: bool,
    metadata: serde_json::Map<String, serde_json::Value>,
}

impl GlbPostProcessor {
    pub fn new(options: &BatchOptions) -> Self {
        Self {
            keep_materials: options.keep_materials,
            strip_textures: options.strip_textures,
            metadata: options.metadata.clone(),
        }
    }

    pub fn process(&self, path: &Path) -> Result<(), PostProcessError> {
        let mut doc = GlbDocument::open(path)?;

        if self.strip_textures {
            strip::strip_textures(&mut doc.root);
        }

        if !self.keep_materials {
            strip::strip_materials(&mut doc.root);
        }

        self.apply_metadata(&mut doc.root)?;

        doc.save(path)
    }

    /// Overwrites the document root `extras` with the metadata object.
    /// Whatever the converter put there is replaced, never merged.
    fn apply_metadata(&self, root: &mut gltf::json::Root) -> Result<(), PostProcessError> {
        let text = serde_json::to_string(&self.metadata)
            .map_err(PostProcessError::SerializeDocument)?;
        let raw = RawValue::from_string(text).map_err(PostProcessError::SerializeDocument)?;
        root.extras = Some(raw);
        Ok(())
    }
}
