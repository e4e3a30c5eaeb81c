//! Model catalog loading from a directory of descriptor files

use log::{debug, error, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One fine-tuned model descriptor, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor
{   pub source_path: PathBuf
  , /// None when the descriptor file lacks the identifier field
    pub remote_model_id: Option<String>
}

#[derive(Debug, Deserialize)]
struct DescriptorFile
{   fine_tuned_model: Option<String>
}

/// Load every descriptor in `dir`, in directory-listing order.
/// A malformed descriptor file is fatal for the whole run.
pub fn load_model_catalog(dir: &Path)
  -> Result<Vec<ModelDescriptor>, crate::error::Error>
{   debug!("Loading model catalog from: {}", dir.display());

    let entries = fs::read_dir(dir).map_err(|e| {
      error!("Failed to read models directory: {}", e);
      crate::error::Error::FileError(format!(
        "{}: {}", dir.display(), e
      ))
    })?;

    let mut catalog = Vec::new();
    for entry in entries
    {   let entry = entry.map_err(|e| {
          error!("Failed to read directory entry: {}", e);
          crate::error::Error::FileError(e.to_string())
        })?;
        let path = entry.path();

        let raw = fs::read_to_string(&path).map_err(|e| {
          error!("Failed to read {}: {}", path.display(), e);
          crate::error::Error::FileError(format!(
            "{}: {}", path.display(), e
          ))
        })?;

        let descriptor: DescriptorFile
          = serde_json::from_str(&raw).map_err(|e| {
            error!(
              "Malformed model descriptor {}: {}",
              path.display(), e
            );
            crate::error::Error::ParseError(format!(
              "{}: {}", path.display(), e
            ))
          })?;

        if descriptor.fine_tuned_model.is_none()
        {   warn!(
              "Descriptor {} has no fine_tuned_model field",
              path.display()
            );
        }

        catalog.push(ModelDescriptor
        {   source_path: path
          , remote_model_id: descriptor.fine_tuned_model
        });
    }

    debug!("Loaded {} model descriptors", catalog.len());
    Ok(catalog)
}

impl ModelDescriptor
{   /// Identifier used in output paths and remote calls.
    /// A missing field yields the literal "None", which flows
    /// into both the path and the remote call.
    pub fn model_id_or_placeholder(&self) -> String
    {   self.remote_model_id
          .clone()
          .unwrap_or_else(|| "None".to_string())
    }
}
