//! Asset store port.
//!
//! The importer never touches files directly: it reads source clips and
//! creates derived clips through an [`AssetStore`]. Two stores ship with
//! the crate:
//! - [`MemoryAssetStore`] - in-process map, used by tests and previews
//! - [`DirAssetStore`] - clips as JSON files under a project directory
//!
//! Asset paths always use forward slashes (`Assets/Face/smile.anim`).

mod dir;
mod memory;

pub use dir::DirAssetStore;
pub use memory::MemoryAssetStore;

use uuid::Uuid;

use crate::animator::AnimationClip;
use crate::util::{Error, Result};

/// Storage backend for clip assets.
pub trait AssetStore {
    /// Read the clip stored at `path`.
    fn load_clip(&self, path: &str) -> Result<AnimationClip>;

    /// Persist `clip` as a new asset at `path`.
    fn create_clip(&mut self, path: &str, clip: &AnimationClip) -> Result<()>;

    /// Stable handle of the asset at `path`.
    fn guid(&self, path: &str) -> Result<String>;
}

/// Path-derived guid: uuid v5 in the URL namespace, simple (32 hex) form.
pub fn guid_for_path(path: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, path.as_bytes())
        .simple()
        .to_string()
}

/// Directory part of an asset path (empty when the path has none).
pub fn parent_dir(path: &str) -> &str {
    path.rfind('/').map(|i| &path[..i]).unwrap_or("")
}

/// File name without extension.
pub fn file_stem(path: &str) -> &str {
    let name = path.rfind('/').map(|i| &path[i + 1..]).unwrap_or(path);
    name.rfind('.').filter(|&i| i > 0).map(|i| &name[..i]).unwrap_or(name)
}

/// Path of `file_name` placed next to the asset at `source`.
pub fn sibling_path(source: &str, file_name: &str) -> Result<String> {
    if source.is_empty() || source.ends_with('/') {
        return Err(Error::InvalidAssetPath(source.to_string()));
    }
    Ok(match parent_dir(source) {
        "" => file_name.to_string(),
        dir => format!("{}/{}", dir, file_name),
    })
}
