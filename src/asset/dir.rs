use std::path::{Path, PathBuf};

use tracing::debug;

use super::{guid_for_path, AssetStore};
use crate::animator::AnimationClip;
use crate::util::{Error, Result};

/// Asset store backed by a project directory.
///
/// An asset path such as `Assets/Face/smile.anim` resolves to
/// `<root>/Assets/Face/smile.anim`, holding the clip as JSON.
#[derive(Clone, Debug)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    /// Open a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        if path.is_empty() || path.split('/').any(|part| part == "..") {
            return Err(Error::InvalidAssetPath(path.to_string()));
        }
        Ok(self.root.join(path.trim_start_matches('/')))
    }
}

impl AssetStore for DirAssetStore {
    fn load_clip(&self, path: &str) -> Result<AnimationClip> {
        let file = self.resolve(path)?;
        if !file.is_file() {
            return Err(Error::asset_not_found(path));
        }
        let text = std::fs::read_to_string(&file)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn create_clip(&mut self, path: &str, clip: &AnimationClip) -> Result<()> {
        let file = self.resolve(path)?;
        if let Some(dir) = file.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&file, serde_json::to_string_pretty(clip)?)?;
        debug!(path, file = %file.display(), "created clip asset");
        Ok(())
    }

    fn guid(&self, path: &str) -> Result<String> {
        self.resolve(path)?;
        Ok(guid_for_path(path))
    }
}
