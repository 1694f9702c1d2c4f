use std::collections::BTreeMap;

use super::{guid_for_path, AssetStore};
use crate::animator::AnimationClip;
use crate::util::{Error, Result};

/// In-memory asset store for tests and dry runs.
///
/// Keeps every created path in order so callers can inspect what a run wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryAssetStore {
    clips: BTreeMap<String, AnimationClip>,
    created: Vec<String>,
}

impl MemoryAssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a source clip at `path`. Not counted as a creation.
    pub fn insert(&mut self, path: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(path.into(), clip);
    }

    /// Clip stored at `path`.
    pub fn get(&self, path: &str) -> Option<&AnimationClip> {
        self.clips.get(path)
    }

    /// Paths created through [`AssetStore::create_clip`], in creation order.
    pub fn created(&self) -> &[String] {
        &self.created
    }

    /// Number of stored clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl AssetStore for MemoryAssetStore {
    fn load_clip(&self, path: &str) -> Result<AnimationClip> {
        self.clips
            .get(path)
            .cloned()
            .ok_or_else(|| Error::asset_not_found(path))
    }

    fn create_clip(&mut self, path: &str, clip: &AnimationClip) -> Result<()> {
        self.clips.insert(path.to_string(), clip.clone());
        self.created.push(path.to_string());
        Ok(())
    }

    fn guid(&self, path: &str) -> Result<String> {
        Ok(guid_for_path(path))
    }
}
