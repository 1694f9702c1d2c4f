//! Split a time-driven clip into two independently triggered halves.
//!
//! The first half drops the key at position 1 of every curve, the second
//! half drops the key at position 0. Curves with fewer than two keys are
//! copied unchanged into both halves.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::animator::{AnimationClip, ClipRef};
use crate::asset::{file_stem, sibling_path, AssetStore};
use crate::util::Result;

/// Derived clips of one split source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SplitPair {
    pub first: ClipRef,
    pub second: ClipRef,
}

/// Compute both halves of `clip` without storing anything.
pub fn split_halves(clip: &AnimationClip) -> (AnimationClip, AnimationClip) {
    let mut first = clip.clone();
    let mut second = clip.clone();

    for curve in first.curves_mut().filter(|c| c.len() >= 2) {
        curve.remove_key(1);
    }
    for curve in second.curves_mut().filter(|c| c.len() >= 2) {
        curve.remove_key(0);
    }

    (first, second)
}

/// Run-scoped memo of split clips.
///
/// A source clip is split and stored at most once per cache, however many
/// transitions reference it.
#[derive(Debug, Default)]
pub struct ClipSplitCache {
    pairs: HashMap<ClipRef, SplitPair>,
}

impl ClipSplitCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair already derived from `source`.
    pub fn get(&self, source: &ClipRef) -> Option<&SplitPair> {
        self.pairs.get(source)
    }

    /// Number of split sources.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the halves of `source`, creating both assets on first use.
    pub fn split<S: AssetStore + ?Sized>(&mut self, store: &mut S, source: &ClipRef) -> Result<SplitPair> {
        if let Some(pair) = self.pairs.get(source) {
            return Ok(pair.clone());
        }

        let clip = store.load_clip(source.path())?;
        let (mut first, mut second) = split_halves(&clip);

        let single_key = clip.curves.iter().filter(|c| c.curve.len() < 2).count();
        if single_key > 0 {
            debug!(clip = %source, curves = single_key, "curves with fewer than two keys copied into both halves");
        }

        let base = if clip.name.is_empty() { file_stem(source.path()) } else { clip.name.as_str() };
        let first_path = derived_path(source, base, "first")?;
        let second_path = derived_path(source, base, "second")?;

        first.name = file_stem(&first_path).to_string();
        second.name = file_stem(&second_path).to_string();
        store.create_clip(&first_path, &first)?;
        store.create_clip(&second_path, &second)?;
        debug!(clip = %source, first = %first_path, second = %second_path, "split clip");

        let pair = SplitPair {
            first: ClipRef::new(first_path),
            second: ClipRef::new(second_path),
        };
        self.pairs.insert(source.clone(), pair.clone());
        Ok(pair)
    }
}

fn derived_path(source: &ClipRef, base: &str, half: &str) -> Result<String> {
    let file_name = format!("{}_{}_{}.anim", base, half, Uuid::new_v4().simple());
    sibling_path(source.path(), &file_name)
}
