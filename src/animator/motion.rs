//! Motions attached to animator states.

use serde::{Deserialize, Serialize};

/// Reference to a clip asset by its storage path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipRef(pub String);

impl ClipRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Asset path of the clip.
    #[inline]
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClipRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Motion played by a state or a blend tree child.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Motion {
    Clip { clip: ClipRef },
    BlendTree(BlendTree),
}

impl Motion {
    /// Plain clip motion.
    pub fn clip(path: impl Into<String>) -> Self {
        Self::Clip { clip: ClipRef::new(path) }
    }

    /// The clip, if this motion is a plain clip.
    pub fn as_clip(&self) -> Option<&ClipRef> {
        match self {
            Self::Clip { clip } => Some(clip),
            Self::BlendTree(_) => None,
        }
    }
}

/// One child slot of a blend tree. The motion may be unassigned.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildMotion {
    pub motion: Option<Motion>,
    pub threshold: f32,
}

impl ChildMotion {
    pub fn new(motion: Option<Motion>, threshold: f32) -> Self {
        Self { motion, threshold }
    }
}

/// Blend tree: blends ordered children by a parameter.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendTree {
    pub name: String,
    pub blend_parameter: String,
    pub children: Vec<ChildMotion>,
}

impl BlendTree {
    pub fn new(name: impl Into<String>, children: Vec<ChildMotion>) -> Self {
        Self { name: name.into(), children, ..Default::default() }
    }

    /// Clip of the child at `index`, if present and a plain clip.
    pub fn child_clip(&self, index: usize) -> Option<&ClipRef> {
        self.children
            .get(index)
            .and_then(|c| c.motion.as_ref())
            .and_then(Motion::as_clip)
    }
}

/// Shape of a destination state's motion, as the branch builder sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionShape<'a> {
    /// No motion assigned.
    Empty,
    BlendTree(&'a BlendTree),
    /// Clip that plays by its own duration.
    Clip(&'a ClipRef),
    /// Clip whose playback position is driven by a time parameter.
    TimedClip(&'a ClipRef),
}
