//! Animation clip data: curve bindings, curves and keyframes.

use serde::{Deserialize, Serialize};

/// A single keyframe on a float curve.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl Keyframe {
    /// Create a keyframe with flat tangents.
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value, in_tangent: 0.0, out_tangent: 0.0 }
    }
}

/// Float curve, keys ordered by time.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationCurve {
    pub keys: Vec<Keyframe>,
}

impl AnimationCurve {
    /// Create a curve from keys.
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Remove the key at `index`, returning it if it existed.
    pub fn remove_key(&mut self, index: usize) -> Option<Keyframe> {
        if index < self.keys.len() {
            Some(self.keys.remove(index))
        } else {
            None
        }
    }
}

/// What an animated curve drives: a property on an object in the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveBinding {
    /// Relative path of the animated object (e.g. `Body`).
    pub path: String,
    /// Animated property (e.g. `blendShape.smile`).
    pub property_name: String,
    /// Component type owning the property (e.g. `SkinnedMeshRenderer`).
    pub type_name: String,
}

impl CurveBinding {
    pub fn new(
        path: impl Into<String>,
        property_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            property_name: property_name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A bound float curve inside a clip.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorCurve {
    pub binding: CurveBinding,
    pub curve: AnimationCurve,
}

/// An animation clip asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationClip {
    pub name: String,
    pub frame_rate: f32,
    pub curves: Vec<EditorCurve>,
}

impl Default for AnimationClip {
    fn default() -> Self {
        Self {
            name: String::new(),
            frame_rate: 60.0,
            curves: Vec::new(),
        }
    }
}

impl AnimationClip {
    /// Create an empty clip.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Add a curve (builder style).
    pub fn with_curve(mut self, binding: CurveBinding, keys: Vec<Keyframe>) -> Self {
        self.curves.push(EditorCurve { binding, curve: AnimationCurve::new(keys) });
        self
    }

    /// Find the curve bound to `binding`.
    pub fn curve(&self, binding: &CurveBinding) -> Option<&AnimationCurve> {
        self.curves
            .iter()
            .find(|c| &c.binding == binding)
            .map(|c| &c.curve)
    }

    /// Iterate over all curves mutably.
    pub fn curves_mut(&mut self) -> impl Iterator<Item = &mut AnimationCurve> {
        self.curves.iter_mut().map(|c| &mut c.curve)
    }
}
