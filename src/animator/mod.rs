//! Source animator graph.
//!
//! This module models the part of an animator controller the importer reads:
//! - [`AnimatorController`] - ordered layers
//! - [`StateMachine`] - states and any-state transitions of one layer
//! - [`StateTransition`] / [`AnimatorCondition`] - guarded edges
//! - [`Motion`] / [`BlendTree`] - what a destination state plays
//! - [`AnimationClip`] - curve data of a clip asset
//!
//! All types are serde-(de)serializable so a controller can be loaded
//! from JSON.

mod clip;
mod motion;

pub use clip::{AnimationClip, AnimationCurve, CurveBinding, EditorCurve, Keyframe};
pub use motion::{BlendTree, ChildMotion, ClipRef, Motion, MotionShape};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::util::Result;

/// Comparison mode of an animator condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimatorConditionMode {
    If,
    IfNot,
    Greater,
    Less,
    #[default]
    Equals,
    NotEqual,
}

/// A parameter guard on a transition.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorCondition {
    pub parameter: String,
    pub mode: AnimatorConditionMode,
    pub threshold: f32,
}

impl AnimatorCondition {
    pub fn new(parameter: impl Into<String>, mode: AnimatorConditionMode, threshold: f32) -> Self {
        Self { parameter: parameter.into(), mode, threshold }
    }

    /// `parameter == threshold` guard.
    pub fn equals(parameter: impl Into<String>, threshold: f32) -> Self {
        Self::new(parameter, AnimatorConditionMode::Equals, threshold)
    }

    /// `parameter != threshold` guard.
    pub fn not_equal(parameter: impl Into<String>, threshold: f32) -> Self {
        Self::new(parameter, AnimatorConditionMode::NotEqual, threshold)
    }
}

/// An animator state.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorState {
    pub name: String,
    pub motion: Option<Motion>,
    /// Playback position is driven by a parameter instead of clip time.
    pub time_parameter_active: bool,
}

impl AnimatorState {
    pub fn new(name: impl Into<String>, motion: Option<Motion>) -> Self {
        Self { name: name.into(), motion, time_parameter_active: false }
    }

    /// Mark the state as time-parameter driven (builder style).
    pub fn with_time_parameter(mut self) -> Self {
        self.time_parameter_active = true;
        self
    }

    /// Classify the state's motion.
    ///
    /// The time-parameter flag only matters for plain clips.
    pub fn shape(&self) -> MotionShape<'_> {
        match &self.motion {
            None => MotionShape::Empty,
            Some(Motion::BlendTree(tree)) => MotionShape::BlendTree(tree),
            Some(Motion::Clip { clip }) if self.time_parameter_active => MotionShape::TimedClip(clip),
            Some(Motion::Clip { clip }) => MotionShape::Clip(clip),
        }
    }
}

/// A guarded transition into a destination state.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StateTransition {
    pub conditions: Vec<AnimatorCondition>,
    /// None for transitions to the exit node.
    pub destination: Option<AnimatorState>,
}

impl StateTransition {
    pub fn new(conditions: Vec<AnimatorCondition>, destination: AnimatorState) -> Self {
        Self { conditions, destination: Some(destination) }
    }
}

/// State machine of a single layer.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StateMachine {
    pub name: String,
    pub states: Vec<AnimatorState>,
    pub any_state_transitions: Vec<StateTransition>,
}

/// One animator layer.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorLayer {
    pub name: String,
    pub state_machine: StateMachine,
}

impl AnimatorLayer {
    /// Layer whose state machine holds only the given any-state transitions.
    pub fn with_transitions(name: impl Into<String>, transitions: Vec<StateTransition>) -> Self {
        let name = name.into();
        Self {
            state_machine: StateMachine {
                name: name.clone(),
                states: Vec::new(),
                any_state_transitions: transitions,
            },
            name,
        }
    }
}

/// Animator controller: layers in declared order.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorController {
    pub name: String,
    pub layers: Vec<AnimatorLayer>,
}

impl AnimatorController {
    pub fn new(name: impl Into<String>, layers: Vec<AnimatorLayer>) -> Self {
        Self { name: name.into(), layers }
    }

    /// Load a controller from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_classification() {
        let plain = AnimatorState::new("smile", Some(Motion::clip("Assets/smile.anim")));
        assert!(matches!(plain.shape(), MotionShape::Clip(c) if c.path() == "Assets/smile.anim"));

        let timed = plain.clone().with_time_parameter();
        assert!(matches!(timed.shape(), MotionShape::TimedClip(_)));

        let tree = AnimatorState::new("blend", Some(Motion::BlendTree(BlendTree::default())))
            .with_time_parameter();
        assert!(matches!(tree.shape(), MotionShape::BlendTree(_)));

        assert_eq!(AnimatorState::default().shape(), MotionShape::Empty);
    }

    #[test]
    fn test_controller_json() {
        let json = r#"{
            "name": "FX",
            "layers": [{
                "name": "Left Hand",
                "state_machine": {
                    "any_state_transitions": [{
                        "conditions": [{"parameter": "GestureLeft", "mode": "Equals", "threshold": 3}],
                        "destination": {"name": "point", "motion": {"type": "clip", "clip": "Assets/point.anim"}}
                    }]
                }
            }]
        }"#;
        let controller: AnimatorController = serde_json::from_str(json).unwrap();
        assert_eq!(controller.layers.len(), 1);
        let transition = &controller.layers[0].state_machine.any_state_transitions[0];
        assert_eq!(transition.conditions[0], AnimatorCondition::equals("GestureLeft", 3.0));
        let dest = transition.destination.as_ref().unwrap();
        assert!(!dest.time_parameter_active);
        assert_eq!(dest.motion, Some(Motion::clip("Assets/point.anim")));
    }
}
