//! Branches: guarded expression rules inside a mode.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which hand a gesture guard refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

/// Hand pose value reported by the gesture parameters.
///
/// Integer-backed so any value the source graph carries survives import.
/// Zero is [`HandGesture::NEUTRAL`] and never forms a usable guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandGesture(pub i32);

impl HandGesture {
    pub const NEUTRAL: Self = Self(0);
    pub const FIST: Self = Self(1);
    pub const HAND_OPEN: Self = Self(2);
    pub const FINGER_POINT: Self = Self(3);
    pub const VICTORY: Self = Self(4);
    pub const ROCK_N_ROLL: Self = Self(5);
    pub const HAND_GUN: Self = Self(6);
    pub const THUMBS_UP: Self = Self(7);

    /// Gesture from a condition threshold, truncated toward zero.
    #[inline]
    pub fn from_threshold(threshold: f32) -> Self {
        Self(threshold as i32)
    }

    #[inline]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Display name of the known gestures.
    pub fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "Neutral",
            1 => "Fist",
            2 => "HandOpen",
            3 => "Fingerpoint",
            4 => "Victory",
            5 => "RockNRoll",
            6 => "HandGun",
            7 => "ThumbsUp",
            _ => return None,
        })
    }
}

impl std::fmt::Display for HandGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Gesture({})", self.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equals,
    NotEqual,
}

/// A single gesture guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    hand: Hand,
    hand_gesture: HandGesture,
    comparison: ComparisonOperator,
}

impl Condition {
    pub fn new(hand: Hand, hand_gesture: HandGesture, comparison: ComparisonOperator) -> Self {
        Self { hand, hand_gesture, comparison }
    }

    #[inline]
    pub fn hand(&self) -> Hand {
        self.hand
    }

    #[inline]
    pub fn hand_gesture(&self) -> HandGesture {
        self.hand_gesture
    }

    #[inline]
    pub fn comparison(&self) -> ComparisonOperator {
        self.comparison
    }
}

/// Reference to an animation asset by its stable guid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animation {
    guid: String,
}

impl Animation {
    pub fn new(guid: impl Into<String>) -> Self {
        Self { guid: guid.into() }
    }

    #[inline]
    pub fn guid(&self) -> &str {
        &self.guid
    }
}

/// Animation slot of a branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchAnimationType {
    /// Played while the guards hold.
    Base,
    /// Blended in by the left trigger.
    Left,
    /// Blended in by the right trigger.
    Right,
}

/// Expression rule: guards plus the animations they select.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Branch {
    conditions: SmallVec<[Condition; 2]>,
    base_animation: Option<Animation>,
    left_hand_animation: Option<Animation>,
    right_hand_animation: Option<Animation>,
    is_left_trigger_used: bool,
    is_right_trigger_used: bool,
}

impl Branch {
    /// Create a branch without guards or animations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a guard. Declaration order is kept.
    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Guards in declaration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// First guard, the one ordering keys are taken from.
    pub fn first_condition(&self) -> Option<&Condition> {
        self.conditions.first()
    }

    /// Assign `animation` to a slot, replacing what was there.
    pub fn set_animation(&mut self, animation: Animation, slot: BranchAnimationType) {
        *self.slot_mut(slot) = Some(animation);
    }

    /// Animation in a slot.
    pub fn animation(&self, slot: BranchAnimationType) -> Option<&Animation> {
        match slot {
            BranchAnimationType::Base => self.base_animation.as_ref(),
            BranchAnimationType::Left => self.left_hand_animation.as_ref(),
            BranchAnimationType::Right => self.right_hand_animation.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: BranchAnimationType) -> &mut Option<Animation> {
        match slot {
            BranchAnimationType::Base => &mut self.base_animation,
            BranchAnimationType::Left => &mut self.left_hand_animation,
            BranchAnimationType::Right => &mut self.right_hand_animation,
        }
    }

    #[inline]
    pub fn is_left_trigger_used(&self) -> bool {
        self.is_left_trigger_used
    }

    #[inline]
    pub fn is_right_trigger_used(&self) -> bool {
        self.is_right_trigger_used
    }

    /// Record which trigger drives the split half. Exactly one side is set.
    pub fn use_trigger(&mut self, hand: Hand) {
        self.is_left_trigger_used = hand == Hand::Left;
        self.is_right_trigger_used = hand == Hand::Right;
    }
}
