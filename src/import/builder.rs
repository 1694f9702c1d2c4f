//! Turn one any-state transition into a menu branch.

use tracing::debug;

use super::options::ImportOptions;
use super::splitter::ClipSplitCache;
use crate::animator::{AnimatorCondition, AnimatorConditionMode, ClipRef, MotionShape, StateTransition};
use crate::asset::AssetStore;
use crate::menu::{Animation, Branch, BranchAnimationType, ComparisonOperator, Condition, Hand, HandGesture};
use crate::util::Result;

/// Builds branches for a single run.
///
/// Borrows the asset store and the run's split cache; a transition that
/// cannot become a branch yields `Ok(None)`.
pub struct BranchBuilder<'a, S: AssetStore + ?Sized> {
    store: &'a mut S,
    cache: &'a mut ClipSplitCache,
    options: &'a ImportOptions,
}

impl<'a, S: AssetStore + ?Sized> BranchBuilder<'a, S> {
    pub fn new(store: &'a mut S, cache: &'a mut ClipSplitCache, options: &'a ImportOptions) -> Self {
        Self { store, cache, options }
    }

    /// Hand read by a gesture parameter.
    pub fn hand_for(&self, parameter: &str) -> Option<Hand> {
        if parameter == self.options.left_parameter {
            Some(Hand::Left)
        } else if parameter == self.options.right_parameter {
            Some(Hand::Right)
        } else {
            None
        }
    }

    /// Gesture guard for an animator condition.
    ///
    /// None for non-gesture parameters and for a zero threshold.
    pub fn condition(&self, guard: &AnimatorCondition) -> Option<Condition> {
        let hand = self.hand_for(&guard.parameter)?;
        if guard.threshold == 0.0 {
            return None;
        }
        let comparison = match guard.mode {
            AnimatorConditionMode::Equals => ComparisonOperator::Equals,
            _ => ComparisonOperator::NotEqual,
        };
        Some(Condition::new(hand, HandGesture::from_threshold(guard.threshold), comparison))
    }

    /// Build the branch for `transition`.
    pub fn build(&mut self, transition: &StateTransition) -> Result<Option<Branch>> {
        let mut branch = Branch::new();
        for guard in &transition.conditions {
            match self.condition(guard) {
                Some(condition) => branch.add_condition(condition),
                None => {
                    debug!(
                        parameter = %guard.parameter,
                        threshold = guard.threshold,
                        "transition dropped: guard is not a usable gesture"
                    );
                    return Ok(None);
                }
            }
        }

        let shape = transition
            .destination
            .as_ref()
            .map(|state| state.shape())
            .unwrap_or(MotionShape::Empty);

        match shape {
            MotionShape::Empty => {}
            MotionShape::BlendTree(tree) => {
                if tree.children.len() < 2 {
                    debug!(tree = %tree.name, children = tree.children.len(), "transition dropped: blend tree needs two children");
                    return Ok(None);
                }
                if let Some(clip) = tree.child_clip(0) {
                    branch.set_animation(self.animation(clip)?, BranchAnimationType::Base);
                }
                if let Some(clip) = tree.child_clip(1) {
                    branch.set_animation(self.animation(clip)?, BranchAnimationType::Right);
                }
            }
            MotionShape::Clip(clip) => {
                branch.set_animation(self.animation(clip)?, BranchAnimationType::Base);
            }
            MotionShape::TimedClip(clip) => {
                let pair = self.cache.split(&mut *self.store, clip)?;
                branch.set_animation(self.animation(&pair.first)?, BranchAnimationType::Base);

                let is_left = branch.conditions().iter().any(|c| c.hand() == Hand::Left);
                let (slot, hand) = if is_left {
                    (BranchAnimationType::Left, Hand::Left)
                } else {
                    (BranchAnimationType::Right, Hand::Right)
                };
                branch.set_animation(self.animation(&pair.second)?, slot);
                branch.use_trigger(hand);
            }
        }

        Ok(Some(branch))
    }

    fn animation(&self, clip: &ClipRef) -> Result<Animation> {
        Ok(Animation::new(self.store.guid(clip.path())?))
    }
}
