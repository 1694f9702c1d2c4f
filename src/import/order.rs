//! Flatten animator layers into branches and put them in menu order.

use std::cmp::Ordering;

use tracing::debug;

use super::builder::BranchBuilder;
use crate::animator::AnimatorController;
use crate::asset::AssetStore;
use crate::menu::{Branch, Hand};
use crate::util::{Error, Result};

/// Build branches from every any-state transition.
///
/// Layers are visited last to first; transitions inside a layer keep their
/// declared order. Transitions that yield no branch are skipped.
pub fn flatten_layers<S: AssetStore + ?Sized>(
    controller: &AnimatorController,
    builder: &mut BranchBuilder<'_, S>,
) -> Result<Vec<Branch>> {
    let mut branches = Vec::new();
    for layer in controller.layers.iter().rev() {
        let transitions = &layer.state_machine.any_state_transitions;
        let before = branches.len();
        for transition in transitions {
            if let Some(branch) = builder.build(transition)? {
                branches.push(branch);
            }
        }
        debug!(
            layer = %layer.name,
            transitions = transitions.len(),
            branches = branches.len() - before,
            "flattened layer"
        );
    }
    Ok(branches)
}

/// Sort branches by the hand and gesture of their first condition.
///
/// The hand direction follows the first branch: ascending when it starts
/// with the left hand, descending otherwise. Gestures always ascend. The
/// sort is stable.
pub fn order_branches(branches: Vec<Branch>) -> Result<Vec<Branch>> {
    let mut keyed = Vec::with_capacity(branches.len());
    for (index, branch) in branches.into_iter().enumerate() {
        let first = branch
            .first_condition()
            .copied()
            .ok_or(Error::UnguardedBranch { index })?;
        keyed.push((first.hand(), first.hand_gesture(), branch));
    }

    let Some(&(lead, _, _)) = keyed.first() else {
        return Ok(Vec::new());
    };
    let ascending = lead == Hand::Left;

    keyed.sort_by(|a, b| {
        let hand = if ascending { a.0.cmp(&b.0) } else { b.0.cmp(&a.0) };
        hand.then_with(|| a.1.cmp(&b.1))
    });

    Ok(keyed.into_iter().map(|(_, _, branch)| branch).collect())
}

/// Hand direction [`order_branches`] would use, if there is a first branch.
pub fn hand_direction(branches: &[Branch]) -> Option<Ordering> {
    let lead = branches.first()?.first_condition()?.hand();
    Some(if lead == Hand::Left { Ordering::Less } else { Ordering::Greater })
}
