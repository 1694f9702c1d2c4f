//! # fxmenu
//!
//! Import the any-state transitions of an animator FX layer as branches of
//! an expression menu mode.
//!
//! Each transition guarded by hand gesture parameters becomes one branch:
//! its guards turn into gesture conditions and its destination motion into
//! the branch animations. Time-driven clips are split into two half clips
//! so the second half can ride a trigger.
//!
//! ## Modules
//!
//! - [`util`] - Errors
//! - [`animator`] - Source animator graph and clip data
//! - [`asset`] - Asset store port and bundled stores
//! - [`menu`] - Target menu, modes, branches and repositories
//! - [`import`] - Branch building, clip splitting, ordering, menu integration

pub mod util;
pub mod animator;
pub mod asset;
pub mod menu;
pub mod import;

// Re-export commonly used types
pub use util::{Error, Result};
pub use import::{ImportOptions, ImportOutcome, Importer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result};
    pub use crate::animator::{AnimatorController, AnimatorLayer, AnimatorState, Motion, StateTransition};
    pub use crate::asset::{AssetStore, DirAssetStore, MemoryAssetStore};
    pub use crate::menu::{Branch, BranchAnimationType, Hand, HandGesture, JsonMenuRepository, Menu, MenuRepository};
    pub use crate::import::{ImportOptions, ImportOutcome, Importer};
}
