//! FX layer import.
//!
//! The pipeline, leaves first:
//! - [`ClipSplitCache`] - splits time-driven clips into two halves, once per clip
//! - [`BranchBuilder`] - one transition into at most one [`Branch`]
//! - [`flatten_layers`] / [`order_branches`] - walk the controller and sort
//! - [`Importer`] - append the result to a new menu mode and save
//!
//! ## Example
//!
//! ```ignore
//! use fxmenu::prelude::*;
//!
//! let controller = AnimatorController::open("fx.json")?;
//! let mut assets = DirAssetStore::new("project");
//! let mut repo = JsonMenuRepository::new("menu.json");
//!
//! match Importer::new(&mut assets).run(&controller, &mut repo)? {
//!     ImportOutcome::Imported { branch_count, .. } => println!("{branch_count} branches"),
//!     ImportOutcome::NoBranches => println!("nothing to import"),
//! }
//! ```

mod builder;
mod options;
mod order;
mod splitter;

pub use builder::BranchBuilder;
pub use options::ImportOptions;
pub use order::{flatten_layers, hand_direction, order_branches};
pub use splitter::{split_halves, ClipSplitCache, SplitPair};

use tracing::info;

use crate::animator::AnimatorController;
use crate::asset::AssetStore;
use crate::menu::{Branch, Menu, MenuRepository};
use crate::util::{Error, Result};

/// Result of [`Importer::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    /// No transition produced a branch; the menu was left untouched.
    NoBranches,
    /// A mode was created and the menu saved.
    Imported { mode_id: String, branch_count: usize },
}

/// Converts a controller's any-state transitions into a menu mode.
pub struct Importer<'a, S: AssetStore + ?Sized> {
    store: &'a mut S,
    options: ImportOptions,
}

impl<'a, S: AssetStore + ?Sized> Importer<'a, S> {
    /// Importer with default options.
    pub fn new(store: &'a mut S) -> Self {
        Self::with_options(store, ImportOptions::default())
    }

    pub fn with_options(store: &'a mut S, options: ImportOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Build and order the branches of `controller`.
    ///
    /// Each call uses a fresh split cache, so derived clips are created
    /// again on a second call.
    pub fn collect_branches(&mut self, controller: &AnimatorController) -> Result<Vec<Branch>> {
        let mut cache = ClipSplitCache::new();
        let mut builder = BranchBuilder::new(&mut *self.store, &mut cache, &self.options);
        let branches = flatten_layers(controller, &mut builder)?;
        let direction = hand_direction(&branches);
        let branches = order_branches(branches)?;
        info!(
            controller = %controller.name,
            branches = branches.len(),
            split_clips = cache.len(),
            ?direction,
            "collected branches"
        );
        Ok(branches)
    }

    /// Import `controller` into the menu held by `repo`.
    ///
    /// Save errors are returned as-is; the stored menu is whatever the
    /// repository managed to write.
    pub fn run<R: MenuRepository + ?Sized>(
        &mut self,
        controller: &AnimatorController,
        repo: &mut R,
    ) -> Result<ImportOutcome> {
        let mut menu = repo.load()?;

        let branches = self.collect_branches(controller)?;
        if branches.is_empty() {
            info!(controller = %controller.name, "no branches found");
            return Ok(ImportOutcome::NoBranches);
        }

        let mode_id = menu.add_mode(Menu::REGISTERED_ID)?;
        let mode = menu
            .mode_mut(&mode_id)
            .ok_or_else(|| Error::ModeNotFound(mode_id.clone()))?;
        mode.display_name = self.options.mode_display_name.clone();
        let branch_count = branches.len();
        mode.branches.extend(branches);

        repo.save(&menu, self.options.save_as_copy)?;
        info!(mode = %mode_id, branches = branch_count, "imported FX layer");

        Ok(ImportOutcome::Imported { mode_id, branch_count })
    }
}
