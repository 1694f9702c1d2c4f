//! Target expression menu.
//!
//! A [`Menu`] holds modes; each [`Mode`] holds an ordered list of
//! [`Branch`]es. Earlier branches win at runtime, so order matters.
//! The menu is loaded and saved through a [`MenuRepository`].

mod branch;
mod repository;

pub use branch::{
    Animation, Branch, BranchAnimationType, ComparisonOperator, Condition, Hand, HandGesture,
};
pub use repository::{JsonMenuRepository, MemoryMenuRepository};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::{Error, Result};

/// Display name given to modes created by [`Menu::add_mode`].
pub const DEFAULT_MODE_NAME: &str = "New Mode";

/// A named set of branches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    id: String,
    parent: String,
    pub display_name: String,
    pub branches: Vec<Branch>,
}

impl Mode {
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the menu section holding this mode.
    #[inline]
    pub fn parent(&self) -> &str {
        &self.parent
    }
}

/// Expression menu.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    modes: Vec<Mode>,
}

impl Menu {
    /// Parent id of the modes shown in the menu.
    pub const REGISTERED_ID: &'static str = "Registered";
    /// Parent id of modes kept out of the menu.
    pub const UNREGISTERED_ID: &'static str = "Unregistered";

    /// Create an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty mode under `parent` and return its id.
    pub fn add_mode(&mut self, parent: &str) -> Result<String> {
        if parent != Self::REGISTERED_ID && parent != Self::UNREGISTERED_ID {
            return Err(Error::ParentNotFound(parent.to_string()));
        }
        let id = Uuid::new_v4().to_string();
        self.modes.push(Mode {
            id: id.clone(),
            parent: parent.to_string(),
            display_name: DEFAULT_MODE_NAME.to_string(),
            branches: Vec::new(),
        });
        Ok(id)
    }

    pub fn mode(&self, id: &str) -> Option<&Mode> {
        self.modes.iter().find(|m| m.id == id)
    }

    pub fn mode_mut(&mut self, id: &str) -> Option<&mut Mode> {
        self.modes.iter_mut().find(|m| m.id == id)
    }

    /// All modes in insertion order.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Modes registered in the menu, in order.
    pub fn registered(&self) -> impl Iterator<Item = &Mode> {
        self.modes.iter().filter(|m| m.parent == Self::REGISTERED_ID)
    }
}

/// Persistence port for the menu.
pub trait MenuRepository {
    /// Load the current menu.
    fn load(&self) -> Result<Menu>;

    /// Persist `menu`. With `save_as_copy` the stored original is left alone.
    fn save(&mut self, menu: &Menu, save_as_copy: bool) -> Result<()>;
}
