//! Menu repositories.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Menu, MenuRepository};
use crate::util::{Error, Result};

/// Menu stored as a JSON document.
///
/// A missing file loads as an empty menu. Saving as a copy writes
/// `<stem>_copy.<ext>` next to the original.
#[derive(Clone, Debug)]
pub struct JsonMenuRepository {
    path: PathBuf,
}

impl JsonMenuRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where `save(.., true)` writes.
    pub fn copy_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "menu".to_string());
        let name = match self.path.extension() {
            Some(ext) => format!("{}_copy.{}", stem, ext.to_string_lossy()),
            None => format!("{}_copy", stem),
        };
        self.path.with_file_name(name)
    }
}

impl MenuRepository for JsonMenuRepository {
    fn load(&self) -> Result<Menu> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "menu file missing, starting empty");
            return Ok(Menu::new());
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&mut self, menu: &Menu, save_as_copy: bool) -> Result<()> {
        let target = if save_as_copy { self.copy_path() } else { self.path.clone() };
        if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&target, serde_json::to_string_pretty(menu)?)?;
        info!(path = %target.display(), modes = menu.modes().len(), "menu saved");
        Ok(())
    }
}

/// Menu held in memory; records every save.
#[derive(Clone, Debug, Default)]
pub struct MemoryMenuRepository {
    menu: Menu,
    saves: Vec<(Menu, bool)>,
    fail_saves: bool,
}

impl MemoryMenuRepository {
    pub fn new(menu: Menu) -> Self {
        Self { menu, ..Default::default() }
    }

    /// Repository whose saves always fail.
    pub fn failing(menu: Menu) -> Self {
        Self { menu, fail_saves: true, ..Default::default() }
    }

    /// Menu as last saved in place.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Every successful save with its `save_as_copy` flag, oldest first.
    pub fn saves(&self) -> &[(Menu, bool)] {
        &self.saves
    }
}

impl MenuRepository for MemoryMenuRepository {
    fn load(&self) -> Result<Menu> {
        Ok(self.menu.clone())
    }

    fn save(&mut self, menu: &Menu, save_as_copy: bool) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Persistence("menu repository is read-only".to_string()));
        }
        if !save_as_copy {
            self.menu = menu.clone();
        }
        self.saves.push((menu.clone(), save_as_copy));
        Ok(())
    }
}
