//! The list provider the browser navigates.
//!
//! The browser never owns item storage. It reads the active listing and
//! asks the [`Catalog`] to switch listings when the user enters or leaves a
//! folder, or narrows to the discs of one title.

mod memory;

pub use memory::{CatalogFile, FolderDef, MemoryCatalog, TitleDef};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identifier of a folder in the catalog hierarchy.
pub type FolderId = u32;

/// Name of the synthetic first entry of every non-root listing.
pub const PARENT_LINK_NAME: &str = "[..]";

/// Which launch machinery a title needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchRoute {
    /// Boots on the console's own disc loader.
    #[default]
    Native,
    /// Needs a separate emulator launch path.
    Emulated,
}

/// Stored kind of a list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Directory,
    Title(LaunchRoute),
}

/// Classification used by the accept handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    Directory,
    SingleDisc,
    MultiDisc,
    SpecialFormat,
}

/// Position of a disc inside a set, written `"index/count"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscNumber {
    pub index: u8,
    pub count: u8,
}

impl DiscNumber {
    /// Parse `"1/3"`. Anything malformed yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (index, count) = s.trim().split_once('/')?;
        let index = index.trim().parse().ok()?;
        let count = count.trim().parse().ok()?;
        Some(Self { index, count })
    }
}

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub kind: ItemKind,
    /// Product code used to look up artwork and disc groups.
    pub product: String,
    /// Folder entered by a directory row.
    pub folder: Option<FolderId>,
    pub disc: Option<DiscNumber>,
}

impl ListItem {
    pub fn directory(name: impl Into<String>, folder: FolderId) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Directory,
            product: String::new(),
            folder: Some(folder),
            disc: None,
        }
    }

    /// The `[..]` row that leads back to the parent folder.
    pub fn parent_link() -> Self {
        Self {
            name: PARENT_LINK_NAME.to_string(),
            kind: ItemKind::Directory,
            product: String::new(),
            folder: None,
            disc: None,
        }
    }

    pub fn title(
        name: impl Into<String>,
        product: impl Into<String>,
        route: LaunchRoute,
        disc: Option<DiscNumber>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Title(route),
            product: product.into(),
            folder: None,
            disc,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == ItemKind::Directory
    }

    pub fn is_parent_link(&self) -> bool {
        self.is_directory() && self.name == PARENT_LINK_NAME
    }

    /// Launch route of a title; `None` for directories.
    pub fn route(&self) -> Option<LaunchRoute> {
        match self.kind {
            ItemKind::Title(route) => Some(route),
            ItemKind::Directory => None,
        }
    }

    /// Discs in this title's set. Missing or zero counts read as one.
    pub fn disc_count(&self) -> u8 {
        self.disc.map(|d| d.count).filter(|&c| c > 0).unwrap_or(1)
    }

    /// A disc set wins over the launch route: emulated sets still go
    /// through the chooser.
    pub fn classify(&self) -> ItemClass {
        match self.kind {
            ItemKind::Directory => ItemClass::Directory,
            ItemKind::Title(_) if self.disc_count() > 1 => ItemClass::MultiDisc,
            ItemKind::Title(LaunchRoute::Emulated) => ItemClass::SpecialFormat,
            ItemKind::Title(LaunchRoute::Native) => ItemClass::SingleDisc,
        }
    }
}

/// Saved position pushed when descending into a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FolderFrame {
    pub folder: FolderId,
    pub cursor: usize,
}

/// Stack of entered folders. Empty at the root.
#[derive(Debug, Clone, Default)]
pub struct FolderStack {
    frames: Vec<FolderFrame>,
}

impl FolderStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, folder: FolderId, cursor: usize) {
        self.frames.push(FolderFrame { folder, cursor });
    }

    pub fn pop(&mut self) -> Option<FolderFrame> {
        self.frames.pop()
    }

    /// Folder currently shown, or `None` at the root.
    pub fn current(&self) -> Option<FolderId> {
        self.frames.last().map(|f| f.folder)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_root(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn frames(&self) -> &[FolderFrame] {
        &self.frames
    }
}

/// Hierarchical list provider.
pub trait Catalog {
    /// Rows of the active listing, stable until the next switch.
    fn active_list(&self) -> &[ListItem];

    fn active_len(&self) -> usize {
        self.active_list().len()
    }

    fn is_at_root(&self) -> bool;

    /// Current folder nesting depth (0 at the root).
    fn depth(&self) -> usize;

    /// Descend into `folder`, remembering `saved_cursor` for the way back.
    fn enter_folder(&mut self, folder: FolderId, saved_cursor: usize) -> Result<()>;

    /// Return to the parent listing. Yields the cursor saved on entry, or
    /// `None` when already at the root.
    fn go_back(&mut self) -> Option<usize>;

    /// Drop all folder state and show the root listing.
    fn set_root(&mut self);

    /// Narrow the active listing to the discs of one product.
    fn select_multidisc_group(&mut self, product: &str) -> Result<()>;

    /// Undo [`Catalog::select_multidisc_group`].
    fn clear_multidisc_group(&mut self) {}
}
