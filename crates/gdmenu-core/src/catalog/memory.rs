//! In-memory catalog backed by a folder tree.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{Catalog, DiscNumber, FolderId, FolderStack, LaunchRoute, ListItem};
use crate::error::{MenuError, Result};

/// A folder declaration in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderDef {
    pub id: FolderId,
    pub name: String,
    /// Parent folder; `None` places the folder at the root.
    #[serde(default)]
    pub parent: Option<FolderId>,
}

/// A title declaration in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleDef {
    pub name: String,
    pub product: String,
    #[serde(default)]
    pub folder: Option<FolderId>,
    /// Disc position, e.g. `"2/3"`.
    #[serde(default)]
    pub disc: Option<String>,
    #[serde(default)]
    pub route: LaunchRoute,
}

/// TOML layout of a catalog: `[[folder]]` and `[[title]]` tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default, rename = "folder")]
    pub folders: Vec<FolderDef>,
    #[serde(default, rename = "title")]
    pub titles: Vec<TitleDef>,
}

impl CatalogFile {
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml(&src)
    }
}

#[derive(Debug, Clone)]
struct FolderNode {
    name: String,
    parent: Option<FolderId>,
}

/// Folder tree plus the traversal stack of the current browse session.
///
/// Non-root listings start with the `[..]` row, then subfolders, then
/// titles, each group sorted by name. With `collapse_multidisc` set, only
/// the first disc of a multi-disc set appears in folder listings.
#[derive(Debug)]
pub struct MemoryCatalog {
    folders: BTreeMap<FolderId, FolderNode>,
    titles: Vec<(Option<FolderId>, ListItem)>,
    stack: FolderStack,
    listing: Vec<ListItem>,
    group: Option<Vec<ListItem>>,
    collapse_multidisc: bool,
}

impl MemoryCatalog {
    /// Build and validate a catalog, positioned at the root.
    pub fn from_file(file: CatalogFile, collapse_multidisc: bool) -> Result<Self> {
        let mut folders = BTreeMap::new();
        for def in file.folders {
            let node = FolderNode {
                name: def.name,
                parent: def.parent,
            };
            if folders.insert(def.id, node).is_some() {
                return Err(MenuError::Catalog(format!("duplicate folder id {}", def.id)));
            }
        }
        for (id, node) in &folders {
            if let Some(parent) = node.parent
                && !folders.contains_key(&parent)
            {
                return Err(MenuError::Catalog(format!(
                    "folder {id} has unknown parent {parent}"
                )));
            }
        }

        let mut titles = Vec::with_capacity(file.titles.len());
        for def in file.titles {
            if let Some(folder) = def.folder
                && !folders.contains_key(&folder)
            {
                return Err(MenuError::Catalog(format!(
                    "title '{}' is in unknown folder {folder}",
                    def.name
                )));
            }
            let disc = def.disc.as_deref().and_then(DiscNumber::parse);
            titles.push((
                def.folder,
                ListItem::title(def.name, def.product, def.route, disc),
            ));
        }

        let mut catalog = Self {
            folders,
            titles,
            stack: FolderStack::new(),
            listing: Vec::new(),
            group: None,
            collapse_multidisc,
        };
        catalog.rebuild_listing();
        Ok(catalog)
    }

    pub fn from_toml(src: &str, collapse_multidisc: bool) -> Result<Self> {
        Self::from_file(CatalogFile::from_toml(src)?, collapse_multidisc)
    }

    /// Name of the folder currently shown, if any.
    pub fn current_folder_name(&self) -> Option<&str> {
        let id = self.stack.current()?;
        self.folders.get(&id).map(|f| f.name.as_str())
    }

    pub fn stack(&self) -> &FolderStack {
        &self.stack
    }

    fn rebuild_listing(&mut self) {
        let current = self.stack.current();
        let mut listing = Vec::new();
        if current.is_some() {
            listing.push(ListItem::parent_link());
        }

        let mut subfolders: Vec<ListItem> = self
            .folders
            .iter()
            .filter(|(_, node)| node.parent == current)
            .map(|(id, node)| ListItem::directory(format!("[{}]", node.name), *id))
            .collect();
        subfolders.sort_by(|a, b| a.name.cmp(&b.name));
        listing.extend(subfolders);

        let mut titles: Vec<ListItem> = self
            .titles
            .iter()
            .filter(|(folder, _)| *folder == current)
            .map(|(_, item)| item)
            .filter(|item| !self.collapse_multidisc || item.disc.is_none_or(|d| d.index <= 1))
            .cloned()
            .collect();
        titles.sort_by(|a, b| a.name.cmp(&b.name));
        listing.extend(titles);

        self.listing = listing;
    }
}

impl Catalog for MemoryCatalog {
    fn active_list(&self) -> &[ListItem] {
        match &self.group {
            Some(group) => group,
            None => &self.listing,
        }
    }

    fn is_at_root(&self) -> bool {
        self.stack.is_root()
    }

    fn depth(&self) -> usize {
        self.stack.depth()
    }

    fn enter_folder(&mut self, folder: FolderId, saved_cursor: usize) -> Result<()> {
        if !self.folders.contains_key(&folder) {
            return Err(MenuError::Catalog(format!("unknown folder {folder}")));
        }
        self.stack.push(folder, saved_cursor);
        self.group = None;
        self.rebuild_listing();
        Ok(())
    }

    fn go_back(&mut self) -> Option<usize> {
        let frame = self.stack.pop()?;
        self.group = None;
        self.rebuild_listing();
        Some(frame.cursor)
    }

    fn set_root(&mut self) {
        self.stack.clear();
        self.group = None;
        self.rebuild_listing();
    }

    fn select_multidisc_group(&mut self, product: &str) -> Result<()> {
        let mut discs: Vec<ListItem> = self
            .titles
            .iter()
            .map(|(_, item)| item)
            .filter(|item| item.product == product)
            .cloned()
            .collect();
        if discs.is_empty() {
            return Err(MenuError::Catalog(format!("no discs for product {product}")));
        }
        discs.sort_by_key(|item| item.disc.map(|d| d.index).unwrap_or(0));
        self.group = Some(discs);
        Ok(())
    }

    fn clear_multidisc_group(&mut self) {
        self.group = None;
    }
}
