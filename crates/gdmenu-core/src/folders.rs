//! Folder traversal with cursor save and restore.
//!
//! Both ways of leaving a folder (the L+R shortcut and the `[..]` row)
//! go through [`go_back`], so the restored cursor and window are always
//! computed the same way.

use crate::catalog::{Catalog, FolderId};
use crate::error::Result;
use crate::viewport::Viewport;

/// Descend into `folder`, saving the current cursor for the way back.
///
/// The new listing starts at its first row. On failure the catalog and
/// viewport are left untouched.
pub fn enter(catalog: &mut dyn Catalog, view: &mut Viewport, folder: FolderId) -> Result<()> {
    let saved = view.selected();
    catalog.enter_folder(folder, saved)?;
    view.reset();
    log::info!(
        "Entered folder {folder} (depth {}, {} items, saved cursor {saved})",
        catalog.depth(),
        catalog.active_len()
    );
    Ok(())
}

/// Return to the parent listing and restore the cursor saved on entry.
///
/// At the root this is a no-op that returns the current cursor.
pub fn go_back(catalog: &mut dyn Catalog, view: &mut Viewport) -> usize {
    if catalog.is_at_root() {
        return view.selected();
    }
    match catalog.go_back() {
        Some(cursor) => {
            view.recenter(cursor, catalog.active_len());
            log::info!(
                "Back to depth {} (cursor {}, window {})",
                catalog.depth(),
                view.selected(),
                view.start()
            );
            cursor
        },
        None => view.selected(),
    }
}
