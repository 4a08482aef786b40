//! Cursor and viewport arithmetic for a paged list.
//!
//! All operations are total: an empty list turns every call into a no-op
//! and intermediate underflow clamps to zero, so the selection can never
//! leave the list and the window can never leave the selection.

use std::ops::Range;

use serde::Serialize;

/// Selected row and first visible row of a list shown `page_size` rows at
/// a time.
///
/// Invariants for a non-empty list of length `len`:
/// `selected < len`, `start <= len.saturating_sub(page_size)`, and
/// `start <= selected < start + page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    selected: usize,
    start: usize,
    page_size: usize,
}

impl Viewport {
    /// A viewport at the top of the list. A zero page size is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            selected: 0,
            start: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first row.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.start = 0;
    }

    /// Largest legal window start for a list of `len` rows.
    pub fn max_start(&self, len: usize) -> usize {
        len.saturating_sub(self.page_size)
    }

    /// Indices of the rows currently on screen.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let first = self.start.min(len);
        first..(self.start + self.page_size).min(len)
    }

    /// Move the selection by `amount` rows.
    ///
    /// A single step (`|amount| == 1`) past either end wraps to the other
    /// end. Any larger jump past either end stops at that end instead.
    /// Inside the list the window follows the selection by the same delta
    /// only when the selection would leave it.
    pub fn move_by(&mut self, amount: isize, len: usize) {
        if len == 0 || amount == 0 {
            return;
        }
        let wraps = amount.unsigned_abs() == 1;
        let distance = amount.unsigned_abs();

        if amount < 0 {
            if self.selected < distance {
                if wraps {
                    self.to_last(len);
                } else {
                    self.reset();
                }
            } else {
                self.selected -= distance;
                if self.selected < self.start {
                    self.start = self.start.saturating_sub(distance);
                }
            }
        } else {
            let target = self.selected.saturating_add(distance);
            if target >= len {
                if wraps {
                    self.reset();
                } else {
                    self.to_last(len);
                }
            } else {
                self.selected = target;
                if target >= self.start + self.page_size {
                    self.start += distance;
                }
            }
        }
        self.clamp_to(len);
    }

    /// Place the selection on `restored` after returning to a parent list.
    ///
    /// Rows on the first page keep the window at the top; deeper rows are
    /// centered in the window, clamped to the last page.
    pub fn recenter(&mut self, restored: usize, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = restored.min(len - 1);
        self.start = if self.selected < self.page_size {
            0
        } else {
            (self.selected - self.page_size / 2).min(self.max_start(len))
        };
    }

    /// Re-establish the invariants after the list length changed.
    pub fn clamp_to(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        self.selected = self.selected.min(len - 1);
        self.start = self.start.min(self.max_start(len)).min(self.selected);
        if self.selected >= self.start + self.page_size {
            self.start = self.selected + 1 - self.page_size;
        }
    }

    fn to_last(&mut self, len: usize) {
        self.selected = len - 1;
        self.start = self.max_start(len);
    }
}
