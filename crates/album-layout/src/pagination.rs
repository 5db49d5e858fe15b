//! Page and spread pagination
//!
//! The editor and desktop viewers pair pages into left/right spreads after a
//! cover view. The flip-book and mobile viewers show one page per view
//! between a front and a back cover.

use crate::constants::*;
use crate::types::Page;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How pages are grouped into views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViewMode {
    /// Cover, then two pages per view
    #[default]
    Spreads,
    /// Cover, one page per view, back cover
    SinglePages,
}

impl ViewMode {
    /// Single pages on narrow viewports, spreads otherwise
    pub fn for_viewport_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px <= breakpoint_px {
            ViewMode::SinglePages
        } else {
            ViewMode::Spreads
        }
    }

    /// Flip-book size in pixels (width, height)
    pub fn book_size(self) -> (u32, u32) {
        match self {
            ViewMode::Spreads => BOOK_SIZE_DESKTOP,
            ViewMode::SinglePages => BOOK_SIZE_MOBILE,
        }
    }
}

/// Stable sort by `page_order`. Gaps and duplicates are kept as is.
pub fn sort_pages(pages: &mut [Page]) {
    pages.sort_by_key(|p| p.page_order);
}

/// Number of spreads; an album without pages still has one empty spread
pub fn spread_count(page_count: usize) -> usize {
    page_count.div_ceil(2).max(1)
}

/// Number of navigable views in `mode`
pub fn view_count(page_count: usize, mode: ViewMode) -> usize {
    match mode {
        ViewMode::Spreads => 1 + spread_count(page_count),
        ViewMode::SinglePages => page_count + 2,
    }
}

/// Right half of a spread
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RightSlot<'a> {
    Page(&'a Page),
    /// No page yet; the editor offers to add one here
    AddPage,
}

impl<'a> RightSlot<'a> {
    pub fn page(&self) -> Option<&'a Page> {
        match *self {
            RightSlot::Page(page) => Some(page),
            RightSlot::AddPage => None,
        }
    }
}

/// One navigable position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Cover,
    Spread {
        index: usize,
        left: Option<&'a Page>,
        right: RightSlot<'a>,
    },
    Page {
        /// 1-based page number
        number: usize,
        page: &'a Page,
    },
    BackCover,
}

/// Ordered view sequence over an album's pages
#[derive(Debug, Clone)]
pub struct Pagination<'a> {
    pages: Vec<&'a Page>,
    mode: ViewMode,
}

impl<'a> Pagination<'a> {
    pub fn new(pages: &'a [Page], mode: ViewMode) -> Self {
        let mut pages: Vec<&Page> = pages.iter().collect();
        pages.sort_by_key(|p| p.page_order);
        Self { pages, mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Pages in display order
    pub fn pages(&self) -> &[&'a Page] {
        &self.pages
    }

    pub fn spread_count(&self) -> usize {
        spread_count(self.pages.len())
    }

    pub fn view_count(&self) -> usize {
        view_count(self.pages.len(), self.mode)
    }

    pub fn view(&self, index: usize) -> Option<View<'a>> {
        if index >= self.view_count() {
            return None;
        }
        if index == 0 {
            return Some(View::Cover);
        }

        match self.mode {
            ViewMode::Spreads => {
                let spread = index - 1;
                let left = self.pages.get(2 * spread).copied();
                let right = match self.pages.get(2 * spread + 1).copied() {
                    Some(page) => RightSlot::Page(page),
                    None => RightSlot::AddPage,
                };
                Some(View::Spread {
                    index: spread,
                    left,
                    right,
                })
            }
            ViewMode::SinglePages => match self.pages.get(index - 1).copied() {
                Some(page) => Some(View::Page {
                    number: index,
                    page,
                }),
                None => Some(View::BackCover),
            },
        }
    }

    pub fn views(&self) -> impl Iterator<Item = View<'a>> + '_ {
        (0..self.view_count()).filter_map(|i| self.view(i))
    }

    /// Navigation label for a view, e.g. "Pages 3–4"
    pub fn label(&self, index: usize) -> Option<String> {
        let label = match self.view(index)? {
            View::Cover => "Cover".to_string(),
            View::BackCover => "Back cover".to_string(),
            View::Page { number, .. } => format!("Page {}", number),
            View::Spread { index, left, right } => {
                let first = 2 * index + 1;
                match (left, right) {
                    (Some(_), RightSlot::Page(_)) => format!("Pages {}–{}", first, first + 1),
                    (Some(_), RightSlot::AddPage) => format!("Page {}", first),
                    (None, _) => "Empty spread".to_string(),
                }
            }
        };
        Some(label)
    }
}

/// Current position within a view sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    count: usize,
}

impl Navigator {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.count
    }

    pub fn prev(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1).min(self.count - 1);
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.count - 1);
        self.index
    }

    /// Update the view count after pages were added or removed
    pub fn set_count(&mut self, count: usize) {
        self.count = count.max(1);
        self.index = self.index.min(self.count - 1);
    }

    /// Jump to the last view after a spread was appended
    pub fn after_spread_added(&mut self, count: usize) -> usize {
        self.set_count(count);
        self.index = self.count - 1;
        self.index
    }
}
