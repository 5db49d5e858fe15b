//! Planning the page count of an album
//!
//! The owner picks a page count; the album is grown by appending pages or
//! shrunk by deleting pages from the end.

use crate::constants::{MAX_PAGES, MIN_PAGES};
use crate::types::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOp {
    AddPage,
    DeletePage(String),
}

/// Read a page count typed by the user. Anything that is not a positive
/// integer yields `None`.
pub fn parse_page_count(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// Page count to aim for. Falls back to the current count, then to one
/// page, and clamps to the allowed range.
pub fn target_page_count(requested: Option<usize>, current: usize) -> usize {
    requested
        .filter(|&n| n > 0)
        .or(Some(current).filter(|&n| n > 0))
        .unwrap_or(MIN_PAGES)
        .clamp(MIN_PAGES, MAX_PAGES)
}

/// Operations that bring `pages` to `target` pages. Deletions start with
/// the page that comes last.
pub fn plan_page_count(pages: &[Page], target: usize) -> Vec<PageOp> {
    let current = pages.len();
    if target >= current {
        return vec![PageOp::AddPage; target - current];
    }

    let mut ordered: Vec<&Page> = pages.iter().collect();
    ordered.sort_by_key(|p| p.page_order);
    ordered
        .iter()
        .rev()
        .take(current - target)
        .map(|p| PageOp::DeletePage(p.id.clone()))
        .collect()
}
