//! Page arithmetic shared by park and visit listings.
//!
//! Repositories only ever receive a page number that went through
//! [`resolve_page`], so the storage offset is always
//! `page_size * (page_num - 1)` for some `1 <= page_num <= last_page`.

use serde::{Deserialize, Serialize};

use crate::validation::leading_integer;

/// Parks shown per listing page.
pub const PARKS_PER_PAGE: u32 = 5;

/// Visits shown per listing page.
pub const VISITS_PER_PAGE: u32 = 3;

/// Number of the last page. An empty listing still has one (empty) page.
///
/// A page size of 0 is treated as 1.
#[must_use]
pub fn last_page(total_items: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total_items.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Whether `page_num` names an existing page.
#[must_use]
pub fn is_valid_page(total_items: u64, page_num: i64, page_size: u32) -> bool {
    (total_items == 0 && page_num == 1)
        || (1..=i64::from(last_page(total_items, page_size))).contains(&page_num)
}

/// Row offset of the first item on `page_num`.
#[must_use]
pub fn offset(page_size: u32, page_num: u32) -> u64 {
    u64::from(page_size) * u64::from(page_num.saturating_sub(1))
}

/// Interpret a raw page route parameter. Non-numeric input reads as 0.
#[must_use]
pub fn parse_page_param(raw: &str) -> i64 {
    leading_integer(raw)
}

/// Outcome of checking a requested page against the listing size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    /// The requested page exists.
    Show(u32),
    /// The request was out of range; show this page instead.
    Redirect(u32),
}

impl PageTarget {
    #[must_use]
    pub const fn page(self) -> u32 {
        match self {
            Self::Show(page) | Self::Redirect(page) => page,
        }
    }

    #[must_use]
    pub const fn is_redirect(self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Clamp a requested page: below 1 goes to page 1, past the end goes to the
/// last page.
#[must_use]
pub fn resolve_page(requested: i64, total_items: u64, page_size: u32) -> PageTarget {
    if requested < 1 {
        return PageTarget::Redirect(1);
    }
    let last = last_page(total_items, page_size);
    match u32::try_from(requested) {
        Ok(page) if page <= last => PageTarget::Show(page),
        _ => PageTarget::Redirect(last),
    }
}

/// One page of a listing plus the numbers needed for navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total: u64) -> Self {
        Self {
            items,
            page,
            last_page: last_page(total, page_size),
            total,
        }
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.last_page
    }
}
