use crate::types::{CategoryId, CategoryMap, Item, ItemPage};

use super::mode::Mode;

/// Items per page, fixed by the server
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,
    pub total_items: u64,
}

impl PageState {
    /// `ceil(total_items / PAGE_SIZE)`; zero when there are no items.
    pub fn page_count(&self) -> u32 {
        u32::try_from(self.total_items.div_ceil(u64::from(PAGE_SIZE))).unwrap_or(u32::MAX)
    }
}

/// Everything one successful fetch produced. Replaced as a whole, never
/// patched field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSnapshot {
    pub items: Vec<Item>,
    pub page_state: PageState,
    pub categories: CategoryMap,
    /// Category the server reports as current, for display only
    pub active_category: Option<CategoryId>,
}

impl ResultSnapshot {
    /// Build a snapshot from a server page fetched in `mode`.
    ///
    /// Only the "list all" response may replace the category map; category
    /// and search responses always keep `previous`, even when they carry a
    /// map of their own.
    pub fn from_page(
        mode: &Mode,
        page: u32,
        response: ItemPage,
        previous: Option<&CategoryMap>,
    ) -> Self {
        let fresh = match mode {
            Mode::All => response.categories,
            Mode::ByCategory(_) | Mode::Search(_) => None,
        };
        let categories = fresh.or_else(|| previous.cloned()).unwrap_or_default();

        Self {
            items: response.items,
            page_state: PageState {
                page,
                total_items: response.total_items,
            },
            categories,
            active_category: response.current_category,
        }
    }
}
