use super::snapshot::PageState;

/// One entry of the pagination menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLabel {
    pub number: u32,
    pub active: bool,
}

/// Labels `1..=page_count`, with the current page marked active.
pub fn page_labels(state: &PageState) -> Vec<PageLabel> {
    (1..=state.page_count())
        .map(|number| PageLabel {
            number,
            active: number == state.page,
        })
        .collect()
}
