//! Mode-aware browsing of the remote item collection.
//!
//! [`BrowseController`] owns the active retrieval mode, the current page and
//! the last successfully fetched [`ResultSnapshot`]. Presentation layers read
//! that state and dispatch the controller's operations; they keep no
//! browsing state of their own.

mod controller;
mod dialogs;
mod mode;
mod pager;
mod snapshot;

pub use controller::{BrowseController, FetchRequest, Outcome, PendingFetch, execute};
pub use dialogs::Dialogs;
pub use mode::Mode;
pub use pager::{PageLabel, page_labels};
pub use snapshot::{PAGE_SIZE, PageState, ResultSnapshot};
