pub mod browse;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod remote;
pub mod types;

pub use browse::{BrowseController, Dialogs, Mode, Outcome, PAGE_SIZE, PageLabel, ResultSnapshot};
pub use config::Config;
pub use error::{BrowseError, Result};
pub use remote::{HttpApi, ItemsApi};
pub use types::{CategoryId, CategoryMap, Item, ItemId, ItemPage};
