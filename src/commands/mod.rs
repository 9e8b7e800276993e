mod browse;

pub use browse::{BrowseCommand, Flow, TerminalDialogs, cmd_browse, dispatch, parse_command};
