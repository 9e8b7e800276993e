//! Interactive, line-oriented browsing session.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::browse::{BrowseController, Dialogs, Outcome};
use crate::config::Config;
use crate::display::format_snapshot;
use crate::error::Result;
use crate::remote::{HttpApi, ItemsApi};
use crate::types::{CategoryId, ItemId};

const HELP: &str = "\
Commands:
  all              show all questions
  cat <id>         show questions of one category
  search <term>    search questions
  page <n>         go to page n of the current listing
  delete <id>      delete a question (asks for confirmation)
  show             print the current listing again
  help             print this help
  quit             leave";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    All,
    Category(CategoryId),
    Search(String),
    Page(u32),
    Delete(ItemId),
    Show,
    Help,
    Quit,
}

/// What the session loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Continue,
    Quit,
}

/// Parse a line of input. The search term is passed through untrimmed so
/// the controller performs the emptiness check.
pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word.to_lowercase().as_str() {
        "all" | "a" => Ok(BrowseCommand::All),
        "cat" | "c" => {
            let id = rest.trim();
            if id.is_empty() {
                return Err("usage: cat <id>".to_string());
            }
            Ok(BrowseCommand::Category(CategoryId::from(id)))
        }
        "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
        "page" | "p" => rest
            .trim()
            .parse()
            .map(BrowseCommand::Page)
            .map_err(|_| format!("invalid page number '{}'", rest.trim())),
        "delete" | "d" => rest
            .parse()
            .map(BrowseCommand::Delete)
            .map_err(|_| format!("invalid item id '{}'", rest.trim())),
        "show" | "ls" | "" => Ok(BrowseCommand::Show),
        "help" | "h" | "?" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

/// Run one command against the controller.
///
/// Failures have already been shown through the controller's dialogs, so
/// they only decide whether to re-render.
pub async fn dispatch<A: ItemsApi, D: Dialogs>(
    controller: &mut BrowseController<A, D>,
    command: BrowseCommand,
) -> Flow {
    let result = match command {
        BrowseCommand::All => controller.select_all().await,
        BrowseCommand::Category(id) => controller.select_category(id).await,
        BrowseCommand::Search(term) => controller.search(&term).await,
        BrowseCommand::Page(n) => controller.go_to_page(n).await,
        BrowseCommand::Delete(id) => controller.delete_item(id).await,
        BrowseCommand::Show => return Flow::Render,
        BrowseCommand::Help => {
            println!("{HELP}");
            return Flow::Continue;
        }
        BrowseCommand::Quit => return Flow::Quit,
    };

    match result {
        Ok(Outcome::Applied) => Flow::Render,
        Ok(Outcome::OutOfRange) => {
            println!(
                "{}",
                format!("No such page, pages are 1..={}", controller.page_count()).yellow()
            );
            Flow::Continue
        }
        Ok(Outcome::Declined) | Ok(Outcome::Superseded) | Err(_) => Flow::Continue,
    }
}

/// Terminal implementation of the confirmation and error capabilities
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn confirm(&self, question: &str) -> bool {
        print!("{} [y/N] ", question.yellow());
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }

    fn notify_error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}

fn render<A: ItemsApi, D: Dialogs>(controller: &BrowseController<A, D>) {
    match controller.snapshot() {
        Some(snapshot) => print!(
            "{}",
            format_snapshot(controller.mode(), snapshot, &controller.page_labels())
        ),
        None => println!("{}", "Nothing loaded yet, try 'all'".dimmed()),
    }
}

/// Browse the configured trivia API until the user quits or input ends
pub async fn cmd_browse(config: &Config) -> Result<()> {
    let api = HttpApi::from_config(config)?;
    let mut controller = BrowseController::new(api, TerminalDialogs);

    if let Err(e) = controller.initialize().await {
        tracing::debug!("initial load failed, waiting for user input: {e}");
    }
    render(&controller);
    println!("{}", "Type 'help' for commands.".dimmed());

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                TerminalDialogs.notify_error(&message);
                continue;
            }
        };

        match dispatch(&mut controller, command).await {
            Flow::Render => render(&controller),
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }

    Ok(())
}
