//! Plain-text rendering of browse state for the terminal front-end.

use owo_colors::OwoColorize;

use crate::browse::{Mode, PageLabel, ResultSnapshot};
use crate::types::{CategoryId, CategoryMap, Item};

/// Fields tried, in order, as an item's headline
const HEADLINE_FIELDS: &[&str] = &["question", "title", "name"];

/// Format an item for single-line display with colors
pub fn format_item_line(item: &Item, categories: &CategoryMap) -> String {
    let id = format!("{:>5}", item.id);
    let category = categories
        .get(&item.category_id)
        .cloned()
        .unwrap_or_else(|| item.category_id.to_string());

    let headline = HEADLINE_FIELDS
        .iter()
        .find_map(|name| item.text_field(name))
        .unwrap_or("");

    let mut line = format!("{} [{}] {}", id.cyan(), category.yellow(), headline);
    if let Some(answer) = item.text_field("answer") {
        line.push_str(&format!(" {}", format!("({answer})").dimmed()));
    }
    line
}

/// Format the category list, highlighting `active`
pub fn format_categories(categories: &CategoryMap, active: Option<&CategoryId>) -> String {
    let mut out = String::new();
    let all = "All";
    if active.is_none() {
        out.push_str(&format!("  {}\n", all.bold()));
    } else {
        out.push_str(&format!("  {all}\n"));
    }

    for (id, name) in categories {
        let entry = format!("{id}: {name}");
        if active == Some(id) {
            out.push_str(&format!("  {}\n", entry.bold()));
        } else {
            out.push_str(&format!("  {entry}\n"));
        }
    }
    out
}

/// Format the pagination menu, e.g. `1 [2] 3`
pub fn format_pager(labels: &[PageLabel]) -> String {
    labels
        .iter()
        .map(|label| {
            if label.active {
                format!("[{}]", label.number).green().to_string()
            } else {
                label.number.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a complete snapshot: categories, items and pager
pub fn format_snapshot(mode: &Mode, snapshot: &ResultSnapshot, labels: &[PageLabel]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Categories".cyan().bold()));
    out.push_str(&format_categories(&snapshot.categories, mode.category()));

    out.push_str(&format!(
        "\n{} {}\n",
        "Questions".cyan().bold(),
        format!(
            "({mode}, {} total, page {})",
            snapshot.page_state.total_items, snapshot.page_state.page
        )
        .dimmed()
    ));

    if snapshot.items.is_empty() {
        out.push_str(&format!("  {}\n", "No items on this page".dimmed()));
    }
    for item in &snapshot.items {
        out.push_str(&format!("{}\n", format_item_line(item, &snapshot.categories)));
    }

    if !labels.is_empty() {
        out.push_str(&format!("\n{} {}\n", "Pages:".bold(), format_pager(labels)));
    }
    out
}
