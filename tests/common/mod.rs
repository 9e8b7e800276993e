#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use trivia_browse::{
    BrowseError, CategoryId, CategoryMap, Dialogs, Item, ItemId, ItemPage, ItemsApi, PAGE_SIZE,
    Result,
};

/// A request the fake API received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAll { page: u32 },
    ListByCategory { category: CategoryId, page: u32 },
    Search { term: String, page: u32 },
    Delete(ItemId),
}

/// In-memory stand-in for the trivia backend.
///
/// Paginates, filters and deletes like the real server and records every
/// call. Fetches or deletes can be switched to fail.
pub struct FakeApi {
    items: Mutex<Vec<Item>>,
    categories: CategoryMap,
    filtered_categories: Mutex<Option<CategoryMap>>,
    calls: Mutex<Vec<Call>>,
    fail_fetches: AtomicBool,
    fail_deletes: AtomicBool,
}

pub fn item(id: u64, category: u64, question: &str) -> Item {
    let mut fields = serde_json::Map::new();
    fields.insert("question".into(), question.into());
    fields.insert("answer".into(), "answer".into());
    fields.insert("difficulty".into(), 1.into());
    Item {
        id: ItemId(id),
        category_id: CategoryId::from(category),
        fields,
    }
}

pub fn trivia_categories() -> CategoryMap {
    CategoryMap::from([
        (CategoryId::from(1), "Science".to_string()),
        (CategoryId::from(2), "Art".to_string()),
        (CategoryId::from(3), "Geography".to_string()),
        (CategoryId::from(4), "History".to_string()),
    ])
}

impl FakeApi {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            categories: trivia_categories(),
            filtered_categories: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            fail_fetches: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
        }
    }

    /// `count` items with ids `1..=count`, spread over categories 1-4
    pub fn with_items(count: u64) -> Self {
        Self::new(
            (1..=count)
                .map(|id| item(id, (id - 1) % 4 + 1, &format!("Question number {id}")))
                .collect(),
        )
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().last().cloned()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Category map the category and search endpoints send back
    pub fn set_filtered_categories(&self, categories: Option<CategoryMap>) {
        *self.filtered_categories.lock() = categories;
    }

    pub fn set_fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn check_fetch(&self) -> Result<()> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(BrowseError::Api {
                status: 500,
                message: "Internal server error.".to_string(),
            });
        }
        Ok(())
    }

    fn paginate(matching: Vec<Item>, page: u32) -> (Vec<Item>, u64) {
        let total = matching.len() as u64;
        let start = (page.saturating_sub(1) * PAGE_SIZE) as usize;
        let items = matching
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE as usize)
            .collect();
        (items, total)
    }
}

impl ItemsApi for FakeApi {
    async fn list_all(&self, page: u32) -> Result<ItemPage> {
        self.record(Call::ListAll { page });
        self.check_fetch()?;
        let all = self.items.lock().clone();
        let (items, total_items) = Self::paginate(all, page);
        Ok(ItemPage {
            items,
            total_items,
            categories: Some(self.categories.clone()),
            current_category: None,
        })
    }

    async fn list_by_category(&self, category: &CategoryId, page: u32) -> Result<ItemPage> {
        self.record(Call::ListByCategory {
            category: category.clone(),
            page,
        });
        self.check_fetch()?;
        let matching: Vec<Item> = self
            .items
            .lock()
            .iter()
            .filter(|i| &i.category_id == category)
            .cloned()
            .collect();
        let (items, total_items) = Self::paginate(matching, page);
        Ok(ItemPage {
            items,
            total_items,
            categories: self.filtered_categories.lock().clone(),
            current_category: Some(category.clone()),
        })
    }

    async fn search(&self, term: &str, page: u32) -> Result<ItemPage> {
        self.record(Call::Search {
            term: term.to_string(),
            page,
        });
        self.check_fetch()?;
        let needle = term.to_lowercase();
        let matching: Vec<Item> = self
            .items
            .lock()
            .iter()
            .filter(|i| {
                i.text_field("question")
                    .is_some_and(|q| q.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        let (items, total_items) = Self::paginate(matching, page);
        Ok(ItemPage {
            items,
            total_items,
            categories: self.filtered_categories.lock().clone(),
            current_category: None,
        })
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        self.record(Call::Delete(id));
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(BrowseError::Api {
                status: 500,
                message: "Internal server error.".to_string(),
            });
        }

        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(BrowseError::Api {
                status: 404,
                message: "Not found.".to_string(),
            });
        }
        Ok(())
    }
}

/// Dialogs that answer confirmations with a fixed reply and record
/// everything shown.
pub struct RecordingDialogs {
    answer: bool,
    pub questions: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }
}

impl Dialogs for RecordingDialogs {
    fn confirm(&self, question: &str) -> bool {
        self.questions.borrow_mut().push(question.to_string());
        self.answer
    }

    fn notify_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
