use crate::article::Article;
use crate::pagination::PagerWindow;
use crate::results::ResultSet;
use crate::stack::Stack;
use serde::Serialize;
use serde_json::Value;

/// Pagination metadata for a rendered page
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
    pub window: Option<PagerWindow>,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// A page of results with everything a pager needs
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Article>,
    pub pagination: PageInfo,
}

/// One slot of a rendered stack
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SlotView {
    pub index: usize,
    pub occupied: bool,
    pub id: Option<Value>,
    pub title: Option<String>,
}

/// The whole stack as the layout grid sees it
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StackView {
    pub slots: Vec<SlotView>,
    pub len: usize,
    pub occupied: usize,
}

/// Build the view for the page the result set currently points at
///
/// `items` is what the last page request returned; it may be empty when a
/// page past the end was asked for. `command` is the base command used to
/// build the navigation hints (`{command} --page N`).
pub fn build_page_view(
    items: &[Article],
    results: &ResultSet,
    max_window: usize,
    command: &str,
) -> PageView {
    let current_page = results.current_page();

    let next_page = if results.has_next_page() {
        Some(format!("{command} --page {}", current_page + 1))
    } else {
        None
    };

    let prev_page = if results.has_previous_page() {
        Some(format!("{command} --page {}", current_page - 1))
    } else {
        None
    };

    PageView {
        items: items.to_vec(),
        pagination: PageInfo {
            current_page,
            total_pages: results.page_count(),
            total_items: results.item_count(),
            per_page: results.per_page().get(),
            window: results.window(max_window),
            next_page_command: next_page,
            prev_page_command: prev_page,
        },
    }
}

/// Transform a stack into per-slot view rows
pub fn build_stack_view(stack: &Stack) -> StackView {
    let slots = stack
        .slots()
        .map(|(index, slot)| SlotView {
            index,
            occupied: slot.is_some(),
            id: slot.and_then(|article| article.id.clone()),
            title: slot.and_then(|article| article.title().map(str::to_string)),
        })
        .collect();

    StackView {
        slots,
        len: stack.len(),
        occupied: stack.occupied_count(),
    }
}
