//! Paginated search results
//!
//! A [`ResultSet`] holds the articles of the latest fetch and a page cursor.
//! The cursor only moves when a page request actually returns articles, so
//! asking for a page past the end leaves it where it was. Asking for a
//! negative page always lands on (and pins the cursor to) the first page.

use crate::article::Article;
use crate::pagination::{page_bounds, page_count, pager_window, PagerWindow};
use crate::raw::RawCollection;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    articles: Vec<Article>,
    current_page: usize,
    per_page: NonZeroUsize,
}

impl ResultSet {
    pub fn new(per_page: NonZeroUsize) -> Self {
        Self {
            articles: Vec::new(),
            current_page: 0,
            per_page,
        }
    }

    /// Replace the working set. The cursor is left untouched.
    pub fn ingest(&mut self, articles: Vec<Article>) -> &[Article] {
        self.articles = articles;
        &self.articles
    }

    /// Replace the working set from a raw collection
    pub fn ingest_raw(&mut self, raw: RawCollection) -> &[Article] {
        self.ingest(raw.into_articles())
    }

    /// Articles of page `page`, moving the cursor there if the page is not empty
    pub fn page(&mut self, page: i64) -> &[Article] {
        let bounds = page_bounds(page, self.per_page.get());
        let start = bounds.start.min(self.articles.len());
        let end = bounds.end.min(self.articles.len());

        if page < 0 {
            self.current_page = 0;
        } else if start < end {
            self.current_page = page as usize;
        }

        &self.articles[start..end]
    }

    pub fn next_page(&mut self) -> &[Article] {
        let next = self.current_page as i64 + 1;
        self.page(next)
    }

    /// At the first page this re-returns the first page
    pub fn previous_page(&mut self) -> &[Article] {
        let previous = self.current_page as i64 - 1;
        self.page(previous)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn item_count(&self) -> usize {
        self.articles.len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.articles.len(), self.per_page.get())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> NonZeroUsize {
        self.per_page
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page + 1 < self.page_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    /// Pager window around the current page
    pub fn window(&self, max_window: usize) -> Option<PagerWindow> {
        pager_window(self.page_count(), self.current_page, max_window)
    }
}
