//! Slotted article stack behind the layout editor
//!
//! The stack is a sparse, ordered sequence of slots. A slot either holds one
//! [`Article`] or is empty, and its position is what the editor renders into
//! a fixed grid. Two rules shape every operation:
//!
//! - pushing onto an occupied slot inserts and shifts the whole tail one
//!   position later, so nothing already placed is overwritten;
//! - removing leaves a gap, so untouched articles keep their slot numbers.
//!
//! The length of the sequence therefore never shrinks.
//!
//! Addressable slots stop at [`MAX_SLOT_INDEX`]. Pushes that shift the tail
//! may carry articles past it, but no caller can target those slots directly.

use crate::article::Article;
use crate::merge::merge_content;
use crate::raw::RawCollection;
use serde_json::Value;
use std::collections::BTreeMap;

/// Highest slot index a caller may address
pub const MAX_SLOT_INDEX: usize = 9_999;

/// Error type for slot operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("invalid slot index: {0}")]
    InvalidIndex(String),

    #[error("slot {0} is empty")]
    EmptySlot(usize),

    #[error("edit for slot {0} carries no content")]
    MalformedPayload(usize),

    #[error("the stack is empty")]
    EmptyCollection,
}

/// How a pushed article ended up in the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The slot was empty; nothing moved
    Placed,
    /// The slot was taken; the tail moved one slot later
    Shifted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    slots: BTreeMap<usize, Article>,
    len: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from a raw collection, keeping each entry at its index.
    ///
    /// Invalid keys are dropped. Entries that are not articles still count
    /// towards the length but leave their slot empty.
    pub fn from_raw(raw: RawCollection) -> Self {
        let mut stack = Self::new();
        for (index, value) in raw.into_indexed() {
            let Some(end) = index.checked_add(1) else {
                continue;
            };
            stack.len = stack.len.max(end);
            if let Some(article) = Article::from_value(value) {
                stack.slots.insert(index, article);
            }
        }
        stack
    }

    /// Number of slots, empty ones included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots holding an article
    pub fn occupied_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.slots.get(&index)
    }

    /// Every slot position in order, gaps as `None`
    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<&Article>)> + '_ {
        (0..self.len).map(move |index| (index, self.slots.get(&index)))
    }

    /// Filled slots only, in order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Article)> + '_ {
        self.slots.iter().map(|(index, article)| (*index, article))
    }

    /// Put an article at `index`.
    ///
    /// An empty slot is filled in place; pushing past the end extends the
    /// stack with empty slots up to `index`. An occupied slot makes room by
    /// moving every later slot, empty or not, one position up.
    ///
    /// Indices above [`MAX_SLOT_INDEX`] are rejected and leave the stack as is.
    pub fn push(&mut self, index: usize, article: Article) -> Result<Placement, SlotError> {
        if index > MAX_SLOT_INDEX {
            return Err(SlotError::InvalidIndex(index.to_string()));
        }

        if !self.slots.contains_key(&index) {
            self.slots.insert(index, article);
            self.len = self.len.max(index + 1);
            return Ok(Placement::Placed);
        }

        let tail = self.slots.split_off(&index);
        self.slots
            .extend(tail.into_iter().map(|(position, moved)| (position + 1, moved)));
        self.slots.insert(index, article);
        self.len += 1;
        Ok(Placement::Shifted)
    }

    /// Deep-merge the content of `patch` into the article at `index`
    pub fn edit(&mut self, index: usize, patch: &Article) -> Result<(), SlotError> {
        let existing = self
            .slots
            .get_mut(&index)
            .ok_or(SlotError::EmptySlot(index))?;
        let incoming = patch
            .content
            .as_ref()
            .ok_or(SlotError::MalformedPayload(index))?;

        merge_content(existing.content_mut(), incoming);
        Ok(())
    }

    /// Empty the slot at `index`, returning what was there
    pub fn remove(&mut self, index: usize) -> Result<Article, SlotError> {
        if self.is_empty() {
            return Err(SlotError::EmptyCollection);
        }
        self.slots.remove(&index).ok_or(SlotError::EmptySlot(index))
    }

    /// Array form with `null` gaps; `Stack::from_raw` reads it back unchanged
    pub fn to_raw(&self) -> RawCollection {
        RawCollection::List(
            self.slots()
                .map(|(_, slot)| {
                    slot.and_then(|article| serde_json::to_value(article).ok())
                        .unwrap_or(Value::Null)
                })
                .collect(),
        )
    }
}
