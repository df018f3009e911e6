//! Core library for slotpress
//!
//! This crate implements the **Functional Core** of the slotpress application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The slotpress project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`slotpress_core`** (this crate): the data models and pure transformations, zero I/O
//! - **`slotpress`**: fetching, layout files and terminal output (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **No I/O**: nothing in here touches the network, the filesystem or a terminal
//! - **No panics on bad input**: every rejected operation comes back as an error value
//! - **Deterministic**: the same calls on the same data give the same result
//! - **Testable**: everything is exercised with fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`stack`]: the slotted article stack behind the layout editor
//! - [`results`]: the paginated result set behind the search UI
//! - [`pagination`]: page bounds and pager window math
//! - [`raw`]: raw collection decoding and slot index parsing
//! - [`merge`]: recursive content merge used by edits
//! - [`edit`]: slot-bound editor for bare content
//! - [`view`]: serializable view state for renderers
//!
//! # Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use slotpress_core::raw::RawCollection;
//! use slotpress_core::stack::{Placement, Stack};
//! use slotpress_core::Article;
//!
//! let raw: RawCollection = serde_json::from_value(json!({
//!     "0": {"ID": 1, "content": {"title": "Lead story"}},
//!     "2": {"ID": 2, "content": {"title": "Sidebar"}}
//! }))
//! .unwrap();
//!
//! let mut stack = Stack::from_raw(raw);
//! assert_eq!(stack.len(), 3);
//!
//! // slot 1 is a gap, so nothing moves
//! assert_eq!(stack.push(1, Article::new(3)), Ok(Placement::Placed));
//! assert_eq!(stack.len(), 3);
//! ```

pub mod article;
pub mod edit;
pub mod merge;
pub mod pagination;
pub mod raw;
pub mod results;
pub mod stack;
pub mod view;

pub use article::{Article, Content};
pub use results::ResultSet;
pub use stack::{Placement, SlotError, Stack};
