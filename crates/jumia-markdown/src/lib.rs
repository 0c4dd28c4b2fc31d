//! jumia-markdown - Markdown block model and rendering
//!
//! This crate provides the data structures and rendering for the Markdown
//! documents written next to each archived product. A product description is
//! modeled as a flat sequence of [`Block`]s, one per direct child of the
//! page's description container, rendered in document order with a blank
//! line after every block.
//!
//! # Architecture
//!
//! ```text
//! Description DOM ──adapter──▶ ┌────────────┐
//!                              │ Vec<Block> │ ──▶ Markdown String
//!                              └────────────┘
//! ```
//!
//! The adapter lives in the scraper crate; this crate knows nothing about
//! HTML.
//!
//! # Example
//!
//! ```rust
//! use jumia_markdown::{render, Block};
//!
//! let blocks = vec![
//!     Block::Heading {
//!         level: 1,
//!         text: "Title".to_string(),
//!     },
//!     Block::Paragraph("Hello world".to_string()),
//! ];
//!
//! assert_eq!(render(&blocks), "# Title\n\nHello world\n\n");
//! ```

mod block;
mod render;

pub use block::Block;
pub use render::{render, render_block};
