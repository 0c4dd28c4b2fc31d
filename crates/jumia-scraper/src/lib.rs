//! # jumia-scraper
//!
//! Crawl a Jumia seller storefront and archive every product it lists.
//!
//! Each product becomes a folder containing `info.json` (name, prices,
//! discount), `description.md` (the page's description markup converted to
//! Markdown) and an `images/` directory with every product image.
//!
//! ## Design
//!
//! The pipeline is sequential: [`Seller`] walks the storefront's pagination
//! and collects product links, [`ProductPage`] extracts the data of one
//! product, [`convert`] turns the description markup into Markdown blocks,
//! and [`ProductDir`] writes the folder. All selectors are tied to the
//! marketplace's current markup and live next to the code that uses them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jumia_scraper::{convert, ProductPage};
//!
//! # fn demo(body: &str) -> jumia_scraper::Result<()> {
//! let page = ProductPage::parse(body)?;
//! if let Some(main_block) = page.description_block() {
//!     let markdown = convert(main_block)?;
//!     println!("{markdown}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod fetch;
pub mod product;
pub mod seller;
pub mod store;

pub use convert::convert;
pub use fetch::{HttpClient, HttpClientConfig};
pub use product::{Prices, ProductPage, ProductRecord};
pub use seller::Seller;
pub use store::ProductDir;

/// Error type for scraping operations
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("page is missing required element: {0}")]
    MissingElement(&'static str),

    #[error("malformed table: missing {0}")]
    MalformedTable(&'static str),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode product record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Compile a CSS selector, mapping the parser's borrowed error into ours.
pub(crate) fn parse_selector(css: &str) -> Result<scraper::Selector> {
    scraper::Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}
