//! Product page extraction
//!
//! Product data lives in `div.card` sections: the name under a `-pls -prl`
//! block, prices in a `df -i-ctr -fw-w` block, images as `data-src`
//! attributes and the description in the `markup` div of the card that
//! carries `#description`. Prices are kept as the raw page text
//! (`"2 500 FCFA"`); nothing downstream needs them as numbers.

use indexmap::IndexSet;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::convert::trimmed_text;
use crate::{parse_selector, Result, ScrapeError};

/// Compiled selectors for product pages
struct ProductSelectors {
    card: Selector,
    name: Selector,
    prices: Selector,
    span: Selector,
    image: Selector,
    description_anchor: Selector,
    markup: Selector,
}

impl ProductSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            card: parse_selector("div.card")?,
            name: parse_selector("div.-pls.-prl h1")?,
            prices: parse_selector("div.df.-i-ctr.-fw-w")?,
            span: parse_selector("span")?,
            image: parse_selector("img[data-src]")?,
            description_anchor: parse_selector("div#description")?,
            markup: parse_selector("div.markup")?,
        })
    }
}

/// Price strings exactly as they appear on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prices {
    pub price: Option<String>,
    pub old_price: Option<String>,
    pub discount: Option<String>,
}

/// A fetched, parsed product page.
pub struct ProductPage {
    html: Html,
    selectors: ProductSelectors,
}

impl ProductPage {
    /// Parse a product page body.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(Self {
            html: Html::parse_document(body),
            selectors: ProductSelectors::new()?,
        })
    }

    /// The product name. Required: the archive folder is named after it.
    pub fn name(&self) -> Result<String> {
        self.cards()
            .flat_map(|card| card.select(&self.selectors.name))
            .next()
            .map(trimmed_text)
            .ok_or(ScrapeError::MissingElement("product name"))
    }

    /// Current price, and old price plus discount when the price block
    /// shows all three spans (a discounted product). Any other layout
    /// yields the first span as the price alone.
    pub fn prices(&self) -> Prices {
        let Some(block) = self
            .cards()
            .flat_map(|card| card.select(&self.selectors.prices))
            .next()
        else {
            return Prices::default();
        };

        let texts: Vec<String> = block
            .select(&self.selectors.span)
            .map(trimmed_text)
            .collect();

        if texts.len() == 3 {
            let mut texts = texts.into_iter();
            Prices {
                price: texts.next(),
                old_price: texts.next(),
                discount: texts.next(),
            }
        } else {
            Prices {
                price: texts.into_iter().next(),
                ..Prices::default()
            }
        }
    }

    /// Image URLs under product cards, first-seen order, deduplicated.
    pub fn image_urls(&self) -> IndexSet<String> {
        let mut urls = IndexSet::new();

        for image in self.cards().flat_map(|card| card.select(&self.selectors.image)) {
            if let Some(src) = image.value().attr("data-src") {
                if !src.is_empty() {
                    urls.insert(src.to_string());
                }
            }
        }

        urls
    }

    /// The description's main content block, when the page has one. The
    /// block is the first `div.markup` of the card containing
    /// `#description`; a page without such a card has no description.
    pub fn description_block(&self) -> Option<ElementRef<'_>> {
        self.cards()
            .find(|card| {
                card.select(&self.selectors.description_anchor)
                    .next()
                    .is_some()
            })
            .and_then(|card| card.select(&self.selectors.markup).next())
    }

    fn cards(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.select(&self.selectors.card)
    }
}

/// The `info.json` payload for one archived product. `description` and the
/// `images` entries are paths relative to the product folder.
#[derive(Debug, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: Option<String>,
    pub old_price: Option<String>,
    pub discount: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
}
