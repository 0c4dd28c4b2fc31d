//! Storefront crawl
//!
//! A seller's storefront is a paginated product listing. Pages are walked
//! by following the anchor labeled "Page suivante" until it is absent;
//! product links are the first `a.core` of each `article.prd` card.

use std::time::Duration;

use scraper::{Html, Selector};
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use crate::fetch::HttpClient;
use crate::{parse_selector, Result, ScrapeError};

/// Compiled selectors for listing pages
struct ListingSelectors {
    next_page: Selector,
    product_card: Selector,
    product_link: Selector,
}

impl ListingSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            next_page: parse_selector(r#"a[aria-label="Page suivante"]"#)?,
            product_card: parse_selector("article.prd")?,
            product_link: parse_selector("a.core")?,
        })
    }
}

/// A seller storefront crawl.
pub struct Seller {
    url: Url,
    slug: String,
    selectors: ListingSelectors,
}

impl Seller {
    /// Build a crawl from the storefront URL. The seller slug is the last
    /// non-empty path segment, e.g. `adidas-official-store` for
    /// `https://www.jumia.ci/adidas-official-store/`.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        let slug = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty())
            .next_back()
            .ok_or(ScrapeError::MissingElement("seller name in url"))?
            .to_string();

        Ok(Self {
            url,
            slug,
            selectors: ListingSelectors::new()?,
        })
    }

    /// The seller's archive folder name.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Crawl every listing page and collect product URLs in document order.
    /// Duplicates across pages are kept; `delay` sleeps between page
    /// fetches.
    pub async fn collect_product_urls(
        &self,
        client: &HttpClient,
        delay: Duration,
    ) -> Result<Vec<Url>> {
        let mut products = Vec::new();
        let mut pages = 0usize;
        let mut next = Some(self.url.clone());

        while let Some(page_url) = next {
            if pages > 0 && !delay.is_zero() {
                sleep(delay).await;
            }

            let body = client.fetch_text(page_url.as_str()).await?;
            let page = Html::parse_document(&body);

            let found = self.product_urls_on(&page_url, &page)?;
            debug!("{}: {} product link(s)", page_url, found.len());
            products.extend(found);

            next = self.next_page_url(&page_url, &page)?;
            pages += 1;
        }

        info!(
            "{}: {} product link(s) across {} page(s)",
            self.slug,
            products.len(),
            pages
        );
        Ok(products)
    }

    /// The "next page" anchor's target, joined against the page URL.
    fn next_page_url(&self, base: &Url, page: &Html) -> Result<Option<Url>> {
        page.select(&self.selectors.next_page)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .map(|href| base.join(href).map_err(ScrapeError::from))
            .transpose()
    }

    /// Product links on one listing page.
    fn product_urls_on(&self, base: &Url, page: &Html) -> Result<Vec<Url>> {
        let mut urls = Vec::new();

        for card in page.select(&self.selectors.product_card) {
            let Some(href) = card
                .select(&self.selectors.product_link)
                .next()
                .and_then(|anchor| anchor.value().attr("href"))
            else {
                warn!("product card without a link on {}", base);
                continue;
            };
            urls.push(base.join(href)?);
        }

        Ok(urls)
    }
}
