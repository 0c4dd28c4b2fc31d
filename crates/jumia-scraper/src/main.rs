//! Command-line entry point: crawl a storefront (or archive a single
//! product page) into folders of product data.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

use jumia_scraper::{
    convert, HttpClient, HttpClientConfig, ProductDir, ProductPage, ProductRecord, Seller,
};

/// Archive Jumia seller storefronts as folders of product data.
#[derive(Parser, Debug)]
#[command(name = "jumia-scraper")]
#[command(about = "Archive Jumia seller storefronts", long_about = None)]
struct Args {
    /// Storefront URL (or a product URL with --product)
    url: String,

    /// Archive a single product page instead of a whole storefront
    #[arg(long)]
    product: bool,

    /// Output directory
    #[arg(short, long, default_value = "ScrapedData")]
    output: PathBuf,

    /// Delay between requests in milliseconds
    #[arg(long, default_value = "1000")]
    delay: u64,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Custom user agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = HttpClientConfig {
        timeout_seconds: args.timeout,
        ..HttpClientConfig::default()
    };
    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    let client = HttpClient::with_config(config)?;
    let delay = Duration::from_millis(args.delay);

    if args.product {
        let url = Url::parse(&args.url).context("invalid product url")?;
        let dir = archive_product(&client, &url, &args.output)
            .await
            .with_context(|| format!("failed to archive {url}"))?;
        info!("archived {} -> {}", url, dir.display());
        return Ok(());
    }

    let seller = Seller::from_url(&args.url).context("invalid storefront url")?;
    let products = seller
        .collect_product_urls(&client, delay)
        .await
        .context("storefront crawl failed")?;

    let seller_dir = args.output.join(seller.slug());
    let mut archived = 0usize;

    for (i, url) in products.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match archive_product(&client, url, &seller_dir).await {
            Ok(dir) => {
                archived += 1;
                info!("archived {} -> {}", url, dir.display());
            }
            Err(e) => warn!("skipping {}: {:#}", url, e),
        }
    }

    info!(
        "{}/{} product(s) archived under {}",
        archived,
        products.len(),
        seller_dir.display()
    );
    Ok(())
}

/// Fetch one product page and write its folder: images, description
/// Markdown and `info.json`.
async fn archive_product(client: &HttpClient, url: &Url, parent: &Path) -> Result<PathBuf> {
    let body = client.fetch_text(url.as_str()).await?;
    let page = ProductPage::parse(&body)?;

    let name = page.name()?;
    let prices = page.prices();
    let dir = ProductDir::create(parent, &name)?;

    let mut images = Vec::new();
    for image_url in &page.image_urls() {
        match client.fetch_bytes(image_url).await {
            Ok(bytes) => images.push(dir.write_image(images.len(), &bytes)?),
            Err(e) => warn!("image {} failed: {}", image_url, e),
        }
    }

    let description = match page.description_block() {
        Some(main_block) => Some(dir.write_description(&convert(main_block)?)?),
        None => None,
    };

    let record = ProductRecord {
        name,
        price: prices.price,
        old_price: prices.old_price,
        discount: prices.discount,
        description,
        images,
    };
    dir.write_record(&record)?;

    Ok(dir.path().to_path_buf())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
