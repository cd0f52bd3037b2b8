use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Product, error::CatalogError, protocol::decode_products};
use tracing::info;
use url::Url;

pub mod cart;
pub mod filter;
pub mod pagination;
pub mod session;
pub mod sort;
pub mod surface;
pub mod view;

pub use cart::CartCounter;
pub use filter::{filter_options, FilterOptions, FilterSelection};
pub use pagination::{Pagination, PAGE_SIZE};
pub use session::CatalogSession;
pub use sort::sort_products;
pub use surface::{UiEvent, UiSurface};
pub use view::{format_brl, ProductCard, RenderMode};

/// Where the authoritative product collection comes from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

pub struct HttpProductSource {
    http: Client,
    url: Url,
}

impl HttpProductSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(http: Client, url: Url) -> Self {
        Self { http, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        fetch_products(&self.http, &self.url).await
    }
}

/// Issues a single GET for the product list. No retry: the first failure is returned.
pub async fn fetch_products(http: &Client, url: &Url) -> Result<Vec<Product>, CatalogError> {
    let response = http
        .get(url.clone())
        .send()
        .await
        .map_err(|err| CatalogError::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Network(status.to_string()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| CatalogError::Network(err.to_string()))?;
    let products = decode_products(&body)?;
    info!(%url, count = products.len(), "fetched product list");
    Ok(products)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
