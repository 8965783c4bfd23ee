use crate::config::Config;
use crate::net::{self, FetchError};
use crate::place::Place;
use crate::providers::{builtin_info, ProviderInfo, ReviewProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Yelp Fusion business search
pub struct YelpProvider {
    client: Client,
    api_key: String,
    base_url: String,
    radius_m: u32,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

#[derive(Debug, Deserialize)]
struct Business {
    name: String,
    #[serde(default)]
    location: Location,
    phone: Option<String>,
    price: Option<String>,
    rating: Option<f64>,
    review_count: Option<u64>,
    url: Option<String>,
    image_url: Option<String>,
    distance: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct Location {
    #[serde(default)]
    display_address: Vec<String>,
    zip_code: Option<String>,
}

impl YelpProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.yelp_api_key.clone(),
            base_url: "https://api.yelp.com/v3".to_string(),
            radius_m: config.search_radius_m,
            limit: config.max_candidates,
        }
    }

    /// Point the provider at a different endpoint (tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Parse a Fusion search body into places, preserving result order
    pub fn parse_search_body(body: &str) -> Result<Vec<Place>, serde_json::Error> {
        let response: SearchResponse = serde_json::from_str(body)?;
        Ok(response
            .businesses
            .into_iter()
            .map(|b| Place {
                name: b.name,
                formatted_address: b.location.display_address,
                phone: b.phone,
                postal_code: b.location.zip_code,
                price: b.price.map(|p| p.chars().filter(|c| *c == '$').count() as u8),
                score: b.rating,
                num_of_scores: b.review_count,
                url: b.url,
                image_url: b.image_url,
                distance: b.distance,
            })
            .collect())
    }
}

#[async_trait]
impl ReviewProvider for YelpProvider {
    fn info(&self) -> &ProviderInfo {
        builtin_info("yelp")
    }

    async fn search(
        &self,
        term: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Place>, FetchError> {
        let url = format!(
            "{}/businesses/search?term={}&latitude={}&longitude={}&radius={}&limit={}",
            self.base_url,
            urlencoding::encode(term),
            latitude,
            longitude,
            self.radius_m,
            self.limit
        );

        let auth = format!("Bearer {}", self.api_key);
        let body = net::load_url(&self.client, &url, Some(&auth)).await?;
        debug!("Yelp body: {} bytes", body.len());
        let places = Self::parse_search_body(&body)?;

        info!("🍽️ Yelp returned {} places for '{}'", places.len(), term);
        Ok(places)
    }
}
