use crate::config::Config;
use crate::net::{self, FetchError};
use crate::place::Place;
use crate::providers::{builtin_info, ProviderInfo, ReviewProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Google Places text search.
///
/// Text search responses carry no phone number or postal code, so matching
/// against Google candidates always runs on the fuzzy name/address path.
pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    radius_m: u32,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    formatted_address: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u64>,
    price_level: Option<u8>,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: Option<String>,
}

impl GoogleProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.google_api_key.clone(),
            base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
            radius_m: config.search_radius_m,
            limit: config.max_candidates,
        }
    }

    /// Point the provider at a different endpoint (tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Parse a text search body into places, preserving result order
    pub fn parse_search_body(body: &str) -> Result<Vec<Place>, serde_json::Error> {
        let response: SearchResponse = serde_json::from_str(body)?;
        Ok(response
            .results
            .into_iter()
            .map(|r| Place {
                name: r.name,
                formatted_address: r
                    .formatted_address
                    .map(|addr| addr.split(", ").map(str::to_string).collect())
                    .unwrap_or_default(),
                score: r.rating,
                num_of_scores: r.user_ratings_total,
                price: r.price_level,
                image_url: r.photos.into_iter().next().and_then(|p| p.photo_reference),
                ..Place::default()
            })
            .collect())
    }
}

#[async_trait]
impl ReviewProvider for GoogleProvider {
    fn info(&self) -> &ProviderInfo {
        builtin_info("google")
    }

    async fn search(
        &self,
        term: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Place>, FetchError> {
        let url = format!(
            "{}/textsearch/json?query={}&location={},{}&radius={}&key={}",
            self.base_url,
            urlencoding::encode(term),
            latitude,
            longitude,
            self.radius_m,
            self.api_key
        );

        let body = net::load_url(&self.client, &url, None).await?;
        debug!("Google body: {} bytes", body.len());
        let mut places = Self::parse_search_body(&body)?;
        places.truncate(self.limit);

        info!("🍽️ Google returned {} places for '{}'", places.len(), term);
        Ok(places)
    }
}
