//! Review-source providers.
//!
//! Each review site is a provider: a bit of branding configuration plus a
//! search call that turns an API response into [`Place`] records. Matching
//! against the reference place happens outside the providers, in
//! [`crate::matching`].

use crate::config::Config;
use crate::error::{ForkloreError, ForkloreResult};
use crate::net::FetchError;
use crate::place::Place;
use async_trait::async_trait;
use lazy_static::lazy_static;

/// Branding and scale configuration for one review site.
///
/// Deliberately a plain record: score scales, logos and colors are
/// presentation concerns and never reach the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderInfo {
    /// Stable identifier used in config and CLI flags
    pub id: &'static str,
    /// Display name (e.g., "Yelp")
    pub name: &'static str,
    /// Logo asset name
    pub logo: &'static str,
    /// Brand color as a hex code
    pub color_code: &'static str,
    /// Maximum of the provider's rating scale
    pub total_score: u32,
}

lazy_static! {
    /// Branding for every built-in provider.
    pub static ref BUILTIN_PROVIDERS: Vec<ProviderInfo> = vec![
        ProviderInfo {
            id: "yelp",
            name: "Yelp",
            logo: "yelp_logo",
            color_code: "#AF0606",
            total_score: 5,
        },
        ProviderInfo {
            id: "google",
            name: "Google",
            logo: "google_logo",
            color_code: "#4285F4",
            total_score: 5,
        },
    ];
}

/// Branding for a built-in provider id. Falls back to the first entry so a
/// typo surfaces as wrong branding instead of a panic.
pub fn builtin_info(id: &str) -> &'static ProviderInfo {
    BUILTIN_PROVIDERS
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&BUILTIN_PROVIDERS[0])
}

#[async_trait]
pub trait ReviewProvider: Send + Sync {
    /// Branding and scale for this provider
    fn info(&self) -> &ProviderInfo;

    /// Search for places near a coordinate, in the API's result order
    async fn search(
        &self,
        term: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Place>, FetchError>;
}

pub mod google;
pub mod yelp;

pub use google::GoogleProvider;
pub use yelp::YelpProvider;

/// Build the provider for an id from configuration
pub fn get_provider(config: &Config, id: &str) -> ForkloreResult<Box<dyn ReviewProvider>> {
    match id.to_lowercase().as_str() {
        "yelp" => Ok(Box::new(yelp::YelpProvider::new(config))),
        "google" => Ok(Box::new(google::GoogleProvider::new(config))),
        other => Err(ForkloreError::Provider(format!(
            "Unknown provider: {other}"
        ))),
    }
}

/// All built-in providers, default provider first
pub fn enabled_providers(config: &Config) -> Vec<Box<dyn ReviewProvider>> {
    let mut ids: Vec<&str> = BUILTIN_PROVIDERS.iter().map(|p| p.id).collect();
    if let Some(pos) = ids.iter().position(|id| *id == config.default_provider) {
        ids.swap(0, pos);
    }
    ids.into_iter()
        .filter_map(|id| get_provider(config, id).ok())
        .collect()
}
