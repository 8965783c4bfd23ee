//! Place data model shared by providers and the matcher.

use serde::{Deserialize, Serialize};

/// A normalized description of a physical business location as returned by a
/// review provider.
///
/// Providers fill in whatever their API exposes; everything past `name` is
/// optional and consumers degrade gracefully when a field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name
    pub name: String,
    /// Address lines, most significant first (street line at index 0)
    #[serde(default)]
    pub formatted_address: Vec<String>,
    /// Raw or formatted phone number
    pub phone: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Price tier, 0..=4 (rendered as that many dollar signs)
    pub price: Option<u8>,
    /// Rating on the provider's own scale
    pub score: Option<f64>,
    /// Number of reviews behind the score
    pub num_of_scores: Option<u64>,
    /// Link to the provider's page for this place
    pub url: Option<String>,
    /// Cover image
    pub image_url: Option<String>,
    /// Distance from the search location, in meters
    pub distance: Option<f64>,
}

impl Place {
    /// The street line used for address matching, if any.
    pub fn street_line(&self) -> Option<&str> {
        self.formatted_address.first().map(String::as_str)
    }
}
