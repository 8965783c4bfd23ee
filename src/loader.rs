//! Rating aggregation across providers.
//!
//! One lookup fans out to every enabled provider: the default provider's top
//! result becomes the reference place, every other provider's results are
//! reconciled against it with [`matching::best_match`]. A provider failing or
//! finding nothing turns into a message on its card, never into a failed
//! lookup.

use crate::config::Config;
use crate::error::{ForkloreError, ForkloreResult};
use crate::matching;
use crate::place::Place;
use crate::providers::{enabled_providers, ProviderInfo, ReviewProvider};
use futures::future::join_all;
use tracing::{info, warn};

/// What one provider contributed to the lookup.
#[derive(Debug, Clone)]
pub struct RatingOutcome {
    pub info: ProviderInfo,
    /// The matched place, when one was found
    pub place: Option<Place>,
    /// Card message when `place` is absent
    pub message: String,
}

impl RatingOutcome {
    fn found(info: ProviderInfo, place: Place) -> Self {
        Self {
            info,
            place: Some(place),
            message: String::new(),
        }
    }

    fn missing(info: ProviderInfo, message: impl Into<String>) -> Self {
        Self {
            info,
            place: None,
            message: message.into(),
        }
    }
}

/// Look `term` up on every enabled provider and reconcile the results.
///
/// Returns one outcome per provider, default provider first. Fails only when
/// the default provider itself cannot produce a reference place.
pub async fn fetch_ratings(
    config: &Config,
    term: &str,
    latitude: f64,
    longitude: f64,
) -> ForkloreResult<Vec<RatingOutcome>> {
    let providers = enabled_providers(config);
    reconcile(&providers, term, latitude, longitude).await
}

/// Fan a lookup out over an explicit provider list, first entry defining the
/// reference place.
async fn reconcile(
    providers: &[Box<dyn ReviewProvider>],
    term: &str,
    latitude: f64,
    longitude: f64,
) -> ForkloreResult<Vec<RatingOutcome>> {
    let (reference_provider, others) = providers
        .split_first()
        .ok_or_else(|| ForkloreError::Provider("No providers enabled".to_string()))?;

    // The default provider defines which place we are even talking about.
    let reference_results = reference_provider
        .search(term, latitude, longitude)
        .await
        .map_err(|e| ForkloreError::Provider(e.user_message()))?;
    let Some(reference) = reference_results.into_iter().next() else {
        return Err(ForkloreError::Provider(format!(
            "No place found for '{term}'"
        )));
    };
    info!(
        "📍 Reference place: '{}' via {}",
        reference.name,
        reference_provider.info().name
    );

    let mut outcomes = vec![RatingOutcome::found(
        reference_provider.info().clone(),
        reference.clone(),
    )];

    let lookups = others
        .iter()
        .map(|p| lookup_on_provider(p.as_ref(), &reference, latitude, longitude));
    outcomes.extend(join_all(lookups).await);

    Ok(outcomes)
}

/// Search one provider for the reference place and pick its best candidate.
async fn lookup_on_provider(
    provider: &dyn ReviewProvider,
    reference: &Place,
    latitude: f64,
    longitude: f64,
) -> RatingOutcome {
    let info = provider.info().clone();

    let candidates = match provider.search(&reference.name, latitude, longitude).await {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!("{} search failed: {}", info.name, e);
            return RatingOutcome::missing(info, e.user_message());
        }
    };

    match matching::best_match(reference, &candidates) {
        Some(place) => RatingOutcome::found(info, place.clone()),
        None => {
            let message = format!("This place is not listed on {}", info.name);
            RatingOutcome::missing(info, message)
        }
    }
}
