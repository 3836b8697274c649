//! LocationIQ place client
//!
//! Autocomplete, forward geocoding and reverse geocoding against the
//! [LocationIQ](https://locationiq.com) API. Requests are spaced by a
//! configurable minimum interval and forward lookups are cached.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Client, Response, StatusCode};
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::{Place, RawPlace};

/// Trait for place service clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Places whose name starts with or contains a partial query
    async fn autocomplete(&self, query: &str, limit: u8) -> Result<Vec<Place>, PlacesError>;

    /// Best match for a full address
    async fn geocode(&self, address: &str) -> Result<Place, PlacesError>;

    /// Formatted address of a coordinate
    async fn reverse_geocode(&self, latitude: f64, longitude: f64)
    -> Result<String, PlacesError>;
}

/// LocationIQ client with rate limiting and caching
pub struct LocationIqPlacesClient {
    client: Client,
    config: PlacesConfig,
    api_key: String,
    cache: Option<Cache<String, Vec<Place>>>,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl std::fmt::Debug for LocationIqPlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqPlacesClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &"[REDACTED]")
            .field("caching", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl LocationIqPlacesClient {
    /// Create a new LocationIQ client
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when no API key is configured, or
    /// `ConnectionFailed` if the HTTP client cannot be initialized.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PlacesError::Unauthorized("API key not configured".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("CityBus/0.1")
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(u64::from(config.cache_ttl_minutes) * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
            cache,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Space requests by the configured minimum interval
    async fn rate_limit(&self) {
        let interval = Duration::from_millis(self.config.min_request_interval_ms);
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting place request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn cached(&self, key: &str) -> Option<Vec<Place>> {
        let cache = self.cache.as_ref()?;
        let hit = cache.get(key).await;
        if hit.is_some() {
            debug!(key, "Place cache hit");
        }
        hit
    }

    async fn remember(&self, key: String, places: &[Place]) {
        if let Some(cache) = &self.cache {
            cache.insert(key, places.to_vec()).await;
        }
    }

    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Response, PlacesError> {
        self.rate_limit().await;

        let url = format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("format", "json")])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlacesError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    PlacesError::ConnectionFailed(e.to_string())
                }
            })?;

        check_status(response, params)
    }

    fn country_param(&self) -> Option<(&'static str, String)> {
        (!self.config.country_filter.is_empty())
            .then(|| ("countrycodes", self.config.country_filter.clone()))
    }
}

fn check_status(response: Response, params: &[(&str, String)]) -> Result<Response, PlacesError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let query = params
        .iter()
        .find(|(name, _)| *name == "q")
        .map_or_else(String::new, |(_, value)| value.clone());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            warn!(%status, "Place service rejected the API key");
            Err(PlacesError::Unauthorized(format!("HTTP {status}")))
        },
        StatusCode::NOT_FOUND => Err(PlacesError::NotFound(query)),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            warn!(?retry_after_secs, "Place service rate limit hit");
            Err(PlacesError::RateLimitExceeded { retry_after_secs })
        },
        _ => Err(PlacesError::RequestFailed(format!("HTTP {status}"))),
    }
}

async fn parse_places(response: Response) -> Result<Vec<Place>, PlacesError> {
    let raw: Vec<RawPlace> = response
        .json()
        .await
        .map_err(|e| PlacesError::ParseError(e.to_string()))?;
    raw.into_iter().map(Place::try_from).collect()
}

fn non_blank(query: &str) -> Result<&str, PlacesError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(PlacesError::InvalidQuery(
            "Query must not be empty".to_string(),
        ));
    }
    Ok(query)
}

#[async_trait]
impl PlacesClient for LocationIqPlacesClient {
    #[instrument(skip(self))]
    async fn autocomplete(&self, query: &str, limit: u8) -> Result<Vec<Place>, PlacesError> {
        let query = non_blank(query)?;
        let cache_key = format!("autocomplete:{limit}:{}", query.to_lowercase());
        if let Some(places) = self.cached(&cache_key).await {
            return Ok(places);
        }

        let mut params = vec![("q", query.to_string()), ("limit", limit.to_string())];
        params.extend(self.country_param());

        let places = parse_places(self.get("autocomplete", &params).await?).await?;
        debug!(count = places.len(), "Autocomplete results");

        self.remember(cache_key, &places).await;
        Ok(places)
    }

    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Place, PlacesError> {
        let address = non_blank(address)?;
        let cache_key = format!("search:{}", address.to_lowercase());
        let places = if let Some(places) = self.cached(&cache_key).await {
            places
        } else {
            let mut params = vec![("q", address.to_string()), ("limit", "1".to_string())];
            params.extend(self.country_param());

            let places = parse_places(self.get("search", &params).await?).await?;
            self.remember(cache_key, &places).await;
            places
        };

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| PlacesError::NotFound(address.to_string()))?;
        debug!(location = %place.location, "Geocoded address");
        Ok(place)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, PlacesError> {
        let params = [("lat", latitude.to_string()), ("lon", longitude.to_string())];
        let response = self.get("reverse", &params).await?;

        let raw: RawPlace = response
            .json()
            .await
            .map_err(|e| PlacesError::ParseError(e.to_string()))?;

        raw.display_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| PlacesError::NotFound(format!("{latitude},{longitude}")))
    }
}
