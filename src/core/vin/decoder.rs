//! VIN decoder with memoized results

use super::tables::{manufacturer_for, model_year_for};
use super::types::{DecodeError, DecodedVehicle};
use super::validation::check_vin;
use crate::core::cache_manager::{CacheStats, DEFAULT_TTL, TtlCache};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Validates and decodes VINs, caching decode results per VIN
///
/// The cache is keyed on the full trimmed VIN even though only the WMI and
/// the year code drive the result.
pub struct VinDecoder {
    cache: TtlCache<String, DecodedVehicle>,
}

impl VinDecoder {
    /// Create a decoder with the default five minute cache TTL
    pub fn new() -> Self {
        Self::with_cache_ttl(DEFAULT_TTL)
    }

    /// Create a decoder whose cached results live for `ttl`
    pub fn with_cache_ttl(ttl: Duration) -> Self {
        Self {
            cache: TtlCache::new(ttl),
        }
    }

    /// Check whether `vin` is structurally valid
    pub fn validate(&self, vin: &str) -> bool {
        match check_vin(vin) {
            Ok(vin) => {
                debug!("VIN validation successful for VIN: {}", vin);
                true
            }
            Err(reason) => {
                warn!("VIN validation failed: {}", reason);
                false
            }
        }
    }

    /// Decode manufacturer and model year
    pub fn decode(&self, vin: &str) -> Result<DecodedVehicle, DecodeError> {
        self.decode_at(vin, Instant::now())
    }

    /// Decode as of `now`, which drives cache expiry
    pub fn decode_at(&self, vin: &str, now: Instant) -> Result<DecodedVehicle, DecodeError> {
        let trimmed = match check_vin(vin) {
            Ok(trimmed) => trimmed,
            Err(reason) => {
                warn!("VIN validation failed: {}", reason);
                return Err(DecodeError::InvalidVin {
                    vin: vin.to_string(),
                });
            }
        };

        if let Some(cached) = self.cache.get_at(trimmed, now) {
            debug!("Cache hit for VIN: {}", trimmed);
            return Ok(cached);
        }

        let decoded = DecodedVehicle {
            vin: trimmed.to_string(),
            manufacturer: manufacturer_for(&trimmed[..3]),
            model_year: trimmed.chars().nth(9).and_then(model_year_for),
        };

        self.cache.set_at(trimmed.to_string(), decoded.clone(), now);
        info!("VIN decoded and cached successfully for VIN: {}", trimmed);

        Ok(decoded)
    }

    /// Statistics of the decode cache
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Configured lifetime of cached results
    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Drop expired decode results, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        self.cache.purge_expired()
    }

    /// Start background purge of expired decode results
    pub fn start_purge_task(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                self.purge_expired();
            }
        })
    }
}

impl Default for VinDecoder {
    fn default() -> Self {
        Self::new()
    }
}
