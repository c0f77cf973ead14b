//! Fetch boundary for the rating-services call, with the tree cache.

use {
    crate::{
        assembly,
        dto::{RuleQuery, ServiceRuleRecord},
    },
    async_trait::async_trait,
    rate_rules::rules::CarrierRule,
    std::{
        collections::HashMap,
        sync::{Arc, Mutex},
        time::{Duration, Instant},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The carrier publishes no rules for this lane.
    #[error("no rules published for {query:?}")]
    NoRules { query: RuleQuery },
    /// Transport-level failure in the underlying client.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The external rating-services call.
///
/// Implementations perform the actual HTTP exchange, which lives outside
/// this workspace. The upstream documents the call as expensive and
/// recommends fetching a lane's rules at most once per day; wrap
/// implementations in a [`CachingRuleSource`] rather than calling this per
/// shipment.
#[mockall::automock]
#[async_trait]
pub trait RatingServicesApi: Send + Sync {
    async fn rating_services(
        &self,
        query: RuleQuery,
    ) -> Result<Vec<ServiceRuleRecord>, FetchError>;
}

/// Rule trees are refetched after this long by default, matching the
/// documented refresh cadence of the upstream data.
const DEFAULT_TIME_TO_LIVE: Duration = Duration::from_secs(24 * 60 * 60);

struct CacheEntry {
    fetched_at: Instant,
    rules: Arc<CarrierRule>,
}

/// Fetches, assembles and caches carrier rule trees per lane.
///
/// The assembled tree is handed out behind an `Arc` so any number of
/// concurrent validations can share it while the cache stays warm.
pub struct CachingRuleSource {
    api: Arc<dyn RatingServicesApi>,
    time_to_live: Duration,
    cache: Mutex<HashMap<RuleQuery, CacheEntry>>,
}

impl CachingRuleSource {
    pub fn new(api: Arc<dyn RatingServicesApi>) -> Self {
        Self::with_time_to_live(api, DEFAULT_TIME_TO_LIVE)
    }

    pub fn with_time_to_live(api: Arc<dyn RatingServicesApi>, time_to_live: Duration) -> Self {
        Self {
            api,
            time_to_live,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The assembled rule tree for one lane, served from cache when fresh.
    pub async fn rules(&self, query: RuleQuery) -> Result<Arc<CarrierRule>, FetchError> {
        if let Some(rules) = self.cached(&query) {
            tracing::debug!(?query, "rule tree served from cache");
            return Ok(rules);
        }
        let records = self.api.rating_services(query).await?;
        let rules = Arc::new(assembly::assemble(&query, records));
        self.cache.lock().unwrap().insert(
            query,
            CacheEntry {
                fetched_at: Instant::now(),
                rules: rules.clone(),
            },
        );
        tracing::debug!(?query, "fetched and assembled rule tree");
        Ok(rules)
    }

    fn cached(&self, query: &RuleQuery) -> Option<Arc<CarrierRule>> {
        let cache = self.cache.lock().unwrap();
        cache
            .get(query)
            .filter(|entry| entry.fetched_at.elapsed() < self.time_to_live)
            .map(|entry| entry.rules.clone())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        model::rate::{Carrier, ServiceId},
    };

    fn query() -> RuleQuery {
        RuleQuery::new(
            Carrier::Usps,
            "US".parse().unwrap(),
            "US".parse().unwrap(),
        )
    }

    fn records() -> Vec<ServiceRuleRecord> {
        vec![ServiceRuleRecord {
            service_id: ServiceId::PriorityMail,
            branded_name: "Priority Mail".to_string(),
            parcel_type_rules: vec![],
        }]
    }

    #[tokio::test]
    async fn fetches_once_within_the_time_to_live() {
        let mut api = MockRatingServicesApi::new();
        api.expect_rating_services()
            .times(1)
            .returning(|_| Ok(records()));
        let source = CachingRuleSource::new(Arc::new(api));

        let first = source.rules(query()).await.unwrap();
        let second = source.rules(query()).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.services.contains_key(&ServiceId::PriorityMail));
    }

    #[tokio::test]
    async fn expired_entries_are_refetched() {
        let mut api = MockRatingServicesApi::new();
        api.expect_rating_services()
            .times(2)
            .returning(|_| Ok(records()));
        let source = CachingRuleSource::with_time_to_live(Arc::new(api), Duration::ZERO);

        let first = source.rules(query()).await.unwrap();
        let second = source.rules(query()).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn fetch_errors_propagate() {
        let mut api = MockRatingServicesApi::new();
        api.expect_rating_services()
            .returning(|query| Err(FetchError::NoRules { query }));
        let source = CachingRuleSource::new(Arc::new(api));

        let err = source.rules(query()).await.unwrap_err();
        assert!(matches!(err, FetchError::NoRules { .. }));
    }
}
