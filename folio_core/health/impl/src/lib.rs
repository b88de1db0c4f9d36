use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use folio_di::Build;
use folio_email_contracts::EmailService;
use folio_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Email> {
    time: Time,
    email: Email,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Email> HealthFeatureService for HealthFeatureServiceImpl<Time, Email>
where
    Time: TimeService,
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| now < c.timestamp + self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        let status = HealthStatus { email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use folio_email_contracts::MockEmailService;
    use folio_shared_contracts::time::MockTimeService;

    use super::*;

    const TTL: Duration = Duration::from_secs(10);

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 12, 11, 22, 23).unwrap()
    }

    fn config() -> HealthFeatureConfig {
        HealthFeatureConfig { cache_ttl: TTL }
    }

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let sut = HealthFeatureServiceImpl {
            time: MockTimeService::new().with_now(now()),
            email: MockEmailService::new().with_ping(true),
            config: config(),
            state: Default::default(),
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: true });
    }

    #[tokio::test]
    async fn smtp_unreachable() {
        // Arrange
        let sut = HealthFeatureServiceImpl {
            time: MockTimeService::new().with_now(now()),
            email: MockEmailService::new().with_ping(false),
            config: config(),
            state: Default::default(),
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: false });
    }

    #[tokio::test]
    async fn cached() {
        // Arrange
        let state = Arc::new(State {
            cache: RwLock::new(Some(CachedStatus {
                status: HealthStatus { email: false },
                timestamp: now(),
            })),
        });
        let sut = HealthFeatureServiceImpl {
            time: MockTimeService::new().with_now(now() + TTL - Duration::from_secs(1)),
            email: MockEmailService::new(),
            config: config(),
            state,
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: false });
    }

    #[tokio::test]
    async fn cache_expired() {
        // Arrange
        let state = Arc::new(State {
            cache: RwLock::new(Some(CachedStatus {
                status: HealthStatus { email: false },
                timestamp: now(),
            })),
        });
        let sut = HealthFeatureServiceImpl {
            time: MockTimeService::new().with_now(now() + TTL),
            email: MockEmailService::new().with_ping(true),
            config: config(),
            state,
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { email: true });
    }
}
