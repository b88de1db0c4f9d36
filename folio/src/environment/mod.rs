use std::sync::Arc;

use anyhow::ensure;
use folio_api_rest::{RestServerConfig, RestServerRealIpConfig};
use folio_config::Config;
use folio_core_contact_impl::{rate_limit::ContactRateLimitConfig, ContactFeatureConfig};
use folio_core_health_impl::HealthFeatureConfig;
use folio_di::provider;
use folio_extern_impl::contact::ContactApiServiceConfig;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Extern
            ContactApiServiceConfig,

            // Core
            ContactFeatureConfig,
            ContactRateLimitConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        contact_api_service_config: ContactApiServiceConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
        contact_rate_limit_config: ContactRateLimitConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
            allowed_origins: config.http.allowed_origins.clone().into(),
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
        };

        // Extern
        let contact_api_service_config = ContactApiServiceConfig {
            endpoint: config.client.endpoint.clone().into(),
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            email: config.contact.email.clone().into(),
        };

        let contact_rate_limit_config = match &config.contact.rate_limit {
            Some(rate_limit) => {
                ensure!(
                    !rate_limit.window.is_zero(),
                    "contact.rate_limit.window must not be zero"
                );
                ContactRateLimitConfig::Enabled {
                    max_messages: rate_limit.max_messages,
                    window: rate_limit.window.into(),
                }
            }
            None => ContactRateLimitConfig::Disabled,
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Extern
            contact_api_service_config,

            // Core
            contact_feature_config,
            contact_rate_limit_config,
            health_feature_config,
        })
    }
}
