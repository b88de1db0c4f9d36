use std::{collections::HashMap, net::IpAddr, sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use folio_core_contact_contracts::rate_limit::ContactRateLimitService;
use folio_di::Build;
use folio_shared_contracts::time::TimeService;
use folio_utils::trace_instrument;
use tokio::sync::Mutex;

/// Number of tracked clients above which expired windows are dropped.
const PRUNE_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Build)]
pub struct ContactRateLimitServiceImpl<Time> {
    time: Time,
    config: ContactRateLimitConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone, Copy)]
pub enum ContactRateLimitConfig {
    Disabled,
    /// Allow at most `max_messages` per client in every fixed `window`.
    Enabled { max_messages: u32, window: Duration },
}

#[derive(Debug, Default)]
struct State {
    windows: Mutex<HashMap<IpAddr, Window>>,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    start: DateTime<Utc>,
    count: u32,
}

impl<Time> ContactRateLimitService for ContactRateLimitServiceImpl<Time>
where
    Time: TimeService,
{
    #[trace_instrument(skip(self))]
    async fn acquire(&self, client: IpAddr) -> bool {
        let ContactRateLimitConfig::Enabled {
            max_messages,
            window,
        } = self.config
        else {
            return true;
        };

        let now = self.time.now();
        let mut windows = self.state.windows.lock().await;

        if windows.len() >= PRUNE_THRESHOLD {
            windows.retain(|_, w| now < w.start + window);
        }

        let current = windows.entry(client).or_insert(Window {
            start: now,
            count: 0,
        });
        if now >= current.start + window {
            *current = Window {
                start: now,
                count: 0,
            };
        }

        if current.count >= max_messages {
            return false;
        }

        current.count += 1;
        true
    }
}
