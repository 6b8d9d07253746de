use std::time::Duration;

use crate::config::LatencyConfig;

/// Simulated per-operation network delay.
/// Publish goes through update and pays the update delay; clear has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub fetch: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(150),
            create: Duration::from_millis(250),
            update: Duration::from_millis(200),
            delete: Duration::from_millis(150),
        }
    }
}

impl Latency {
    pub fn none() -> Self {
        Self {
            fetch: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }

    pub(super) async fn wait(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl From<&LatencyConfig> for Latency {
    fn from(config: &LatencyConfig) -> Self {
        if !config.enabled {
            return Self::none();
        }
        Self {
            fetch: Duration::from_millis(config.fetch_ms),
            create: Duration::from_millis(config.create_ms),
            update: Duration::from_millis(config.update_ms),
            delete: Duration::from_millis(config.delete_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_means_no_delay() {
        let config = LatencyConfig {
            enabled: false,
            ..LatencyConfig::default()
        };
        assert_eq!(Latency::from(&config), Latency::none());
    }

    #[test]
    fn default_config_matches_default_latency() {
        assert_eq!(Latency::from(&LatencyConfig::default()), Latency::default());
    }

    #[tokio::test]
    async fn wait_sleeps_for_the_given_delay() {
        let start = tokio::time::Instant::now();
        Latency::wait(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
