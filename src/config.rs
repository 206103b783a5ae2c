use crate::services::care_plan::MockCarePlanGenerator;
use crate::time_utils::{self, OrgTimezone};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub care_plan_latency: Duration,
    pub org_timezone: OrgTimezone,
    pub seed_sample_data: bool,
    pub reminder_cron: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            care_plan_latency: MockCarePlanGenerator::DEFAULT_LATENCY,
            org_timezone: OrgTimezone::default(),
            seed_sample_data: true,
            reminder_cron: "0 0 9 * * *".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr;
        } else if let Some(port) = lookup("PORT") {
            config.bind_addr = format!("0.0.0.0:{}", port);
        }

        if let Some(raw) = lookup("CARE_PLAN_DELAY_MS") {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "CARE_PLAN_DELAY_MS",
                value: raw.clone(),
            })?;
            config.care_plan_latency = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup("ORG_TIMEZONE") {
            config.org_timezone =
                time_utils::parse_timezone(&raw).ok_or_else(|| ConfigError::Invalid {
                    key: "ORG_TIMEZONE",
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = lookup("SEED_SAMPLE_DATA") {
            config.seed_sample_data = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SEED_SAMPLE_DATA",
                        value: raw,
                    })
                }
            };
        }

        if let Some(cron) = lookup("REMINDER_CRON") {
            config.reminder_cron = cron;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.care_plan_latency, Duration::from_millis(1500));
        assert!(config.seed_sample_data);
        assert_eq!(config.org_timezone, OrgTimezone::default());
    }

    #[test]
    fn bind_addr_beats_port() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        let config = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("CARE_PLAN_DELAY_MS", "soon")]).unwrap_err(),
            ConfigError::Invalid {
                key: "CARE_PLAN_DELAY_MS",
                value: "soon".into()
            }
        );
        assert!(config_from(&[("ORG_TIMEZONE", "Nowhere/Land")]).is_err());
        assert!(config_from(&[("SEED_SAMPLE_DATA", "maybe")]).is_err());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CARE_PLAN_DELAY_MS", "0"),
            ("ORG_TIMEZONE", "UTC"),
            ("SEED_SAMPLE_DATA", "false"),
        ])
        .unwrap();
        assert!(config.care_plan_latency.is_zero());
        assert!(!config.seed_sample_data);
    }
}
