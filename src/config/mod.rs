pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::export::OUTPUT_FORMATS;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{DEFAULT_DELAY_MS, PRIMARY_TARGET, SECONDARY_TARGET};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::time::Duration;

pub const MAX_DELAY_MS: u64 = 60_000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "punk-links")]
#[command(about = "Fills two page containers with punk links after a simulated delay")]
pub struct CliConfig {
    /// Identifiers to render, in order
    #[arg(long, value_delimiter = ',', default_values_t = vec![1u32, 2, 3, 4, 5])]
    pub ids: Vec<u32>,

    /// Simulated delay per identifier, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    #[arg(long, default_value = PRIMARY_TARGET)]
    pub primary_target: String,

    #[arg(long, default_value = SECONDARY_TARGET)]
    pub secondary_target: String,

    /// Directory for the page snapshot; nothing is written when omitted
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec!["html".to_string(), "json".to_string()]
    )]
    pub formats: Vec<String>,

    /// TOML configuration file; replaces every flag above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn ids(&self) -> &[u32] {
        &self.ids
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    fn primary_target(&self) -> &str {
        &self.primary_target
    }

    fn secondary_target(&self) -> &str {
        &self.secondary_target
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_identifiers("ids", &self.ids)?;
        validation::validate_range("delay_ms", self.delay_ms, 0, MAX_DELAY_MS)?;
        validation::validate_distinct_targets(
            "targets",
            &[self.primary_target.as_str(), self.secondary_target.as_str()],
        )?;
        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }
        validation::validate_output_formats("formats", &self.formats, &OUTPUT_FORMATS)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::try_parse_from(["punk-links"]).unwrap();

        assert_eq!(config.ids(), &[1, 2, 3, 4, 5]);
        assert_eq!(config.delay(), Duration::from_millis(100));
        assert_eq!(config.primary_target(), "container");
        assert_eq!(config.secondary_target(), "container__2");
        assert!(config.output_path().is_none());
        assert_eq!(config.output_formats(), &["html", "json"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::try_parse_from([
            "punk-links",
            "--ids",
            "3,1",
            "--delay-ms",
            "5",
            "--output-path",
            "./out",
            "--formats",
            "json",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.ids, vec![3, 1]);
        assert_eq!(config.delay_ms, 5);
        assert_eq!(config.output_path(), Some("./out"));
        assert_eq!(config.formats, vec!["json"]);
        assert!(config.verbose);
    }

    #[test]
    fn test_cli_validation_rejects_bad_values() {
        let zero_id = CliConfig::try_parse_from(["punk-links", "--ids", "1,0"]).unwrap();
        assert!(zero_id.validate().is_err());

        let same_targets = CliConfig::try_parse_from([
            "punk-links",
            "--secondary-target",
            "container",
        ])
        .unwrap();
        assert!(same_targets.validate().is_err());

        let bad_format = CliConfig::try_parse_from(["punk-links", "--formats", "csv"]).unwrap();
        assert!(bad_format.validate().is_err());

        let slow = CliConfig::try_parse_from(["punk-links", "--delay-ms", "60001"]).unwrap();
        assert!(slow.validate().is_err());
    }
}
