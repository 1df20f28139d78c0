use crate::config::MAX_DELAY_MS;
use crate::core::export::OUTPUT_FORMATS;
use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_DELAY_MS, DEFAULT_IDS, PRIMARY_TARGET, SECONDARY_TARGET};
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub page: PageConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_ids")]
    pub ids: Vec<u32>,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ids: default_ids(),
            delay_ms: default_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_secondary")]
    pub secondary: String,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_ids() -> Vec<u32> {
    DEFAULT_IDS.to_vec()
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_primary() -> String {
    PRIMARY_TARGET.to_string()
}

fn default_secondary() -> String {
    SECONDARY_TARGET.to_string()
}

fn default_formats() -> Vec<String> {
    OUTPUT_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PageError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("page.name", &self.page.name)?;
        validation::validate_identifiers("generator.ids", &self.generator.ids)?;
        validation::validate_range("generator.delay_ms", self.generator.delay_ms, 0, MAX_DELAY_MS)?;
        validation::validate_distinct_targets(
            "targets",
            &[self.targets.primary.as_str(), self.targets.secondary.as_str()],
        )?;

        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;
            validation::validate_output_formats(
                "output.formats",
                &output.formats,
                &OUTPUT_FORMATS,
            )?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn ids(&self) -> &[u32] {
        &self.generator.ids
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.generator.delay_ms)
    }

    fn primary_target(&self) -> &str {
        &self.targets.primary
    }

    fn secondary_target(&self) -> &str {
        &self.targets.secondary
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }

    fn output_formats(&self) -> &[String] {
        self.output.as_ref().map(|o| o.formats.as_slice()).unwrap_or(&[])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_config_uses_page_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[page]
name = "punks"
"#,
        )
        .unwrap();

        assert_eq!(config.ids(), &[1, 2, 3, 4, 5]);
        assert_eq!(config.delay(), Duration::from_millis(100));
        assert_eq!(config.primary_target(), "container");
        assert_eq!(config.secondary_target(), "container__2");
        assert!(config.output_path().is_none());
        assert!(config.output_formats().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[page]
name = "gallery"
description = "Punk gallery"

[generator]
ids = [2, 4, 6]
delay_ms = 20

[targets]
primary = "list"
secondary = "grid"

[output]
path = "./site"
formats = ["json"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.page.description.as_deref(), Some("Punk gallery"));
        assert_eq!(config.ids(), &[2, 4, 6]);
        assert_eq!(config.delay(), Duration::from_millis(20));
        assert_eq!(config.primary_target(), "list");
        assert_eq!(config.output_path(), Some("./site"));
        assert_eq!(config.output_formats(), &["json"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_formats_default_to_all() {
        let config = TomlConfig::from_toml_str(
            r#"
[page]
name = "punks"

[output]
path = "./out"
"#,
        )
        .unwrap();

        assert_eq!(config.output_formats(), &["html", "json"]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PUNK_LINKS_TEST_OUTPUT", "/tmp/punks");

        let config = TomlConfig::from_toml_str(
            r#"
[page]
name = "punks"

[output]
path = "${PUNK_LINKS_TEST_OUTPUT}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_path(), Some("/tmp/punks"));

        std::env::remove_var("PUNK_LINKS_TEST_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let zero_id = TomlConfig::from_toml_str(
            r#"
[page]
name = "punks"

[generator]
ids = [1, 0, 2]
"#,
        )
        .unwrap();
        assert!(zero_id.validate().is_err());

        let clashing_targets = TomlConfig::from_toml_str(
            r#"
[page]
name = "punks"

[targets]
primary = "container"
secondary = "container"
"#,
        )
        .unwrap();
        assert!(clashing_targets.validate().is_err());
    }

    #[test]
    fn test_missing_page_section_is_a_parse_error() {
        let err = TomlConfig::from_toml_str("[generator]\nids = [1]\n").unwrap_err();
        assert!(matches!(err, PageError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[page]\nname = \"file-test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.page.name, "file-test");
    }

    #[test]
    fn test_load_failures_map_to_exit_codes() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let missing = TomlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, PageError::IoError(_)));
        assert_eq!(missing.exit_code(), 3);

        let garbage_path = temp_dir.path().join("garbage.toml");
        std::fs::write(&garbage_path, "this is = = not toml").unwrap();
        let garbage = TomlConfig::from_file(&garbage_path).unwrap_err();
        assert!(matches!(garbage, PageError::ConfigValidationError { .. }));
        assert_eq!(garbage.exit_code(), 1);
        assert!(!garbage.recovery_suggestion().is_empty());
    }
}
