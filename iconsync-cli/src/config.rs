//! Run configuration: CLI flags plus required environment settings.
//!
//! The resolved [`SyncConfig`] is constructed once and passed by value into
//! the pipeline entry call; nothing reads the environment after resolution.

use clap::Parser;
use iconsync_codegen::ArtifactLayout;
use iconsync_figma::{ImageFormat, default_base_url};
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Sentinel prefix of the placeholder values the setup instructions ship
/// with; a setting that still carries it was never actually configured.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Environment variables the sync requires.
pub const ENV_FILE_ID: &str = "FIGMA_FILE_ID";
pub const ENV_TOKEN: &str = "FIGMA_TOKEN";
pub const ENV_ICON_NODE_ID: &str = "FIGMA_ICON_NODE_ID";

/// Sync Figma icon components into a publishable React icon library.
///
/// Requires FIGMA_FILE_ID, FIGMA_TOKEN and FIGMA_ICON_NODE_ID in the
/// environment (a .env file is loaded if present).
#[derive(Debug, Parser)]
#[command(name = "iconsync", version, about)]
pub struct Cli {
    /// Directory for the generated per-icon component files
    #[arg(long, default_value = "./src/icons")]
    pub out_dir: PathBuf,

    /// Path of the generated barrel module
    #[arg(long, default_value = "./src/index.js")]
    pub index_file: PathBuf,

    /// Path of the generated type declarations
    #[arg(long, default_value = "./dist/index.d.ts")]
    pub types_file: PathBuf,

    /// Path of the generated README
    #[arg(long, default_value = "./README.md")]
    pub readme_file: PathBuf,

    /// npm package name used in the generated README
    #[arg(long, default_value = "@yourcompany/icon-library")]
    pub package_name: String,

    /// Rendered image format requested from the images endpoint
    #[arg(long, default_value = "svg")]
    pub format: ImageFormat,
}

/// Configuration failures, rejected before any network call. The process
/// exits non-zero without writing a single file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required setting {key} is missing or empty; set it in the environment or a .env file")]
    Missing { key: &'static str },

    #[error("required setting {key} is still the placeholder '{value}'; replace it with a real value")]
    Placeholder { key: &'static str, value: String },
}

/// Resolved configuration for one sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub file_id: String,
    pub token: String,
    pub icon_node_id: String,
    pub api_base: Url,
    pub format: ImageFormat,
    pub package_name: String,
    pub layout: ArtifactLayout,
}

impl SyncConfig {
    /// Resolve the run configuration from CLI flags plus the environment.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            file_id: required_setting(ENV_FILE_ID, std::env::var(ENV_FILE_ID).ok())?,
            token: required_setting(ENV_TOKEN, std::env::var(ENV_TOKEN).ok())?,
            icon_node_id: required_setting(
                ENV_ICON_NODE_ID,
                std::env::var(ENV_ICON_NODE_ID).ok(),
            )?,
            api_base: default_base_url(),
            format: cli.format,
            package_name: cli.package_name.clone(),
            layout: ArtifactLayout {
                icons_dir: cli.out_dir.clone(),
                index_file: cli.index_file.clone(),
                types_file: cli.types_file.clone(),
                readme_file: cli.readme_file.clone(),
            },
        })
    }
}

/// Validate one required environment-style setting.
pub fn required_setting(
    key: &'static str,
    value: Option<String>,
) -> Result<String, ConfigError> {
    let value = value.unwrap_or_default();
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing { key });
    }
    if value.starts_with(PLACEHOLDER_PREFIX) {
        return Err(ConfigError::Placeholder { key, value: value.to_string() });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_setting_accepts_real_values() {
        let value = required_setting(ENV_TOKEN, Some("figd_abc123".into())).unwrap();
        assert_eq!(value, "figd_abc123");
    }

    #[test]
    fn test_required_setting_trims_whitespace() {
        let value = required_setting(ENV_FILE_ID, Some("  abc  ".into())).unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_required_setting_rejects_unset_and_empty() {
        assert_eq!(
            required_setting(ENV_TOKEN, None),
            Err(ConfigError::Missing { key: ENV_TOKEN })
        );
        assert_eq!(
            required_setting(ENV_TOKEN, Some("   ".into())),
            Err(ConfigError::Missing { key: ENV_TOKEN })
        );
    }

    #[test]
    fn test_required_setting_rejects_placeholders() {
        let result = required_setting(ENV_FILE_ID, Some("YOUR_FIGMA_FILE_ID".into()));
        assert_eq!(
            result,
            Err(ConfigError::Placeholder {
                key: ENV_FILE_ID,
                value: "YOUR_FIGMA_FILE_ID".into()
            })
        );
    }

    #[test]
    fn test_cli_defaults_match_generated_layout() {
        let cli = Cli::parse_from(["iconsync"]);
        assert_eq!(cli.out_dir, PathBuf::from("./src/icons"));
        assert_eq!(cli.index_file, PathBuf::from("./src/index.js"));
        assert_eq!(cli.types_file, PathBuf::from("./dist/index.d.ts"));
        assert_eq!(cli.readme_file, PathBuf::from("./README.md"));
        assert_eq!(cli.format, ImageFormat::Svg);
    }

    #[test]
    fn test_cli_parses_format_override() {
        let cli = Cli::parse_from(["iconsync", "--format", "png"]);
        assert_eq!(cli.format, ImageFormat::Png);
    }
}
