pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, Numero, OverflowPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "numero")]
#[command(about = "Add integers and print the total")]
pub struct CliConfig {
    /// Integers to add together
    #[arg(allow_negative_numbers = true)]
    pub operands: Vec<i32>,

    /// Overflow policy: wrapping, saturating or checked
    #[arg(long)]
    pub policy: Option<OverflowPolicy>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併命令列與設定檔：命令列優先
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let policy = self.policy.unwrap_or_else(|| file.overflow_policy());
        let operands = if self.operands.is_empty() {
            file.operands().to_vec()
        } else {
            self.operands.iter().copied().map(Numero::from).collect()
        };

        let settings = Settings { policy, operands };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

/// Effective settings after the CLI and the config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub policy: OverflowPolicy,
    pub operands: Vec<Numero>,
}

impl ConfigProvider for Settings {
    fn overflow_policy(&self) -> OverflowPolicy {
        self.policy
    }

    fn operands(&self) -> &[Numero] {
        &self.operands
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("operands", &self.operands)
    }
}
