pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::Language;
#[cfg(feature = "cli")]
use crate::utils::error::{Result, SantaError};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::RosterConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa pairs as a single gift cycle, keeping couples apart")]
pub struct CliConfig {
    /// Path to a TOML roster file
    #[arg(short, long)]
    pub roster: Option<String>,

    /// Add a participant (repeatable)
    #[arg(short, long = "participant")]
    pub participants: Vec<String>,

    /// Add a couple as NAME:NAME (repeatable)
    #[arg(short, long = "couple", value_parser = parse_couple)]
    pub couples: Vec<[String; 2]>,

    /// Maximum number of draw attempts
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before each reveal, in milliseconds
    #[arg(long)]
    pub reveal_delay_ms: Option<u64>,

    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Write the assignment to a csv, tsv or json file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the summary only, without the step-by-step reveal
    #[arg(long)]
    pub no_reveal: bool,

    /// Non-interactive: never prompt, single draw
    #[arg(long)]
    pub batch: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// 解析 `A:B` 格式的情侶參數
#[cfg(feature = "cli")]
pub fn parse_couple(value: &str) -> std::result::Result<[String; 2], String> {
    match value.split_once(':') {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
            Ok([a.trim().to_string(), b.trim().to_string()])
        }
        _ => Err(format!("expected NAME:NAME, got '{}'", value)),
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 將命令列參數套用到名單設定上（命令列優先）
    pub fn apply_to(&self, roster: &mut RosterConfig) {
        roster.participants.extend(self.participants.iter().cloned());
        roster.couples.extend(self.couples.iter().cloned());

        if let Some(lang) = self.lang {
            roster.lang = Some(lang);
        }
        if let Some(max_attempts) = self.max_attempts {
            roster.draw_mut().max_attempts = Some(max_attempts);
            tracing::info!("🔧 max_attempts overridden to: {}", max_attempts);
        }
        if let Some(delay) = self.reveal_delay_ms {
            roster.draw_mut().reveal_delay_ms = Some(delay);
        }
        if let Some(seed) = self.seed {
            roster.draw_mut().seed = Some(seed);
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(roster) = &self.roster {
            validate_path("roster", roster)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
            crate::app::export::ExportFormat::from_path(output)?;
        }
        if self.roster.is_none() && self.participants.is_empty() {
            return Err(SantaError::ConfigError {
                message: "No participants given (use --roster or --participant)".to_string(),
            });
        }
        Ok(())
    }
}
