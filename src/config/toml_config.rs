use crate::app::Language;
use crate::core::draw::DEFAULT_MAX_ATTEMPTS;
use crate::core::{ConfigProvider, ConstraintRegistry, Session, Storage};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{
    validate_known_names, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1500;
pub const MAX_REVEAL_DELAY_MS: u64 = 60_000;

/// 參加者名單檔（TOML）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub couples: Vec<[String; 2]>,
    #[serde(default)]
    pub lang: Option<Language>,
    pub draw: Option<DrawConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawConfig {
    pub max_attempts: Option<usize>,
    pub reveal_delay_ms: Option<u64>,
    pub seed: Option<u64>,
}

impl RosterConfig {
    /// 透過 Storage 載入，與結果輸出共用同一個儲存層
    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let bytes = storage.read_file(path).await?;
        let content = String::from_utf8(bytes).map_err(|e| SantaError::ConfigError {
            message: format!("Roster file '{}' is not valid UTF-8: {}", path, e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn draw_mut(&mut self) -> &mut DrawConfig {
        self.draw.get_or_insert_with(DrawConfig::default)
    }

    pub fn language(&self) -> Language {
        self.lang.unwrap_or_default()
    }

    /// 建立登記表；重複或空白的名字與無效的情侶會被略過
    pub fn to_registry(&self) -> ConstraintRegistry {
        let mut registry = ConstraintRegistry::new();
        for name in &self.participants {
            if !registry.add_participant(name) {
                tracing::warn!("Skipping duplicate or blank participant '{}'", name);
            }
        }
        for [a, b] in &self.couples {
            if !registry.add_couple(a.trim(), b.trim()) {
                tracing::warn!("Skipping invalid or duplicate couple {} / {}", a, b);
            }
        }
        tracing::info!(
            "Roster loaded: {} participants, {} couples",
            registry.participant_count(),
            registry.couple_count()
        );
        registry
    }

    pub fn to_session(&self) -> Session {
        Session::with_registry(self.to_registry())
    }

    pub fn validate_config(&self) -> Result<()> {
        for name in &self.participants {
            validate_non_empty_string("participants", name)?;
        }

        for [a, b] in &self.couples {
            validate_known_names("couples", [a.as_str(), b.as_str()], &self.trimmed_participants())?;
        }

        if let Some(draw) = &self.draw {
            if let Some(max_attempts) = draw.max_attempts {
                validate_positive_number("draw.max_attempts", max_attempts, 1)?;
            }
            if let Some(delay) = draw.reveal_delay_ms {
                validate_range("draw.reveal_delay_ms", delay, 0, MAX_REVEAL_DELAY_MS)?;
            }
        }

        Ok(())
    }

    fn trimmed_participants(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.trim().to_string()).collect()
    }
}

impl ConfigProvider for RosterConfig {
    fn max_attempts(&self) -> usize {
        self.draw
            .as_ref()
            .and_then(|d| d.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn reveal_delay_ms(&self) -> u64 {
        self.draw
            .as_ref()
            .and_then(|d| d.reveal_delay_ms)
            .unwrap_or(DEFAULT_REVEAL_DELAY_MS)
    }

    fn seed(&self) -> Option<u64> {
        self.draw.as_ref().and_then(|d| d.seed)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
