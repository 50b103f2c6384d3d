use crate::error::{FaceShapeError, Result};
use faceshape_common::DEFAULT_ANALYSIS_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 解析待ち時間を上書きする環境変数
pub const DELAY_ENV_VAR: &str = "FACESHAPE_ANALYSIS_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 疑似解析の待ち時間（ミリ秒）
    pub analysis_delay_ms: u64,
    /// 乱数シード（未指定ならOSの乱数源）
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            seed: None,
        }
    }
}

impl Config {
    /// 設定ファイルに環境変数の上書きを重ねた実効値
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Some(delay_ms) = Self::delay_override()? {
            config.analysis_delay_ms = delay_ms;
        }
        Ok(config)
    }

    /// 設定ファイルの値だけ
    pub fn load_file() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 環境変数による解析待ち時間の上書き
    pub fn delay_override() -> Result<Option<u64>> {
        parse_delay_override(std::env::var(DELAY_ENV_VAR).ok().as_deref())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FaceShapeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("faceshape").join("config.json"))
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn set_analysis_delay_ms(&mut self, delay_ms: u64) -> Result<()> {
        self.analysis_delay_ms = delay_ms;
        self.save()
    }
}

fn parse_delay_override(value: Option<&str>) -> Result<Option<u64>> {
    value
        .map(|raw| {
            raw.trim().parse().map_err(|_| {
                FaceShapeError::Config(format!("{} の値が不正です: {}", DELAY_ENV_VAR, raw))
            })
        })
        .transpose()
}
