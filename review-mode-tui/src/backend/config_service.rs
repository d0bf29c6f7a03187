//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use review_mode_core::{NavError, NavigatorConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 配置文件相对于平台配置目录的路径
const CONFIG_PATH: &str = "review-mode/config.json";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Navigator(#[from] NavError),
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// 启动后直接进入 Review Mode
    pub start_in_review: bool,
    /// 朗读与导航偏好
    pub navigator: NavigatorConfig,
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台配置目录；找不到时退回当前目录
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(CONFIG_PATH))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let config: AppConfig = serde_json::from_str(&json)?;
        config.navigator.validate()?;
        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        config.navigator.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}
