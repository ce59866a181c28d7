// ==========================================
// 空闲教室查询 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 优先级: 环境变量 > 配置文件 (TOML) > 默认值
// ==========================================

use crate::importer::grid_ingestor::{GridIngestor, DEFAULT_CONTENT_COLUMNS, DEFAULT_HEADER_MARKER};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const HEADER_MARKER: &str = "header_marker";
    pub const CONTENT_COLUMNS: &str = "content_columns";
    pub const DEFAULT_SCHEDULE_FILE: &str = "default_schedule_file";
    pub const LOCALE: &str = "locale";
}

/// 环境变量名
pub mod env_keys {
    pub const CONFIG_PATH: &str = "ROOMABLE_CONFIG";
    pub const HEADER_MARKER: &str = "ROOMABLE_HEADER_MARKER";
    pub const CONTENT_COLUMNS: &str = "ROOMABLE_CONTENT_COLUMNS";
    pub const SCHEDULE_PATH: &str = "ROOMABLE_SCHEDULE_PATH";
    pub const LOCALE: &str = "ROOMABLE_LOCALE";
}

pub const DEFAULT_SCHEDULE_FILE: &str = "class_schedule.xlsx";
pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

// 列数上限（超出视为配置错误）
const MAX_CONTENT_COLUMNS: usize = 64;

// ==========================================
// RoomableConfig - 配置项全集
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomableConfig {
    pub header_marker: String,
    pub content_columns: usize,
    pub default_schedule_file: String,
    pub locale: String,
}

impl Default for RoomableConfig {
    fn default() -> Self {
        Self {
            header_marker: DEFAULT_HEADER_MARKER.to_string(),
            content_columns: DEFAULT_CONTENT_COLUMNS,
            default_schedule_file: DEFAULT_SCHEDULE_FILE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: RoomableConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 加载配置
    ///
    /// # 参数
    /// - explicit_path: 命令行指定的配置文件（优先于 ROOMABLE_CONFIG 与用户配置目录）
    ///
    /// # 说明
    /// - 显式指定的文件不存在时报错；默认位置不存在时使用默认值
    /// - 读取后应用环境变量覆写，并校验取值
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let mut manager = match Self::resolve_config_path(explicit_path) {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| format!("配置文件读取失败 ({}): {}", path.display(), e))?;
                let mut manager = Self::from_toml_str(&raw)?;
                manager.source = Some(path);
                manager
            }
            None => Self::default(),
        };

        manager.apply_overrides(std::env::vars());
        manager.validate();

        tracing::debug!(
            source = ?manager.source,
            header_marker = %manager.config.header_marker,
            content_columns = manager.config.content_columns,
            locale = %manager.config.locale,
            "配置加载完成"
        );
        Ok(manager)
    }

    /// 从 TOML 文本构造（缺失项使用默认值）
    pub fn from_toml_str(raw: &str) -> Result<Self, Box<dyn Error>> {
        let config: RoomableConfig = toml::from_str(raw)?;
        let mut manager = Self {
            config,
            source: None,
        };
        manager.validate();
        Ok(manager)
    }

    fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit_path {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(env_keys::CONFIG_PATH) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }

        let candidate = dirs::config_dir()?.join("roomable").join("config.toml");
        candidate.exists().then_some(candidate)
    }

    /// 应用环境变量覆写
    ///
    /// 参数为 (变量名, 值) 序列，便于测试时注入
    pub fn apply_overrides<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                env_keys::HEADER_MARKER => self.config.header_marker = value.to_string(),
                env_keys::CONTENT_COLUMNS => match value.parse::<usize>() {
                    Ok(n) => self.config.content_columns = n,
                    Err(_) => tracing::warn!(
                        config_key = config_keys::CONTENT_COLUMNS,
                        raw_value = %value,
                        "列数配置格式错误，忽略覆写"
                    ),
                },
                env_keys::SCHEDULE_PATH => self.config.default_schedule_file = value.to_string(),
                env_keys::LOCALE => self.config.locale = value.to_string(),
                _ => {}
            }
        }
    }

    // 非法取值回退到默认值
    fn validate(&mut self) {
        if self.config.header_marker.trim().is_empty() {
            tracing::warn!(config_key = config_keys::HEADER_MARKER, "表头标记为空，使用默认值");
            self.config.header_marker = DEFAULT_HEADER_MARKER.to_string();
        }

        if self.config.content_columns == 0 || self.config.content_columns > MAX_CONTENT_COLUMNS {
            tracing::warn!(
                config_key = config_keys::CONTENT_COLUMNS,
                raw_value = self.config.content_columns,
                "列数超出范围 [1, {}]，使用默认值",
                MAX_CONTENT_COLUMNS
            );
            self.config.content_columns = DEFAULT_CONTENT_COLUMNS;
        }

        if self.config.default_schedule_file.trim().is_empty() {
            tracing::warn!(
                config_key = config_keys::DEFAULT_SCHEDULE_FILE,
                "默认课表文件为空，使用默认值"
            );
            self.config.default_schedule_file = DEFAULT_SCHEDULE_FILE.to_string();
        }

        if !SUPPORTED_LOCALES.contains(&self.config.locale.as_str()) {
            tracing::warn!(
                config_key = config_keys::LOCALE,
                raw_value = %self.config.locale,
                "不支持的语言，使用默认值"
            );
            self.config.locale = DEFAULT_LOCALE.to_string();
        }
    }

    pub fn config(&self) -> &RoomableConfig {
        &self.config
    }

    /// 配置文件来源（使用默认值时为 None）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn header_marker(&self) -> &str {
        &self.config.header_marker
    }

    pub fn content_columns(&self) -> usize {
        self.config.content_columns
    }

    pub fn default_schedule_file(&self) -> &str {
        &self.config.default_schedule_file
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    /// 按配置构建网格摄取器
    pub fn grid_ingestor(&self) -> GridIngestor {
        GridIngestor::new(self.config.header_marker.clone(), self.config.content_columns)
    }
}
