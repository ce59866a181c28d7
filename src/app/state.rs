// ==========================================
// 空闲教室查询 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use crate::api::RoomApi;
use crate::config::ConfigManager;
use std::path::PathBuf;
use std::sync::Arc;

/// 应用状态
///
/// 包含配置与API实例，由展示层持有
pub struct AppState {
    /// 配置管理器
    pub config: ConfigManager,

    /// 教室API
    pub room_api: Arc<RoomApi>,
}

impl AppState {
    /// 创建新的AppState实例（课表为空，需显式加载）
    pub fn new(config: ConfigManager) -> Self {
        tracing::info!(
            header_marker = %config.header_marker(),
            content_columns = config.content_columns(),
            "初始化AppState"
        );
        let room_api = Arc::new(RoomApi::from_config(&config));
        Self { config, room_api }
    }

    /// 默认课表路径
    pub fn default_schedule_path(&self) -> PathBuf {
        get_default_schedule_path(&self.config)
    }
}

// ==========================================
// 默认课表路径
// ==========================================

/// 获取默认课表文件路径
///
/// # 返回
/// - 配置为绝对路径: 原样返回
/// - 当前目录下存在: 当前目录下的文件
/// - 用户数据目录/roomable/ 下存在: 该文件
/// - 否则: 当前目录下的相对路径（由调用方判断是否存在）
///
/// ROOMABLE_SCHEDULE_PATH 已在配置加载时覆写 default_schedule_file
pub fn get_default_schedule_path(config: &ConfigManager) -> PathBuf {
    let configured = PathBuf::from(config.default_schedule_file());
    if configured.is_absolute() || configured.exists() {
        return configured;
    }

    if let Some(data_dir) = dirs::data_dir() {
        let candidate = data_dir.join("roomable").join(&configured);
        if candidate.exists() {
            return candidate;
        }
    }

    configured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_path_falls_back_to_configured() {
        let config = ConfigManager::default();
        let path = get_default_schedule_path(&config);
        assert!(path.ends_with("class_schedule.xlsx"));
    }

    #[test]
    fn test_absolute_path_returned_as_is() {
        let mut config = ConfigManager::default();
        config.apply_overrides(vec![(
            "ROOMABLE_SCHEDULE_PATH".to_string(),
            "/srv/routine/week.csv".to_string(),
        )]);
        assert_eq!(
            get_default_schedule_path(&config),
            PathBuf::from("/srv/routine/week.csv")
        );
    }

    #[test]
    fn test_app_state_starts_empty() {
        let state = AppState::new(ConfigManager::default());
        assert!(!state.room_api.has_schedule());
    }
}
