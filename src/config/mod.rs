// ==========================================
// 空闲教室查询 - 配置层
// ==========================================
// 职责: 系统配置管理,支持文件 + 环境变量覆写
// 存储: TOML 配置文件（可选）
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, env_keys, ConfigManager, RoomableConfig};
