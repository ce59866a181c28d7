// ==========================================
// 空闲教室查询 - 核心库
// ==========================================
// 输入: 半结构化课表网格（Excel / CSV）
// 输出: 任意星期、任意时刻的空闲教室报告
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 课表文件与网格摄取
pub mod importer;

// 引擎层 - 可用性查询
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 命令行集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AvailabilityReport, Building, DayCode, RoomAvailability, RoomId, RoomStatus, ScheduleEntry,
    ScheduleIndex, TimeRange,
};

// 导入
pub use importer::{GridIngestor, ImportError, ScheduleGrid, ScheduleImporter, ScheduleImporterImpl};

// 引擎
pub use engine::{AvailabilityEngine, QueryError};

// API
pub use api::{ApiError, RoomApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "RoomAble";
