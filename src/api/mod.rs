// ==========================================
// 空闲教室查询 - API 层
// ==========================================
// 职责: 提供 load / query 接口,供展示层（命令行）调用
// ==========================================

pub mod error;
pub mod room_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use room_api::RoomApi;
