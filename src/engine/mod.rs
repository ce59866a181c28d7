// ==========================================
// 空闲教室查询 - 引擎层
// ==========================================
// 职责: 基于不可变课表索引计算时点可用性
// 红线: 引擎只读索引，不修改已返回的索引
// ==========================================

pub mod availability;
pub mod error;

// 重导出核心引擎
pub use availability::{AvailabilityEngine, OccupancyScan, SkippedSlot};
pub use error::{QueryError, QueryResult};
