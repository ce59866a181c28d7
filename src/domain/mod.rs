// ==========================================
// 空闲教室查询 - 领域模型层
// ==========================================
// 职责: 定义星期、楼栋、教室、课表索引与可用性报告
// 红线: 不含文件读取逻辑,不含查询逻辑
// ==========================================

pub mod report;
pub mod room;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use report::{AvailabilityReport, RoomAvailability};
pub use room::RoomId;
pub use schedule::{BuildingSummary, ScheduleEntry, ScheduleIndex, TimeRange};
pub use types::{day_key, Building, DayCode, RoomStatus};
