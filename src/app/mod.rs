// ==========================================
// 空闲教室查询 - 应用层
// ==========================================
// 职责: 命令行集成,连接展示与 API
// ==========================================

pub mod render;
pub mod state;

// 重导出
pub use render::{display_time, render_report, render_summary};
pub use state::{get_default_schedule_path, AppState};
