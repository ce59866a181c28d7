// ==========================================
// 空闲教室查询 - 查询引擎错误类型
// ==========================================
// 红线: 查询时刻严格校验，课表数据宽松容错
// 星期无法识别不是错误: 只是没有条目匹配
// ==========================================

use thiserror::Error;

/// 查询错误（整个查询中止，不返回部分报告）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("无效的查询时间: {0}（请使用 HH:MM AM/PM 或 HH:MM）")]
    InvalidQueryTime(String),
}

/// Result 类型别名
pub type QueryResult<T> = Result<T, QueryError>;
