// ==========================================
// 空闲教室查询 - API层错误类型
// ==========================================
// 职责: 汇总导入层与引擎层错误，供展示层统一处理
// ==========================================

use crate::engine::error::QueryError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 加载错误（课表不可用）
    // ==========================================
    #[error("课表加载失败: {0}")]
    Import(#[from] ImportError),

    // ==========================================
    // 查询错误（用户输入需更正）
    // ==========================================
    #[error("查询失败: {0}")]
    Query(#[from] QueryError),

    #[error("内部错误: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 是否为表头缺失（文件结构不可用）
    pub fn is_header_not_found(&self) -> bool {
        matches!(self, ApiError::Import(ImportError::HeaderNotFound { .. }))
    }

    /// 是否为用户输入错误
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ApiError::Query(_))
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_import_error() {
        let err: ApiError = ImportError::HeaderNotFound {
            marker: "Day /Time".to_string(),
        }
        .into();
        assert!(err.is_header_not_found());
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("Day /Time"));
    }

    #[test]
    fn test_from_query_error() {
        let err: ApiError = QueryError::InvalidQueryTime("25:99".to_string()).into();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("25:99"));
    }
}
