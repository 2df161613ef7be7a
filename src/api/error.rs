// ==========================================
// SR 提交自动整理器 - API层错误类型
// ==========================================
// 职责: 将导入层/仓储层错误转换为用户可读的错误消息
// 分级: 致命错误中止报告生成; 降级问题以 warnings 返回,不走错误通道
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    /// 舱单必需列缺失,不生成任何报告内容
    #[error("舱单缺少必需列: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    // ==========================================
    // 导入/存储错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("上传记录失败: {0}")]
    UploadLogError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(path) => ApiError::FileNotFound(path),
            ImportError::UnsupportedFormat(_) => ApiError::InvalidInput(err.to_string()),
            ImportError::MissingColumns { columns } => ApiError::MissingColumns(columns),
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            ImportError::Other(e) => ApiError::Other(e),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("字段{}错误: {}", field, message))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(e) => ApiError::Other(e),
            other => ApiError::UploadLogError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
