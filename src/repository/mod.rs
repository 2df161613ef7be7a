// ==========================================
// SR 提交自动整理器 - 数据仓储层
// ==========================================
// 职责: 跨次运行唯一的持久化: 只追加的上传记录
// ==========================================

pub mod error;
pub mod upload_log_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use upload_log_repo::{FileUploadLogRepository, UploadLogRepository};
