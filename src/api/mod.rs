// ==========================================
// SR 提交自动整理器 - API 层
// ==========================================
// 职责: 对外业务接口（CLI 调用入口）
// ==========================================

pub mod error;
pub mod sr_report_api;

pub use error::{ApiError, ApiResult};
pub use sr_report_api::{report_file_name, SrReportApi, SrReportResponse};
