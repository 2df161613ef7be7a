// ==========================================
// SR 提交自动整理器 - 引擎层
// ==========================================
// 职责: 聚合 → 格式化 → 渲染
// 红线: 纯内存计算,不做文件 I/O
// ==========================================

pub mod aggregator;
pub mod formatter;
pub mod renderer;

// 重导出核心类型
pub use aggregator::{AggregatedManifest, Aggregator};
pub use formatter::{format_number, format_unit};
pub use renderer::{RenderOptions, ReportRenderer, DESC_MARKER, MARK_MARKER};
