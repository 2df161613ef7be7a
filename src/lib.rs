// ==========================================
// SR 提交自动整理器 - 核心库
// ==========================================
// 输入: 舱单表格（每行一条货物）+ 可选品名/HS CODE 映射表
// 输出: SR 提交用定长格式文本（汇总 / <MARK> / <DESC>）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部表格
pub mod importer;

// 引擎层 - 聚合与渲染
pub mod engine;

// 配置层 - 运行选项
pub mod config;

// 数据仓储层 - 上传记录
pub mod repository;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    AnnotationMap, CargoLine, ContainerSealKey, ContainerTotal, DescRow, RawCargoRecord,
};

pub use engine::{
    format_number, format_unit, AggregatedManifest, Aggregator, RenderOptions, ReportRenderer,
};

pub use importer::{AnnotationLoader, AnnotationOptions, ImportError, ManifestImporter};

pub use config::{ConfigManager, ReportOptions};

pub use api::{ApiError, SrReportApi, SrReportResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
