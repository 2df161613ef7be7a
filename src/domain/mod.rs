// ==========================================
// SR 提交自动整理器 - 领域模型层
// ==========================================
// 职责: 定义舱单行、聚合视图、注释映射
// 红线: 不含文件读取逻辑,不含渲染逻辑
// ==========================================

pub mod cargo;

// 重导出核心类型
pub use cargo::{
    AnnotationMap, CargoLine, ContainerSealKey, ContainerTotal, ContainerTotals, DescRow,
    MarkGroups, RawCargoRecord,
};
