// ==========================================
// SR 提交自动整理器 - 导入层
// ==========================================
// 职责: 外部表格读取,生成 CargoLine / AnnotationMap
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod annotation_loader;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod manifest_importer;

// 重导出核心类型
pub use annotation_loader::{normalize_annotation_line, AnnotationLoader, AnnotationOptions};
pub use data_cleaner::CargoDataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{manifest_columns, ManifestFieldMapper};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use manifest_importer::ManifestImporter;

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, FieldMapper, FileParser, RawTable};
