// ==========================================
// SR 提交自动整理器 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 文件解析 → 字段映射 → 数据清洗
// ==========================================

use crate::domain::cargo::{CargoLine, RawCargoRecord};
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawTable - 解析后的原始表
// ==========================================
// headers 保留源文件列顺序（品名映射依赖列位置）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<HashMap<String, String>>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表（表头 + HashMap<列名, 值> 行记录）
    ///
    /// # 返回
    /// - Ok(RawTable): 已跳过完全空白的行
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: ManifestFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 校验必需列是否齐全
    ///
    /// # 返回
    /// - Err(MissingColumns): 一次性列出所有缺失列
    fn validate_headers(&self, headers: &[String]) -> ImportResult<()>;

    /// 将原始行记录映射为 RawCargoRecord
    fn map_to_raw_cargo(&self, row: &HashMap<String, String>, row_number: usize)
        -> RawCargoRecord;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: CargoDataCleaner
// 规则: 尽力转换,单行异常不阻断（数值缺失/非法 → 0）
pub trait DataCleaner: Send + Sync {
    /// 清洗文本字段（TRIM,缺失 → ""）
    fn clean_text(&self, value: Option<&str>) -> String;

    /// 标准化封号: 取 "." 之前的部分
    fn normalize_seal(&self, value: Option<&str>) -> String;

    /// 解析件数（非负整数）
    fn coerce_count(&self, value: Option<&str>, row_number: usize) -> i64;

    /// 解析重量/体积（非负小数）
    fn coerce_decimal(&self, value: Option<&str>, field: &str, row_number: usize) -> f64;

    /// 将原始行清洗为 CargoLine
    fn clean_record(&self, record: RawCargoRecord) -> CargoLine;
}
