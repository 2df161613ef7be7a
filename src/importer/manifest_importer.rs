// ==========================================
// SR 提交自动整理器 - 舱单导入器
// ==========================================
// 职责: 整合导入流程,从文件到 CargoLine 列表
// 流程: 解析 → 必需列校验 → 映射 → 清洗
// 红线: 必需列缺失直接失败,不产生部分结果
// ==========================================

use crate::domain::cargo::CargoLine;
use crate::importer::data_cleaner::CargoDataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::ManifestFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{DataCleaner, FieldMapper, FileParser};
use std::path::Path;
use tracing::{debug, error, info, instrument};

pub struct ManifestImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    data_cleaner: Box<dyn DataCleaner>,
}

impl Default for ManifestImporter {
    fn default() -> Self {
        Self::new(
            Box::new(UniversalFileParser),
            Box::new(ManifestFieldMapper),
            Box::new(CargoDataCleaner),
        )
    }
}

impl ManifestImporter {
    pub fn new(
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
    ) -> Self {
        Self {
            file_parser,
            field_mapper,
            data_cleaner,
        }
    }

    /// 从舱单文件加载清洗后的货物行
    ///
    /// # 返回
    /// - Ok(Vec<CargoLine>): 按源文件行顺序
    /// - Err(MissingColumns): 必需列缺失（致命）
    /// - Err: 文件读取/解析错误
    #[instrument(skip(self, file_path), fields(file = %file_path.as_ref().display()))]
    pub fn import<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<CargoLine>> {
        debug!("步骤 1: 解析文件");
        let table = self
            .file_parser
            .parse_to_raw_table(file_path.as_ref())
            .map_err(|e| {
                error!(error = %e, "文件解析失败");
                e
            })?;
        info!(total_rows = table.records.len(), "文件解析完成");

        debug!("步骤 2: 必需列校验");
        self.field_mapper.validate_headers(&table.headers)?;

        debug!("步骤 3: 字段映射与清洗");
        let lines: Vec<CargoLine> = table
            .records
            .iter()
            .enumerate()
            .map(|(idx, row)| self.field_mapper.map_to_raw_cargo(row, idx + 1))
            .map(|record| self.data_cleaner.clean_record(record))
            .collect();
        info!(cargo_lines = lines.len(), "舱单导入完成");

        Ok(lines)
    }
}
