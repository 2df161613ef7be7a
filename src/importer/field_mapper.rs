// ==========================================
// SR 提交自动整理器 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 标准字段映射 + 必需列校验
// 标准列: House B/L No / 컨테이너 번호 / Seal#1 / 포장갯수 / 단위 / Weight / Measure
// ==========================================

use crate::domain::cargo::RawCargoRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

/// 舱单标准列名
pub mod manifest_columns {
    pub const BILL_OF_LADING: &str = "House B/L No";
    pub const CONTAINER: &str = "컨테이너 번호";
    pub const SEAL: &str = "Seal#1";
    pub const PACKAGE_COUNT: &str = "포장갯수";
    pub const UNIT: &str = "단위";
    pub const WEIGHT: &str = "Weight";
    pub const MEASURE: &str = "Measure";

    /// 必需列（按报告字段顺序）
    pub const REQUIRED: [&str; 7] = [
        BILL_OF_LADING,
        CONTAINER,
        SEAL,
        PACKAGE_COUNT,
        UNIT,
        WEIGHT,
        MEASURE,
    ];
}

pub struct ManifestFieldMapper;

impl FieldMapperTrait for ManifestFieldMapper {
    fn validate_headers(&self, headers: &[String]) -> ImportResult<()> {
        let missing: Vec<String> = manifest_columns::REQUIRED
            .iter()
            .filter(|key| {
                !self
                    .aliases(key)
                    .iter()
                    .any(|alias| headers.iter().any(|h| h == alias))
            })
            .map(|key| key.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns { columns: missing })
        }
    }

    fn map_to_raw_cargo(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> RawCargoRecord {
        use manifest_columns::*;

        RawCargoRecord {
            bill_of_lading: self.get_string(row, BILL_OF_LADING),
            container: self.get_string(row, CONTAINER),
            seal: self.get_string(row, SEAL),
            package_count: self.get_string(row, PACKAGE_COUNT),
            unit: self.get_string(row, UNIT),
            weight: self.get_string(row, WEIGHT),
            measure: self.get_string(row, MEASURE),
            row_number,
        }
    }
}

impl ManifestFieldMapper {
    /// 标准列名的可接受别名（首个为标准名）
    fn aliases(&self, key: &str) -> Vec<&'static str> {
        use manifest_columns::*;

        match key {
            BILL_OF_LADING => vec![BILL_OF_LADING, "HBL No", "HBL"],
            CONTAINER => vec![CONTAINER, "Container No", "Container"],
            SEAL => vec![SEAL, "Seal No", "Seal"],
            PACKAGE_COUNT => vec![PACKAGE_COUNT, "Packages", "PKGS"],
            UNIT => vec![UNIT, "Unit"],
            WEIGHT => vec![WEIGHT, "Weight (KG)"],
            MEASURE => vec![MEASURE, "Measure (CBM)", "CBM"],
            _ => vec![],
        }
    }

    /// 提取字符串字段,按别名顺序取第一个非空值
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        for alias in self.aliases(key) {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}
