// ==========================================
// SR 提交自动整理器 - 数据清洗器实现
// ==========================================
// 职责: TRIM / 封号标准化 / 数值宽松转换
// 规则: 非法或空白数值按 0 计,记录 warn,不阻断导入
// ==========================================

use crate::domain::cargo::{CargoLine, RawCargoRecord};
use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;
use tracing::warn;

pub struct CargoDataCleaner;

impl DataCleanerTrait for CargoDataCleaner {
    fn clean_text(&self, value: Option<&str>) -> String {
        value.map(str::trim).unwrap_or("").to_string()
    }

    fn normalize_seal(&self, value: Option<&str>) -> String {
        let text = self.clean_text(value);
        text.split('.').next().unwrap_or_default().to_string()
    }

    fn coerce_count(&self, value: Option<&str>, row_number: usize) -> i64 {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return 0;
        };

        // Excel 数值单元格可能读成 "10" 或 "10.0"
        let parsed = raw
            .parse::<i64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64));

        match parsed {
            Some(n) if n >= 0 => n,
            _ => {
                warn!(row_number, value = raw, "件数无法解析,按 0 计");
                0
            }
        }
    }

    fn coerce_decimal(&self, value: Option<&str>, field: &str, row_number: usize) -> f64 {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return 0.0;
        };

        match raw.replace(',', "").parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => v,
            _ => {
                warn!(row_number, field, value = raw, "数值无法解析,按 0 计");
                0.0
            }
        }
    }

    fn clean_record(&self, record: RawCargoRecord) -> CargoLine {
        let row = record.row_number;
        CargoLine {
            bill_of_lading: self.clean_text(record.bill_of_lading.as_deref()),
            container: self.clean_text(record.container.as_deref()),
            seal: self.normalize_seal(record.seal.as_deref()),
            package_count: self.coerce_count(record.package_count.as_deref(), row),
            unit: self.clean_text(record.unit.as_deref()),
            weight: self.coerce_decimal(record.weight.as_deref(), "Weight", row),
            measure: self.coerce_decimal(record.measure.as_deref(), "Measure", row),
        }
    }
}
