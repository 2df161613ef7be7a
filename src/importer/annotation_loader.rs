// ==========================================
// SR 提交自动整理器 - 品名/HS CODE 映射加载器
// ==========================================
// 输入: 首列 = 提单号, 第二列（或指定列）= 注释文本（可多行）
// 输出: AnnotationMap（提单号 → 注释行,按出现顺序累加）
// 降级: 缺少注释列时返回 AnnotationColumnMissing,由调用方回退为空映射
// ==========================================

use crate::domain::cargo::AnnotationMap;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FileParser, RawTable};
use std::path::Path;
use tracing::{debug, info, warn};

/// HS CODE 行可识别的前缀标签（不区分大小写）
const HS_CODE_LABELS: [&str; 5] = ["HS CODE", "HS-CODE", "HSCODE", "H.S. CODE", "H.S CODE"];

/// 映射加载选项
#[derive(Debug, Clone, Default)]
pub struct AnnotationOptions {
    /// 去除 HS CODE 中的 "." 分隔符
    pub strip_hs_separator: bool,
    /// 指定注释列名（未指定时取第二列）
    pub annotation_column: Option<String>,
}

pub struct AnnotationLoader {
    file_parser: Box<dyn FileParser>,
    options: AnnotationOptions,
}

impl AnnotationLoader {
    pub fn new(options: AnnotationOptions) -> Self {
        Self::with_parser(Box::new(UniversalFileParser), options)
    }

    pub fn with_parser(file_parser: Box<dyn FileParser>, options: AnnotationOptions) -> Self {
        Self {
            file_parser,
            options,
        }
    }

    /// 从映射文件加载注释
    pub fn load<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<AnnotationMap> {
        let path = file_path.as_ref();
        let table = self.file_parser.parse_to_raw_table(path)?;
        self.build_map(&table, &path.display().to_string())
    }

    /// 由已解析的表构建注释映射
    pub fn build_map(&self, table: &RawTable, source: &str) -> ImportResult<AnnotationMap> {
        let id_column = table
            .headers
            .first()
            .ok_or_else(|| ImportError::AnnotationColumnMissing(source.to_string()))?;
        let info_column = self.resolve_annotation_column(table, source)?;
        debug!(id_column = %id_column, info_column = %info_column, "映射列已确定");

        let mut map = AnnotationMap::new();
        for row in &table.records {
            let bill_of_lading = row.get(id_column).map(|v| v.trim()).unwrap_or("");
            let info = row.get(info_column).map(|v| v.trim()).unwrap_or("");
            if bill_of_lading.is_empty() || info.is_empty() {
                continue;
            }

            let lines: Vec<String> = info
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| normalize_annotation_line(line, self.options.strip_hs_separator))
                .collect();
            map.append(bill_of_lading, lines);
        }

        info!(entries = map.len(), "品名映射加载完成");
        Ok(map)
    }

    fn resolve_annotation_column<'t>(
        &self,
        table: &'t RawTable,
        source: &str,
    ) -> ImportResult<&'t String> {
        let Some(wanted) = self.options.annotation_column.as_deref() else {
            return table
                .headers
                .get(1)
                .ok_or_else(|| ImportError::AnnotationColumnMissing(source.to_string()));
        };

        // 指定列不存在时不回退到第二列,避免无关列混入 DESC
        table
            .headers
            .iter()
            .skip(1)
            .find(|h| h.as_str() == wanted)
            .ok_or_else(|| {
                warn!(column = wanted, "指定的注释列不存在");
                ImportError::AnnotationColumnMissing(format!("{} ({})", source, wanted))
            })
    }
}

/// 规范化单行注释
///
/// HS CODE 行（带标签或纯数字/小数）统一为 `HS CODE <code>`,
/// 其余行原样保留。
pub fn normalize_annotation_line(line: &str, strip_separator: bool) -> String {
    let code = match hs_code_remainder(line) {
        Some(rest) => extract_code(rest),
        None if is_bare_code(line) => Some(line.to_string()),
        None => None,
    };

    match code {
        Some(code) if strip_separator => format!("HS CODE {}", code.replace('.', "")),
        Some(code) => format!("HS CODE {}", code),
        None => line.to_string(),
    }
}

/// 带标签的 HS CODE 行,返回标签之后的部分
fn hs_code_remainder(line: &str) -> Option<&str> {
    HS_CODE_LABELS.iter().find_map(|label| {
        let head = line.get(..label.len())?;
        if head.eq_ignore_ascii_case(label) {
            line.get(label.len()..)
        } else {
            None
        }
    })
}

/// 取第一个数字开始的 "数字/." 连续片段
fn extract_code(rest: &str) -> Option<String> {
    let start = rest.find(|c: char| c.is_ascii_digit())?;
    let code: String = rest[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Some(code.trim_end_matches('.').to_string())
}

fn is_bare_code(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit()) && line.chars().all(|c| c.is_ascii_digit() || c == '.')
}
