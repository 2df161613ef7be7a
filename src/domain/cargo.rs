// ==========================================
// SR 提交自动整理器 - 货物领域模型
// ==========================================
// 职责: 舱单行、柜号/封号键、三类聚合视图、品名注释映射
// 红线: 只定义数据结构,不含解析与渲染逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

// ==========================================
// RawCargoRecord - 字段映射后的原始行
// ==========================================
// 用途: FieldMapper 输出,DataCleaner 输入
// 所有字段保持源文本,尚未做数值转换
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCargoRecord {
    pub bill_of_lading: Option<String>, // House B/L No
    pub container: Option<String>,      // 컨테이너 번호
    pub seal: Option<String>,           // Seal#1（可能为 "12345.0"）
    pub package_count: Option<String>,  // 포장갯수
    pub unit: Option<String>,           // 단위
    pub weight: Option<String>,         // Weight
    pub measure: Option<String>,        // Measure

    // 元信息
    pub row_number: usize,
}

// ==========================================
// CargoLine - 清洗后的舱单行
// ==========================================
// 加载后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoLine {
    pub bill_of_lading: String,
    pub container: String,
    pub seal: String, // 已去除小数后缀,缺失为 ""
    pub package_count: i64,
    pub unit: String,
    pub weight: f64,
    pub measure: f64,
}

impl CargoLine {
    pub fn key(&self) -> ContainerSealKey {
        ContainerSealKey::new(&self.container, &self.seal)
    }
}

// ==========================================
// ContainerSealKey - 柜号 + 封号
// ==========================================
// 排序: 先柜号,后封号（字典序）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContainerSealKey {
    pub container: String,
    pub seal: String,
}

impl ContainerSealKey {
    pub fn new(container: impl Into<String>, seal: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            seal: seal.into(),
        }
    }
}

impl fmt::Display for ContainerSealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.container, self.seal)
    }
}

// ==========================================
// ContainerTotal - 每柜合计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerTotal {
    pub package_count: i64,
    pub weight: f64,
    pub measure: f64,
}

impl ContainerTotal {
    pub fn add(&mut self, package_count: i64, weight: f64, measure: f64) {
        self.package_count = self.package_count.saturating_add(package_count);
        self.weight += weight;
        self.measure += measure;
    }
}

// ==========================================
// DescRow - 每柜每提单小计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescRow {
    pub key: ContainerSealKey,
    pub bill_of_lading: String,
    pub package_count: i64,
    pub unit: String, // 组内首次出现的单位
    pub weight: f64,
    pub measure: f64,
}

/// 每柜合计（按键排序）
pub type ContainerTotals = BTreeMap<ContainerSealKey, ContainerTotal>;

/// 每柜去重后的提单号集合（集合本身即字典序）
pub type MarkGroups = BTreeMap<ContainerSealKey, BTreeSet<String>>;

// ==========================================
// AnnotationMap - 提单号 → 注释行
// ==========================================
// 同一提单多行出现时按出现顺序追加
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMap {
    entries: HashMap<String, Vec<String>>,
}

impl AnnotationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<I>(&mut self, bill_of_lading: &str, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries
            .entry(bill_of_lading.to_string())
            .or_default()
            .extend(lines);
    }

    /// 查询提单的注释行,不存在时返回空切片
    pub fn lines_for(&self, bill_of_lading: &str) -> &[String] {
        self.entries
            .get(bill_of_lading)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
