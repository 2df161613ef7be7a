// ==========================================
// SR 提交自动整理器 - 聚合引擎
// ==========================================
// 输入: 清洗后的 CargoLine 列表
// 输出: 每柜合计 / 每柜提单集合 / 每柜每提单小计
// 红线: 纯函数,每次聚合返回新的集合,不保留可变分组状态
// ==========================================

use crate::domain::cargo::{
    CargoLine, ContainerSealKey, ContainerTotal, ContainerTotals, DescRow, MarkGroups,
};
use std::collections::BTreeMap;
use tracing::debug;

// ==========================================
// AggregatedManifest - 三类聚合视图
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedManifest {
    pub totals: ContainerTotals,
    pub marks: MarkGroups,
    pub desc_rows: Vec<DescRow>,
}

impl AggregatedManifest {
    /// 是否仅有一个柜号/封号组合（控制标题行省略）
    pub fn is_single_container(&self) -> bool {
        self.totals.len() == 1
    }

    /// 所有柜合计
    pub fn grand_total(&self) -> ContainerTotal {
        self.totals
            .values()
            .fold(ContainerTotal::default(), |mut acc, t| {
                acc.add(t.package_count, t.weight, t.measure);
                acc
            })
    }
}

pub struct Aggregator;

impl Aggregator {
    /// 执行全部聚合
    pub fn aggregate(lines: &[CargoLine]) -> AggregatedManifest {
        let aggregated = AggregatedManifest {
            totals: Self::container_totals(lines),
            marks: Self::mark_groups(lines),
            desc_rows: Self::desc_rows(lines),
        };
        debug!(
            containers = aggregated.totals.len(),
            desc_rows = aggregated.desc_rows.len(),
            "聚合完成"
        );
        aggregated
    }

    /// 按 (柜号, 封号) 汇总件数/重量/体积
    pub fn container_totals(lines: &[CargoLine]) -> ContainerTotals {
        let mut totals = ContainerTotals::new();
        for line in lines {
            totals
                .entry(line.key())
                .or_default()
                .add(line.package_count, line.weight, line.measure);
        }
        totals
    }

    /// 按 (柜号, 封号) 收集去重后的提单号
    pub fn mark_groups(lines: &[CargoLine]) -> MarkGroups {
        let mut marks = MarkGroups::new();
        for line in lines {
            marks
                .entry(line.key())
                .or_default()
                .insert(line.bill_of_lading.clone());
        }
        marks
    }

    /// 按 (柜号, 封号, 提单号) 小计,单位取组内首次出现值
    ///
    /// 结果按 (柜号, 封号, 提单号) 排序
    pub fn desc_rows(lines: &[CargoLine]) -> Vec<DescRow> {
        let mut groups: BTreeMap<(ContainerSealKey, String), DescRow> = BTreeMap::new();
        for line in lines {
            let key = line.key();
            let row = groups
                .entry((key.clone(), line.bill_of_lading.clone()))
                .or_insert_with(|| DescRow {
                    key,
                    bill_of_lading: line.bill_of_lading.clone(),
                    package_count: 0,
                    unit: line.unit.clone(),
                    weight: 0.0,
                    measure: 0.0,
                });
            row.package_count = row.package_count.saturating_add(line.package_count);
            row.weight += line.weight;
            row.measure += line.measure;
        }
        groups.into_values().collect()
    }
}
