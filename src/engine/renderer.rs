// ==========================================
// SR 提交自动整理器 - SR 文本报告渲染器
// ==========================================
// 输出结构（按行拼接,"\n" 连接）:
//   1. 汇总块: 每柜 "<柜号> / <封号>" + TOTAL 行 + 空行
//   2. <MARK>: 每柜提单号列表
//   3. <DESC>: 每柜每提单明细 + 注释行
// 规则: 仅一个柜时省略 MARK/DESC 中的柜标题; DESC 组间隔 3 个空行
// ==========================================

use crate::domain::cargo::{AnnotationMap, ContainerSealKey, ContainerTotal, DescRow};
use crate::engine::aggregator::AggregatedManifest;
use crate::engine::formatter::{format_number, format_unit};
use tracing::debug;

pub const MARK_MARKER: &str = "<MARK>";
pub const DESC_MARKER: &str = "<DESC>";

/// DESC 不同柜之间的空行数
const DESC_GROUP_GAP: usize = 3;

/// 渲染选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// PL 按 PKG 申报
    pub force_pallet_as_package: bool,
    /// 汇总块末尾追加全部柜合计
    pub include_grand_total: bool,
}

// ==========================================
// DescCursor - DESC 分组状态机
// ==========================================
// 状态: 上一个柜键 + 是否已输出过分组
#[derive(Debug, Default)]
struct DescCursor<'a> {
    previous: Option<&'a ContainerSealKey>,
}

impl<'a> DescCursor<'a> {
    /// 推进到下一行,返回分组切换情况
    fn advance(&mut self, key: &'a ContainerSealKey) -> GroupTransition {
        let transition = match self.previous {
            None => GroupTransition::First,
            Some(prev) if prev != key => GroupTransition::Next,
            Some(_) => GroupTransition::Same,
        };
        self.previous = Some(key);
        transition
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupTransition {
    First,
    Next,
    Same,
}

pub struct ReportRenderer {
    options: RenderOptions,
}

impl ReportRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// 渲染完整 SR 文本
    pub fn render(&self, aggregated: &AggregatedManifest, annotations: &AnnotationMap) -> String {
        let single = aggregated.is_single_container();

        let mut lines: Vec<String> = Vec::new();
        self.render_summary(aggregated, &mut lines);
        self.render_marks(aggregated, single, &mut lines);
        self.render_descriptions(&aggregated.desc_rows, annotations, single, &mut lines);

        debug!(lines = lines.len(), single, "报告渲染完成");
        lines.join("\n")
    }

    fn render_summary(&self, aggregated: &AggregatedManifest, lines: &mut Vec<String>) {
        for (key, total) in &aggregated.totals {
            lines.push(format!("{}\n{}\n", key, total_line("TOTAL", total)));
        }
        if self.options.include_grand_total && !aggregated.totals.is_empty() {
            lines.push(format!(
                "{}\n",
                total_line("GRAND TOTAL", &aggregated.grand_total())
            ));
        }
    }

    fn render_marks(&self, aggregated: &AggregatedManifest, single: bool, lines: &mut Vec<String>) {
        lines.push(MARK_MARKER.to_string());
        lines.push(String::new());

        for (key, bills) in &aggregated.marks {
            if !single {
                lines.push(key.to_string());
                lines.push(String::new());
            }
            lines.extend(bills.iter().cloned());
            lines.push(String::new());
        }
        lines.push(String::new());
    }

    fn render_descriptions(
        &self,
        rows: &[DescRow],
        annotations: &AnnotationMap,
        single: bool,
        lines: &mut Vec<String>,
    ) {
        lines.push(DESC_MARKER.to_string());
        lines.push(String::new());

        let mut cursor = DescCursor::default();
        for row in rows {
            let transition = cursor.advance(&row.key);
            if transition == GroupTransition::Next {
                lines.extend(std::iter::repeat(String::new()).take(DESC_GROUP_GAP));
            }
            if transition != GroupTransition::Same && !single {
                lines.push(row.key.to_string());
                lines.push(String::new());
            }

            lines.push(row.bill_of_lading.clone());
            lines.push(self.desc_line(row));
            lines.extend(annotations.lines_for(&row.bill_of_lading).iter().cloned());
            lines.push(String::new());
        }
    }

    fn desc_line(&self, row: &DescRow) -> String {
        format!(
            "{} {} / {} KGS / {} CBM",
            row.package_count,
            format_unit(
                &row.unit,
                row.package_count,
                self.options.force_pallet_as_package
            ),
            format_number(row.weight),
            format_number(row.measure)
        )
    }
}

fn total_line(label: &str, total: &ContainerTotal) -> String {
    format!(
        "{}: {} PKGS / {} KG / {} CBM",
        label,
        total.package_count,
        format_number(total.weight),
        format_number(total.measure)
    )
}
