// ==========================================
// SR 提交自动整理器 - 单位/数值格式化
// ==========================================
// 单位: PK → PKG, PL → PLT, CT → CTN; 已知代码且件数 > 1 时加 "S"
// 数值: 四舍五入到 3 位小数,去除末尾 0 与多余小数点
// ==========================================

/// 已知单位代码 → 显示名
const UNIT_TABLE: [(&str, &str); 3] = [("PK", "PKG"), ("PL", "PLT"), ("CT", "CTN")];

const PACKAGE_CODE: &str = "PK";
const PALLET_CODE: &str = "PL";

/// 格式化单位
///
/// # 参数
/// - unit: 原始单位代码（不区分大小写）
/// - count: 件数（决定是否复数）
/// - force_pallet_as_package: PL 按 PK 申报（部分船司要求）
///
/// 未知代码原样大写返回,且不加复数后缀
pub fn format_unit(unit: &str, count: i64, force_pallet_as_package: bool) -> String {
    let code = unit.trim().to_uppercase();

    let resolved = if force_pallet_as_package && code == PALLET_CODE {
        PACKAGE_CODE
    } else {
        code.as_str()
    };

    match UNIT_TABLE.iter().find(|(short, _)| *short == resolved) {
        Some((_, display)) if count > 1 => format!("{}S", display),
        Some((_, display)) => display.to_string(),
        None => code,
    }
}

/// 格式化重量/体积
///
/// 12.0 → "12", 12.340 → "12.34", 12.3456 → "12.346"
pub fn format_number(value: f64) -> String {
    // 按二进制精确值一次舍入
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');

    // -0.0004 之类会得到 "-0"
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
