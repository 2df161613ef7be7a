// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 生成舱单/品名映射 CSV 夹具、构造测试用 API
// ==========================================

#![allow(dead_code)]

use sr_auto::config::ReportOptions;
use sr_auto::SrReportApi;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 舱单标准表头
pub const MANIFEST_HEADER: &str = "House B/L No,컨테이너 번호,Seal#1,포장갯수,단위,Weight,Measure";

/// 在临时目录写入 CSV 文件
///
/// # 返回
/// - PathBuf: 文件路径（TempDir 需由调用方保持存活）
pub fn write_csv(dir: &TempDir, name: &str, lines: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content)?;
    Ok(path)
}

/// 写入带标准表头的舱单
pub fn write_manifest(dir: &TempDir, name: &str, rows: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    let mut lines = vec![MANIFEST_HEADER];
    lines.extend_from_slice(rows);
    write_csv(dir, name, &lines)
}

/// 上传记录写入临时目录的测试选项
pub fn test_options(dir: &TempDir) -> ReportOptions {
    let mut options = ReportOptions::default();
    options.upload_log_path = dir.path().join("upload_log.txt");
    options.log_timestamps = false;
    options
}

pub fn create_test_api(dir: &TempDir) -> SrReportApi {
    SrReportApi::new(test_options(dir))
}

pub fn upload_log_path(dir: &TempDir) -> PathBuf {
    dir.path().join("upload_log.txt")
}

pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}
