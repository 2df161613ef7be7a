// ==========================================
// SR 提交自动整理器 - SR 报告 API
// ==========================================
// 职责: 串联 导入 → 聚合 → 渲染,并记录上传历史
// 流程: 舱单校验 → 上传记录 → 品名映射（可降级） → 舱单导入（致命） → 聚合 → 渲染
// 红线: 致命错误不返回任何部分报告
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReportOptions;
use crate::domain::cargo::AnnotationMap;
use crate::engine::{Aggregator, ReportRenderer};
use crate::importer::{AnnotationLoader, ManifestImporter};
use crate::perf::PerfGuard;
use crate::repository::{FileUploadLogRepository, UploadLogRepository};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument, warn};

/// 报告生成响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrReportResponse {
    /// 下载文件名（舱单文件名 + .txt）
    pub file_name: String,
    /// 报告全文
    pub content: String,
    /// 降级警告（品名映射失败、上传记录失败等）
    pub warnings: Vec<String>,
    /// 柜号/封号组合数
    pub container_count: usize,
    /// DESC 明细条数
    pub desc_row_count: usize,
}

pub struct SrReportApi {
    options: ReportOptions,
    importer: ManifestImporter,
    upload_log: Box<dyn UploadLogRepository>,
}

impl SrReportApi {
    pub fn new(options: ReportOptions) -> Self {
        let upload_log = Box::new(FileUploadLogRepository::new(
            options.upload_log_path.clone(),
            options.log_timestamps,
        ));
        Self::with_components(options, ManifestImporter::default(), upload_log)
    }

    pub fn with_components(
        options: ReportOptions,
        importer: ManifestImporter,
        upload_log: Box<dyn UploadLogRepository>,
    ) -> Self {
        Self {
            options,
            importer,
            upload_log,
        }
    }

    /// 生成 SR 报告
    ///
    /// # 参数
    /// - manifest_path: 舱单文件（.xlsx/.xls/.csv）
    /// - mapping_path: 可选的品名/HS CODE 映射文件
    ///
    /// # 返回
    /// - Ok(SrReportResponse): 报告全文 + 降级警告
    /// - Err: 舱单缺失/必需列缺失/解析失败
    #[instrument(skip(self, manifest_path, mapping_path), fields(manifest = %manifest_path.display()))]
    pub fn generate_report(
        &self,
        manifest_path: &Path,
        mapping_path: Option<&Path>,
    ) -> ApiResult<SrReportResponse> {
        let _perf = PerfGuard::new("generate_report");

        if !manifest_path.exists() {
            return Err(ApiError::FileNotFound(manifest_path.display().to_string()));
        }

        let mut warnings = Vec::new();

        // 品名映射（降级: 失败时为空映射）
        let annotations = match mapping_path {
            Some(path) => {
                self.record_upload(path, &mut warnings);
                self.load_annotations(path, &mut warnings)
            }
            None => AnnotationMap::new(),
        };

        self.record_upload(manifest_path, &mut warnings);

        // 舱单导入（致命）
        let lines = self.importer.import(manifest_path)?;

        let aggregated = Aggregator::aggregate(&lines);
        let content = ReportRenderer::new(self.options.render).render(&aggregated, &annotations);

        let response = SrReportResponse {
            file_name: report_file_name(manifest_path),
            content,
            warnings,
            container_count: aggregated.totals.len(),
            desc_row_count: aggregated.desc_rows.len(),
        };
        info!(
            file_name = %response.file_name,
            containers = response.container_count,
            desc_rows = response.desc_row_count,
            warnings = response.warnings.len(),
            "SR 报告生成完成"
        );
        Ok(response)
    }

    /// 读取上传记录全文
    pub fn read_upload_log(&self) -> ApiResult<Option<String>> {
        Ok(self.upload_log.read_all()?)
    }

    fn load_annotations(&self, path: &Path, warnings: &mut Vec<String>) -> AnnotationMap {
        let loader = AnnotationLoader::new(self.options.annotation.clone());
        match loader.load(path) {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "品名映射加载失败,使用空映射");
                warnings.push(e.to_string());
                AnnotationMap::new()
            }
        }
    }

    fn record_upload(&self, path: &Path, warnings: &mut Vec<String>) {
        if !self.options.record_uploads {
            return;
        }
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            return;
        };
        if let Err(e) = self.upload_log.record_upload(&file_name) {
            let err = ApiError::from(e);
            warn!(error = %err, "上传记录写入失败");
            warnings.push(err.to_string());
        }
    }
}

/// 下载文件名: 去掉扩展名后加 ".txt"
pub fn report_file_name(manifest_path: &Path) -> String {
    let stem = manifest_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "report".to_string());
    format!("{}.txt", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name(Path::new("/data/SR_0419.xlsx")),
            "SR_0419.txt"
        );
        assert_eq!(report_file_name(Path::new("manifest.v2.csv")), "manifest.v2.txt");
        assert_eq!(report_file_name(&PathBuf::from("/")), "report.txt");
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let mut options = ReportOptions::default();
        options.record_uploads = false;
        let api = SrReportApi::new(options);

        let result = api.generate_report(Path::new("/non/existent/manifest.xlsx"), None);

        assert!(matches!(result, Err(ApiError::FileNotFound(_))));
    }
}
