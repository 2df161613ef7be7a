// ==========================================
// SR 提交自动整理器 - 报告生成选项
// ==========================================
// 职责: 由 ConfigManager 解析出一次运行所需的全部选项
// 覆写顺序: 命令行 > 配置文件 > 默认值
// ==========================================

use crate::config::config_manager::ConfigManager;
use crate::engine::renderer::RenderOptions;
use crate::importer::annotation_loader::AnnotationOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub render: RenderOptions,
    pub annotation: AnnotationOptions,
    /// 是否写入上传记录
    pub record_uploads: bool,
    pub upload_log_path: PathBuf,
    pub log_timestamps: bool,
}

impl ReportOptions {
    pub fn from_config(config: &ConfigManager) -> Self {
        Self {
            render: RenderOptions {
                force_pallet_as_package: config.force_pallet_as_package(),
                include_grand_total: config.include_grand_total(),
            },
            annotation: AnnotationOptions {
                strip_hs_separator: config.strip_hs_separator(),
                annotation_column: config.annotation_column(),
            },
            record_uploads: true,
            upload_log_path: config.upload_log_path(),
            log_timestamps: config.log_timestamps(),
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&ConfigManager::new())
    }
}
