// ==========================================
// SR 提交自动整理器 - 配置层
// ==========================================
// 职责: 系统配置管理,支持配置文件 + 环境变量 + 命令行覆写
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod report_options;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, get_default_config_path, get_default_log_path, ConfigManager, CONFIG_PATH_ENV,
    UPLOAD_LOG_ENV,
};
pub use report_options::ReportOptions;
