// ==========================================
// SR 提交自动整理器 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、默认值回退
// 存储: JSON 文件（扁平 key → value 对象）
// 规则: 文件不存在 → 全部使用默认值; 值格式错误 → warn + 默认值
// ==========================================

use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

/// 配置键
pub mod config_keys {
    /// PL 按 PKG 申报
    pub const FORCE_PALLET_AS_PACKAGE: &str = "force_pallet_as_package";
    /// HS CODE 去除 "." 分隔符
    pub const STRIP_HS_SEPARATOR: &str = "strip_hs_separator";
    /// 汇总块追加全部柜合计
    pub const INCLUDE_GRAND_TOTAL: &str = "include_grand_total";
    /// 品名映射文件的注释列名
    pub const ANNOTATION_COLUMN: &str = "annotation_column";
    /// 上传记录文件路径
    pub const UPLOAD_LOG_PATH: &str = "upload_log_path";
    /// 上传记录是否带时间戳
    pub const LOG_TIMESTAMPS: &str = "log_timestamps";
}

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "SR_AUTO_CONFIG";
/// 上传记录路径环境变量
pub const UPLOAD_LOG_ENV: &str = "SR_AUTO_UPLOAD_LOG";

const LOG_FILE_NAME: &str = "upload_log.txt";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 空配置（全部默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载配置
    ///
    /// # 返回
    /// - Ok: 文件不存在时返回空配置
    /// - Err: 文件存在但不是 JSON 对象
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(Self::new());
        }

        let raw = std::fs::read_to_string(path)?;
        let manager = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), keys = manager.values.len(), "配置加载完成");
        Ok(manager)
    }

    /// 从 JSON 文本解析配置（标量值统一转为字符串）
    pub fn from_json_str(raw: &str) -> Result<Self, Box<dyn Error>> {
        let parsed: Value = serde_json::from_str(raw)?;
        let object = parsed
            .as_object()
            .ok_or("配置文件顶层必须是 JSON 对象")?;

        let values = object
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    Value::Null => return None,
                    other => other.to_string(),
                };
                Some((key.clone(), text))
            })
            .collect();

        Ok(Self { values })
    }

    /// 按默认位置加载（环境变量优先）
    pub fn load_default() -> Result<Self, Box<dyn Error>> {
        Self::load(get_default_config_path())
    }

    /// 设置配置值（用于命令行覆写与测试）
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn get_config_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_config_value(key).unwrap_or(default)
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        let value = self.get_config_or_default(key, if default { "true" } else { "false" });
        match value.to_lowercase().as_str() {
            "1" | "true" | "yes" | "y" | "on" => true,
            "0" | "false" | "no" | "n" | "off" => false,
            _ => {
                tracing::warn!(config_key = key, raw_value = %value, "布尔配置格式错误,使用默认值");
                default
            }
        }
    }

    pub fn force_pallet_as_package(&self) -> bool {
        self.get_bool(config_keys::FORCE_PALLET_AS_PACKAGE, false)
    }

    pub fn strip_hs_separator(&self) -> bool {
        self.get_bool(config_keys::STRIP_HS_SEPARATOR, false)
    }

    pub fn include_grand_total(&self) -> bool {
        self.get_bool(config_keys::INCLUDE_GRAND_TOTAL, false)
    }

    pub fn log_timestamps(&self) -> bool {
        self.get_bool(config_keys::LOG_TIMESTAMPS, true)
    }

    pub fn annotation_column(&self) -> Option<String> {
        self.get_config_value(config_keys::ANNOTATION_COLUMN)
            .map(str::to_string)
    }

    /// 上传记录路径: 环境变量 > 配置文件 > 默认数据目录
    pub fn upload_log_path(&self) -> PathBuf {
        if let Some(path) = env_path(UPLOAD_LOG_ENV) {
            return path;
        }
        match self.get_config_value(config_keys::UPLOAD_LOG_PATH) {
            Some(path) => PathBuf::from(path),
            None => get_default_log_path(),
        }
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// 默认配置文件路径
///
/// `SR_AUTO_CONFIG` > `<config_dir>/sr-auto/config.json` > `./sr_auto.json`
pub fn get_default_config_path() -> PathBuf {
    if let Some(path) = env_path(CONFIG_PATH_ENV) {
        return path;
    }
    match dirs::config_dir() {
        Some(dir) => dir.join("sr-auto").join("config.json"),
        None => PathBuf::from("./sr_auto.json"),
    }
}

/// 默认上传记录路径
///
/// `<data_dir>/sr-auto/upload_log.txt`,取不到数据目录时用当前目录
pub fn get_default_log_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("sr-auto").join(LOG_FILE_NAME),
        None => PathBuf::from(".").join(LOG_FILE_NAME),
    }
}
