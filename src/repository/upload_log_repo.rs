// ==========================================
// SR 提交自动整理器 - 上传记录 Repository
// ==========================================
// 存储: UTF-8 文本文件,每行一条 "<YYYY-MM-DD HH:MM> - <文件名>"
// 规则: 只追加; 与已有行完全相同的记录不重复写入
// 红线: 单用户交互场景,不保证跨进程并发原子性
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{Local, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

// ==========================================
// UploadLogRepository Trait
// ==========================================
// 实现者: FileUploadLogRepository
pub trait UploadLogRepository: Send + Sync {
    /// 记录一次上传
    ///
    /// # 返回
    /// - Ok(true): 新写入
    /// - Ok(false): 相同记录已存在,未写入
    fn record_upload(&self, file_name: &str) -> RepositoryResult<bool>;

    /// 读取全部记录,日志文件不存在时返回 None
    fn read_all(&self) -> RepositoryResult<Option<String>>;
}

pub struct FileUploadLogRepository {
    path: PathBuf,
    timestamps: bool,
}

impl FileUploadLogRepository {
    pub fn new(path: impl Into<PathBuf>, timestamps: bool) -> Self {
        Self {
            path: path.into(),
            timestamps,
        }
    }

    /// 组装一条记录（不含换行）
    pub fn format_entry(file_name: &str, timestamp: Option<NaiveDateTime>) -> String {
        match timestamp {
            Some(ts) => format!("{} - {}", ts.format("%Y-%m-%d %H:%M"), file_name),
            None => file_name.to_string(),
        }
    }

    /// 幂等追加一条记录
    pub fn append_entry(&self, entry: &str) -> RepositoryResult<bool> {
        let existing = self.read_all()?.unwrap_or_default();
        if existing.lines().any(|line| line == entry) {
            debug!(entry, "上传记录已存在,跳过");
            return Ok(false);
        }
        // 已有内容末尾缺换行时先补齐,避免与最后一行粘连
        let separator = if existing.is_empty() || existing.ends_with('\n') {
            ""
        } else {
            "\n"
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;
        writeln!(file, "{}{}", separator, entry).map_err(|e| self.write_error(e))?;

        info!(entry, path = %self.path.display(), "上传记录已写入");
        Ok(true)
    }

    fn write_error(&self, err: std::io::Error) -> RepositoryError {
        RepositoryError::LogWriteError {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl UploadLogRepository for FileUploadLogRepository {
    fn record_upload(&self, file_name: &str) -> RepositoryResult<bool> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(RepositoryError::FieldValueError {
                field: "file_name".to_string(),
                message: "文件名为空".to_string(),
            });
        }

        let timestamp = self.timestamps.then(|| Local::now().naive_local());
        self.append_entry(&Self::format_entry(file_name, timestamp))
    }

    fn read_all(&self) -> RepositoryResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepositoryError::LogReadError {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo(dir: &TempDir, timestamps: bool) -> FileUploadLogRepository {
        FileUploadLogRepository::new(dir.path().join("logs").join("upload_log.txt"), timestamps)
    }

    #[test]
    fn test_format_entry() {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 5, 59)
            .unwrap();
        assert_eq!(
            FileUploadLogRepository::format_entry("manifest.xlsx", Some(ts)),
            "2026-10-19 09:05 - manifest.xlsx"
        );
        assert_eq!(
            FileUploadLogRepository::format_entry("manifest.xlsx", None),
            "manifest.xlsx"
        );
    }

    #[test]
    fn test_record_upload_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir, false);

        assert!(repo.record_upload("manifest.xlsx").unwrap());
        assert!(!repo.record_upload("manifest.xlsx").unwrap());
        assert!(repo.record_upload("extra.xlsx").unwrap());

        let content = repo.read_all().unwrap().unwrap();
        assert_eq!(content, "manifest.xlsx\nextra.xlsx\n");
    }

    #[test]
    fn test_append_after_missing_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir, false);
        fs::create_dir_all(dir.path().join("logs")).unwrap();
        fs::write(dir.path().join("logs").join("upload_log.txt"), "old.xlsx").unwrap();

        assert!(repo.record_upload("manifest.xlsx").unwrap());
        assert!(!repo.record_upload("manifest.xlsx").unwrap());
        assert!(!repo.record_upload("old.xlsx").unwrap());

        let content = repo.read_all().unwrap().unwrap();
        assert_eq!(content, "old.xlsx\nmanifest.xlsx\n");
    }

    #[test]
    fn test_read_all_missing_log() {
        let dir = TempDir::new().unwrap();
        assert_eq!(repo(&dir, true).read_all().unwrap(), None);
    }

    #[test]
    fn test_record_upload_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        assert!(repo(&dir, true).record_upload("  ").is_err());
    }

    #[test]
    fn test_timestamped_entry_written() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir, true);

        repo.record_upload("manifest.xlsx").unwrap();

        let content = repo.read_all().unwrap().unwrap();
        assert!(content.trim_end().ends_with(" - manifest.xlsx"));
    }
}
