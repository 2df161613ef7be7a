// ==========================================
// 性能统计
// ==========================================
// PerfGuard 在 drop 时输出 elapsed_ms（target = "perf"）
// ==========================================

use std::time::Instant;

/// 性能统计 Guard：记录一次操作的耗时
///
/// 使用方式：
/// ```ignore
/// let _perf = sr_auto::perf::PerfGuard::new("generate_report");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms = self.elapsed_ms(),
            "done"
        );
    }
}
