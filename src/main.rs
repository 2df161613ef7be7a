// ==========================================
// SR 提交自动整理器 - 命令行入口
// ==========================================
// 子命令:
//   report <舱单> [--mapping 映射文件] ...  生成 SR 文本
//   log                                     查看上传记录
// 退出码: 致命错误非 0,且不输出任何报告
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sr_auto::config::{get_default_config_path, ConfigManager, ReportOptions};
use sr_auto::{logging, SrReportApi};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sr-auto")]
#[command(version, about = "SR 提交自动整理器: 按柜汇总舱单并生成 MARK/DESC 文本", long_about = None)]
struct Cli {
    /// 配置文件路径（默认: $SR_AUTO_CONFIG 或用户配置目录）
    #[arg(long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 生成 SR 文本报告
    Report {
        /// 舱单文件（.xlsx/.xls/.csv）
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// 品名/HS CODE 映射文件（首列提单号,第二列注释）
        #[arg(short = 'm', long = "mapping", value_name = "FILE")]
        mapping: Option<PathBuf>,

        /// PL 按 PKG 申报（COSCO 规则）
        #[arg(long = "force-pkg")]
        force_pkg: bool,

        /// HS CODE 去除 "." 分隔符
        #[arg(long = "strip-hs-dot")]
        strip_hs_dot: bool,

        /// 汇总块追加全部柜合计
        #[arg(long = "grand-total")]
        grand_total: bool,

        /// 映射文件注释列名（默认第二列）
        #[arg(long = "annotation-column", value_name = "NAME")]
        annotation_column: Option<String>,

        /// 输出目录（默认当前目录）
        #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// 报告输出到标准输出,不写文件
        #[arg(long = "stdout", conflicts_with = "json")]
        stdout: bool,

        /// 以 JSON 输出完整响应（含警告与统计）
        #[arg(long = "json")]
        json: bool,

        /// 不写入上传记录
        #[arg(long = "no-log")]
        no_log: bool,
    },

    /// 查看上传记录
    Log,
}

fn main() {
    logging::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(get_default_config_path);
    let config = ConfigManager::load(&config_path)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("配置文件加载失败: {}", config_path.display()))?;

    match cli.command {
        Commands::Report {
            manifest,
            mapping,
            force_pkg,
            strip_hs_dot,
            grand_total,
            annotation_column,
            output_dir,
            stdout,
            json,
            no_log,
        } => {
            let mut options = ReportOptions::from_config(&config);
            options.render.force_pallet_as_package |= force_pkg;
            options.render.include_grand_total |= grand_total;
            options.annotation.strip_hs_separator |= strip_hs_dot;
            if annotation_column.is_some() {
                options.annotation.annotation_column = annotation_column;
            }
            if no_log {
                options.record_uploads = false;
            }

            let api = SrReportApi::new(options);
            let response = api.generate_report(&manifest, mapping.as_deref())?;

            for warning in &response.warnings {
                eprintln!("警告: {}", warning);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if stdout {
                print!("{}", response.content);
            } else {
                let dir = output_dir.unwrap_or_else(|| PathBuf::from("."));
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("无法创建输出目录: {}", dir.display()))?;
                let out_path = dir.join(&response.file_name);
                std::fs::write(&out_path, &response.content)
                    .with_context(|| format!("无法写入报告: {}", out_path.display()))?;
                println!("{}", out_path.display());
            }
        }
        Commands::Log => {
            let api = SrReportApi::new(ReportOptions::from_config(&config));
            match api.read_upload_log()? {
                Some(content) => print!("{}", content),
                None => eprintln!("上传记录尚不存在"),
            }
        }
    }

    Ok(())
}
