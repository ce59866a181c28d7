// ==========================================
// 空闲教室查询 - 命令行主入口
// ==========================================
// 展示层: 加载课表 → 查询 → 渲染报告
// ==========================================

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use roomable::api::ApiError;
use roomable::app::{render_report, render_summary, AppState};
use roomable::config::ConfigManager;
use roomable::domain::AvailabilityReport;
use roomable::engine::QueryError;
use roomable::i18n::{self, t, t_with_args};
use roomable::importer::ImportError;
use roomable::logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "roomable")]
#[command(about = "RoomAble - find rooms that are free at a given day and time")]
#[command(version)]
struct Cli {
    /// 课表文件（.xlsx/.xls/.xlsm/.ods/.csv），缺省时加载默认课表
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// 配置文件（TOML）
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 以 JSON 输出报告
    #[arg(long, global = true)]
    json: bool,

    /// 以 JSON 格式输出日志（写到 stderr）
    #[arg(long, global = true)]
    log_json: bool,

    /// 界面语言（en / zh-CN）
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 查询指定星期与时刻的空闲教室
    Query {
        /// 星期（Mon / Tue / ... 或完整名称）
        #[arg(short, long)]
        day: String,

        /// 时刻（如 "10:30 AM" 或 "13:40"）
        #[arg(short, long)]
        time: String,
    },

    /// 按当前时间查询
    Now,

    /// 列出课表中出现过的教室统计
    Rooms,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "运行失败");
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = ConfigManager::load(cli.config.as_deref())
        .map_err(|e| anyhow!("配置加载失败: {}", e))?;
    i18n::set_locale(cli.locale.as_deref().unwrap_or(config.locale()));

    tracing::info!(version = roomable::VERSION, "{} 启动", roomable::APP_NAME);
    let state = AppState::new(config);

    // === 加载课表 ===
    let loaded = match &cli.file {
        Some(path) => state.room_api.load(path).map(Some),
        None => {
            let default_path = state.default_schedule_path();
            let result = state.room_api.load_default(&default_path);
            if let Ok(None) = result {
                eprintln!(
                    "{}",
                    t_with_args(
                        "load.default_missing",
                        &[("file", &default_path.display().to_string())]
                    )
                );
            }
            result
        }
    };

    match loaded {
        Ok(Some(index)) => {
            let rooms = index.rooms().len().to_string();
            let file = index.source.clone().unwrap_or_default();
            eprintln!(
                "{}",
                t_with_args("load.success", &[("rooms", &rooms), ("file", &file)])
            );
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("{}", describe_error(&e));
            return Ok(ExitCode::from(2));
        }
    }

    // === 执行命令 ===
    match cli.command {
        Command::Rooms => {
            let index = state.room_api.current_index()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&index.summary())?);
            } else {
                print!("{}", render_summary(&index.summary()));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Query { day, time } => {
            if !state.room_api.has_schedule() {
                eprintln!("{}", t("load.no_schedule"));
                return Ok(ExitCode::FAILURE);
            }
            match state.room_api.query(&day, &time) {
                Ok(report) => print_report(&report, cli.json),
                Err(e) => {
                    eprintln!("{}", describe_error(&e));
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Now => {
            if !state.room_api.has_schedule() {
                eprintln!("{}", t("load.no_schedule"));
                return Ok(ExitCode::FAILURE);
            }
            let report = state.room_api.query_now()?;
            print_report(&report, cli.json)
        }
    }
}

fn print_report(report: &AvailabilityReport, json: bool) -> anyhow::Result<ExitCode> {
    if json {
        let text = serde_json::to_string_pretty(report).context("报告序列化失败")?;
        println!("{}", text);
    } else {
        print!("{}", render_report(report));
    }
    Ok(ExitCode::SUCCESS)
}

// 将 API 错误转换为本地化提示
fn describe_error(err: &ApiError) -> String {
    match err {
        ApiError::Import(ImportError::HeaderNotFound { marker }) => {
            t_with_args("error.header_not_found", &[("marker", marker)])
        }
        ApiError::Import(other) => {
            t_with_args("error.load_failed", &[("reason", &other.to_string())])
        }
        ApiError::Query(QueryError::InvalidQueryTime(time)) => {
            t_with_args("error.invalid_time", &[("time", time)])
        }
        ApiError::InternalError(_) => err.to_string(),
    }
}
