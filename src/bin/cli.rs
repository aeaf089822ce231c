//! adjgraph CLI 工具
//!
//! 交互式命令行界面

use adjgraph::cli::{execute_command, execute_script, CommandResult, Printer};
use adjgraph::{GraphConfig, Representation};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "adjgraph 命令行工具")]
struct Args {
    /// 图表示: list, matrix
    #[arg(short, long, default_value = "list")]
    repr: Representation,

    /// 矩阵容量（顶点数）
    #[arg(short, long)]
    capacity: Option<usize>,

    /// 有向图
    #[arg(short, long)]
    directed: bool,

    /// 带权图
    #[arg(short, long)]
    weighted: bool,

    /// JSON 配置文件，优先于上面的参数
    #[arg(long)]
    config: Option<PathBuf>,

    /// 执行命令后退出（多条命令用 ; 分隔）
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => GraphConfig::from_json_file(path)
            .with_context(|| format!("无法加载配置 {}", path.display()))?,
        None => GraphConfig {
            representation: args.repr,
            capacity: args.capacity,
            directed: args.directed,
            weighted: args.weighted,
        },
    };
    let mut graph = config.build().context("无法构造图")?;
    let printer = Printer::default();

    // 单次执行模式
    if let Some(script) = args.execute {
        let mut failed = false;
        for result in execute_script(&script, &mut graph, &printer) {
            failed |= matches!(result, CommandResult::Error(_));
            report(result);
        }
        if failed {
            anyhow::bail!("命令执行失败");
        }
        return Ok(());
    }

    println!("adjgraph CLI - 邻接表/邻接矩阵图");
    println!("================================");
    println!(
        "表示: {}，有向: {}，带权: {}",
        config.representation, config.directed, config.weighted
    );
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    // 交互模式
    let stdin = io::stdin();
    loop {
        print!("adjgraph> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if report(execute_command(&line, &mut graph, &printer)) {
            break;
        }
    }

    println!("再见!");
    Ok(())
}

/// 输出命令结果，返回是否需要退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(msg) => {
            println!("{}", msg.trim_end());
            false
        }
        CommandResult::Error(err) => {
            eprintln!("错误: {}", err);
            false
        }
    }
}
