use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use quiz_convert::utils::logging;
use quiz_convert::Config;
use tracing::error;

/// 将纯文本题目导出转换为题库 JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 原始题目文本文件
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出 JSON 文件名
    #[arg(short, long)]
    output: Option<String>,

    /// 输出目录
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// 题库标题
    #[arg(short, long)]
    title: Option<String>,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// 加载配置文件（如有），再用命令行参数覆盖
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.input_file = input;
        }
        if let Some(output) = self.output {
            config.output_file = output;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        config.verbose_logging |= self.verbose;

        Ok(config)
    }
}

fn main() {
    let args = Args::parse();
    let verbose = args.verbose;

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init(verbose);
            error!("❌ 错误: {:#}", e);
            std::process::exit(1);
        }
    };

    logging::init(config.verbose_logging);

    if let Err(e) = quiz_convert::convert(&config) {
        error!("❌ 错误 ({}阶段): {}", e.kind(), e);
        std::process::exit(1);
    }
}
