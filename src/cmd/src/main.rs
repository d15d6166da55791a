use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use datagen::config::Config;
use datagen::config::Data;
use datagen::config::Db;
use datagen::pipeline;
use datagen::pipeline::Params;
use tracing::metadata::LevelFilter;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::Error;
use crate::error::Result;

mod error;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
    #[arg(long, default_value = "10")]
    total_users: usize,
    #[arg(long, default_value = "10")]
    max_lines: i64,
    #[arg(long, default_value = "10")]
    events_per_user: usize,
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    #[arg(long, default_value = "result")]
    result_dir: PathBuf,
    #[arg(long, default_value = "db")]
    db_host: String,
    #[arg(long, default_value = "5432")]
    db_port: u16,
    #[arg(long, default_value = "postgres")]
    db_user: String,
    #[arg(long, default_value = "postgres")]
    db_password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::from(cli.log_level))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if !cli.data_dir.try_exists()? {
        return Err(Error::Internal(format!(
            "data dir {:?} doesn't exist",
            cli.data_dir
        )));
    }
    if !cli.result_dir.try_exists()? {
        return Err(Error::Internal(format!(
            "result dir {:?} doesn't exist",
            cli.result_dir
        )));
    }

    let cfg = Config {
        data: Data {
            input_dir: cli.data_dir,
            result_dir: cli.result_dir,
        },
        db: Db {
            host: cli.db_host,
            port: cli.db_port,
            user: cli.db_user,
            password: cli.db_password,
        },
    };
    let params = Params {
        total_users: cli.total_users,
        clickstream_max_lines: cli.max_lines,
        events_per_user: cli.events_per_user,
    };

    pipeline::run(&cfg, params).await?;

    Ok(())
}
