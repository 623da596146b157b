use clap::{Parser, builder::styling};
use employee_etl::{
    Config, DirectoryExtractor, EmployeeCleaner, EtlError, Pipeline, TableLoader,
};
use eyre::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Employee ETL: gather CSV, TSV, JSON and XML employee files into one SQL table
#[derive(Parser)]
#[command(name = "emplod", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source configuration from
    #[arg(short, long, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long)]
    debug: bool,

    /// Directory of input files (overrides DATA_FOLDER)
    #[arg(short, long)]
    data_folder: Option<PathBuf>,

    /// Destination table (overrides DEST_TABLE)
    #[arg(short, long)]
    table: Option<String>,

    /// Extract and clean, but do not touch the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match dotenvy::from_filename(&cli.env) {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", cli.env)),
    }

    let mut config = Config::from_env()?;
    if let Some(folder) = cli.data_folder {
        config = config.with_data_folder(folder);
    }
    if let Some(table) = cli.table {
        config = config.with_table(table)?;
    }

    init_logger(config.log_file.as_deref(), cli.debug)?;
    log::debug!("Configuration: {:?}", config);

    let pipeline = Pipeline::new(
        DirectoryExtractor::new(&config.data_folder),
        EmployeeCleaner::new(),
        TableLoader::new(config.database.connection_url()?, &config.table)?,
    );

    let result = if cli.dry_run {
        pipeline.dry_run().await.map(|cleaned| cleaned.records.len())
    } else {
        pipeline.run().await
    };

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            let etl_error = e.downcast_ref::<EtlError>();
            // Load failures are already logged by the pipeline.
            if !matches!(etl_error, Some(EtlError::Load(_))) {
                log::error!("Pipeline aborted: {:#}", e);
            }
            Ok(ExitCode::from(etl_error.map(EtlError::exit_code).unwrap_or(1)))
        }
    }
}

/// Send log records to `log_file` when set, stderr otherwise
fn init_logger(log_file: Option<&Path>, debug: bool) -> Result<()> {
    let log_level = match debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            buf.timestamp_millis(),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}
