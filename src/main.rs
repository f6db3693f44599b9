use clap::Parser;
use menagerie::core::config::{self, CliOverrides, DEFAULT_LOG_FILE};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menagerie", about = "Searchable list of animals for the terminal")]
struct Args {
    /// Catalog ids to list at startup, e.g. `--initial 1,4,9`
    #[arg(short, long, value_delimiter = ',')]
    initial: Option<Vec<u32>>,

    /// Start on the list instead of the first animal's detail view
    #[arg(long)]
    no_detail: bool,

    /// Where to write the log file
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the level is narrowed once config is resolved
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        eprintln!("menagerie: {e}, using defaults");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            initial_ids: args.initial,
            no_detail: args.no_detail,
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!(
        "Menagerie starting up with initial ids {:?}",
        resolved.initial_ids
    );

    menagerie::tui::run(resolved)
}
