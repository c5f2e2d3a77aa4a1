use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tuido::core::store;
use tuido::tui;

#[derive(Parser)]
#[command(name = "tuido", version, about = "Terminal todo list")]
struct Args {
    /// Todo file to use instead of ~/.tuido/todos.json
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    init_logger();

    let path = match args.file {
        Some(path) => path,
        None => match store::default_data_file() {
            Ok(path) => path,
            Err(e) => {
                eprintln!("tuido: cannot determine a todo file location: {e}");
                std::process::exit(1);
            }
        },
    };
    info!("tuido starting up, todo file: {}", path.display());

    if let Err(e) = tui::run(path) {
        eprintln!("tuido: terminal error: {e}");
        std::process::exit(1);
    }
}

/// File logger next to the data file; a TUI cannot log to its own
/// terminal. Losing the log is never fatal.
fn init_logger() {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Some(home) = dirs::home_dir() {
        let dir = home.join(".tuido");
        let _ = std::fs::create_dir_all(&dir);
        if let Ok(log_file) = File::create(dir.join("tuido.log")) {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
    }
}
