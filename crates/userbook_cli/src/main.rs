//! Application entry point.
//!
//! # Responsibility
//! - Open the user store next to the working directory.
//! - Seed, patch and print the resulting user list once.
//!
//! # Invariants
//! - Any startup failure is fatal: reported on stderr, exit status 1.

use log::error;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use userbook_core::{
    default_log_level, init_logging, run_startup, StoreConfig, UserListView, UserStore,
};

const DB_FILE_NAME: &str = "userbook.db";
const LOG_DIR_NAME: &str = "logs";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("userbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let work_dir: PathBuf = std::env::current_dir()?;
    init_logging(default_log_level(), work_dir.join(LOG_DIR_NAME))?;

    let store = UserStore::open(StoreConfig::new(work_dir.join(DB_FILE_NAME)))?;
    let view = UserListView::from_rows(run_startup(&store)?);

    let stdout = io::stdout();
    view.render(&mut stdout.lock())?;
    Ok(())
}
