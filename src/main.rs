use std::process::ExitCode;
use task_cli::commands::Cli;
use task_cli::libs::messages::{macros::is_debug_mode, Message};
use task_cli::msg_error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("task_cli=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    init_tracing();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
