use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    #[arg(required = true)]
    query: String,
}

pub fn cmd(args: SearchArgs, config: &Config) -> Result<()> {
    let tasks = Tasks::new(config.storage())?.search(&args.query)?;

    if tasks.is_empty() {
        msg_print!(Message::TasksNotFoundForQuery(args.query));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(args.query), true);
    View::tasks(&tasks)?;

    Ok(())
}
