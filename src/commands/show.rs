use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, view::View},
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: ShowArgs, config: &Config) -> Result<()> {
    match Tasks::new(config.storage())?.get_by_id(&args.id)? {
        Some(task) => View::task_details(&task)?,
        None => msg_error!(Message::TaskNotFoundWithId(args.id)),
    }

    Ok(())
}
