use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: CompleteArgs, config: &Config) -> Result<()> {
    match Tasks::new(config.storage())?.complete(&args.id)? {
        Some(task) => {
            msg_success!(Message::TaskCompleted);
            msg_print!(Message::TaskTitle(task.title));
        }
        None => msg_error!(Message::TaskNotFoundWithId(args.id)),
    }

    Ok(())
}
