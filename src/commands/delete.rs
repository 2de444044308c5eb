use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DeleteArgs, config: &Config) -> Result<()> {
    let mut tasks = Tasks::new(config.storage())?;

    let Some(task) = tasks.get_by_id(&args.id)? else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if tasks.delete(&task.id)? {
        msg_success!(Message::TaskDeleted);
        msg_print!(Message::TaskTitle(task.title));
    } else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }

    Ok(())
}
