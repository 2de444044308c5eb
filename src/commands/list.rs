use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, summary::SummaryCalculator, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd(config: &Config) -> Result<()> {
    let tasks = Tasks::new(config.storage())?.get_all()?;

    if tasks.is_empty() {
        msg_print!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    msg_print!(View::summary(&tasks.summarize()), true);

    Ok(())
}
