use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{NewTask, Priority},
    },
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Optional description
    description: Option<String>,
    /// Task priority
    #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
    priority: Priority,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    due: Option<String>,
    /// Category label
    #[arg(short, long)]
    category: Option<String>,
}

impl From<AddArgs> for NewTask {
    fn from(args: AddArgs) -> Self {
        NewTask {
            title: args.title,
            description: args.description,
            priority: args.priority,
            due_date: args.due,
            category: args.category,
        }
    }
}

pub fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let mut tasks = Tasks::new(config.storage())?;
    let task = tasks.add(args.into())?;

    msg_success!(Message::TaskCreated);
    msg_print!(Message::TaskId(task.id.clone()));
    msg_print!(Message::TaskTitle(task.title.clone()));
    if let Some(description) = &task.description {
        msg_print!(Message::TaskDescription(description.clone()));
    }

    Ok(())
}
