use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{FilterKind, TaskFilter},
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Attribute to filter on
    #[arg(value_enum)]
    kind: FilterKind,
    /// completed|pending for status, low|medium|high for priority, exact label for category
    #[arg(required = true)]
    value: String,
}

pub fn cmd(args: FilterArgs, config: &Config) -> Result<()> {
    let filter = TaskFilter::from_kind(args.kind, &args.value)?;
    let tasks = Tasks::new(config.storage())?.filter(&filter)?;
    let label = filter_label(args.kind, &args.value);

    if tasks.is_empty() {
        msg_print!(Message::TasksNotFoundForFilter(label));
        return Ok(());
    }

    msg_print!(Message::FilterResultsHeader(label), true);
    View::tasks(&tasks)?;

    Ok(())
}

/// `kind=value` label for headers; the value is shown exactly as matched.
fn filter_label(kind: FilterKind, value: &str) -> String {
    format!("{}={}", kind, value)
}
