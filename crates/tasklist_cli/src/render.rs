use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};
use tasklist_core::error::AppError;
use tasklist_core::task_list::TaskList;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

pub const TABLE_TITLE: &str = "List of Tasks";

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: usize,
    #[tabled(rename = "Complete")]
    complete: &'static str,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Finished")]
    finished: String,
}

fn display_time(value: OffsetDateTime) -> Result<String, AppError> {
    value
        .format(format_description!(
            "[weekday], [day]-[month repr:short]-[year repr:last_two] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"
        ))
        .map_err(|err| AppError::invalid_data(err.to_string()))
}

fn rfc3339(value: OffsetDateTime) -> Result<String, AppError> {
    value
        .format(&Rfc3339)
        .map_err(|err| AppError::invalid_data(err.to_string()))
}

/// Renders the list as a titled table, one row per task.
pub fn render_table(list: &TaskList) -> Result<String, AppError> {
    let mut rows = Vec::with_capacity(list.len());
    for (id, task) in list.entries() {
        let (complete, finished) = match task.finished_at() {
            Some(at) if task.completed => ("X", display_time(at)?),
            _ if task.completed => ("X", "-".to_string()),
            _ => ("_", "-".to_string()),
        };
        rows.push(TaskRow {
            id,
            complete,
            task: task.description.clone(),
            created: display_time(task.created_at)?,
            finished,
        });
    }

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Columns::new(1..2), Alignment::center());

    Ok(format!("{TABLE_TITLE}\n{table}"))
}

pub fn render_json(list: &TaskList) -> Result<serde_json::Value, AppError> {
    let mut payload = Vec::with_capacity(list.len());
    for (id, task) in list.entries() {
        let completed_at = match task.finished_at() {
            Some(at) => Some(rfc3339(at)?),
            None => None,
        };
        payload.push(serde_json::json!({
            "id": id,
            "completed": task.completed,
            "description": task.description,
            "created_at": rfc3339(task.created_at)?,
            "completed_at": completed_at,
        }));
    }
    Ok(serde_json::Value::Array(payload))
}
