#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskCompleted,
    TaskDeleted,
    TaskNotFoundWithId(String), // id
    TaskId(String),             // id
    TaskTitle(String),          // title
    TaskDescription(String),    // description
    TasksHeader,
    TasksNotFound,
    TasksNotFoundForQuery(String),  // query
    TasksNotFoundForFilter(String), // kind=value
    SearchResultsHeader(String),    // query
    FilterResultsHeader(String),    // kind=value

    // === STORAGE MESSAGES ===
    StorageLocation(String), // path

    // === GENERAL MESSAGES ===
    CommandFailed(String), // error message
}
