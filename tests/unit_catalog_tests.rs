// Unit tests for the dataset catalog, using a canned-output executor

use std::sync::Mutex;

use workflow_processor::core::catalog::DatasetCatalog;
use workflow_processor::core::execution::CommandExecutor;
use workflow_processor::core::models::ExecutionResult;

/// Test double that answers every command with the same canned output and
/// records the commands it was asked to run.
struct StaticExecutor {
    output: String,
    succeed: bool,
    commands: Mutex<Vec<String>>,
}

impl StaticExecutor {
    fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            succeed: true,
            commands: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            output: String::new(),
            succeed: false,
            commands: Mutex::new(Vec::new()),
        }
    }

    fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandExecutor for StaticExecutor {
    async fn execute(&self, command: &str) -> ExecutionResult {
        self.commands.lock().unwrap().push(command.to_string());
        ExecutionResult {
            command: command.to_string(),
            exit_code: Some(if self.succeed { 0 } else { 8 }),
            stdout: self.output.clone(),
            stderr: String::new(),
            succeeded: self.succeed,
        }
    }
}

const LEVEL_LISTING: &str = "\
NONVSAM ------- USER.TEST.DATA
NONVSAM ------- USER.TEST.DATA
NONVSAM ------- USER.TEST.CONFIG
0LISTING FROM CATALOG -- CATALOG.MASTER
";

const ENTRY_LISTING: &str = "\
NONVSAM ------- USER.TEST.DATA
     ATTRIBUTES
       RECFM-FB        LRECL-80
";

#[tokio::test]
async fn test_list_level_issues_listcat_and_preserves_order() {
    let catalog = DatasetCatalog::new(StaticExecutor::new(LEVEL_LISTING));
    let names = catalog.list_level("USER").await;

    assert_eq!(names, vec!["USER.TEST.DATA", "USER.TEST.CONFIG"]);
    assert_eq!(
        catalog.executor().commands(),
        vec!["LISTCAT LEVEL('USER') ALL"]
    );
}

#[tokio::test]
async fn test_list_level_degrades_to_empty_on_command_failure() {
    let catalog = DatasetCatalog::new(StaticExecutor::failing());
    assert!(catalog.list_level("USER").await.is_empty());
}

#[tokio::test]
async fn test_list_matching_returns_sorted_names() {
    let catalog = DatasetCatalog::new(StaticExecutor::new(LEVEL_LISTING));
    let names = catalog.list_matching("USER").await;

    assert_eq!(
        names,
        vec!["CATALOG.MASTER", "USER.TEST.CONFIG", "USER.TEST.DATA"]
    );
}

#[tokio::test]
async fn test_exists_requires_the_name_to_be_echoed() {
    let catalog = DatasetCatalog::new(StaticExecutor::new(ENTRY_LISTING));
    assert!(catalog.exists("USER.TEST.DATA").await);
    assert!(!catalog.exists("USER.OTHER.DATA").await);
}

#[tokio::test]
async fn test_inspect_extracts_attributes() {
    let catalog = DatasetCatalog::new(StaticExecutor::new(ENTRY_LISTING));
    let record = catalog.inspect("USER.TEST.DATA").await;

    assert!(record.exists);
    assert_eq!(record.name, "USER.TEST.DATA");
    assert_eq!(
        record.attributes.get("type").map(String::as_str),
        Some("NONVSAM")
    );
    assert_eq!(
        record.attributes.get("record_format").map(String::as_str),
        Some("FB")
    );
    assert_eq!(
        record.attributes.get("record_length").map(String::as_str),
        Some("80")
    );
}

#[tokio::test]
async fn test_inspect_unechoed_dataset_is_missing() {
    let catalog = DatasetCatalog::new(StaticExecutor::new(ENTRY_LISTING));
    let record = catalog.inspect("USER.NOT.THERE").await;

    assert!(!record.exists);
    assert!(record.attributes.is_empty());
}

#[tokio::test]
async fn test_inspect_failed_command_is_missing() {
    let catalog = DatasetCatalog::new(StaticExecutor::failing());
    let record = catalog.inspect("USER.TEST.DATA").await;

    assert!(!record.exists);
}

#[tokio::test]
async fn test_list_and_inspect_inspects_every_listed_dataset() {
    // The canned output serves both the LEVEL and the ENT commands: it names
    // both datasets and carries one attribute block.
    let listing = "\
NONVSAM ------- USER.TEST.DATA
NONVSAM ------- USER.TEST.CONFIG
       RECFM-VB        LRECL-255
";
    let catalog = DatasetCatalog::new(StaticExecutor::new(listing));
    let records = catalog.list_and_inspect("USER").await;

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.exists));
    assert_eq!(records[0].name, "USER.TEST.DATA");
    assert_eq!(records[1].name, "USER.TEST.CONFIG");
    assert_eq!(
        records[0].attributes.get("record_format").map(String::as_str),
        Some("VB")
    );

    let commands = catalog.executor().commands();
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], "LISTCAT LEVEL('USER') ALL");
    assert_eq!(commands[1], "LISTCAT ENT('USER.TEST.DATA') ALL");
    assert_eq!(commands[2], "LISTCAT ENT('USER.TEST.CONFIG') ALL");
}
