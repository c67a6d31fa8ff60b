// Unit tests for the environment step tables

mod common;

use workflow_processor::core::environment::{COMMON_STEP, process};
use workflow_processor::core::models::Environment;

#[test]
fn test_dev_steps_in_order() {
    let config = common::fixed_config(Environment::Dev);
    let result = process(&config);

    assert_eq!(
        result.steps_completed,
        vec!["dev_validation", "dev_debug_output", COMMON_STEP]
    );
    assert!(result.success);
    assert_eq!(result.results.get("dev_mode"), Some(&serde_json::json!(true)));
    assert_eq!(
        result.results.get("debug_level"),
        Some(&serde_json::json!("high"))
    );
}

#[test]
fn test_test_steps_in_order() {
    let config = common::fixed_config(Environment::Test);
    let result = process(&config);

    assert_eq!(
        result.steps_completed,
        vec!["test_validation", "test_performance_check", COMMON_STEP]
    );
    assert_eq!(
        result.results.get("test_mode"),
        Some(&serde_json::json!(true))
    );
    assert_eq!(
        result.results.get("performance_baseline"),
        Some(&serde_json::json!("100ms"))
    );
}

#[test]
fn test_prod_steps_in_order() {
    let config = common::fixed_config(Environment::Prod);
    let result = process(&config);

    assert_eq!(
        result.steps_completed,
        vec![
            "prod_validation",
            "prod_audit_log",
            "prod_backup",
            COMMON_STEP
        ]
    );
    assert_eq!(
        result.results.get("prod_mode"),
        Some(&serde_json::json!(true))
    );
    assert_eq!(
        result.results.get("audit_enabled"),
        Some(&serde_json::json!(true))
    );
    assert_eq!(
        result.results.get("backup_created"),
        Some(&serde_json::json!(true))
    );
}

#[test]
fn test_every_environment_ends_with_common_step() {
    for name in Environment::NAMES {
        let environment: Environment = name.parse().unwrap();
        let result = process(&common::fixed_config(environment));

        assert_eq!(result.environment, environment);
        assert_eq!(result.steps_completed.last().map(String::as_str), Some(COMMON_STEP));
        assert!(result.success);
    }
}

#[test]
fn test_common_metadata_carries_workflow_version() {
    let mut config = common::fixed_config(Environment::Dev);
    config.version = "3.1.4".to_string();
    let result = process(&config);

    assert_eq!(
        result.results.get("workflow_version"),
        Some(&serde_json::json!("3.1.4"))
    );
}
