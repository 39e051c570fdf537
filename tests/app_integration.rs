use std::fs;
use tradewatch::AppCommand;
use tradewatch::cli::select::SelectionChange;
use tradewatch::core::{AppConfig, builtin_exchanges};

mod test_utils {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub fn settings_file(content: Option<&str>) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("settings.json");
        if let Some(content) = content {
            fs::write(&path, content).expect("Failed to write settings file");
        }
        (temp_dir, path)
    }
}

#[test_log::test(tokio::test)]
async fn test_status_with_missing_settings() {
    let (_dir, path) = test_utils::settings_file(None);

    let result = tradewatch::run_command(
        AppCommand::Status {
            all: false,
            json: false,
        },
        Some(path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Status failed with: {:?}", result.err());
    // Reading settings never creates the file
    assert!(!path.exists());
}

#[test_log::test(tokio::test)]
async fn test_status_json_with_malformed_settings() {
    let (_dir, path) = test_utils::settings_file(Some("this is not json"));

    let result = tradewatch::run_command(
        AppCommand::Status {
            all: true,
            json: true,
        },
        Some(path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Status failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_select_round_trip() {
    let (_dir, path) = test_utils::settings_file(None);

    let change = SelectionChange {
        none: true,
        enable: vec![
            "Australian Securities Exchange (ASX)".to_string(),
            "New York Stock Exchange (NYSE)".to_string(),
        ],
        ..Default::default()
    };
    let result =
        tradewatch::run_command(AppCommand::Select(change), Some(path.to_str().unwrap())).await;
    assert!(result.is_ok(), "Select failed with: {:?}", result.err());

    let content = fs::read_to_string(&path).expect("settings written");
    assert!(content.contains("EnabledExchanges"));

    let reloaded = AppConfig::load_from_path(&path, builtin_exchanges());
    let mut names = reloaded.enabled_exchanges.clone();
    names.sort();
    assert_eq!(
        names,
        vec![
            "Australian Securities Exchange (ASX)".to_string(),
            "New York Stock Exchange (NYSE)".to_string(),
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_select_unknown_exchange_fails() {
    let (_dir, path) = test_utils::settings_file(None);

    let change = SelectionChange {
        enable: vec!["Moon Exchange".to_string()],
        ..Default::default()
    };
    let result =
        tradewatch::run_command(AppCommand::Select(change), Some(path.to_str().unwrap())).await;
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test_log::test(tokio::test)]
async fn test_watch_stops_after_count() {
    let (_dir, path) = test_utils::settings_file(Some(r#"{ "EnabledExchanges": ["Euronext Paris"] }"#));

    let result = tradewatch::run_command(
        AppCommand::Watch { count: Some(2) },
        Some(path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Watch failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_list() {
    let (_dir, path) = test_utils::settings_file(Some(r#"{ "EnabledExchanges": [] }"#));

    let result = tradewatch::run_command(AppCommand::List, Some(path.to_str().unwrap())).await;
    assert!(result.is_ok(), "List failed with: {:?}", result.err());
}
