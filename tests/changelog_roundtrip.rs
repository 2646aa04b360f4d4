//! Change log persistence through real files

use std::fs;

use chrono::NaiveDate;
use insta::assert_snapshot;
use tempfile::TempDir;

use dtrlog::changelog::{ChangeLogError, ChangeLogParser, ChangeLogWriter};
use dtrlog::model::{Activity, BuildHandle, ChangeLogSet};

fn activity(
    version: &str,
    day: u32,
    principal: &str,
    description: &str,
    resources: &[&str],
) -> Activity {
    Activity {
        version: version.to_string(),
        check_in_time: NaiveDate::from_ymd_opt(2011, 5, day)
            .unwrap()
            .and_hms_opt(16, 42, 7)
            .unwrap(),
        principal: principal.to_string(),
        description: description.to_string(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
    }
}

fn sample_change_log() -> ChangeLogSet {
    ChangeLogSet::from_activities(
        BuildHandle::new("example.com_TRACK_dev", 12),
        vec![
            activity(
                "8f2e1a90c4d311e0",
                18,
                "D012345",
                "Fix <null> check & logging",
                &["/ws/TRACK/example.com_APP/dev/active/DCs/example.com/app/_comp/src/App.java"],
            ),
            activity(
                "3b6c0d10c3f211e0",
                17,
                "D067890",
                "",
                &[
                    "/ws/TRACK/example.com_APP/dev/active/DCs/example.com/app/_comp/.dcdef",
                    "/ws/TRACK/example.com_APP/dev/active/DCs/example.com/app/_comp/.dcdef",
                ],
            ),
        ],
    )
}

#[test]
fn persisted_change_log() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("changelog.xml");

    ChangeLogWriter::create(&path)
        .unwrap()
        .write(&sample_change_log())
        .unwrap();

    assert_snapshot!("persisted_change_log", fs::read_to_string(&path).unwrap());
}

#[test]
fn change_log_file_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("changelog.xml");
    let original = sample_change_log();

    ChangeLogWriter::create(&path).unwrap().write(&original).unwrap();
    let parsed = ChangeLogParser::parse(original.build().clone(), &path).unwrap();

    assert_eq!(parsed, original);
    let versions: Vec<&str> = parsed.iter().map(|e| e.version.as_str()).collect();
    assert_eq!(versions, vec!["3b6c0d10c3f211e0", "8f2e1a90c4d311e0"]);
    assert_eq!(parsed.entries()[1].message, "Fix <null> check & logging");
    assert_eq!(parsed.entries()[0].affected_paths.len(), 2);
}

#[test]
fn empty_change_log_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("changelog.xml");
    let build = BuildHandle::new("example.com_TRACK_dev", 13);

    ChangeLogWriter::create(&path)
        .unwrap()
        .write(&ChangeLogSet::new(build.clone()))
        .unwrap();
    let parsed = ChangeLogParser::parse(build, &path).unwrap();

    assert!(parsed.is_empty_set());
}

#[test]
fn missing_change_log_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("missing.xml");

    match ChangeLogParser::parse(BuildHandle::new("track", 1), &path) {
        Err(ChangeLogError::Open { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Open error, got {other:?}"),
    }
}

#[test]
fn malformed_change_log_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("changelog.xml");
    fs::write(&path, "<changelog><changeset version=\"1\"><date>2011-05-17").unwrap();

    assert!(ChangeLogParser::parse(BuildHandle::new("track", 1), &path).is_err());
}

#[test]
fn second_write_fails_and_leaves_file_intact() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("changelog.xml");
    let change_log = sample_change_log();

    let mut writer = ChangeLogWriter::create(&path).unwrap();
    writer.write(&change_log).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    assert!(matches!(
        writer.write(&change_log),
        Err(ChangeLogError::WriterClosed)
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}
