use std::sync::{Arc, Mutex};

use assert_cmd::Command;
use async_trait::async_trait;
use predicates::prelude::*;
use smartedit_export::adapters::LocalFsAdapter;
use smartedit_export::ports::{FsPort, LogPort};
use smartedit_export::*;
use tempfile::TempDir;

/// Test utilities for export runs
mod test_utils {
    use super::*;

    /// Log port that keeps every warning it receives
    #[derive(Default)]
    pub struct RecordingLog {
        pub warnings: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LogPort for RecordingLog {
        async fn info(&self, _message: &str) {}

        async fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }

        async fn error(&self, _message: &str) {}

        async fn debug(&self, _message: &str) {}
    }

    /// Interactor writing to the real filesystem, with its log port
    pub fn interactor() -> (ExportInteractor, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        let interactor = ExportInteractor::new(
            Arc::new(LocalFsAdapter::new()) as Arc<dyn FsPort>,
            Arc::clone(&log) as Arc<dyn LogPort>,
        );
        (interactor, log)
    }

    /// Write an empty placeholder for a source video
    pub fn touch(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, b"").unwrap();
        path.to_string_lossy().to_string()
    }

    pub fn edl_settings(dialect: EdlDialect) -> ExportSettings {
        ExportSettings {
            dialect,
            sequence_name: "Sequence".to_string(),
            ..ExportSettings::default()
        }
    }

    pub const SCRIPT_JSON: &str = r#"{
        "title": "Demo",
        "origin": "generated",
        "segments": [
            {"start_time": 0.0, "end_time": 3.0, "content": "Intro", "video_index": 0},
            {"start_time": 5.0, "end_time": 8.0, "content": "Body", "source_index": 0}
        ]
    }"#;
}

use test_utils::*;

#[tokio::test]
async fn test_export_two_segment_scenario() {
    let dir = TempDir::new().unwrap();
    let source = touch(&dir, "clip.mp4");
    let output = dir.path().join("out").join("cut.edl");
    let script = GeneratedScript::from_segments(vec![
        Segment::new(0.0, 3.0, "Intro", 0),
        Segment::new(5.0, 8.0, "Body", 0),
    ]);

    let (interactor, log) = interactor();
    let request = ExportRequest::new(
        script,
        vec![source],
        output.to_string_lossy().to_string(),
        edl_settings(EdlDialect::Standard),
    )
    .unwrap();
    let response = interactor.execute(request).await.unwrap();

    assert!(response.success);
    assert_eq!(response.edit_count, 2);
    assert!(response.warnings.is_empty());
    assert!(log.warnings.lock().unwrap().is_empty());

    let edl = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = edl.lines().collect();
    assert_eq!(lines[0], "TITLE: Sequence");
    assert_eq!(lines[1], "FCM: NON-DROP FRAME");
    assert_eq!(
        lines[2],
        "001  CLIP     AA/V  C        00:00:00:00 00:00:03:00 00:00:00:00 00:00:03:00 "
    );
    assert_eq!(lines[3], "* FROM CLIP NAME: clip.mp4");
    assert_eq!(lines[4], "* SEGMENT: Intro");
    assert_eq!(
        lines[5],
        "002  CLIP     AA/V  C        00:00:05:00 00:00:08:00 00:00:03:00 00:00:06:00 "
    );
    assert_eq!(lines[7], "* SEGMENT: Body");
}

#[tokio::test]
async fn test_export_all_discarded_falls_back() {
    let dir = TempDir::new().unwrap();
    let source = touch(&dir, "clip.mp4");
    let output = dir.path().join("fallback.edl");
    let script = GeneratedScript::from_segments(vec![
        Segment::new(0.0, 1.0, "a", 0).with_keep(false),
        Segment::new(1.0, 2.0, "b", 0).with_keep(false),
        Segment::new(2.0, 3.0, "c", 0).with_keep(false),
    ]);

    let (interactor, log) = interactor();
    let request = ExportRequest::new(
        script,
        vec![source],
        output.to_string_lossy().to_string(),
        edl_settings(EdlDialect::Standard),
    )
    .unwrap();
    let response = interactor.execute(request).await.unwrap();

    assert!(response.used_fallback);
    assert_eq!(response.edit_count, 3);
    assert_eq!(log.warnings.lock().unwrap().len(), 1);

    let edl = std::fs::read_to_string(&output).unwrap();
    assert_eq!(edl.matches("* FROM CLIP NAME:").count(), 3);
}

#[tokio::test]
async fn test_export_out_of_range_source_index() {
    let dir = TempDir::new().unwrap();
    let first = touch(&dir, "first.mp4");
    let second = touch(&dir, "second.mp4");
    let output = dir.path().join("range.edl");
    let script = GeneratedScript::from_segments(vec![Segment::new(0.0, 2.0, "Lost", 5)]);

    let (interactor, _log) = interactor();
    let request = ExportRequest::new(
        script,
        vec![first, second],
        output.to_string_lossy().to_string(),
        edl_settings(EdlDialect::Standard),
    )
    .unwrap();
    let response = interactor.execute(request).await.unwrap();

    assert_eq!(response.edit_count, 1);
    assert!(response.warnings.iter().any(|w| matches!(
        w,
        ExportWarning::SourceIndexOutOfRange { index: 5, .. }
    )));

    let edl = std::fs::read_to_string(&output).unwrap();
    assert!(edl.contains("001  FIRST    AA/V"));
    assert!(edl.contains("* FROM CLIP NAME: first.mp4"));
}

#[tokio::test]
async fn test_export_cmx_two_sources() {
    let dir = TempDir::new().unwrap();
    let first = touch(&dir, "a.mov");
    let second = touch(&dir, "b.mov");
    let output = dir.path().join("cmx.edl");
    let script = GeneratedScript::from_segments(vec![
        Segment::new(0.0, 1.0, "", 0),
        Segment::new(0.0, 1.0, "", 1),
    ]);

    let (interactor, _log) = interactor();
    let request = ExportRequest::new(
        script,
        vec![first, second],
        output.to_string_lossy().to_string(),
        edl_settings(EdlDialect::Cmx3600),
    )
    .unwrap();
    interactor.execute(request).await.unwrap();

    let edl = std::fs::read_to_string(&output).unwrap();
    assert!(edl.contains("001  AX       AA/V"));
    assert!(edl.contains("002  BX       AA/V"));
    assert!(!edl.contains("* SEGMENT:"));
}

#[tokio::test]
async fn test_export_missing_source_warns() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing.edl");
    let missing = dir.path().join("gone.mp4").to_string_lossy().to_string();
    let script = GeneratedScript::from_segments(vec![Segment::new(0.0, 1.0, "x", 0)]);

    let (interactor, log) = interactor();
    let request = ExportRequest::new(
        script,
        vec![missing.clone()],
        output.to_string_lossy().to_string(),
        edl_settings(EdlDialect::Standard),
    )
    .unwrap();
    let response = interactor.execute(request).await.unwrap();

    assert_eq!(
        response.warnings,
        vec![ExportWarning::SourceMissing { path: missing }]
    );
    assert_eq!(log.warnings.lock().unwrap().len(), 1);
    assert!(output.exists());
}

#[tokio::test]
async fn test_export_uncheckable_source_only_warns() {
    let dir = TempDir::new().unwrap();
    let blocker = touch(&dir, "notadir.txt");
    let source = format!("{}/clip.mp4", blocker);
    let output = dir.path().join("blocked.edl");
    let script = GeneratedScript::from_segments(vec![Segment::new(0.0, 1.0, "x", 0)]);

    let (interactor, log) = interactor();
    let request = ExportRequest::new(
        script,
        vec![source.clone()],
        output.to_string_lossy().to_string(),
        edl_settings(EdlDialect::Standard),
    )
    .unwrap();
    let response = interactor.execute(request).await.unwrap();

    assert_eq!(
        response.warnings,
        vec![ExportWarning::SourceMissing { path: source }]
    );
    assert_eq!(log.warnings.lock().unwrap().len(), 1);
    let edl = std::fs::read_to_string(&output).unwrap();
    assert!(edl.contains("001  CLIP     AA/V"));
}

#[tokio::test]
async fn test_export_errors() {
    let dir = TempDir::new().unwrap();
    let source = touch(&dir, "clip.mp4");
    let output = dir.path().join("never.edl").to_string_lossy().to_string();
    let (interactor, _log) = interactor();

    let no_sources = ExportRequest::new(
        GeneratedScript::from_segments(vec![Segment::new(0.0, 1.0, "", 0)]),
        Vec::new(),
        output.clone(),
        ExportSettings::default(),
    )
    .unwrap();
    assert_eq!(
        interactor.execute(no_sources).await.unwrap_err(),
        DomainError::NoSourcesProvided
    );

    let no_segments = ExportRequest::new(
        GeneratedScript::default(),
        vec![source],
        output.clone(),
        ExportSettings::default(),
    )
    .unwrap();
    assert_eq!(
        interactor.execute(no_segments).await.unwrap_err(),
        DomainError::NoValidSegments
    );
    assert!(!std::path::Path::new(&output).exists());

    assert!(ExportRequest::new(
        GeneratedScript::default(),
        Vec::new(),
        "  ".to_string(),
        ExportSettings::default(),
    )
    .is_err());
}

#[tokio::test]
async fn test_export_xml_uses_absolute_uris() {
    let dir = TempDir::new().unwrap();
    let source = touch(&dir, "clip one.mp4");
    let output = dir.path().join("cut.xml");
    let script = GeneratedScript::from_segments(vec![Segment::new(0.0, 2.0, "A & B", 0)]);

    let (interactor, _log) = interactor();
    let settings = ExportSettings {
        format: ExportFormat::Xml,
        ..edl_settings(EdlDialect::Standard)
    };
    let request = ExportRequest::new(
        script,
        vec![source],
        output.to_string_lossy().to_string(),
        settings,
    )
    .unwrap();
    interactor.execute(request).await.unwrap();

    let xml = std::fs::read_to_string(&output).unwrap();
    assert!(xml.contains("<xmeml"));
    assert!(xml.contains("<pathurl>file://"));
    assert!(xml.contains("clip%20one.mp4"));
    assert!(xml.contains("<name>clip one.mp4</name>"));
}

#[test]
fn test_cli_export_command() {
    let dir = TempDir::new().unwrap();
    let source = touch(&dir, "interview.mp4");
    let script_path = dir.path().join("script.json");
    std::fs::write(&script_path, SCRIPT_JSON).unwrap();
    let output = dir.path().join("interview_cut.edl");

    Command::cargo_bin("smartedit")
        .unwrap()
        .arg("export")
        .arg("--script")
        .arg(&script_path)
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .arg("--clip-name")
        .arg("0=Interview A")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edits: 2"));

    let edl = std::fs::read_to_string(&output).unwrap();
    assert!(edl.starts_with("TITLE: interview_cut\nFCM: NON-DROP FRAME\n"));
    assert!(edl.contains("001  INTERVIE AA/V"));
    assert!(edl.contains("* FROM CLIP NAME: Interview A"));
}

#[test]
fn test_cli_export_json_script() {
    let dir = TempDir::new().unwrap();
    let source = touch(&dir, "interview.mp4");
    let script_path = dir.path().join("script.json");
    std::fs::write(&script_path, SCRIPT_JSON).unwrap();
    let output = dir.path().join("script_copy.json");

    Command::cargo_bin("smartedit")
        .unwrap()
        .arg("export")
        .arg("--script")
        .arg(&script_path)
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let exported: GeneratedScript =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(exported.title, "Demo");
    assert_eq!(exported.segments.len(), 2);
}

#[test]
fn test_cli_export_malformed_script_fails() {
    let dir = TempDir::new().unwrap();
    let script_path = dir.path().join("script.json");
    std::fs::write(&script_path, "not json").unwrap();

    Command::cargo_bin("smartedit")
        .unwrap()
        .arg("export")
        .arg("--script")
        .arg(&script_path)
        .arg("--source")
        .arg("clip.mp4")
        .arg("--output")
        .arg(dir.path().join("cut.edl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed script"));
}

#[test]
fn test_cli_timecode_command() {
    Command::cargo_bin("smartedit")
        .unwrap()
        .args(["timecode", "3661.5", "--fps", "24"])
        .assert()
        .success()
        .stdout("01:01:01:12\n");
}

#[test]
fn test_cli_reel_command() {
    Command::cargo_bin("smartedit")
        .unwrap()
        .args(["reel", "my clip-01.mov"])
        .assert()
        .success()
        .stdout("MY_CLIP_\n");

    Command::cargo_bin("smartedit")
        .unwrap()
        .args(["reel", "anything.mov", "--dialect", "cmx3600"])
        .assert()
        .success()
        .stdout("AX\n");
}
