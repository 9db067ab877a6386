// Unit tests for domain models

use super::*;

#[test]
fn test_timecode_whole_seconds() {
    assert_eq!(seconds_to_timecode(0.0, 24), "00:00:00:00");
    assert_eq!(seconds_to_timecode(3.0, 24), "00:00:03:00");
    assert_eq!(seconds_to_timecode(3661.0, 24), "01:01:01:00");
}

#[test]
fn test_timecode_fractional_frames() {
    assert_eq!(seconds_to_timecode(1.5, 24), "00:00:01:12");
    assert_eq!(seconds_to_timecode(10.25, 25), "00:00:10:06");
    assert_eq!(seconds_to_timecode(2.5, 30), "00:00:02:15");
}

#[test]
fn test_timecode_negative_clamps_to_zero() {
    assert_eq!(seconds_to_timecode(-5.0, 24), "00:00:00:00");
    assert_eq!(seconds_to_timecode(-0.001, 30), "00:00:00:00");
    assert_eq!(seconds_to_timecode(f64::NAN, 24), "00:00:00:00");
}

#[test]
fn test_timecode_frame_overflow_carries() {
    assert_eq!(seconds_to_timecode(0.9999999, 24), "00:00:01:00");
    assert_eq!(seconds_to_timecode(59.9999, 24), "00:01:00:00");
    assert_eq!(seconds_to_timecode(3599.9999, 24), "01:00:00:00");
}

#[test]
fn test_timecode_caps_hours_past_one_day() {
    assert_eq!(seconds_to_timecode(90_000.0, 24), "23:00:00:00");
    assert_eq!(seconds_to_timecode(90_061.5, 24), "23:01:01:12");
    assert_eq!(seconds_to_timecode(f64::INFINITY, 30), "23:59:59:29");
}

#[test]
fn test_timecode_saturates_on_carry_into_next_day() {
    assert_eq!(seconds_to_timecode(86_399.9999, 24), "23:59:59:23");
    assert_eq!(seconds_to_timecode(86_399.99, 25), "23:59:59:24");
}

#[test]
fn test_timecode_ties_round_to_even() {
    // 0.0625 * 24 = 1.5 frames
    assert_eq!(Timecode::from_seconds(0.0625, 24).frames, 2);
    // 0.1875 * 24 = 4.5 frames
    assert_eq!(Timecode::from_seconds(0.1875, 24).frames, 4);
}

#[test]
fn test_timecode_monotonic_at_24fps() {
    let mut previous = Timecode::ZERO;
    let mut seconds = 0.0;
    while seconds < 86_400.0 {
        let current = Timecode::from_seconds(seconds, 24);
        assert!(
            previous <= current,
            "{} went backwards to {} at {}s",
            previous,
            current,
            seconds
        );
        previous = current;
        seconds += 7.013;
    }

    let mut seconds = 59.9;
    let mut previous = Timecode::from_seconds(seconds, 24);
    while seconds < 60.1 {
        seconds += 0.0007;
        let current = Timecode::from_seconds(seconds, 24);
        assert!(previous <= current);
        previous = current;
    }
}

#[test]
fn test_timecode_frames_never_reach_fps() {
    for fps in [24, 25, 30, 60] {
        for step in 0..1000 {
            let tc = Timecode::from_seconds(step as f64 * 0.0137, fps);
            assert!(tc.frames < fps);
        }
    }
}

#[test]
fn test_seconds_to_frames_truncates() {
    assert_eq!(seconds_to_frames(1.0, 24), 24);
    assert_eq!(seconds_to_frames(1.99, 24), 47);
    assert_eq!(seconds_to_frames(-3.0, 24), 0);
}

#[test]
fn test_dialect_parse() {
    assert_eq!(EdlDialect::parse("standard").unwrap(), EdlDialect::Standard);
    assert_eq!(EdlDialect::parse("CMX3600").unwrap(), EdlDialect::Cmx3600);
    assert!(EdlDialect::parse("avid").is_err());
}

#[test]
fn test_export_format_parse() {
    assert_eq!(ExportFormat::parse("edl").unwrap(), ExportFormat::Edl);
    assert_eq!(ExportFormat::parse("XML").unwrap(), ExportFormat::Xml);
    assert_eq!(ExportFormat::parse("txt").unwrap(), ExportFormat::Text);
    assert_eq!(ExportFormat::parse("json").unwrap(), ExportFormat::Json);
    assert_eq!(ExportFormat::Json.extension(), "json");
    assert!(ExportFormat::parse("aaf").is_err());
}

#[test]
fn test_settings_min_duration_defaults_to_one_frame() {
    let settings = ExportSettings {
        fps: 25,
        ..ExportSettings::default()
    };
    assert!((settings.min_duration() - 0.04).abs() < 1e-12);

    let settings = ExportSettings {
        min_segment_duration: Some(0.1),
        ..ExportSettings::default()
    };
    assert_eq!(settings.min_duration(), 0.1);
}

#[test]
fn test_settings_validation() {
    assert!(ExportSettings::default().validate().is_ok());

    let zero_fps = ExportSettings {
        fps: 0,
        ..ExportSettings::default()
    };
    assert!(matches!(zero_fps.validate(), Err(DomainError::BadArgs(_))));

    let negative_min = ExportSettings {
        min_segment_duration: Some(-1.0),
        ..ExportSettings::default()
    };
    assert!(negative_min.validate().is_err());
}

#[test]
fn test_segment_deserialize_defaults() {
    let segment: Segment =
        serde_json::from_str(r#"{"start_time": 1.0, "end_time": 2.5}"#).unwrap();
    assert!(segment.keep);
    assert_eq!(segment.source_index, 0);
    assert!(segment.content.is_empty());
    assert_eq!(segment.duration(), 1.5);
}

#[test]
fn test_segment_accepts_video_index_alias() {
    let segment: Segment = serde_json::from_str(
        r#"{"start_time": 0, "end_time": 1, "video_index": 2, "keep": false, "content": "Hi"}"#,
    )
    .unwrap();
    assert_eq!(segment.source_index, 2);
    assert!(!segment.keep);
}

#[test]
fn test_script_without_segments_is_empty() {
    let script: GeneratedScript = serde_json::from_str(r#"{"title": "Cut"}"#).unwrap();
    assert!(script.segments.is_empty());
    assert_eq!(script.origin, ScriptOrigin::Generated);
}
