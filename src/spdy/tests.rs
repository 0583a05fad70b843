use crate::spdy::test_utils::{logger, LoggerHandle};
use crate::spdy::{ErrorKind, SynStreamFrame, NEWLINE};
use rstest::rstest;

#[test]
fn unidirectional_stream_without_association() {
    let mut frame = SynStreamFrame::new(1, 0, 3).unwrap();
    frame.set_unidirectional(true);

    let rendered = frame.to_string();
    assert!(rendered.starts_with("SynStreamFrame(last: false; unidirectional: true)"));
    assert!(!rendered.contains("Associated-To-Stream-ID"));
    assert_eq!(
        rendered,
        [
            "SynStreamFrame(last: false; unidirectional: true)",
            "--> Stream-ID = 1",
            "--> Priority = 3",
            "--> Headers:",
        ]
        .join(NEWLINE)
    );
}

#[test]
fn associated_stream_is_rendered() {
    let frame = SynStreamFrame::new(2, 1, 0).unwrap();
    let rendered = frame.to_string();
    assert!(rendered.contains("Associated-To-Stream-ID = 1"));
    assert_eq!(
        rendered,
        [
            "SynStreamFrame(last: false; unidirectional: false)",
            "--> Stream-ID = 2",
            "--> Associated-To-Stream-ID = 1",
            "--> Priority = 0",
            "--> Headers:",
        ]
        .join(NEWLINE)
    );
}

#[test]
fn negative_association_fails_construction() {
    let err = SynStreamFrame::new(1, -1, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(
        err.to_string(),
        "Error: Associated-To-Stream-ID cannot be negative: -1\nKind: InvalidArgument"
    );
}

#[test]
fn priority_above_seven_fails_construction() {
    let err = SynStreamFrame::new(1, 0, 8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "Priority must be between 0 and 7 inclusive: 8");
}

#[test]
fn frames_can_move_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SynStreamFrame>();
    assert_send_sync::<crate::spdy::SynReplyFrame>();
    assert_send_sync::<crate::spdy::HeadersFrame>();
}

// Stream ids below are unique to these tests so records from concurrently
// running tests never match.
#[rstest]
fn construction_emits_one_trace_record(mut logger: LoggerHandle) {
    SynStreamFrame::new(70_001, 0, 0).unwrap();

    let records = logger.drain_matching("stream 70001");
    assert_eq!(
        records,
        vec![(
            log::Level::Trace,
            "created SYN_STREAM frame on stream 70001".to_string()
        )]
    );
}

#[rstest]
fn failed_construction_logs_nothing(mut logger: LoggerHandle) {
    assert!(SynStreamFrame::new(70_002, -1, 0).is_err());
    assert!(SynStreamFrame::new(70_002, 0, 8).is_err());

    assert!(logger.drain_matching("70002").is_empty());
}
