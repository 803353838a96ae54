#![cfg(feature = "lines")]
//! Tests for the line source adapter.
//!
//! Tests cover:
//! - close-on-exhaustion, exactly once, without reopening
//! - close-on-fault with swallowed close failures
//! - single-pass enforcement
//! - early abandonment closing the resource
//! - interaction with combinators (take, with_index, each_pair)

use lazyseq::prelude::*;
use lazyseq::source::LineResource;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

// =============================================================================
// Helpers
// =============================================================================

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records library logs into the returned sink for the lifetime of the guard.
fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("lazyseq=trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

// =============================================================================
// Scripted Resource
// =============================================================================

#[derive(Default)]
struct Recorder {
    reads: Cell<usize>,
    closes: Cell<usize>,
}

enum Step {
    Line(&'static str),
    Fault(&'static str),
}

/// A resource that replays a script and records reads and closes.
struct ScriptedResource {
    script: RefCell<VecDeque<Step>>,
    recorder: Rc<Recorder>,
    close_fails: bool,
}

impl ScriptedResource {
    fn new(script: Vec<Step>, recorder: &Rc<Recorder>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            recorder: Rc::clone(recorder),
            close_fails: false,
        }
    }

    fn lines(lines: &[&'static str], recorder: &Rc<Recorder>) -> Self {
        Self::new(lines.iter().copied().map(Step::Line).collect(), recorder)
    }
}

impl LineResource for ScriptedResource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        assert_eq!(self.recorder.closes.get(), 0, "read after close");
        self.recorder.reads.set(self.recorder.reads.get() + 1);
        match self.script.borrow_mut().pop_front() {
            Some(Step::Line(line)) => Ok(Some(line.to_string())),
            Some(Step::Fault(message)) => Err(io::Error::other(message)),
            None => Ok(None),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.recorder.closes.set(self.recorder.closes.get() + 1);
        if self.close_fails {
            Err(io::Error::other("close failed"))
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Exhaustion
// =============================================================================

#[rstest]
fn three_line_resource_is_closed_exactly_once() {
    let recorder = Rc::new(Recorder::default());
    let lines = LineSource::new(ScriptedResource::lines(&["a", "b", "c"], &recorder)).lines();
    let mut cursor = lines.cursor().unwrap();

    for expected in ["a", "b", "c"] {
        assert!(cursor.has_next().unwrap());
        assert_eq!(recorder.closes.get(), 0);
        assert_eq!(cursor.next().unwrap(), expected);
    }

    assert!(!cursor.has_next().unwrap());
    assert_eq!(recorder.closes.get(), 1);

    assert!(!cursor.has_next().unwrap());
    assert!(!cursor.has_next().unwrap());
    assert_eq!(recorder.closes.get(), 1);
    assert_eq!(recorder.reads.get(), 4);

    drop(cursor);
    assert_eq!(recorder.closes.get(), 1);
}

#[rstest]
fn has_next_reads_at_most_once_per_line() {
    let recorder = Rc::new(Recorder::default());
    let lines = LineSource::new(ScriptedResource::lines(&["only"], &recorder)).lines();
    let mut cursor = lines.cursor().unwrap();

    for _ in 0..4 {
        assert!(cursor.has_next().unwrap());
    }
    assert_eq!(recorder.reads.get(), 1);
    assert_eq!(cursor.next().unwrap(), "only");
}

#[rstest]
fn nothing_is_read_before_the_first_pull() {
    let recorder = Rc::new(Recorder::default());
    let lines = LineSource::new(ScriptedResource::lines(&["x"], &recorder)).lines();
    let _cursor = lines.cursor().unwrap();
    assert_eq!(recorder.reads.get(), 0);
}

#[rstest]
fn next_after_close_is_exhausted() {
    let recorder = Rc::new(Recorder::default());
    let lines = LineSource::new(ScriptedResource::lines(&[], &recorder)).lines();
    let mut cursor = lines.cursor().unwrap();

    assert!(matches!(cursor.next(), Err(SequenceError::ExhaustedCursor)));
    assert_eq!(recorder.closes.get(), 1);
}

// =============================================================================
// Faults
// =============================================================================

#[rstest]
fn read_fault_closes_then_surfaces() {
    let recorder = Rc::new(Recorder::default());
    let resource = ScriptedResource::new(vec![Step::Line("ok"), Step::Fault("disk")], &recorder);
    let lines = LineSource::new(resource).lines();
    let mut cursor = lines.cursor().unwrap();

    assert_eq!(cursor.next().unwrap(), "ok");
    let error = cursor.has_next().unwrap_err();
    assert!(error.is_io());
    assert!(error.to_string().contains("disk"));
    assert_eq!(recorder.closes.get(), 1);

    assert!(!cursor.has_next().unwrap());
    assert_eq!(recorder.closes.get(), 1);
}

#[rstest]
fn failing_close_does_not_mask_read_fault() {
    let (logs, _guard) = capture_logs();
    let recorder = Rc::new(Recorder::default());
    let mut resource = ScriptedResource::new(vec![Step::Fault("bad sector")], &recorder);
    resource.close_fails = true;
    let lines = LineSource::new(resource).lines();

    let error = lines.to_vec().unwrap_err();

    assert!(error.to_string().contains("bad sector"));
    assert_eq!(recorder.closes.get(), 1);
    assert!(logs.contents().contains("failed to close line source"));
}

#[rstest]
fn clean_exhaustion_logs_no_warning() {
    let (logs, _guard) = capture_logs();
    let recorder = Rc::new(Recorder::default());
    let lines = LineSource::new(ScriptedResource::lines(&["a", "b"], &recorder)).lines();

    assert_eq!(lines.count().unwrap(), 2);

    let output = logs.contents();
    assert!(output.contains("line source reached end of data"));
    assert!(!output.contains("WARN"));
}

#[rstest]
fn failing_close_at_end_of_data_is_reported() {
    let recorder = Rc::new(Recorder::default());
    let mut resource = ScriptedResource::lines(&["a"], &recorder);
    resource.close_fails = true;
    let lines = LineSource::new(resource).lines();
    let mut cursor = lines.cursor().unwrap();

    assert_eq!(cursor.next().unwrap(), "a");
    assert!(cursor.has_next().unwrap_err().is_io());
    assert!(!cursor.has_next().unwrap());
    assert_eq!(recorder.closes.get(), 1);
}

#[rstest]
fn fault_aborts_join_without_rollback() {
    let recorder = Rc::new(Recorder::default());
    let resource = ScriptedResource::new(
        vec![Step::Line("1"), Step::Line("2"), Step::Fault("gone")],
        &recorder,
    );
    let mut printed = Vec::new();

    let result = LineSource::new(resource)
        .lines()
        .for_each(|line| printed.push(line));

    assert!(result.unwrap_err().is_io());
    assert_eq!(printed, vec!["1", "2"]);
}

// =============================================================================
// Single Pass
// =============================================================================

#[rstest]
fn second_traversal_is_refused() {
    let lines = from_reader("a\nb\n".as_bytes()).lines();
    assert_eq!(lines.traversal(), Traversal::SinglePass);
    assert_eq!(lines.to_vec().unwrap(), vec!["a", "b"]);

    assert!(matches!(
        lines.cursor(),
        Err(SequenceError::AlreadyConsumed { sequence: "Lines" })
    ));
    assert!(lines.to_vec().is_err());
}

#[rstest]
fn abandoned_cursor_closes_resource() {
    let recorder = Rc::new(Recorder::default());
    let lines = LineSource::new(ScriptedResource::lines(&["a", "b", "c"], &recorder)).lines();

    let first = lines.take(1).to_vec().unwrap();

    assert_eq!(first, vec!["a"]);
    assert_eq!(recorder.reads.get(), 1);
    assert_eq!(recorder.closes.get(), 1);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn numbered_lines() {
    let numbered = from_read("alpha\nbeta\n".as_bytes())
        .lines()
        .with_index()
        .transform(|line| format!("{}: {}", line.index, line.value));
    assert_eq!(numbered.to_vec().unwrap(), vec!["0: alpha", "1: beta"]);
}

#[rstest]
fn read_line_then_sequence_the_rest() {
    let mut source = from_reader("3\n1 2\n".as_bytes());
    let header = source.read_line().unwrap();
    assert_eq!(header.as_deref(), Some("3"));

    let rest = source.lines().each_pair().count().unwrap();
    assert_eq!(rest, 0);
}

#[rstest]
fn open_reads_a_file() {
    let path = std::env::temp_dir().join(format!("lazyseq-open-{}.txt", std::process::id()));
    std::fs::write(&path, "one\ntwo\nthree\n").unwrap();

    let joined = LineSource::open(&path).unwrap().lines().join(",").unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(joined, "one,two,three");
}
