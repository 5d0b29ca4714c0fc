use std::io;
use std::sync::{Arc, Mutex};

use career_quest::formatter::{increment_tick, tick_count, TickFormatter};
use speculoos::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_tick_counter_increments() {
    let before = tick_count();
    increment_tick();
    increment_tick();
    assert_that(&tick_count()).is_greater_than_or_equal_to(before + 2);
}

#[test]
fn test_line_layout() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(capture.clone())
        .event_format(TickFormatter)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let span = tracing::info_span!("session", seed = 7);
        let _guard = span.enter();
        tracing::warn!(level = 2, "Level cleared");
    });

    let output = capture.contents();
    let line = output.lines().next().unwrap();

    assert_that(&line.contains(" WARN ")).is_true();
    assert_that(&line.contains("session{seed=7}:")).is_true();
    assert_that(&line.contains("formatting: Level cleared level=2")).is_true();
    assert_that(&line.split(' ').nth(1).is_some_and(|tick| tick.starts_with("0x") && tick.len() == 6)).is_true();
}
