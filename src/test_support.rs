//! Log capture shared by unit tests.
//!
//! Records are tagged with the emitting thread so tests running in parallel
//! only see their own output.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl Log for CaptureLogger {
	fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
		true
	}

	fn log(&self, record: &Record<'_>) {
		if let Ok(mut records) = RECORDS.lock() {
			records.push((thread::current().id(), record.level(), record.args().to_string()));
		}
	}

	fn flush(&self) {}
}

/// Install the capturing logger for this test binary.
pub(crate) fn capture_logs() {
	INSTALL.call_once(|| {
		log::set_logger(&LOGGER).expect("no other logger is installed in unit tests");
		log::set_max_level(LevelFilter::Trace);
	});
}

/// Messages logged at `level` by the current thread, oldest first.
pub(crate) fn logged(level: Level) -> Vec<String> {
	let current = thread::current().id();
	RECORDS
		.lock()
		.expect("log records lock")
		.iter()
		.filter(|(thread, record_level, _)| *thread == current && *record_level == level)
		.map(|(_, _, message)| message.clone())
		.collect()
}
