//! Log output for the command line tool.
//!
//! Library code only talks to the `log` facade; the binary installs an
//! `env_logger` backend here.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding an `env_logger` filter spec.
pub const LOG_ENV: &str = "ICON_ACCENTS_LOG";

/// Install the logger.
///
/// `verbosity` is the number of `-v` flags minus the number of `-q` flags.
/// A non-zero value overrides whatever [`LOG_ENV`] specifies.
pub fn initialize(verbosity: i8) {
	let mut builder = Builder::new();
	builder
		.filter_level(LevelFilter::Info)
		.parse_env(Env::new().filter(LOG_ENV))
		.format_timestamp(None)
		.format_target(false);
	if verbosity != 0 {
		builder.filter_level(level_for(verbosity));
	}
	// A logger may already be installed when embedded in another tool.
	let _ = builder.try_init();
}

fn level_for(verbosity: i8) -> LevelFilter {
	match verbosity {
		i8::MIN..=-2 => LevelFilter::Error,
		-1 => LevelFilter::Warn,
		0 => LevelFilter::Info,
		1 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_maps_to_levels() {
		assert_eq!(level_for(-3), LevelFilter::Error);
		assert_eq!(level_for(-1), LevelFilter::Warn);
		assert_eq!(level_for(0), LevelFilter::Info);
		assert_eq!(level_for(1), LevelFilter::Debug);
		assert_eq!(level_for(4), LevelFilter::Trace);
	}
}
