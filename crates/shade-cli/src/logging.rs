//! Stderr logging for the `shade` binary.

use std::sync::Once;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

static INIT: Once = Once::new();

/// Maps `-v` count and `-q` to a level filter.
///
/// Default is `Warn`; each `-v` raises it one step, up to `Trace`.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the terminal logger. Later calls are no-ops.
///
/// A logger already installed by someone else is left in place.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        let mut builder = ConfigBuilder::new();
        builder.set_time_level(LevelFilter::Off);
        builder.set_thread_level(LevelFilter::Off);
        let config = builder.build();

        if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
            log::set_max_level(level);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, false), LevelFilter::Warn);
        assert_eq!(level_for(1, false), LevelFilter::Info);
        assert_eq!(level_for(2, false), LevelFilter::Debug);
        assert_eq!(level_for(3, false), LevelFilter::Trace);
        assert_eq!(level_for(9, false), LevelFilter::Trace);
        assert_eq!(level_for(2, true), LevelFilter::Off);
    }

    #[test]
    fn test_init_is_idempotent() {
        init(LevelFilter::Warn);
        init(LevelFilter::Trace);
    }
}
