//! Logger setup for the headless runner

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Dependencies only get to speak up about problems
const DEPENDENCY_LEVEL: LevelFilter = LevelFilter::Warn;

/// Filter used when `RUST_LOG` is unset: warnings from everything, and
/// info (or debug with `verbose`) from this crate.
fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("{},{}={}", DEPENDENCY_LEVEL, env!("CARGO_CRATE_NAME"), level)
        .to_lowercase()
}

/// Initialize the global logger. `RUST_LOG` wins when set.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_scopes_crate_level() {
        assert_eq!(default_filter(false), "warn,skunk=info");
        assert_eq!(default_filter(true), "warn,skunk=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        log::info!("logger initialised");
    }
}
