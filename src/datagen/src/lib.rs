pub mod clickstream;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod writer;

/// 2019-01-01T00:00:00Z, the base of every generated timestamp.
pub const START_TMS: i64 = 1_546_300_800_000;

/// Install times fall within one day of [`START_TMS`].
pub const INSTALL_WINDOW_MS: i64 = 86_400_000;

/// Event times fall within this window of [`START_TMS`].
pub const EVENT_WINDOW_MS: i64 = 10_000_000;

pub const USER_DIMENSIONS_FILE: &str = "user_dimensions.csv.gz";
pub const CLICKSTREAM_BASE: &str = "clickstream";
