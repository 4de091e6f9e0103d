// src/config/consts.rs

// Column labels as the portal reports them
pub const COL_DISTANCE: &str = "מקצה";
pub const COL_TIME: &str = "תוצאה";
pub const COL_PACE: &str = "קצב";
pub const COL_POSITION: &str = "כללי";
pub const COL_DATE: &str = "תאריך";

// Derived export columns
pub const COL_TIME_SECONDS: &str = "time_seconds";
pub const COL_PACE_SECONDS: &str = "pace_seconds";
pub const COL_YEAR: &str = "year";

// Net config
pub const BASE_URL: &str = "https://raceview.net/";
pub const SEARCH_PATH: &str = "";
pub const QUERY_PARAM: &str = "theQueryText";
pub const TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("race_scrape/", env!("CARGO_PKG_VERSION"));

// Config file picked up from the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "race_scrape.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 0;

// Logging
pub const LOG_ENV: &str = "RACE_SCRAPE_LOG";
