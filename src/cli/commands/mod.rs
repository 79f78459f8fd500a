pub mod config;
pub mod entry;
pub mod export;
pub mod holidays;
pub mod init;
pub mod link;
pub mod log;
pub mod review;
pub mod show;
pub mod snapshot;
pub mod staff;
pub mod workflow;

use crate::errors::AppResult;
use crate::models::period::PeriodKey;

/// Parse a `{year}-{month0}-{half}` period key from the command line.
pub(crate) fn parse_key(raw: &str) -> AppResult<PeriodKey> {
    raw.parse()
}
