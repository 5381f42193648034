use crate::error::CoreError;
use crate::rules::dates::local_today;
use chrono::{FixedOffset, Local, NaiveDate, Offset, Utc};

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

pub fn today() -> Result<NaiveDate, CoreError> {
    local_today(now_utc(), local_offset())
}
