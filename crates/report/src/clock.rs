use crate::error::ReportError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local};

/// Supplies the current time for the date & time row.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Formats a timestamp with a `chrono` strftime string, rejecting format
/// strings `chrono` cannot parse instead of panicking on display.
pub fn format_timestamp(
    timestamp: &DateTime<FixedOffset>,
    format: &str,
) -> Result<String, ReportError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ReportError::InvalidTimestampFormat(format.to_string()));
    }
    Ok(timestamp.format_with_items(items.iter()).to_string())
}
