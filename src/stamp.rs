use std::fmt::{Display, Formatter};
use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Utc};
use regex::Regex;

/// Fixed regional offset applied to the observation instant, no DST.
pub const REGIONAL_OFFSET_HOURS: i64 = 8;

lazy_static::lazy_static! {
    static ref TIME_TOKEN: Regex = Regex::new(r"[0-9]{6}Z").expect("the time token pattern");
}

impl Durations for i64 {
    fn hours(&self) -> Duration {
        Duration::hours(*self)
    }

    fn days(&self) -> Duration {
        Duration::days(*self)
    }

    fn minutes(&self) -> Duration {
        Duration::minutes(*self)
    }
}

pub(crate) trait Durations {
    fn hours(&self) -> Duration;

    fn days(&self) -> Duration;

    fn minutes(&self) -> Duration;
}

/// Day, hour and minute of a METAR `ddhhmmZ` token. Year and month are not
/// transmitted and get inferred against the current time in [`Stamp::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Stamp {
    /// Anchors the stamp in the current UTC month, or in the previous one when
    /// the stamp's day is still ahead of today.
    ///
    /// Out of range components roll over into the following units (day 31 of
    /// a 30 day month lands on the 1st of the next one). Near a year boundary
    /// combined with a stale day number this can pick the wrong month; that is
    /// a known limitation of the format.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, StampError> {
        let mut year = now.year();
        let mut month = now.month();

        if self.day > now.day() {
            if month == 1 {
                month = 12;
                year -= 1;
            } else {
                month -= 1;
            }
        }

        let first_of_month = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
            .single()
            .ok_or(StampError::OutOfRange(year, month))?;

        Ok(first_of_month
            + (self.day as i64 - 1).days()
            + (self.hour as i64).hours()
            + (self.minute as i64).minutes())
    }
}

impl Display for Stamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}{:02}Z", self.day, self.hour, self.minute)
    }
}

impl TryFrom<&str> for Stamp {
    type Error = StampError;

    fn try_from(metar: &str) -> Result<Self, Self::Error> {
        let token = TIME_TOKEN.find(metar).ok_or(StampError::InvalidTimeFormat)?.as_str();

        Ok(Self {
            day: token[0..2].parse()?,
            hour: token[2..4].parse()?,
            minute: token[4..6].parse()?,
        })
    }
}

/// Renders the observation time of a raw METAR as `UTC hh:mm / CST  hh:mm`.
///
/// NOTE: the instant shifted by -8h is the one printed under `UTC`, while the
/// unshifted UTC instant is printed under `CST`. Both are rendered in the
/// offset carried by `now`. This labelling is kept as observed on deployed
/// report cards until someone confirms which way round it should read.
pub fn format_observation_time(metar: &str, now: DateTime<FixedOffset>) -> Result<String, StampError> {
    let stamp = Stamp::try_from(metar)?;
    let observed = stamp.resolve(now.with_timezone(&Utc))?;
    let shifted = observed - REGIONAL_OFFSET_HOURS.hours();

    let hh_mm = |instant: DateTime<Utc>| instant.with_timezone(now.offset()).format("%H:%M").to_string();

    Ok(format!("UTC {} / CST  {}", hh_mm(shifted), hh_mm(observed)))
}

#[derive(thiserror::Error, Debug)]
pub enum StampError {
    #[error("Invalid METAR time format")]
    InvalidTimeFormat,

    #[error("ParseIntError: {0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("No such month {0}-{1:02}")]
    OutOfRange(i32, u32),
}
