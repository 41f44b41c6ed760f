//! Time representation.
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::ops::{Add, Sub};

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::SbResult;

/// Offset between JD and MJD.
pub const JD_TO_MJD: f64 = -2_400_000.5;

/// Epoch of an observation as a Julian Date.
///
/// Flux models only depend on time through the observing geometry, which changes on
/// the scale of hours, so no distinction is made between UTC and TDB. Calendar
/// conversions here do not apply leap seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[must_use]
pub struct Time {
    /// Julian Date
    pub jd: f64,
}

impl Time {
    /// Construct a new Time object.
    pub fn new(jd: f64) -> Self {
        Self { jd }
    }

    /// Create Time from a Modified Julian Date (MJD).
    pub fn from_mjd(mjd: f64) -> Self {
        Self::new(mjd - JD_TO_MJD)
    }

    /// Convert to an MJD float.
    #[must_use]
    pub fn mjd(&self) -> f64 {
        self.jd + JD_TO_MJD
    }

    /// J2000 reference time.
    pub fn j2000() -> Self {
        Self::new(2_451_545.0)
    }

    /// Create Time from the date in the Gregorian calendar.
    ///
    /// Algorithm from:
    /// "A Machine Algorithm for Processing Calendar Dates"
    /// <https://doi.org/10.1145/364096.364097>
    ///
    #[allow(clippy::cast_possible_truncation, reason = "Truncation is expected")]
    pub fn from_year_month_day(year: i64, month: u32, day: u32, frac_day: f64) -> Self {
        let frac_day = frac_day - 0.5;
        let day = i64::from(day) + frac_day.div_euclid(1.0) as i64;
        let frac_day = frac_day.rem_euclid(1.0);
        let month = i64::from(month);

        let tmp = (month - 14) / 12;
        let days = day - 32075 + 1461 * (year + 4800 + tmp) / 4 + 367 * (month - 2 - tmp * 12) / 12
            - 3 * ((year + 4900 + tmp) / 100) / 4;

        Self::new(days as f64 + frac_day)
    }

    /// Construct a Time object from a [`DateTime`].
    pub fn from_datetime(time: &DateTime<Utc>) -> Self {
        let frac_day = (f64::from(time.hour())
            + f64::from(time.minute()) / 60.0
            + (f64::from(time.second()) + f64::from(time.timestamp_subsec_millis()) / 1000.0)
                / 3600.0)
            / 24.0;
        Self::from_year_month_day(i64::from(time.year()), time.month(), time.day(), frac_day)
    }

    /// Read time from the standard ISO format for time.
    ///
    /// ```
    ///     use sbemit_core::ephem::Time;
    ///     let t = Time::from_iso("2000-01-01T12:00:00Z").unwrap();
    ///     assert_eq!(t.jd, 2451545.0);
    /// ```
    ///
    /// # Errors
    /// An error is returned if ISO string parsing fails.
    pub fn from_iso(s: &str) -> SbResult<Self> {
        let time = DateTime::parse_from_rfc3339(s)?.to_utc();
        Ok(Self::from_datetime(&time))
    }
}

impl From<f64> for Time {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add<f64> for Time {
    type Output = Self;

    /// Add a number of days.
    fn add(self, other: f64) -> Self::Output {
        Self::new(self.jd + other)
    }
}

impl Sub<f64> for Time {
    type Output = Self;

    /// Subtract a number of days.
    fn sub(self, other: f64) -> Self::Output {
        Self::new(self.jd - other)
    }
}

impl Sub<Self> for Time {
    type Output = f64;

    /// Elapsed days between two times.
    fn sub(self, other: Self) -> Self::Output {
        self.jd - other.jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar() {
        let t = Time::from_year_month_day(2000, 1, 1, 0.5);
        assert_eq!(t.jd, 2_451_545.0);

        let t = Time::from_year_month_day(2000, 1, 2, -0.5);
        assert_eq!(t.jd, 2_451_545.0);

        let t = Time::from_year_month_day(763, 9, 18, 0.5);
        assert_eq!(t.jd, 2_000_000.0);
    }

    #[test]
    fn test_iso() {
        let t = Time::from_iso("2010-10-20T06:00:00.000Z").unwrap();
        let expected = Time::from_year_month_day(2010, 10, 20, 0.25);
        assert!((t.jd - expected.jd).abs() < 1e-9);
        assert!(Time::from_iso("not a time").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let t = Time::from_mjd(55_000.0);
        assert!((t.mjd() - 55_000.0).abs() < 1e-9);
        assert!(((t + 1.5) - t - 1.5).abs() < 1e-9);
        assert!(((t - 2.0).jd - (t.jd - 2.0)).abs() < 1e-9);
    }
}
