//! Circular statistics over calendar dates.
//!
//! A calendar date is mapped onto the unit circle by normalizing its 0-based
//! day-of-year ordinal by the length of its year, so the same calendar day
//! lands on (nearly) the same angle in leap and non-leap years. Synchrony of
//! a set of dates is then the length of their mean resultant vector: 1 when
//! every date is identical, near 0 when dates are spread evenly over the year.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::TAU;

/// 0-based day-of-year ordinal: January 1 = 0, December 31 = 364 or 365.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// Number of days in the given calendar year: 365, or 366 in leap years.
pub fn year_length(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Angle in radians for a date, normalized by its year length.
///
/// Always in [0, 2π): December 31 maps just below a full turn, never onto it.
pub fn date_angle(date: NaiveDate) -> f64 {
    TAU * f64::from(day_of_year(date)) / f64::from(year_length(date.year()))
}

/// Unit vector for an angle.
///
/// x = sin, y = cos (not the other way around): this places day 0 at the top
/// of the circle and is the convention the reference ρ values were computed
/// under.
pub fn unit_vector(angle: f64) -> (f64, f64) {
    (angle.sin(), angle.cos())
}

/// Running sum of unit vectors for one group of observations.
///
/// Accumulates sum-of-x, sum-of-y and a count; [`VectorSum::rho`] finalizes
/// the mean resultant vector length.
#[derive(Debug, Clone, Default)]
pub struct VectorSum {
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl VectorSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation by its angle in radians.
    pub fn push(&mut self, angle: f64) {
        let (x, y) = unit_vector(angle);
        self.sum_x += x;
        self.sum_y += y;
        self.count += 1;
    }

    /// Number of observations accumulated so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean resultant vector length, in [0, 1]. `None` for an empty sum.
    pub fn rho(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        let mean_x = self.sum_x / n;
        let mean_y = self.sum_y / n;
        Some((mean_x * mean_x + mean_y * mean_y).sqrt())
    }
}
