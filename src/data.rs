//! Input records and CSV loading.
//!
//! The dataset is the published field data: one row per migration event with
//! columns `Date` (day/month/year), `Lake`, `Departure/Arrival` and `Year`.
//! The `Year` column is a label, not a number — an autumn-to-spring migration
//! year spans a calendar boundary and reads like "2005/2006" — so it is kept
//! as a string and used only for grouping and axis ticks.

use crate::circular::{date_angle, unit_vector};
use crate::error::{Result, SynchronyError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Migration season, as recorded in the `Departure/Arrival` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Arrival,
    Departure,
}

impl Season {
    /// Both seasons, in the order the reference output lists them.
    pub const ALL: [Season; 2] = [Season::Arrival, Season::Departure];

    /// Legend label: the study reports arrivals as the spring migration and
    /// departures as the autumn one.
    pub fn display_label(self) -> &'static str {
        match self {
            Season::Arrival => "Spring",
            Season::Departure => "Autumn",
        }
    }
}

impl FromStr for Season {
    type Err = SynchronyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Arrival" => Ok(Season::Arrival),
            "Departure" => Ok(Season::Departure),
            other => Err(SynchronyError::Season(other.to_string())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Arrival => write!(f, "Arrival"),
            Season::Departure => write!(f, "Departure"),
        }
    }
}

/// Raw CSV row, column names exactly as in the dataset header.
#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Lake")]
    lake: String,
    #[serde(rename = "Departure/Arrival")]
    season: String,
    #[serde(rename = "Year")]
    year: String,
}

/// One migration event with its derived circular quantities.
///
/// Derived fields are computed once at load time and never mutated.
#[derive(Debug, Clone)]
pub struct Observation {
    pub date: NaiveDate,
    pub lake: String,
    pub season: Season,
    /// Year label from the dataset, e.g. "2005/2006".
    pub year: String,
    /// Angle on the year circle, in [0, 2π).
    pub angle: f64,
    pub x: f64,
    pub y: f64,
}

impl Observation {
    fn from_record(record: Record) -> Result<Self> {
        let date = parse_date(&record.date)?;
        let season = record.season.parse()?;
        let angle = date_angle(date);
        let (x, y) = unit_vector(angle);
        Ok(Observation {
            date,
            lake: record.lake,
            season,
            year: record.year,
            angle,
            x,
            y,
        })
    }
}

/// Parse a `day/month/year` date string as recorded in the dataset.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").map_err(|source| SynchronyError::Date {
        raw: raw.to_string(),
        source,
    })
}

/// Load all observations from a CSV file.
///
/// Any malformed row aborts the load; an empty file is an error too, since
/// every downstream stage assumes at least one observation.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let file = std::fs::File::open(path)?;
    let observations = read_observations(file)?;
    if observations.is_empty() {
        return Err(SynchronyError::EmptyDataset(path.to_path_buf()));
    }
    Ok(observations)
}

/// Read observations from any CSV source carrying the dataset's header row.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut observations = Vec::new();
    for row in csv_reader.deserialize::<Record>() {
        observations.push(Observation::from_record(row?)?);
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date,Lake,Departure/Arrival,Year
15/04/2006,Krankesjön,Arrival,2005/2006
15/04/2006,Søgård Sø,Arrival,2005/2006
01/11/2005,Krankesjön,Departure,2005/2006
";

    #[test]
    fn test_read_observations() {
        let observations = read_observations(SAMPLE.as_bytes()).unwrap();
        assert_eq!(observations.len(), 3);

        let first = &observations[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2006, 4, 15).unwrap());
        assert_eq!(first.lake, "Krankesjön");
        assert_eq!(first.season, Season::Arrival);
        assert_eq!(first.year, "2005/2006");

        // Derived quantities attached at load time
        assert!(first.angle > 0.0 && first.angle < std::f64::consts::TAU);
        assert!((first.x - first.angle.sin()).abs() < 1e-12);
        assert!((first.y - first.angle.cos()).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_date_rejected() {
        let csv = "Date,Lake,Departure/Arrival,Year\n31/13/2006,Krankesjön,Arrival,2005/2006\n";
        let err = read_observations(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SynchronyError::Date { .. }));
        assert!(err.to_string().contains("31/13/2006"));
    }

    #[test]
    fn test_unknown_season_rejected() {
        let csv = "Date,Lake,Departure/Arrival,Year\n15/04/2006,Krankesjön,Spawning,2005/2006\n";
        let err = read_observations(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SynchronyError::Season(_)));
    }

    #[test]
    fn test_season_parse_and_labels() {
        assert_eq!("Arrival".parse::<Season>().unwrap(), Season::Arrival);
        assert_eq!("Departure".parse::<Season>().unwrap(), Season::Departure);
        assert_eq!(Season::Arrival.display_label(), "Spring");
        assert_eq!(Season::Departure.display_label(), "Autumn");
        assert_eq!(Season::Arrival.to_string(), "Arrival");
    }

    #[test]
    fn test_leap_day_parses_only_in_leap_years() {
        let ok = "Date,Lake,Departure/Arrival,Year\n29/02/2020,Krankesjön,Arrival,2019/2020\n";
        assert_eq!(read_observations(ok.as_bytes()).unwrap().len(), 1);

        let bad = "Date,Lake,Departure/Arrival,Year\n29/02/2021,Krankesjön,Arrival,2020/2021\n";
        assert!(read_observations(bad.as_bytes()).is_err());
    }
}
