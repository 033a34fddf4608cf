//! Chart rendering.
//!
//! Produces the static synchrony figure: ρ per year for every (season, lake)
//! series, colored by season (red = spring arrival, blue = autumn departure)
//! and marked by lake. The x-axis uses one ordinal slot per distinct year
//! label so non-contiguous years stay uniformly spaced.

use crate::aggregate::GroupResult;
use crate::config::AnalysisConfig;
use crate::data::Season;
use crate::error::{Result, SynchronyError};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Render the synchrony chart to the configured SVG path.
pub fn render(results: &[GroupResult], config: &AnalysisConfig) -> Result<()> {
    if results.is_empty() {
        return Err(SynchronyError::Plot("no groups to plot".to_string()));
    }

    let ticks = year_ticks(results);
    let labels: Vec<String> = ticks.keys().map(|year| short_year_label(year)).collect();

    let root = SVGBackend::new(
        &config.output_path,
        (config.plot_width, config.plot_height),
    )
    .into_drawing_area();
    root.fill(&WHITE).map_err(to_plot_err)?;

    let x_max = (ticks.len() - 1) as f64;
    let pad = config.rho_axis_padding;
    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(-0.5..x_max + 0.5, -pad..1.0 + pad)
        .map_err(to_plot_err)?;

    chart
        .configure_mesh()
        .x_desc("year")
        .y_desc("synchrony, ρ")
        .x_labels(ticks.len().max(2))
        .x_label_formatter(&|x| tick_label(*x, &labels))
        .draw()
        .map_err(to_plot_err)?;

    let lakes = distinct_lakes(results);
    for season in Season::ALL {
        for (lake_index, lake) in lakes.iter().enumerate() {
            let points = series_points(results, season, lake, &ticks);
            if points.is_empty() {
                continue;
            }

            let style = season_color(season).mix(0.5).stroke_width(2);
            chart
                .draw_series(LineSeries::new(points.iter().copied(), style))
                .map_err(to_plot_err)?
                .label(format!("{} {}", season.display_label(), lake))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], style));

            draw_markers(&mut chart, &points, lake_index, style)?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()
        .map_err(to_plot_err)?;

    root.present().map_err(to_plot_err)?;
    Ok(())
}

fn to_plot_err<E: std::fmt::Display>(err: E) -> SynchronyError {
    SynchronyError::Plot(err.to_string())
}

fn season_color(season: Season) -> RGBColor {
    match season {
        Season::Arrival => RED,
        Season::Departure => BLUE,
    }
}

/// One marker shape per lake, cycling when there are more lakes than shapes.
fn draw_markers(
    chart: &mut ChartContext<'_, SVGBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &[(f64, f64)],
    lake_index: usize,
    style: ShapeStyle,
) -> Result<()> {
    match lake_index % 3 {
        0 => chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, style.filled())),
        ),
        1 => chart.draw_series(points.iter().map(|&(x, y)| Cross::new((x, y), 4, style))),
        _ => chart.draw_series(
            points
                .iter()
                .map(|&(x, y)| TriangleMarker::new((x, y), 5, style.filled())),
        ),
    }
    .map_err(to_plot_err)?;
    Ok(())
}

/// Ordinal x position per distinct year label, in sorted label order.
fn year_ticks(results: &[GroupResult]) -> BTreeMap<String, usize> {
    let years: BTreeSet<&str> = results.iter().map(|r| r.key.year.as_str()).collect();
    years
        .into_iter()
        .enumerate()
        .map(|(index, year)| (year.to_string(), index))
        .collect()
}

fn distinct_lakes(results: &[GroupResult]) -> Vec<String> {
    let lakes: BTreeSet<&str> = results.iter().map(|r| r.key.lake.as_str()).collect();
    lakes.into_iter().map(str::to_string).collect()
}

/// (tick position, ρ) pairs for one (season, lake) series, in year order.
fn series_points(
    results: &[GroupResult],
    season: Season,
    lake: &str,
    ticks: &BTreeMap<String, usize>,
) -> Vec<(f64, f64)> {
    results
        .iter()
        .filter(|r| r.key.season == season && r.key.lake == lake)
        .filter_map(|r| ticks.get(&r.key.year).map(|&tick| (tick as f64, r.rho)))
        .collect()
}

/// Shorten a season-spanning year label: "2005/2006" becomes "2005/06".
/// Labels in any other shape are shown as-is.
fn short_year_label(year: &str) -> String {
    if year.len() >= 9 && year.is_char_boundary(4) && year.is_char_boundary(7) {
        format!("{}/{}", &year[..4], &year[7..9])
    } else {
        year.to_string()
    }
}

/// Axis label for a fractional x position: only integer slots get text.
fn tick_label(x: f64, labels: &[String]) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 0.01 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::GroupKey;

    fn result(season: Season, lake: &str, year: &str, rho: f64) -> GroupResult {
        GroupResult {
            key: GroupKey {
                season,
                lake: lake.to_string(),
                year: year.to_string(),
            },
            rho,
            count: 1,
        }
    }

    #[test]
    fn test_short_year_label() {
        assert_eq!(short_year_label("2005/2006"), "2005/06");
        assert_eq!(short_year_label("2010/2011"), "2010/11");
        assert_eq!(short_year_label("2006"), "2006");
    }

    #[test]
    fn test_year_ticks_uniform_spacing() {
        // Non-contiguous years still get consecutive slots
        let results = vec![
            result(Season::Arrival, "A", "2005/2006", 0.9),
            result(Season::Arrival, "A", "2009/2010", 0.8),
            result(Season::Departure, "A", "2005/2006", 0.7),
        ];
        let ticks = year_ticks(&results);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks["2005/2006"], 0);
        assert_eq!(ticks["2009/2010"], 1);
    }

    #[test]
    fn test_series_points_year_order() {
        let results = vec![
            result(Season::Arrival, "A", "2005/2006", 0.9),
            result(Season::Arrival, "A", "2006/2007", 0.8),
            result(Season::Arrival, "B", "2006/2007", 0.5),
        ];
        let ticks = year_ticks(&results);
        let points = series_points(&results, Season::Arrival, "A", &ticks);
        assert_eq!(points, vec![(0.0, 0.9), (1.0, 0.8)]);

        // Lake B only has the second year: no fabricated first point
        let points_b = series_points(&results, Season::Arrival, "B", &ticks);
        assert_eq!(points_b, vec![(1.0, 0.5)]);
    }

    #[test]
    fn test_tick_label_integer_slots_only() {
        let labels = vec!["2005/06".to_string(), "2006/07".to_string()];
        assert_eq!(tick_label(0.0, &labels), "2005/06");
        assert_eq!(tick_label(1.0, &labels), "2006/07");
        assert_eq!(tick_label(0.5, &labels), "");
        assert_eq!(tick_label(-0.5, &labels), "");
        assert_eq!(tick_label(5.0, &labels), "");
    }

    #[test]
    fn test_render_smoke() {
        let results = vec![
            result(Season::Arrival, "Krankesjön", "2005/2006", 0.92),
            result(Season::Arrival, "Krankesjön", "2006/2007", 0.95),
            result(Season::Departure, "Krankesjön", "2005/2006", 0.74),
            result(Season::Arrival, "Søgård Sø", "2006/2007", 0.98),
        ];
        let config = AnalysisConfig {
            output_path: std::env::temp_dir().join("synchrony_render_smoke.svg"),
            ..AnalysisConfig::default()
        };
        render(&results, &config).unwrap();
        let written = std::fs::metadata(&config.output_path).unwrap();
        assert!(written.len() > 0);
        std::fs::remove_file(&config.output_path).unwrap();
    }
}
