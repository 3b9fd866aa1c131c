//! Chart sink: renders the six report panels into a single PNG.
//!
//! Uses the plotters bitmap backend so rendering works in headless
//! environments (CI, containers) without a display server. The panel
//! layout is a 2x3 grid: run and wicket totals, average vs strike rate,
//! economy, and the two derived per-match rates.

use crate::error::{Result, StatsError};
use crate::models::{EnrichedBattingRecord, EnrichedBowlingRecord, SeasonReport};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;
use std::path::Path;

const CHART_WIDTH: u32 = 1800;
const CHART_HEIGHT: u32 = 1200;

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Render all six panels of the report into `output_path` as one PNG.
pub fn render_charts(report: &SeasonReport, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(StatsError::chart)?;

    let title = format!("IPL {} - Season Statistics", report.season);
    let root = root
        .titled(&title, ("sans-serif", 40))
        .map_err(StatsError::chart)?;

    let panels = root.split_evenly((2, 3));
    draw_runs_bar(&panels[0], &report.batting)?;
    draw_wickets_bar(&panels[1], &report.bowling)?;
    draw_average_vs_strike_rate(&panels[2], &report.batting)?;
    draw_economy_line(&panels[3], &report.bowling)?;
    draw_runs_per_match(&panels[4], &report.batting)?;
    draw_wickets_per_match(&panels[5], &report.bowling)?;

    root.present().map_err(StatsError::chart)?;
    Ok(())
}

/// Last word of a player name, used where full names would overlap.
fn surname(name: &str) -> String {
    name.split_whitespace().last().unwrap_or(name).to_string()
}

fn draw_runs_bar(area: &Panel, records: &[EnrichedBattingRecord]) -> Result<()> {
    let max_runs = records.iter().map(|r| r.runs).max().unwrap_or(0) as f64;
    let names: Vec<String> = records.iter().map(|r| surname(&r.player)).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Top Run Scorers", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(52)
        .build_cartesian_2d(0f64..records.len() as f64, 0f64..max_runs * 1.15)
        .map_err(StatsError::chart)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(records.len())
        .x_label_formatter(&|x| names.get(x.floor() as usize).cloned().unwrap_or_default())
        .y_desc("Total Runs")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, r.runs as f64)],
                Palette99::pick(i).mix(0.8).filled(),
            )
        }))
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Text::new(
                r.runs.to_string(),
                (i as f64 + 0.35, r.runs as f64 * 1.02),
                ("sans-serif", 14),
            )
        }))
        .map_err(StatsError::chart)?;

    Ok(())
}

fn draw_wickets_bar(area: &Panel, records: &[EnrichedBowlingRecord]) -> Result<()> {
    let max_wickets = records.iter().map(|r| r.wickets).max().unwrap_or(0) as f64;
    let names: Vec<String> = records.iter().map(|r| surname(&r.player)).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Top Wicket Takers", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(52)
        .build_cartesian_2d(0f64..records.len() as f64, 0f64..max_wickets * 1.15)
        .map_err(StatsError::chart)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(records.len())
        .x_label_formatter(&|x| names.get(x.floor() as usize).cloned().unwrap_or_default())
        .y_desc("Total Wickets")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, r.wickets as f64)],
                Palette99::pick(i + 5).mix(0.8).filled(),
            )
        }))
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Text::new(
                r.wickets.to_string(),
                (i as f64 + 0.42, r.wickets as f64 * 1.02),
                ("sans-serif", 14),
            )
        }))
        .map_err(StatsError::chart)?;

    Ok(())
}

fn draw_average_vs_strike_rate(area: &Panel, records: &[EnrichedBattingRecord]) -> Result<()> {
    let x_min = records.iter().map(|r| r.average).fold(f64::INFINITY, f64::min);
    let x_max = records
        .iter()
        .map(|r| r.average)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_min = records
        .iter()
        .map(|r| r.strike_rate)
        .fold(f64::INFINITY, f64::min);
    let y_max = records
        .iter()
        .map(|r| r.strike_rate)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption("Batting Average vs Strike Rate", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(52)
        .build_cartesian_2d((x_min - 2.0)..(x_max + 2.0), (y_min - 5.0)..(y_max + 5.0))
        .map_err(StatsError::chart)?;

    chart
        .configure_mesh()
        .x_desc("Average")
        .y_desc("Strike Rate")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(StatsError::chart)?;

    // Point radius scales with run volume.
    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            let radius = (r.runs / 60).max(4) as i32;
            Circle::new(
                (r.average, r.strike_rate),
                radius,
                Palette99::pick(i).mix(0.5).filled(),
            )
        }))
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().map(|r| {
            Text::new(
                surname(&r.player),
                (r.average, r.strike_rate),
                ("sans-serif", 13),
            )
        }))
        .map_err(StatsError::chart)?;

    Ok(())
}

fn draw_economy_line(area: &Panel, records: &[EnrichedBowlingRecord]) -> Result<()> {
    let y_min = records.iter().map(|r| r.economy).fold(f64::INFINITY, f64::min);
    let y_max = records
        .iter()
        .map(|r| r.economy)
        .fold(f64::NEG_INFINITY, f64::max);
    let names: Vec<String> = records.iter().map(|r| surname(&r.player)).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Bowlers Economy Rate", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(52)
        .build_cartesian_2d(0f64..records.len() as f64, (y_min - 0.5)..(y_max + 0.5))
        .map_err(StatsError::chart)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(records.len())
        .x_label_formatter(&|x| names.get(x.floor() as usize).cloned().unwrap_or_default())
        .y_desc("Economy Rate")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(StatsError::chart)?;

    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as f64 + 0.5, r.economy)),
            RED.stroke_width(2),
        ))
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Circle::new((i as f64 + 0.5, r.economy), 5, RED.filled())
        }))
        .map_err(StatsError::chart)?;

    Ok(())
}

fn draw_runs_per_match(area: &Panel, records: &[EnrichedBattingRecord]) -> Result<()> {
    let max_rate = records
        .iter()
        .map(|r| r.runs_per_match)
        .fold(f64::NEG_INFINITY, f64::max);
    let names: Vec<String> = records.iter().map(|r| surname(&r.player)).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Average Runs Per Match", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(84)
        .build_cartesian_2d(0f64..max_rate * 1.25, 0f64..records.len() as f64)
        .map_err(StatsError::chart)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(records.len())
        .y_label_formatter(&|y| names.get(y.floor() as usize).cloned().unwrap_or_default())
        .x_desc("Runs Per Match")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Rectangle::new(
                [(0.0, i as f64 + 0.15), (r.runs_per_match, i as f64 + 0.85)],
                ORANGE.mix(0.8).filled(),
            )
        }))
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Text::new(
                format!("{:.1}", r.runs_per_match),
                (r.runs_per_match * 1.02, i as f64 + 0.4),
                ("sans-serif", 14),
            )
        }))
        .map_err(StatsError::chart)?;

    Ok(())
}

fn draw_wickets_per_match(area: &Panel, records: &[EnrichedBowlingRecord]) -> Result<()> {
    let max_rate = records
        .iter()
        .map(|r| r.wickets_per_match)
        .fold(f64::NEG_INFINITY, f64::max);
    let names: Vec<String> = records.iter().map(|r| surname(&r.player)).collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Average Wickets Per Match", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(84)
        .build_cartesian_2d(0f64..max_rate * 1.25, 0f64..records.len() as f64)
        .map_err(StatsError::chart)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(records.len())
        .y_label_formatter(&|y| names.get(y.floor() as usize).cloned().unwrap_or_default())
        .x_desc("Wickets Per Match")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Rectangle::new(
                [
                    (0.0, i as f64 + 0.15),
                    (r.wickets_per_match, i as f64 + 0.85),
                ],
                GREEN.mix(0.8).filled(),
            )
        }))
        .map_err(StatsError::chart)?;

    chart
        .draw_series(records.iter().enumerate().map(|(i, r)| {
            Text::new(
                format!("{:.2}", r.wickets_per_match),
                (r.wickets_per_match * 1.02, i as f64 + 0.4),
                ("sans-serif", 14),
            )
        }))
        .map_err(StatsError::chart)?;

    Ok(())
}
