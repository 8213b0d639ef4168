//! Gamma history: cumulative transcriptions over time.

use chrono::{DateTime, TimeZone, Utc};
use plotters::prelude::*;

use super::{
    chart_buffer, drawing_error, encode_png, font_available, ACCENT_COLOR, BACKGROUND_COLOR,
    CHART_HEIGHT, CHART_WIDTH, FONT_FAMILY, TEXT_COLOR,
};
use crate::{
    error::chart::ChartError,
    model::rate::{GammaPoint, RateEntry},
    strings::history,
};

/// Builds the gamma history from the transcriptions per day.
///
/// The history starts at the gamma the volunteer had at `after`: their current
/// gamma minus everything completed since. Points after `before` are dropped.
///
/// # Arguments
/// - `gamma` - The volunteer's current gamma
/// - `rates` - Transcriptions per day completed since `after`, oldest first
/// - `after` - Start of the history, `None` for the volunteer's first transcription
/// - `before` - End of the history, `None` for now
pub fn build_history(
    gamma: u64,
    rates: &[RateEntry],
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
) -> Vec<GammaPoint> {
    let completed_since: u64 = rates.iter().map(|rate| rate.count).sum();
    let mut total = gamma.saturating_sub(completed_since);
    let mut points = Vec::with_capacity(rates.len() + 1);

    if let Some(after) = after {
        points.push(GammaPoint {
            time: after,
            gamma: total,
        });
    }

    for rate in rates {
        total += rate.count;
        points.push(GammaPoint {
            time: rate.date,
            gamma: total,
        });
    }

    if let Some(before) = before {
        points.retain(|point| point.time <= before);
    }

    points
}

/// Renders the history as PNG line chart.
///
/// # Arguments
/// - `points` - The history, oldest first
/// - `title` - Caption of the chart
///
/// # Returns
/// - `Ok(Vec<u8>)` - The PNG image
/// - `Err(ChartError::FontUnavailable)` - No font is registered
/// - `Err(ChartError)` - Drawing or encoding failed
pub fn render_history(points: &[GammaPoint], title: &str) -> Result<Vec<u8>, ChartError> {
    if !font_available() {
        return Err(ChartError::FontUnavailable);
    }

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(ChartError::Drawing("No points to draw".to_string()));
    };

    let start = first.time.timestamp();
    // A single point still needs a non-empty range.
    let end = last.time.timestamp().max(start + 1);
    let min_gamma = points.iter().map(|p| p.gamma).min().unwrap_or(0);
    let max_gamma = points.iter().map(|p| p.gamma).max().unwrap_or(0).max(min_gamma + 1);

    let mut buffer = chart_buffer();

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&BACKGROUND_COLOR).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT_FAMILY, 28).into_font().color(&TEXT_COLOR))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(start..end, min_gamma..max_gamma)
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .light_line_style(&BACKGROUND_COLOR)
            .bold_line_style(&TEXT_COLOR.mix(0.2))
            .x_labels(6)
            .x_label_formatter(&|timestamp| format_date(*timestamp))
            .x_desc(history::CHART_X_LABEL)
            .y_desc(history::CHART_Y_LABEL)
            .label_style((FONT_FAMILY, 16).into_font().color(&TEXT_COLOR))
            .axis_desc_style((FONT_FAMILY, 18).into_font().color(&TEXT_COLOR))
            .axis_style(&TEXT_COLOR)
            .draw()
            .map_err(drawing_error)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.time.timestamp(), p.gamma)),
                ACCENT_COLOR.stroke_width(3),
            ))
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
    }

    encode_png(buffer)
}

fn format_date(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|time| time.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 6, day, 0, 0, 0).unwrap()
    }

    fn rate(d: u32, count: u64) -> RateEntry {
        RateEntry { date: day(d), count }
    }

    /// Tests building the history of a time frame.
    ///
    /// Verifies that the history starts at the gamma before the time frame.
    ///
    /// Expected: Start point at `after`, then the running total per day
    #[test]
    fn accumulates_from_start_gamma() {
        let points = build_history(110, &[rate(2, 3), rate(4, 7)], Some(day(1)), None);

        let gammas: Vec<(DateTime<Utc>, u64)> = points.iter().map(|p| (p.time, p.gamma)).collect();
        assert_eq!(gammas, vec![(day(1), 100), (day(2), 103), (day(4), 110)]);
    }

    #[test]
    fn drops_points_after_end() {
        let points = build_history(110, &[rate(2, 3), rate(4, 7)], Some(day(1)), Some(day(3)));

        assert_eq!(points.len(), 2);
        assert_eq!(points.last().map(|p| p.gamma), Some(103));
    }

    #[test]
    fn whole_history_starts_at_first_day() {
        let points = build_history(10, &[rate(2, 4), rate(3, 6)], None, None);

        assert_eq!(points.first().map(|p| p.gamma), Some(4));
        assert_eq!(points.last().map(|p| p.gamma), Some(10));
    }

    #[test]
    fn formats_axis_dates() {
        assert_eq!(format_date(day(5).timestamp()), "2021-06-05");
    }
}
