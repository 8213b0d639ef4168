//! Activity heatmap: transcriptions per weekday and hour.

use plotters::prelude::*;

use super::{
    chart_buffer, drawing_error, encode_png, font_available, ACCENT_COLOR, BACKGROUND_COLOR,
    CHART_HEIGHT, CHART_WIDTH, FONT_FAMILY, TEXT_COLOR,
};
use crate::{
    error::chart::ChartError, model::heatmap::HeatmapEntry, strings::heatmap,
    util::format::pluralize,
};

pub const DAYS: usize = 7;
pub const HOURS: usize = 24;
const SLOTS: i64 = (DAYS * HOURS) as i64;

/// Color of slots without activity.
const EMPTY_COLOR: RGBColor = RGBColor(0x2f, 0x31, 0x36);
/// Number of slots listed in the text summary.
const BUSIEST_SLOTS: usize = 3;

/// Transcription counts by weekday (Monday first) and hour, in local time.
pub type HeatmapGrid = [[u64; HOURS]; DAYS];

/// Arranges the entries in a grid, shifted from UTC to the local time.
///
/// Offsets are rounded to whole hours; slots shifted past the end of the week
/// wrap around to its start.
///
/// # Arguments
/// - `entries` - Counts per UTC weekday (`1`-`7`) and hour
/// - `utc_offset` - Offset of the local time in seconds
pub fn build_grid(entries: &[HeatmapEntry], utc_offset: i32) -> HeatmapGrid {
    let shift = (utc_offset as f64 / 3600.0).round() as i64;
    let mut grid = [[0; HOURS]; DAYS];

    for entry in entries {
        if !(1..=DAYS as u8).contains(&entry.day) || entry.hour as usize >= HOURS {
            continue;
        }

        let slot = (entry.day as i64 - 1) * HOURS as i64 + entry.hour as i64 + shift;
        let slot = slot.rem_euclid(SLOTS) as usize;
        grid[slot / HOURS][slot % HOURS] += entry.count;
    }

    grid
}

/// Lists the busiest slots as `Mon 14:00: 12 transcriptions`, busiest first.
pub fn busiest_slots(grid: &HeatmapGrid) -> Vec<String> {
    let mut slots: Vec<(usize, usize, u64)> = grid
        .iter()
        .enumerate()
        .flat_map(|(day, hours)| {
            hours
                .iter()
                .enumerate()
                .map(move |(hour, count)| (day, hour, *count))
        })
        .filter(|(_, _, count)| *count > 0)
        .collect();
    slots.sort_by(|a, b| b.2.cmp(&a.2));

    slots
        .into_iter()
        .take(BUSIEST_SLOTS)
        .map(|(day, hour, count)| {
            let unit = pluralize(count, "transcription", "transcriptions");
            format!("{} {hour:02}:00: {count} {unit}", heatmap::WEEKDAYS[day])
        })
        .collect()
}

/// Weekday shown in the row; Monday is the top row.
fn row_day(y: i32) -> usize {
    (DAYS as i32 - 1 - y).clamp(0, DAYS as i32 - 1) as usize
}

/// Shades the accent color by the share of the busiest slot.
fn slot_color(count: u64, max: u64) -> RGBColor {
    if count == 0 || max == 0 {
        return EMPTY_COLOR;
    }

    let share = 0.2 + 0.8 * (count as f64 / max as f64);
    let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * share).round() as u8;
    RGBColor(
        mix(EMPTY_COLOR.0, ACCENT_COLOR.0),
        mix(EMPTY_COLOR.1, ACCENT_COLOR.1),
        mix(EMPTY_COLOR.2, ACCENT_COLOR.2),
    )
}

/// Renders the heatmap as PNG.
///
/// # Returns
/// - `Ok(Vec<u8>)` - The PNG image
/// - `Err(ChartError::FontUnavailable)` - No font is registered
/// - `Err(ChartError)` - Drawing or encoding failed
pub fn render_heatmap(grid: &HeatmapGrid) -> Result<Vec<u8>, ChartError> {
    if !font_available() {
        return Err(ChartError::FontUnavailable);
    }

    let max = grid.iter().flatten().copied().max().unwrap_or(0);
    let mut buffer = chart_buffer();

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&BACKGROUND_COLOR).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                heatmap::CHART_TITLE,
                (FONT_FAMILY, 28).into_font().color(&TEXT_COLOR),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0i32..HOURS as i32, 0i32..DAYS as i32)
            .map_err(drawing_error)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(HOURS)
            .y_labels(DAYS)
            .x_label_formatter(&|hour| format!("{hour:02}"))
            .y_label_formatter(&|y| {
                heatmap::WEEKDAYS
                    .get(row_day(*y))
                    .copied()
                    .unwrap_or_default()
                    .to_string()
            })
            .label_style((FONT_FAMILY, 16).into_font().color(&TEXT_COLOR))
            .axis_style(&TEXT_COLOR)
            .draw()
            .map_err(drawing_error)?;

        let cells = grid.iter().enumerate().flat_map(|(day, hours)| {
            hours.iter().enumerate().map(move |(hour, count)| {
                let (x, y) = (hour as i32, (DAYS - 1 - day) as i32);
                Rectangle::new([(x, y), (x + 1, y + 1)], slot_color(*count, max).filled())
            })
        });
        chart.draw_series(cells).map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
    }

    encode_png(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u8, hour: u8, count: u64) -> HeatmapEntry {
        HeatmapEntry { day, hour, count }
    }

    #[test]
    fn arranges_entries_in_utc() {
        let grid = build_grid(&[entry(1, 0, 3), entry(7, 23, 5)], 0);

        assert_eq!(grid[0][0], 3);
        assert_eq!(grid[6][23], 5);
    }

    /// Tests shifting the grid to the local time.
    ///
    /// Verifies that slots past the end of the week wrap around to Monday and
    /// slots before its start to Sunday.
    #[test]
    fn shifts_by_utc_offset() {
        let grid = build_grid(&[entry(7, 23, 5), entry(1, 0, 3)], 2 * 3600);
        assert_eq!(grid[0][1], 5);
        assert_eq!(grid[0][2], 3);

        let grid = build_grid(&[entry(1, 0, 3)], -5 * 3600);
        assert_eq!(grid[6][19], 3);
    }

    #[test]
    fn rounds_half_hour_offsets() {
        let grid = build_grid(&[entry(1, 10, 1)], 37_800);

        assert_eq!(grid[0][21], 1);
    }

    #[test]
    fn ignores_invalid_entries() {
        let grid = build_grid(&[entry(0, 1, 1), entry(8, 1, 1), entry(1, 24, 1)], 0);

        assert_eq!(grid.iter().flatten().sum::<u64>(), 0);
    }

    #[test]
    fn lists_busiest_slots() {
        let grid = build_grid(&[entry(1, 14, 12), entry(3, 9, 20), entry(5, 0, 1), entry(6, 1, 2)], 0);

        assert_eq!(
            busiest_slots(&grid),
            vec![
                "Wed 09:00: 20 transcriptions",
                "Mon 14:00: 12 transcriptions",
                "Sat 01:00: 2 transcriptions"
            ]
        );
    }

    #[test]
    fn shades_by_activity() {
        assert_eq!(slot_color(0, 10), EMPTY_COLOR);
        assert_eq!(slot_color(10, 10), ACCENT_COLOR);
    }
}
