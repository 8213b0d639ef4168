//! Chart rendering.
//!
//! Charts are drawn with `plotters` into an RGB buffer and encoded as PNG, using
//! the colors of Discord's dark theme so they blend into the chat. Text needs a
//! font, which is registered once at startup; without one the chart commands
//! answer with a text summary instead.

pub mod heatmap;
pub mod history;

use image::{ImageFormat, RgbImage};
use plotters::style::{register_font, FontStyle, RGBColor};
use std::{
    io::Cursor,
    sync::atomic::{AtomicBool, Ordering},
};
use tracing::info;

use crate::error::chart::ChartError;

/// Discord's dark theme background.
pub const BACKGROUND_COLOR: RGBColor = RGBColor(0x36, 0x39, 0x3f);
pub const TEXT_COLOR: RGBColor = RGBColor(0xff, 0xff, 0xff);
/// Color of the plotted data.
pub const ACCENT_COLOR: RGBColor = RGBColor(148, 224, 68);

/// Font family every chart text uses.
pub const FONT_FAMILY: &str = "sans-serif";

pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 600;

static FONT_REGISTERED: AtomicBool = AtomicBool::new(false);

/// Registers the font used for chart texts.
///
/// The font data lives for the rest of the program, as `plotters` requires.
///
/// # Arguments
/// - `path` - Path of a TrueType font file
///
/// # Returns
/// - `Ok(())` - Charts can be rendered
/// - `Err(ChartError::FontLoad)` - The file is missing or not a valid font
pub fn register_chart_font(path: &str) -> Result<(), ChartError> {
    let bytes = std::fs::read(path).map_err(|err| ChartError::FontLoad(format!("{path}: {err}")))?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| ChartError::FontLoad(format!("{path}: invalid font")))?;
    FONT_REGISTERED.store(true, Ordering::Release);
    info!(path, "Registered chart font");

    Ok(())
}

/// Whether a font was registered, so charts with text can be drawn.
pub fn font_available() -> bool {
    FONT_REGISTERED.load(Ordering::Acquire)
}

/// Maps a plotting error into a chart error.
pub(crate) fn drawing_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Drawing(err.to_string())
}

/// Allocates the RGB buffer a chart is drawn into.
pub(crate) fn chart_buffer() -> Vec<u8> {
    vec![0; (CHART_WIDTH * CHART_HEIGHT * 3) as usize]
}

/// Encodes a drawn RGB buffer as PNG.
pub(crate) fn encode_png(buffer: Vec<u8>) -> Result<Vec<u8>, ChartError> {
    let image = RgbImage::from_raw(CHART_WIDTH, CHART_HEIGHT, buffer)
        .ok_or_else(|| ChartError::Drawing("Chart buffer has the wrong size".to_string()))?;

    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;

    Ok(png.into_inner())
}
