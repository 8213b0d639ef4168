use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// No font was registered at startup, so axis labels can't be drawn.
    #[error("No chart font is available")]
    FontUnavailable,

    /// The font file couldn't be read or isn't a valid font.
    ///
    /// # Fields
    /// - Path of the font file and the reason
    #[error("Failed to load chart font: {0}")]
    FontLoad(String),

    /// The plotting backend failed while drawing.
    #[error("Failed to draw chart: {0}")]
    Drawing(String),

    /// The rendered bitmap could not be encoded as PNG.
    #[error(transparent)]
    Encoding(#[from] image::ImageError),
}
