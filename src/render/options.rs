/// A rendering format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum RenderFormat {
    /// HTML.
    #[default]
    Html,
    /// JSON.
    Json,
}

/// Rendering options.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    format: RenderFormat,
}

impl RenderOptions {
    /// Creates rendering options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendering format.
    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    /// Sets a rendering format.
    pub const fn set_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }
}
