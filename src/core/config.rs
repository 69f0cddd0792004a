//! Render options + fluent builder.

use std::fmt;

use crate::core::{
    constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    terminal::Capabilities,
    theme::{self, Theme},
};

/// Glyph set used for drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Follow [`Capabilities::unicode`].
    #[default]
    Auto,
    Ascii,
    Unicode,
    /// 2×4 dot cells; line charts only, Unicode elsewhere.
    Braille,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// How several series share a bar category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarMode {
    /// Side by side, one bar per series.
    #[default]
    Grouped,
    /// One bar per category, series segments piled end to end.
    Stacked,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Auto => "auto",
            Style::Ascii => "ascii",
            Style::Unicode => "unicode",
            Style::Braille => "braille",
        })
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

impl fmt::Display for BarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BarMode::Grouped => "grouped",
            BarMode::Stacked => "stacked",
        })
    }
}

/// Immutable parameters handed to every render call.
#[derive(Debug, Clone)]
pub struct Options {
    pub width: usize,
    pub height: usize,
    pub title: String,
    /// Per-point (line) or per-category (bar, pie) labels.
    pub labels: Vec<String>,
    pub style: Style,
    pub orientation: Orientation,
    pub bar_mode: BarMode,
    pub show_values: bool,
    pub show_axes: bool,
    pub show_legend: bool,
    /// `None` defers to `capabilities.color`.
    pub color: Option<bool>,
    pub theme: &'static Theme,
    pub capabilities: Capabilities,
}

impl Default for Options {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Options {
    #[inline]
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Canvas width, with 0 meaning "whatever the terminal offers".
    #[inline]
    #[must_use]
    pub fn canvas_width(&self) -> usize {
        if self.width == 0 {
            self.capabilities.width
        } else {
            self.width
        }
    }

    #[inline]
    #[must_use]
    pub fn canvas_height(&self) -> usize {
        if self.height == 0 {
            self.capabilities.height
        } else {
            self.height
        }
    }

    #[inline]
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(self.capabilities.color)
    }

    /// Whether box-drawing / block glyphs may be used.
    #[inline]
    #[must_use]
    pub fn unicode_enabled(&self) -> bool {
        match self.style {
            Style::Ascii => false,
            Style::Unicode | Style::Braille => true,
            Style::Auto => self.capabilities.unicode,
        }
    }

    #[inline]
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Label `i`, if one was supplied.
    #[inline]
    #[must_use]
    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels.get(i).map(String::as_str)
    }
}

/// Fluent builder; nothing is validated until render time.
#[derive(Debug)]
pub struct OptionsBuilder {
    width: usize,
    height: usize,
    title: Option<String>,
    labels: Vec<String>,
    style: Style,
    orientation: Orientation,
    bar_mode: BarMode,
    show_values: bool,
    show_axes: bool,
    show_legend: bool,
    color: Option<bool>,
    theme: Option<&'static Theme>,
    capabilities: Capabilities,
}

impl OptionsBuilder {
    pub(crate) fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: None,
            labels: Vec::new(),
            style: Style::Auto,
            orientation: Orientation::Horizontal,
            bar_mode: BarMode::Grouped,
            show_values: false,
            show_axes: true,
            show_legend: true,
            color: None,
            theme: None,
            capabilities: Capabilities::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = h;
        self
    }
    #[inline]
    #[must_use]
    pub fn size(self, w: usize, h: usize) -> Self {
        self.width(w).height(h)
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn title_opt(mut self, t: Option<&str>) -> Self {
        if let Some(t) = t {
            self.title = Some(t.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
    #[inline]
    #[must_use]
    pub fn style(mut self, s: Style) -> Self {
        self.style = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn orientation(mut self, o: Orientation) -> Self {
        self.orientation = o;
        self
    }
    #[inline]
    #[must_use]
    pub fn vertical(self) -> Self {
        self.orientation(Orientation::Vertical)
    }
    #[inline]
    #[must_use]
    pub fn bar_mode(mut self, m: BarMode) -> Self {
        self.bar_mode = m;
        self
    }
    #[inline]
    #[must_use]
    pub fn show_values(mut self, on: bool) -> Self {
        self.show_values = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn show_axes(mut self, on: bool) -> Self {
        self.show_axes = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn show_legend(mut self, on: bool) -> Self {
        self.show_legend = on;
        self
    }
    /// Force colour on or off; leave unset to follow the capabilities.
    #[inline]
    #[must_use]
    pub fn color(mut self, on: bool) -> Self {
        self.color = Some(on);
        self
    }
    #[inline]
    #[must_use]
    pub fn color_opt(mut self, on: Option<bool>) -> Self {
        self.color = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn theme(mut self, t: &'static Theme) -> Self {
        self.theme = Some(t);
        self
    }
    #[inline]
    #[must_use]
    pub fn capabilities(mut self, c: Capabilities) -> Self {
        self.capabilities = c;
        self
    }

    #[must_use]
    pub fn build(self) -> Options {
        Options {
            width: self.width,
            height: self.height,
            title: self.title.unwrap_or_default(),
            labels: self.labels,
            style: self.style,
            orientation: self.orientation,
            bar_mode: self.bar_mode,
            show_values: self.show_values,
            show_axes: self.show_axes,
            show_legend: self.show_legend,
            color: self.color,
            theme: self.theme.unwrap_or(&theme::DEFAULT),
            capabilities: self.capabilities,
        }
    }
}

impl From<OptionsBuilder> for Options {
    fn from(b: OptionsBuilder) -> Self {
        b.build()
    }
}
