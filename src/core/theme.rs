//! Fixed registry of named palettes.
//!
//! Themes are `const` data shared by `&'static` reference; rendering only
//! ever reads them through [`Theme::series_color`].

use crate::core::color::AnsiCode;

/// An immutable named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: AnsiCode,
    pub secondary: AnsiCode,
    pub accent: AnsiCode,
    pub muted: AnsiCode,
    /// `None` leaves text in the terminal's own foreground.
    pub text: Option<AnsiCode>,
    /// Reused cyclically by series index.
    pub series: &'static [AnsiCode],
}

impl Theme {
    /// Colour for series `index`, cycling through the palette.
    #[inline]
    #[must_use]
    pub fn series_color(&self, index: usize) -> AnsiCode {
        if self.series.is_empty() {
            return self.primary;
        }
        self.series[index % self.series.len()]
    }

    /// Look a theme up by name (case-insensitive).
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        let wanted = match name.trim() {
            w if w.eq_ignore_ascii_case("mono") => "monochrome",
            w => w,
        };
        THEMES.iter().copied().find(|t| t.name.eq_ignore_ascii_case(wanted))
    }
}

pub static DEFAULT: Theme = Theme {
    name: "default",
    primary: AnsiCode::blue(),
    secondary: AnsiCode::green(),
    accent: AnsiCode::yellow(),
    muted: AnsiCode::gray(),
    text: None,
    series: &[
        AnsiCode::red(),
        AnsiCode::blue(),
        AnsiCode::yellow(),
        AnsiCode::magenta(),
        AnsiCode::green(),
        AnsiCode::cyan(),
    ],
};

/// Tuned for dark backgrounds.
pub static DARK: Theme = Theme {
    name: "dark",
    primary: AnsiCode::cyan(),
    secondary: AnsiCode::magenta(),
    accent: AnsiCode::yellow(),
    muted: AnsiCode::gray(),
    text: Some(AnsiCode::white()),
    series: &[
        AnsiCode::cyan(),
        AnsiCode::magenta(),
        AnsiCode::yellow(),
        AnsiCode::green(),
        AnsiCode::blue(),
        AnsiCode::red(),
    ],
};

/// Tuned for light backgrounds.
pub static LIGHT: Theme = Theme {
    name: "light",
    primary: AnsiCode::blue(),
    secondary: AnsiCode::red(),
    accent: AnsiCode::orange(),
    muted: AnsiCode::gray(),
    text: Some(AnsiCode::black()),
    series: &[
        AnsiCode::blue(),
        AnsiCode::red(),
        AnsiCode::green(),
        AnsiCode::magenta(),
        AnsiCode::orange(),
        AnsiCode::black(),
    ],
};

pub static MONOCHROME: Theme = Theme {
    name: "monochrome",
    primary: AnsiCode::white(),
    secondary: AnsiCode::gray(),
    accent: AnsiCode::white(),
    muted: AnsiCode::gray(),
    text: Some(AnsiCode::white()),
    series: &[AnsiCode::white(), AnsiCode::gray()],
};

/// Every registered theme, in display order.
pub static THEMES: [&Theme; 4] = [&DEFAULT, &DARK, &LIGHT, &MONOCHROME];
