//! Terminal capability probe.
//!
//! The renderer never calls into this module; callers that want
//! auto-detected defaults run [`Capabilities::detect`] once and hand the
//! result to the options builder.

use std::io::IsTerminal;

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// What `Style::Auto`, colour auto-detect and zero-sized canvases fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub width: usize,
    pub height: usize,
    pub unicode: bool,
    pub color: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            unicode: true,
            color: false,
        }
    }
}

impl Capabilities {
    /// Probe stdout and the process environment.
    #[must_use]
    pub fn detect() -> Self {
        let (w, h) = terminal_geometry();
        let caps = Self::from_env(
            |k| std::env::var(k).ok(),
            (usize::from(w.0), usize::from(h.0)),
            std::io::stdout().is_terminal(),
        );
        log::debug!("detected terminal capabilities: {caps:?}");
        caps
    }

    /// Build capabilities from an environment lookup, a measured size and
    /// whether stdout is a tty.
    pub fn from_env<F>(var: F, (width, height): (usize, usize), is_tty: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            width: if width == 0 { DEFAULT_WIDTH } else { width },
            height: if height == 0 { DEFAULT_HEIGHT } else { height },
            unicode: supports_unicode(&var),
            color: supports_color(&var, is_tty),
        }
    }
}

/// Current terminal geometry, then `COLUMNS`/`LINES`, then 80×24.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or_else(|| {
        let env = |k: &str| std::env::var(k).ok().and_then(|v| v.trim().parse::<u16>().ok());
        match (env("COLUMNS"), env("LINES")) {
            (Some(w), Some(h)) if w > 0 && h > 0 => (Width(w), Height(h)),
            _ => (Width(DEFAULT_WIDTH as u16), Height(DEFAULT_HEIGHT as u16)),
        }
    })
}

fn non_empty<F: Fn(&str) -> Option<String>>(var: &F, key: &str) -> Option<String> {
    var(key).filter(|v| !v.is_empty())
}

fn supports_color<F: Fn(&str) -> Option<String>>(var: &F, is_tty: bool) -> bool {
    if non_empty(var, "NO_COLOR").is_some() {
        return false;
    }
    if non_empty(var, "FORCE_COLOR").is_some() {
        return true;
    }
    let term = non_empty(var, "TERM").unwrap_or_default();
    if term.is_empty() || term == "dumb" {
        return false;
    }
    const COLOR_TERMS: [&str; 6] = ["color", "ansi", "xterm", "screen", "tmux", "rxvt"];
    if COLOR_TERMS.iter().any(|t| term.contains(t)) {
        return true;
    }
    if cfg!(windows) && (non_empty(var, "WT_SESSION").is_some()) {
        return true;
    }
    is_tty
}

fn supports_unicode<F: Fn(&str) -> Option<String>>(var: &F) -> bool {
    if var("LANG").as_deref() == Some("C") || var("LC_ALL").as_deref() == Some("C") {
        return false;
    }
    let locale = ["LANG", "LC_ALL", "LC_CTYPE"]
        .iter()
        .find_map(|k| non_empty(var, k))
        .unwrap_or_default()
        .to_ascii_uppercase();
    if locale.contains("UTF-8") || locale.contains("UTF8") {
        return true;
    }
    // Modern Linux, macOS and Windows consoles all render UTF-8.
    cfg!(any(target_os = "linux", target_os = "macos", windows))
}
