//! Board styling.
//!
//! The configuration carries colours as plain strings; this module maps
//! them onto toolkit styles. Colour names and `#rrggbb` values are both
//! accepted (whatever `ratatui`'s colour parser understands).

use ratatui::style::{Color, Modifier, Style};

use crate::config::StyleConfig;

/// Error for a colour string the toolkit cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour {name:?}")]
pub struct UnknownColor {
    name: String,
}

/// Resolved board colours.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub head_fg: Color,
    pub item_fg: Color,
}

impl Palette {
    /// Resolve the configured colour strings.
    pub fn from_style(style: &StyleConfig) -> Result<Self, UnknownColor> {
        Ok(Self {
            bg: parse_color(&style.bg)?,
            head_fg: parse_color(&style.head_fg)?,
            item_fg: parse_color(&style.item_fg)?,
        })
    }

    /// Headings: the main banner and the column titles.
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.head_fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Departure rows, reason lines and the clock.
    pub fn item(&self) -> Style {
        Style::default().fg(self.item_fg).bg(self.bg)
    }

    /// The status bar and the exit hint.
    pub fn status(&self) -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray)
    }

    /// The whole-window background.
    pub fn background(&self) -> Style {
        Style::default().bg(self.bg)
    }
}

fn parse_color(name: &str) -> Result<Color, UnknownColor> {
    name.parse::<Color>().map_err(|_| UnknownColor {
        name: name.to_owned(),
    })
}
