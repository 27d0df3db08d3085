mod theme_utils;

use crate::config::ThemeSettings;
use anyhow::Context;
use ratatui::style::Color;
use theme_utils::parse_color;

const DARK_WHITE: Color = Color::Rgb(210, 210, 210);
const MID_GRAY: Color = Color::Rgb(100, 100, 100);
const DARK_GRAY: Color = Color::Rgb(25, 25, 25);
const GOOD_RED: Color = Color::Rgb(255, 70, 70);
const GOLD: Color = Color::Rgb(220, 220, 100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub progress_complete: Color,
    pub progress_incomplete: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bg: DARK_GRAY,
            border: MID_GRAY,
            text: DARK_WHITE,
            text_muted: MID_GRAY,
            accent: GOLD,
            progress_complete: GOOD_RED,
            progress_incomplete: MID_GRAY,
        }
    }
}

impl TryFrom<&ThemeSettings> for Theme {
    type Error = anyhow::Error;

    fn try_from(colors: &ThemeSettings) -> anyhow::Result<Self> {
        let parse = |name: &str, value: &str| {
            parse_color(value).with_context(|| format!("Invalid theme color `{name}`"))
        };

        Ok(Theme {
            bg: parse("background", &colors.background)?,
            border: parse("border", &colors.border)?,
            text: parse("text", &colors.text)?,
            text_muted: parse("text_muted", &colors.text_muted)?,
            accent: parse("accent", &colors.accent)?,
            progress_complete: parse("progress_complete", &colors.progress_complete)?,
            progress_incomplete: parse("progress_incomplete", &colors.progress_incomplete)?,
        })
    }
}
