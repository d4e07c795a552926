//! CSS-like color strings to terminal colors.

use std::sync::LazyLock;

use codefence_marks_engine::ThemeKind;
use ratatui::style::Color;
use regex::Regex;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*[\s,]\s*(\d{1,3})\s*[\s,]\s*(\d{1,3})\s*(?:[/,]\s*([0-9]*\.?[0-9]+)\s*(%)?\s*)?\)$",
    )
    .expect("valid color regex")
});

/// A parsed color with straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    /// Parses `#rgb`, `#rrggbb`, `rgb(r g b)`, `rgb(r g b / a%)`,
    /// `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let caps = RGB_FUNCTION.captures(input)?;
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        let alpha = match caps.get(4) {
            None => 1.0,
            Some(a) => {
                let value: f32 = a.as_str().parse().ok()?;
                if caps.get(5).is_some() {
                    value / 100.0
                } else {
                    value
                }
            }
        };
        Some(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
            alpha: alpha.clamp(0.0, 1.0),
        })
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()?;
        let (r, g, b) = match digits.as_slice() {
            [r, g, b] => (r * 17, g * 17, b * 17),
            [r1, r2, g1, g2, b1, b2] => (r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2),
            _ => return None,
        };
        Some(Self {
            r,
            g,
            b,
            alpha: 1.0,
        })
    }

    /// Composites this color over an opaque background.
    pub fn over(self, background: (u8, u8, u8)) -> Color {
        let mix = |fg: u8, bg: u8| {
            (f32::from(fg) * self.alpha + f32::from(bg) * (1.0 - self.alpha)).round() as u8
        };
        Color::Rgb(
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }
}

/// Background the viewer assumes the terminal has for each theme.
pub fn theme_background(theme: ThemeKind) -> (u8, u8, u8) {
    match theme {
        ThemeKind::Dark => (30, 30, 30),
        ThemeKind::HighContrast => (0, 0, 0),
        ThemeKind::Light | ThemeKind::HighContrastLight => (255, 255, 255),
    }
}

/// Resolves a configured color to a terminal color for `theme`, or `None`
/// when it cannot be parsed.
pub fn terminal_color(css: &str, theme: ThemeKind) -> Option<Color> {
    let parsed = Rgba::parse(css);
    if parsed.is_none() {
        log::warn!("ignoring unparsable color {css:?}");
    }
    parsed.map(|c| c.over(theme_background(theme)))
}
