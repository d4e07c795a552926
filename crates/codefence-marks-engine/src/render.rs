//! Seams between the scanner and whatever draws the decorations.
//!
//! The engine never touches theme state, file paths or a particular UI. A
//! front end supplies an [`IconResolver`] to turn icon file names into
//! something it can draw, and a [`DecorationSink`] that receives each fresh
//! scan result and owns any rendering handles derived from it.

use std::collections::BTreeMap;

use crate::decorations::{DecorationKind, Decorations, scan};
use crate::document::LineSource;
use crate::keywords::KeywordConfig;

/// Size given to gutter icons.
pub const GUTTER_ICON_SIZE: &str = "16px";

/// The host's active color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
    HighContrast,
    HighContrastLight,
}

impl ThemeKind {
    /// Dark and high-contrast (dark) themes use dark icons.
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeKind::Dark | ThemeKind::HighContrast)
    }

    pub fn icon_variant(self) -> IconVariant {
        if self.is_dark() {
            IconVariant::Dark
        } else {
            IconVariant::Light
        }
    }
}

/// Which set of icon assets to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Light,
    Dark,
}

impl IconVariant {
    /// Directory name the variant's assets conventionally live under.
    pub fn dir_name(self) -> &'static str {
        match self {
            IconVariant::Light => "light",
            IconVariant::Dark => "dark",
        }
    }
}

/// Turns an icon file name into whatever the front end draws.
pub trait IconResolver {
    type Icon;

    fn resolve(&self, file_name: &str, variant: IconVariant) -> Self::Icon;
}

/// How a decoration label should look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorationStyle<I> {
    Background { color: String, whole_line: bool },
    GutterIcon { icon: I, size: &'static str },
}

/// Builds a style for every label the aggregator can emit under `config`.
pub fn decoration_styles<R: IconResolver>(
    config: &KeywordConfig,
    theme: ThemeKind,
    resolver: &R,
) -> BTreeMap<String, DecorationStyle<R::Icon>> {
    let variant = theme.icon_variant();
    let mut styles = BTreeMap::new();
    for entry in config.entries() {
        if let Some(color) = &entry.style.color {
            styles.insert(
                DecorationKind::Background.label(&entry.keyword),
                DecorationStyle::Background {
                    color: color.clone(),
                    whole_line: true,
                },
            );
        }
        if let Some(icon) = &entry.style.icon {
            styles.insert(
                DecorationKind::Icon.label(&entry.keyword),
                DecorationStyle::GutterIcon {
                    icon: resolver.resolve(icon, variant),
                    size: GUTTER_ICON_SIZE,
                },
            );
        }
    }
    styles
}

/// Receives scan results and applies them to a view.
///
/// Each call replaces whatever the previous call applied.
pub trait DecorationSink {
    type Error;

    fn apply(&mut self, decorations: Decorations) -> Result<(), Self::Error>;
}

/// Rescans `doc` and hands the result to `sink`.
///
/// Front ends call this whenever the document they display changes.
pub fn refresh<D, S>(doc: &D, config: &KeywordConfig, sink: &mut S) -> Result<(), S::Error>
where
    D: LineSource + ?Sized,
    S: DecorationSink,
{
    sink.apply(scan(doc, config))
}
