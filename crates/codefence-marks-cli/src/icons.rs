use std::path::PathBuf;

use codefence_marks_engine::{IconResolver, IconVariant};

/// Resolves icons to files under `<root>/resources/<light|dark>/`.
pub struct ResourceIcons {
    root: PathBuf,
}

impl ResourceIcons {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IconResolver for ResourceIcons {
    type Icon = PathBuf;

    fn resolve(&self, file_name: &str, variant: IconVariant) -> PathBuf {
        self.root
            .join("resources")
            .join(variant.dir_name())
            .join(file_name)
    }
}

/// Resolves icons to a single gutter character for the terminal viewer.
pub struct GlyphIcons;

impl IconResolver for GlyphIcons {
    type Icon = char;

    fn resolve(&self, file_name: &str, _variant: IconVariant) -> char {
        let stem = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
        match stem {
            "check" => '✓',
            "x" => '✗',
            "console" => '›',
            _ => '●',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn resource_icons_pick_variant_directory() {
        let icons = ResourceIcons::new("/opt/marks");
        assert_eq!(
            icons.resolve("check.svg", IconVariant::Dark),
            Path::new("/opt/marks/resources/dark/check.svg")
        );
        assert_eq!(
            icons.resolve("x.svg", IconVariant::Light),
            Path::new("/opt/marks/resources/light/x.svg")
        );
    }

    #[test]
    fn glyphs_for_builtin_icons() {
        assert_eq!(GlyphIcons.resolve("check.svg", IconVariant::Dark), '✓');
        assert_eq!(GlyphIcons.resolve("x.svg", IconVariant::Light), '✗');
        assert_eq!(GlyphIcons.resolve("console.svg", IconVariant::Dark), '›');
        assert_eq!(GlyphIcons.resolve("custom.png", IconVariant::Dark), '●');
    }
}
