//! Non-interactive JSON output.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use codefence_marks_engine::{
    Decorations, DecorationStyle, KeywordConfig, MarkdownFile, Range, ThemeKind, aggregate,
    classify_blocks, decoration_styles, io,
};
use serde::Serialize;

use crate::icons::ResourceIcons;

#[derive(Debug, Serialize)]
pub struct Report {
    pub styles: BTreeMap<String, StyleReport>,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StyleReport {
    Background { color: String, whole_line: bool },
    GutterIcon { icon: PathBuf, size: String },
}

impl From<DecorationStyle<PathBuf>> for StyleReport {
    fn from(style: DecorationStyle<PathBuf>) -> Self {
        match style {
            DecorationStyle::Background { color, whole_line } => {
                StyleReport::Background { color, whole_line }
            }
            DecorationStyle::GutterIcon { icon, size } => StyleReport::GutterIcon {
                icon,
                size: size.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub blocks: Vec<BlockReport>,
    pub decorations: Decorations,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct BlockReport {
    pub keyword: String,
    pub info: String,
    pub range: Range,
}

/// Scans every file and collects the results with the styles they map to.
pub fn build_report(
    root: &Path,
    files: &[MarkdownFile],
    config: &KeywordConfig,
    theme: ThemeKind,
    resources: &Path,
) -> Result<Report> {
    let styles = decoration_styles(config, theme, &ResourceIcons::new(resources))
        .into_iter()
        .map(|(label, style)| (label, StyleReport::from(style)))
        .collect();

    let files = files
        .iter()
        .map(|file| {
            let doc = io::load_document(file.relative_path(), root)
                .with_context(|| format!("reading {}", file.relative_path()))?;
            let classified: Vec<_> = classify_blocks(&doc, config).collect();
            let blocks = classified
                .iter()
                .map(|c| BlockReport {
                    keyword: c.keyword.to_string(),
                    info: c.block.info.clone(),
                    range: c.block.range,
                })
                .collect();
            log::info!(
                "{}: {} decorated blocks",
                file.relative_path(),
                classified.len()
            );
            Ok(FileReport {
                path: file.relative_path().to_string(),
                blocks,
                decorations: aggregate(config, classified),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Report { styles, files })
}

pub fn write_report<W: Write>(report: &Report, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}
