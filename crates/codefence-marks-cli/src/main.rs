mod color;
mod icons;
mod report;
mod viewer;

use anyhow::{Context, Result};
use codefence_marks_config::{Config, ThemeSetting};
use codefence_marks_engine::{KeywordConfig, MarkdownFile, ThemeKind, io};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{env, io::stdout, path::PathBuf, process};

use crate::viewer::App;

const USAGE: &str =
    "--init-config | [--json] [--theme light|dark|high-contrast|high-contrast-light] <file-or-directory>";

#[derive(Debug, PartialEq)]
struct Args {
    init_config: bool,
    json: bool,
    theme: Option<ThemeSetting>,
    input: PathBuf,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut init_config = false;
    let mut json = false;
    let mut theme = None;
    let mut input = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--init-config" => init_config = true,
            "--json" => json = true,
            "--theme" => {
                let name = iter.next().ok_or("--theme needs a value")?;
                theme = Some(
                    ThemeSetting::parse(name).ok_or_else(|| format!("unknown theme '{name}'"))?,
                );
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument '{extra}'")),
        }
    }

    if init_config {
        if json || theme.is_some() || input.is_some() {
            return Err("--init-config takes no other arguments".to_string());
        }
        return Ok(Args {
            init_config,
            json,
            theme,
            input: PathBuf::new(),
        });
    }

    Ok(Args {
        init_config,
        json,
        theme,
        input: input.ok_or("missing file or directory")?,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map_or("codefence-marks-cli", String::as_str);
    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    if args.init_config {
        let path = Config::with_keywords(&KeywordConfig::default())
            .save()
            .context("writing default config")?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    // Config file is optional; a broken one is fatal so it isn't silently ignored
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };
    let keywords = config
        .keyword_config()
        .context("building keyword configuration")?;
    let theme = args
        .theme
        .map(ThemeKind::from)
        .or_else(|| config.theme_kind())
        .unwrap_or_default();
    log::info!("scanning with {} keywords, theme {theme:?}", keywords.len());

    let (root, files) = match io::collect_markdown_files(&args.input) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Error: Input path '{}' is invalid: {e}", args.input.display());
            process::exit(1);
        }
    };

    if args.json {
        let resources = config
            .resources_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let report = report::build_report(&root, &files, &keywords, theme, &resources)?;
        return report::write_report(&report, stdout().lock());
    }

    run_viewer(root, files, keywords, theme)
}

fn run_viewer(
    root: PathBuf,
    files: Vec<MarkdownFile>,
    keywords: KeywordConfig,
    theme: ThemeKind,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(root, files, keywords, theme);

    // Main loop
    let res = viewer::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
