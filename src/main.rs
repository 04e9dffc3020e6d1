use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

use typeahead::app::App;
use typeahead::candidates::{CandidateSource, load_candidates};
use typeahead::config::{self, Config, ConfigResult};
use typeahead::filter::filter;
use typeahead::{logging, terminal};

/// Search-as-you-type combobox for the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Item list: a JSON array of strings or one item per line.
    /// Reads stdin when piped; falls back to the config file or a built-in list.
    items_file: Option<PathBuf>,

    /// Quiet period in milliseconds before the list is filtered
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Maximum number of suggestions shown at once
    #[arg(long, value_name = "N")]
    max_visible: Option<usize>,

    /// Config file to use instead of ~/.config/typeahead/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Print the suggestions for QUERY and exit without opening the UI
    #[arg(long, value_name = "QUERY")]
    filter: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(args.debug_log.as_deref())?;

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => ConfigResult {
            config: config::load_required_config(path)?,
            warning: None,
        },
        None => config::load_config(),
    };
    apply_overrides(&mut config, &args);

    let source = CandidateSource::resolve(
        args.items_file.clone(),
        std::io::stdin().is_terminal(),
        config.items.values.clone(),
    );
    let candidates = load_candidates(&source)?;

    if let Some(query) = &args.filter {
        for suggestion in filter(query, &candidates) {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    let mut app = App::new(candidates, &config.combobox);
    if let Some(warning) = warning {
        app.notification.show(&warning);
    }

    let result = terminal::session(|terminal| run(terminal, &mut app));
    app.teardown();

    result?;

    if let Some(output) = app.output {
        println!("{}", output);
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(debounce_ms) = args.debounce_ms {
        config.combobox.debounce_ms = debounce_ms;
    }
    if let Some(max_visible) = args.max_visible {
        config.combobox.max_visible = max_visible;
    }
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Wake up in time for a pending debounce deadline
        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
