// sortscope: step-by-step sorting visualizer with reversible playback

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortscope::algorithms::Algorithm;
use sortscope::constants::{
    ARRAY_SIZE_DEFAULT, ARRAY_SIZE_MAX, ARRAY_SIZE_MIN, PLAY_INTERVAL_DEFAULT_MS,
};
use sortscope::input::{self, ArrayKind};
use sortscope::step::StepKind;
use sortscope::trace::produce_trace_for;
use sortscope::ui::app::{App, AppConfig};

#[derive(Debug, Parser)]
#[command(name = "sortscope", version, about)]
struct Cli {
    /// bubble, selection, insertion, merge, quick, heap or radix
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Comma-separated values to sort instead of a generated array
    #[arg(short, long)]
    values: Option<String>,

    /// Length of generated arrays
    #[arg(short, long, default_value_t = ARRAY_SIZE_DEFAULT, value_parser = parse_size)]
    size: usize,

    /// Shape of generated arrays: random, reversed or nearly-sorted
    #[arg(short, long, default_value = "random")]
    kind: ArrayKind,

    /// Milliseconds between steps while playing
    #[arg(long, default_value_t = PLAY_INTERVAL_DEFAULT_MS)]
    speed_ms: u64,

    /// Ring the terminal bell on swaps and when a sort finishes
    #[arg(long)]
    sound: bool,

    /// Write logs here (filtered by RUST_LOG); logging is off without it
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print trace statistics and the sorted array instead of starting the TUI
    #[arg(long)]
    summary: bool,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (ARRAY_SIZE_MIN..=ARRAY_SIZE_MAX).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "size must be between {} and {}",
            ARRAY_SIZE_MIN, ARRAY_SIZE_MAX
        ))
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();
    Ok(())
}

fn print_summary(algorithm: Algorithm, values: &[i64]) -> Result<(), Box<dyn std::error::Error>> {
    let trace = produce_trace_for(algorithm, values)?;
    println!("{} {}", algorithm.label(), algorithm.complexity());
    println!("input:       {:?}", trace.input());
    println!("steps:       {}", trace.len());
    println!("comparisons: {}", trace.comparisons());
    println!("swaps:       {}", trace.swaps());

    let counts = trace.kind_counts();
    for kind in StepKind::ALL {
        if let Some(count) = counts.get(&kind) {
            println!("  {:<12} {}", kind.as_str(), count);
        }
    }
    println!("result:      {:?}", trace.final_snapshot());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let values = match &cli.values {
        Some(text) => match input::parse_custom(text) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => input::generate(cli.kind, cli.size),
    };

    if cli.summary {
        return print_summary(cli.algorithm, &values);
    }

    let config = AppConfig {
        algorithm: cli.algorithm,
        // Regenerating from custom values keeps their length
        size: if cli.values.is_some() {
            values.len().max(ARRAY_SIZE_MIN)
        } else {
            cli.size
        },
        input: values,
        kind: cli.kind,
        interval_ms: cli.speed_ms,
        sound: cli.sound,
    };

    // Panics caught while producing a trace reach the status bar; keep the
    // default hook from printing over the alternate screen meanwhile
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(|info| tracing::error!("{}", info)));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);
    panic::set_hook(default_hook);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
