use clap::Parser;
use enthusiasm::bootstrap::{self, Overrides};
use enthusiasm::config::Config;
use enthusiasm::greeting::MAX_ENTHUSIASM_LEVEL;
use enthusiasm::logging::{init_tracing, LogTarget};
use enthusiasm::ui::app::App;
use enthusiasm::ui::hello::Hello;
use enthusiasm::ui::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "enthusiasm", version, about = "Greets a language with adjustable enthusiasm")]
struct Cli {
    /// Language name to greet (overrides config)
    #[arg(long)]
    name: Option<String>,

    /// Initial enthusiasm level (overrides config)
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=MAX_ENTHUSIASM_LEVEL)
    )]
    level: Option<i64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the greeting once and exit instead of starting the UI
    #[arg(long)]
    print: bool,

    /// Do not record dispatched actions
    #[arg(long)]
    no_action_log: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_path())
    };
    if let Err(err) = init_tracing(&config.logging.level, target) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let overrides = Overrides {
        name: cli.name,
        level: cli.level,
        disable_action_log: cli.no_action_log,
    };
    let wiring = bootstrap::build(&config, &overrides);

    if cli.print {
        let view = Hello::render_from(&wiring.container)?;
        println!("{}", view.greeting);
        return Ok(());
    }

    let mut app = App::new(wiring.container);
    if let Some(history) = wiring.history {
        app = app.with_transitions(history);
    }
    runtime::run(app)
}
