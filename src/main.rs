use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use shapescore::config::{Config, ScoringWeights};
use shapescore::scorer::Scorer;
use shapescore::SsResult;
use std::process;
use tracing::{info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file of blend weights. Flags passed on the command line still win.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one stroke file against a shape.
    Score(cmd::score::ScoreArgs),
    /// Score every stroke in a batch file, in parallel.
    Batch(cmd::batch::BatchArgs),
    /// Score the built-in synthetic strokes.
    Demo(cmd::demo::DemoArgs),
}

fn resolve_weights(
    cli_path: Option<&str>,
    config: &Config,
    sub_matches: &ArgMatches,
) -> SsResult<ScoringWeights> {
    let weights = match cli_path {
        Some(path) => {
            info!("Loading weights from: {}", path);
            // File values are the base; explicit flags override them.
            let mut file_weights = ScoringWeights::load_from_file(path)?;
            file_weights.merge_from_cli(&config.weights, sub_matches);
            file_weights
        }
        None => config.weights.clone(),
    };
    weights.validate()?;
    Ok(weights)
}

fn main() {
    // Raw matches tell explicit flags apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Weight flags live in the subcommand's matches, not the root's.
    let (config, sub_name) = match &cli.command {
        Commands::Score(args) => (&args.config, "score"),
        Commands::Batch(args) => (&args.config, "batch"),
        Commands::Demo(args) => (&args.config, "demo"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        eprintln!("missing matches for subcommand '{}'", sub_name);
        process::exit(2);
    };

    if cli.weights.is_none() {
        warn!("No weights file given. Using embedded defaults plus any flags.");
    }
    let weights = match resolve_weights(cli.weights.as_deref(), config, sub_matches) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("\nFATAL ERROR LOADING WEIGHTS:");
            eprintln!("   {}", e);
            process::exit(1);
        }
    };
    let scorer = Scorer::new(weights);

    let outcome = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Batch(args) => cmd::batch::run(args, &scorer),
        Commands::Demo(args) => cmd::demo::run(args, &scorer),
    };

    if let Err(e) = outcome {
        eprintln!("{}", e);
        process::exit(1);
    }
}
