use crate::reports;
use clap::Args;
use shapescore::config::Config;
use shapescore::loader;
use shapescore::scorer::Scorer;
use shapescore::{Shape, SsResult};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// circle, star5 (or star), square, triangle
    #[arg(short, long)]
    pub shape: Shape,

    /// Stroke file: `.csv` with an `x,y` header, otherwise a JSON point array.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Also print the analyzer's feature breakdown.
    #[arg(long, default_value_t = false)]
    pub explain: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> SsResult<()> {
    let path = loader::load_stroke(&args.input)?;
    info!(
        "Scoring {} points from {} as {}",
        path.len(),
        args.input.display(),
        args.shape
    );

    let result = scorer.score(args.shape, &path);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let label = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stroke".to_string());
    reports::print_results_table(&[(label, args.shape, result)]);

    if args.explain {
        match scorer.analyze(args.shape, &path) {
            Some(analysis) => reports::print_feature_table(args.shape, &analysis),
            None => println!("(stroke below the {}-point minimum)", args.shape.min_points()),
        }
    }
    Ok(())
}
