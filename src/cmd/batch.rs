use crate::reports;
use clap::Args;
use rayon::prelude::*;
use shapescore::config::Config;
use shapescore::loader;
use shapescore::scorer::Scorer;
use shapescore::SsResult;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON array of `{label, shape, points}` records.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Sort by score, best first.
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BatchArgs, scorer: &Scorer) -> SsResult<()> {
    let records = loader::load_batch(&args.input)?;
    info!("Scoring {} strokes from {}", records.len(), args.input.display());

    let start = Instant::now();
    let mut results: Vec<_> = records
        .par_iter()
        .map(|r| (r.label.clone(), r.shape, scorer.score(r.shape, &r.points)))
        .collect();
    info!("Batch scored in {:.2?}", start.elapsed());

    if args.sort {
        results.sort_by(|a, b| b.2.score.cmp(&a.2.score).then_with(|| a.0.cmp(&b.0)));
    }

    if args.json {
        let rows: Vec<_> = results
            .iter()
            .map(|(label, shape, result)| {
                serde_json::json!({ "label": label, "shape": shape, "result": result })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        reports::print_results_table(&results);
    }
    Ok(())
}
