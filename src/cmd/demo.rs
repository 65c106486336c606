use crate::reports;
use clap::Args;
use shapescore::config::Config;
use shapescore::scorer::Scorer;
use shapescore::{synth, Shape, SsResult};
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    #[command(flatten)]
    pub config: Config,

    /// Maximum per-axis offset added to every sample.
    #[arg(short, long, default_value_t = 0.0)]
    pub jitter: f64,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Show each analyzer's feature breakdown.
    #[arg(long, default_value_t = false)]
    pub explain: bool,
}

pub fn run(args: DemoArgs, scorer: &Scorer) -> SsResult<()> {
    println!("\n=== SYNTHETIC STROKES ===");
    reports::print_weights(&scorer.weights);

    let mut results = Vec::new();
    for (i, shape) in Shape::iter().enumerate() {
        let ideal = synth::ideal(shape);
        let stroke = if args.jitter > 0.0 {
            synth::jitter(&ideal, args.jitter, args.seed.map(|s| s.wrapping_add(i as u64)))
        } else {
            ideal
        };

        if args.explain {
            if let Some(analysis) = scorer.analyze(shape, &stroke) {
                reports::print_feature_table(shape, &analysis);
            }
        }
        results.push((format!("ideal {}", shape), shape, scorer.score(shape, &stroke)));
    }

    // The same stroke judged against the wrong target.
    let circle = synth::ideal(Shape::Circle);
    results.push((
        "circle as star5".to_string(),
        Shape::Star,
        scorer.score(Shape::Star, &circle),
    ));

    reports::print_results_table(&results);
    Ok(())
}
