use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shapescore::config::ScoringWeights;
use shapescore::scorer::{ScoringResult, ShapeAnalysis};
use shapescore::Shape;

fn score_color(score: f64) -> Color {
    if score >= 85.0 {
        Color::Green
    } else if score >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// One row per scored stroke: label, shape, final score and sub-scores.
pub fn print_results_table(results: &[(String, Shape, ScoringResult)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Stroke").add_attribute(Attribute::Bold),
        Cell::new("Shape"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Acc"),
        Cell::new("Smth"),
        Cell::new("Cmpl"),
        Cell::new("Feedback"),
    ]);

    for i in 2..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (label, shape, r) in results {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(shape.to_string()),
            Cell::new(r.score.to_string()).fg(score_color(r.score.as_f64())),
            Cell::new(r.details.accuracy),
            Cell::new(r.details.smoothness),
            Cell::new(r.details.completeness),
            Cell::new(&r.feedback),
        ]);
    }
    println!("\n{}", table);
}

/// The named features an analyzer combined, plus its gate.
pub fn print_feature_table(shape: Shape, analysis: &ShapeAnalysis) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("{} feature", shape)).add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (name, value) in &analysis.features {
        table.add_row(vec![Cell::new(name), Cell::new(format!("{:.3}", value))]);
    }
    table.add_row(vec![
        Cell::new("accuracy").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", analysis.accuracy)),
    ]);
    table.add_row(vec![
        Cell::new("gate").fg(Color::Red),
        Cell::new(format!("{:.3}", analysis.gate)).fg(Color::Red),
    ]);
    println!("\n{}", table);
}

pub fn print_weights(w: &ScoringWeights) {
    use strum::IntoEnumIterator;

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Shape").add_attribute(Attribute::Bold),
        Cell::new("Accuracy"),
        Cell::new("Smoothness"),
        Cell::new("Completeness"),
    ]);
    for shape in Shape::iter() {
        let b = w.blend(shape);
        table.add_row(vec![
            Cell::new(shape.to_string()),
            Cell::new(format!("{:.2}", b.accuracy)),
            Cell::new(format!("{:.2}", b.smoothness)),
            Cell::new(format!("{:.2}", b.completeness)),
        ]);
    }
    println!("\n{}", table);
}
