use crate::error::{ShapeScoreError, SsResult};
use crate::geometry::Point;
use crate::shapes::Shape;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Either `{"x": .., "y": ..}` or `[x, y]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Object { x, y } => Point::new(x, y),
            RawPoint::Pair(pair) => Point::from(pair),
        }
    }
}

/// One entry of a batch file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeRecord {
    #[serde(default)]
    pub label: String,
    pub shape: Shape,
    pub points: Vec<Point>,
}

#[derive(Deserialize)]
struct RawStrokeRecord {
    #[serde(default)]
    label: String,
    shape: String,
    points: Vec<RawPoint>,
}

/// Reads `x,y` rows after a header line. Rows that fail to parse are skipped and counted.
pub fn load_csv<R: Read>(reader: R) -> SsResult<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?;
    if headers.len() < 2 {
        return Err(ShapeScoreError::Validation(format!(
            "stroke CSV needs x and y columns, found {:?}",
            headers
        )));
    }

    let mut points = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        match (rec[0].parse::<f64>(), rec[1].parse::<f64>()) {
            (Ok(x), Ok(y)) if x.is_finite() && y.is_finite() => points.push(Point::new(x, y)),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} invalid rows in stroke CSV.", skipped);
    }
    Ok(points)
}

/// Reads a JSON array of points.
pub fn load_json<R: Read>(reader: R) -> SsResult<Vec<Point>> {
    let raw: Vec<RawPoint> = serde_json::from_reader(reader)?;
    Ok(raw.into_iter().map(Point::from).collect())
}

/// Picks the format from the file extension (`.csv`, otherwise JSON).
pub fn load_stroke<P: AsRef<Path>>(path: P) -> SsResult<Vec<Point>> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let points = if is_csv {
        load_csv(file)?
    } else {
        load_json(file)?
    };
    debug!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Reads a JSON array of `{label, shape, points}` records.
pub fn load_batch_from_reader<R: Read>(reader: R) -> SsResult<Vec<StrokeRecord>> {
    let raw: Vec<RawStrokeRecord> = serde_json::from_reader(reader)?;
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| {
            let shape = r
                .shape
                .parse::<Shape>()
                .map_err(|_| ShapeScoreError::UnknownShape(r.shape.clone()))?;
            let label = if r.label.is_empty() {
                format!("#{}", i + 1)
            } else {
                r.label
            };
            Ok(StrokeRecord {
                label,
                shape,
                points: r.points.into_iter().map(Point::from).collect(),
            })
        })
        .collect()
}

pub fn load_batch<P: AsRef<Path>>(path: P) -> SsResult<Vec<StrokeRecord>> {
    let file = BufReader::new(File::open(path)?);
    load_batch_from_reader(file)
}
