//! Point-set loaders for the `hull` command.
//!
//! - `.csv` / `.parquet`: integer columns `x` and `y` (read through polars).
//! - `.json`: array of `[x, y]` pairs or `{"x": .., "y": ..}` objects.

use anyhow::{anyhow, bail, Context, Result};
use chainhull::Point;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// One JSON entry; both spellings are accepted in the same file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([i64; 2]),
    Object(Point),
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Pair(xy) => Point::from(xy),
            RawPoint::Object(p) => p,
        }
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => read_json(path),
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?;
            read_frame(lf).with_context(|| format!("reading {}", path.display()))
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?;
            read_frame(lf).with_context(|| format!("reading {}", path.display()))
        }
        _ => bail!(
            "unsupported input {} (expected .csv, .parquet or .json)",
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<RawPoint> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as a point array", path.display()))?;
    Ok(raw.into_iter().map(Point::from).collect())
}

fn read_frame(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf.select([col("x"), col("y")]).collect()?;
    let xs = int_column(&df, "x")?;
    let ys = int_column(&df, "y")?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => Err(anyhow!("row {row}: missing x or y")),
        })
        .collect()
}

/// Integer column as `i64`; floats and strings are rejected, not truncated.
fn int_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let s = df.column(name)?;
    if !s.dtype().is_integer() {
        bail!("column {name} has dtype {}, expected integers", s.dtype());
    }
    // strict: u64 values above i64::MAX fail instead of turning into nulls
    let s = s
        .strict_cast(&DataType::Int64)
        .with_context(|| format!("column {name} does not fit in i64"))?;
    Ok(s.i64()?.into_iter().collect())
}
