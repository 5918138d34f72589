//! Point tables on disk: columns `x`, `y`; CSV (with header) or Parquet.

use anyhow::{bail, Context, Result};
use planar::Point2;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

fn scan(path: &Path) -> Result<LazyFrame> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?),
        Some("parquet") => Ok(LazyFrame::scan_parquet(path, ScanArgsParquet::default())?),
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    }
}

/// `create_dir_all` on the parent of `path`, if it has a non-empty one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Read points in row order. Integer columns are cast to f64; nulls and
/// non-numeric cells are rejected.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let df = scan(path)?
        .select([
            col("x").strict_cast(DataType::Float64),
            col("y").strict_cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    if xs.null_count() > 0 || ys.null_count() > 0 {
        bail!("{} contains empty x/y cells", path.display());
    }
    let points = xs
        .into_no_null_iter()
        .zip(ys.into_no_null_iter())
        .map(|(x, y)| Point2::new(x, y))
        .collect();
    Ok(points)
}

/// Write points as CSV with header `x,y`, creating parent directories.
pub fn write_points_csv(path: &Path, points: &[Point2]) -> Result<()> {
    ensure_parent_dir(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
