mod io;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use planar::{api, Point2, Polygon2};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Convex hulls and polygon areas for point tables")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point table (x,y); writes JSON plus a provenance sidecar
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Area of the polygon whose vertices are the table rows, in order
    Area {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write a seeded random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = ShapeArg::Disk)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Disk,
    Square,
    Circle,
}

impl From<ShapeArg> for CloudShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Disk => CloudShape::Disk,
            ShapeArg::Square => CloudShape::Square,
            ShapeArg::Circle => CloudShape::Circle,
        }
    }
}

#[derive(Debug, Serialize)]
struct HullReport {
    input_points: usize,
    vertices: Vec<[f64; 2]>,
    area: f64,
    perimeter: f64,
}

impl HullReport {
    fn new(input_points: usize, hull: &Polygon2) -> Self {
        Self {
            input_points,
            vertices: hull.iter().map(|p| [p.x, p.y]).collect(),
            area: api::area(hull),
            perimeter: hull.perimeter(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AreaReport {
    vertices: usize,
    area: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let tag = cmd.tag.as_deref();
    match cmd.action {
        Action::Hull { input, out } => hull(&input, &out, tag).map(|_| ()),
        Action::Area { input } => {
            let report = area(&input, tag)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Action::Sample {
            count,
            seed,
            index,
            shape,
            radius,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape: shape.into(),
                radius,
            };
            sample(cfg, ReplayToken::new(seed, index), &out, tag)
        }
        Action::Report => report(tag),
    }
}

fn hull(input: &Path, out: &Path, tag: Option<&str>) -> Result<HullReport> {
    let points = io::read_points(input)?;
    let hull = api::convex_hull(&points);
    let report = HullReport::new(points.len(), &hull);
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        points = points.len(),
        hull_vertices = hull.len(),
        area = report.area,
        tag,
        "hull"
    );
    if hull.is_empty() {
        tracing::warn!(points = points.len(), "fewer than 3 points; hull is empty");
    }

    write_json(out, &report)?;
    provenance::write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "hull",
            "input": input.to_string_lossy(),
            "input_points": points.len()
        }))
        .with_tag(tag),
    )?;
    Ok(report)
}

fn area(input: &Path, tag: Option<&str>) -> Result<AreaReport> {
    let polygon = Polygon2::new(io::read_points(input)?);
    let report = AreaReport {
        vertices: polygon.len(),
        area: api::area(&polygon),
    };
    tracing::info!(input = %input.display(), vertices = report.vertices, area = report.area, tag, "area");
    Ok(report)
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<&str>) -> Result<()> {
    let points: Vec<Point2> = draw_cloud(cfg, tok);
    io::write_points_csv(out, &points)?;
    tracing::info!(
        out = %out.display(),
        points = points.len(),
        seed = tok.seed,
        index = tok.index,
        tag,
        "sample"
    );
    provenance::write_sidecar(
        out,
        Payload::new(serde_json::json!({
            "command": "sample",
            "count": cfg.count,
            "shape": format!("{:?}", cfg.shape),
            "radius": cfg.radius,
            "seed": tok.seed,
            "index": tok.index
        }))
        .with_tag(tag),
    )?;
    Ok(())
}

fn report(tag: Option<&str>) -> Result<()> {
    let obj = provenance::block(&Payload::new(serde_json::json!({})).with_tag(tag), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    io::ensure_parent_dir(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
