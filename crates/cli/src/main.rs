use anyhow::{Context, Result};
use chainhull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use chainhull::{try_compute_hull, Hull, Point};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "chainhull-cli")]
#[command(about = "Convex hulls of integer point files")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file (.csv, .parquet or .json)
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible random point cloud as JSON
    Sample {
        #[arg(long, default_value_t = CloudCfg::default().count)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        #[arg(long, default_value_t = CloudCfg::default().radius)]
        radius: i64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Square,
    Disk,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Square => CloudShape::Square,
            Shape::Disk => CloudShape::Disk,
        }
    }
}

/// Document written by `hull`.
#[derive(Serialize)]
struct HullDoc<'a> {
    tag: Option<&'a str>,
    input_points: usize,
    twice_area: i128,
    vertices: &'a Hull,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out } => run_hull(&input, &out, cmd.tag),
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
            run_sample(cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

/// Point files are untrusted: coordinates are always range-checked.
fn run_hull(input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    let points = input::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), tag = ?tag, "hull");
    let hull = try_compute_hull(&points)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    tracing::info!(vertices = hull.len(), twice_area = %hull.twice_area(), "hull_done");

    let doc = HullDoc {
        tag: tag.as_deref(),
        input_points: points.len(),
        twice_area: hull.twice_area(),
        vertices: &hull,
    };
    write_json(out, &doc)?;

    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "input_points": points.len(),
        "vertices": hull.len(),
    });
    write_sidecar(out, Provenance::new("hull", tag, params))?;
    Ok(())
}

fn run_sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, shape = ?cfg.shape, radius = cfg.radius, seed = tok.seed, index = tok.index, "sample");
    let points: Vec<Point> = draw_cloud(cfg, tok);
    write_json(out, &points)?;

    let params = serde_json::json!({
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "radius": cfg.radius,
        "seed": tok.seed,
        "index": tok.index,
    });
    write_sidecar(out, Provenance::new("sample", tag, params))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::new("report", tag, serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
