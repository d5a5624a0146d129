use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use seamhull::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
use seamhull::hull::build_hull;
use seamhull::{Point, Polygon, Trace};

#[derive(Parser)]
#[command(name = "seamhull")]
#[command(about = "Convex hull engine: generate clouds, build hulls, replay traces")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a replayable random point cloud and write it as JSON
    Gen {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Stream index under the seed, for families of related clouds
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Build the hull of a point-cloud JSON file and write the result
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Skip seam triangulation; the hull geometry is unchanged
        #[arg(long, default_value_t = false)]
        no_triangulate: bool,
    },
    /// Rebuild the trace for a cloud and print the live set at one frame
    Frame {
        #[arg(long)]
        input: String,
        #[arg(long)]
        frame: usize,
    },
}

/// Durable output of a run: the finished polygon plus the full trace.
#[derive(Serialize)]
struct RunOutput {
    hull: Polygon,
    trace: Trace,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            count,
            seed,
            index,
            out,
        } => gen(count, seed, index, &out),
        Action::Run {
            input,
            out,
            no_triangulate,
        } => run(&input, &out, no_triangulate),
        Action::Frame { input, frame } => frame_at(&input, frame),
    }
}

fn gen(count: usize, seed: u64, index: u64, out: &str) -> Result<()> {
    tracing::info!(count, seed, index, out, "gen");
    let points = draw_point_cloud(
        CloudCfg {
            count,
            ..CloudCfg::default()
        },
        ReplayToken { seed, index },
    );
    write_json(out, &points)
}

fn run(input: &str, out: &str, no_triangulate: bool) -> Result<()> {
    tracing::info!(input, out, no_triangulate, "run");
    let points = read_points(input)?;
    let (hull, trace) = build_hull(&points, !no_triangulate)?;
    tracing::info!(
        ring = hull.ring_len(),
        interior = hull.interior().len(),
        diagonals = hull.diagonals().len(),
        frames = trace.len(),
        "hull_built"
    );
    write_json(out, &RunOutput { hull, trace })
}

fn frame_at(input: &str, frame: usize) -> Result<()> {
    let points = read_points(input)?;
    let (_, trace) = build_hull(&points, true)?;
    ensure!(
        frame <= trace.len(),
        "frame {frame} out of range (trace has {} frames)",
        trace.len()
    );
    println!("{}", serde_json::to_string_pretty(&trace.snapshot(frame))?);
    Ok(())
}

fn read_points(input: &str) -> Result<Vec<Point>> {
    let raw = std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let points: Vec<Point> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {input}"))?;
    Ok(points)
}

fn write_json<T: Serialize>(out: &str, value: &T) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)?;
    Ok(())
}
