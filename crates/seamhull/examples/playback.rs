//! Scrub through a hull build frame by frame, printing the live-set size at
//! each step. The last frame holds exactly the finished polygon.

use seamhull::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
use seamhull::hull::build_hull;
use seamhull::{Drawable, HullError};

fn main() -> Result<(), HullError> {
    let points = draw_point_cloud(
        CloudCfg {
            count: 12,
            ..CloudCfg::default()
        },
        ReplayToken { seed: 7, index: 0 },
    );
    let (hull, trace) = build_hull(&points, true)?;

    for frame in 0..=trace.len() {
        println!("frame {frame:3}: {} live drawables", trace.snapshot(frame).len());
    }

    assert_eq!(trace.final_state(), vec![Drawable::Polygon(hull.clone())]);
    println!(
        "hull: {} ring vertices, {} interior, {} diagonals",
        hull.ring_len(),
        hull.interior().len(),
        hull.diagonals().len()
    );
    Ok(())
}
