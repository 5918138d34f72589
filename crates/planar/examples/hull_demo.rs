//! Print the hull of a seeded point cloud.
//!
//! Usage:
//!   cargo run -p planar --example hull_demo -- [disk|square|circle] [count]

use planar::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let shape = match args.next() {
        None => CloudShape::Disk,
        Some(name) => CloudShape::parse(&name).unwrap_or_else(|| {
            eprintln!("unknown shape {name:?}; usage: hull_demo [disk|square|circle] [count]");
            std::process::exit(2)
        }),
    };
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(24);
    let cfg = CloudCfg {
        count,
        shape,
        radius: 10.0,
    };
    let pts = draw_cloud(cfg, ReplayToken::new(2025, 0));
    let hull = convex_hull(&pts);
    println!("points={} hull_vertices={}", pts.len(), hull.len());
    println!("{hull}");
    println!("area={:.4} perimeter={:.4}", area(&hull), hull.perimeter());
}
