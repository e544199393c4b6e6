use htm_core::{Convex, Vector3, VertexFormat};
use htm_index::{Cover, Markup, Mesh};

fn main() -> anyhow::Result<()> {
    let depth = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 6,
    };

    // Clockwise as seen from outside the sphere.
    let convex = Convex::parse_vertices(&["70,45", "60,70", "60,20"], VertexFormat::LatLon)?;
    println!("{}", convex);

    let mut cover = Cover::new(convex, depth)?;
    let stats = cover.run()?.clone();
    println!(
        "\ndepth {}: {} full, {} partial, {} outside ({} classified)\n",
        depth, stats.full, stats.partial, stats.outside, stats.classified
    );

    for trixel in cover.trixels_with(Markup::Full)? {
        println!("  full     {}", trixel.id());
    }

    let ranges = cover.ranges(20)?;
    println!("\n{} ranges at level {}:", ranges.len(), ranges.level());
    for range in &ranges {
        println!("  {}  ({} leaves)", range, range.count());
    }

    let target = Vector3::from_lat_lon_deg(63.0, 45.0);
    let leaf = Mesh::global().locate(&target, ranges.level())?;
    println!("\n(63°, 45°) -> {} covered: {}", leaf, ranges.contains(leaf));

    Ok(())
}
