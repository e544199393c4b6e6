use htm_core::{Angle, Convex, Halfspace, Vector3, VertexFormat};
use htm_index::{write_ranges, Cover, IdRange, Markup, Mesh, MeshId, RangeFormat, Trixel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

fn random_on_sphere(rng: &mut StdRng) -> Vector3 {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let lon = rng.gen_range(0.0..std::f64::consts::TAU);
    Vector3::from_spherical(lon, z.asin())
}

fn triangle() -> Convex {
    Convex::parse_vertices(&["70,45", "60,70", "60,20"], VertexFormat::LatLon).unwrap()
}

fn pole_triangle() -> Convex {
    Convex::parse_vertices(&["80,0", "80,-120", "80,120"], VertexFormat::LatLon).unwrap()
}

fn north() -> Convex {
    Convex::from_halfspaces([Halfspace::new(Vector3::z_axis(), 0.0)])
}

fn run(convex: Convex, depth: u32) -> Cover<'static> {
    let mut cover = Cover::new(convex, depth).unwrap();
    cover.run().unwrap();
    cover
}

fn base_names(cover: &Cover) -> BTreeSet<String> {
    cover
        .trixels()
        .unwrap()
        .map(|t| t.id().name()[..2].to_string())
        .collect()
}

#[test]
fn test_triangle_cover_shape() {
    let cover = run(triangle(), 4);
    let stats = cover.stats().unwrap();
    assert_eq!((stats.full, stats.partial), (0, 17));
    assert_eq!(base_names(&cover), BTreeSet::from(["N3".to_string()]));

    let cover = run(triangle(), 6);
    let stats = cover.stats().unwrap();
    assert_eq!((stats.full, stats.partial), (37, 63));
    for t in cover.trixels_with(Markup::Partial).unwrap() {
        assert_eq!(t.level(), 6);
    }
}

#[test]
fn test_pole_triangle_cover() {
    let convex = pole_triangle();
    assert!(convex.contains_strict(&Vector3::z_axis()));

    let cover = run(convex, 4);
    let stats = cover.stats().unwrap();
    assert_eq!((stats.full, stats.partial), (2, 14));
    assert!(cover
        .trixels_with(Markup::Partial)
        .unwrap()
        .iter()
        .all(|t| t.level() == 4));

    let expected: BTreeSet<String> = ["N0", "N1", "N2", "N3"].iter().map(|s| s.to_string()).collect();
    assert_eq!(base_names(&cover), expected);
}

#[test]
fn test_cover_completeness() {
    let depth = 6;
    let cover = run(triangle(), depth);
    let trixels: Vec<&Trixel> = cover.trixels().unwrap().collect();
    let ranges = cover.ranges(depth).unwrap();
    let fine = cover.ranges(12).unwrap();
    let mesh = Mesh::global();

    let mut rng = StdRng::seed_from_u64(0x5EED_0001);
    let mut inside = 0;
    while inside < 2000 {
        let p = Vector3::from_lat_lon_deg(rng.gen_range(59.0..71.0), rng.gen_range(15.0..75.0));
        if !cover.convex().contains_strict(&p) {
            continue;
        }
        inside += 1;

        assert!(
            trixels.iter().any(|t| t.contains_loose(&p)),
            "no covering trixel for {}",
            p
        );
        let leaf = mesh.locate(&p, depth).unwrap();
        assert!(ranges.contains(leaf), "{} not in cover ranges", leaf);
        let leaf = mesh.locate(&p, 12).unwrap();
        assert!(fine.contains(leaf), "{} not in level-12 ranges", leaf);
    }
}

#[test]
fn test_full_leaves_are_inside() {
    let cover = run(triangle(), 7);
    let mesh = Mesh::global();
    let mut rng = StdRng::seed_from_u64(7);
    for t in cover.trixels_with(Markup::Full).unwrap() {
        for corner in t.corners() {
            assert!(cover.convex().contains_strict(corner));
        }
        let rebuilt = mesh.trixel(t.id()).unwrap();
        assert_eq!(&rebuilt, t);

        // Points drawn from the trixel interior lie in the region.
        let [a, b, c] = *t.corners();
        for _ in 0..10 {
            let (u, v): (f64, f64) = (rng.gen(), rng.gen());
            let (u, v) = if u + v > 1.0 { (1.0 - u, 1.0 - v) } else { (u, v) };
            let p = (a * (1.0 - u - v) + b * u + c * v).to_scale();
            assert!(cover.convex().contains_loose(&p));
        }
    }
}

fn holed_regions() -> Vec<Convex> {
    let hole = |center: Vector3, degrees: f64| {
        Halfspace::cap(center, Angle::from_degrees(degrees)).complement()
    };
    let mut regions = vec![
        Convex::from_halfspaces([hole(Vector3::from_lat_lon_deg(-80.0, 0.0), 5.0)]),
        Convex::from_halfspaces([
            Halfspace::cap(Vector3::on_sphere(1.0, 1.0, 1.0), Angle::from_degrees(40.0)),
            hole(Vector3::on_sphere(1.0, 1.0, 1.0), 10.0),
        ]),
    ];
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..4 {
        let center = random_on_sphere(&mut rng);
        let radius = rng.gen_range(5.0..60.0);
        regions.push(Convex::from_halfspaces([hole(
            random_on_sphere(&mut rng),
            rng.gen_range(2.0..30.0),
        )]));
        regions.push(Convex::from_halfspaces([
            Halfspace::cap(center, Angle::from_degrees(radius + 20.0)),
            hole(center, radius),
        ]));
    }
    regions
}

#[test]
fn test_classification_monotonic() {
    let mesh = Mesh::global();
    let mut regions = vec![triangle(), pole_triangle(), north()];
    regions.extend(holed_regions());
    for convex in regions {
        let mut level: Vec<Trixel> = mesh.bases().to_vec();
        for _ in 0..4 {
            let mut next = Vec::with_capacity(level.len() * 4);
            for t in &level {
                let markup = t.markup(&convex);
                let children = t.expand().unwrap();
                for child in &children {
                    let child_markup = child.markup(&convex);
                    match markup {
                        Markup::Full => assert_eq!(child_markup, Markup::Full, "{}", child.id()),
                        Markup::Outside => {
                            assert_eq!(child_markup, Markup::Outside, "{}", child.id());
                            assert!(child.corners().iter().all(|v| !convex.contains_loose(v)));
                        }
                        Markup::Partial => {}
                    }
                }
                next.extend(children);
            }
            level = next;
        }
    }
}

#[test]
fn test_holed_cover_completeness() {
    let depth = 6;
    let mut rng = StdRng::seed_from_u64(0x5EED_0002);
    for convex in holed_regions() {
        let cover = run(convex, depth);
        let ranges = cover.ranges(depth).unwrap();
        let full = cover.ranges_with(Markup::Full, depth).unwrap();
        for _ in 0..500 {
            let p = random_on_sphere(&mut rng);
            let leaf = Mesh::global().locate(&p, depth).unwrap();
            if cover.convex().contains_strict(&p) {
                assert!(ranges.contains(leaf), "{} ({}) not covered", leaf, p);
            } else if full.contains(leaf) {
                assert!(cover.convex().contains_loose(&p), "{} in full leaf {}", p, leaf);
            }
        }
    }
}

#[test]
fn test_locate_boundary_points() {
    let mesh = Mesh::global();
    let boundary = [
        Vector3::x_axis(),
        -Vector3::y_axis(),
        Vector3::on_sphere(1.0, 1.0, 0.0),
        Vector3::on_sphere(0.0, 1.0, 1.0),
        Vector3::on_sphere(-1.0, 0.0, -1.0),
    ];
    for p in boundary {
        let id = mesh.locate(&p, 20).unwrap();
        assert!(id.is_valid(), "{} unresolved", p);
        assert!(mesh.trixel(id).unwrap().contains_loose(&p));
    }
}

#[test]
fn test_range_merge_correctness() {
    let cover = run(pole_triangle(), 5);
    let level = 9;
    let ranges = cover.ranges(level).unwrap();

    for pair in ranges.pairs().windows(2) {
        assert!(pair[0].low <= pair[0].high);
        assert!(pair[0].high.id() + 1 < pair[1].low.id());
    }

    let mut expected = 0;
    for t in cover.trixels().unwrap() {
        let (low, high) = t.id().descendant_range(level).unwrap();
        expected += high.id() - low.id() + 1;
        assert!(ranges.contains(t.id()));
    }
    assert_eq!(ranges.leaf_count(), expected);

    let full = cover.ranges_with(Markup::Full, level).unwrap();
    let partial = cover.ranges_with(Markup::Partial, level).unwrap();
    assert_eq!(full.leaf_count() + partial.leaf_count(), expected);
}

#[test]
fn test_small_cap_cover() {
    let center = Vector3::from_lat_lon_deg(-5.375, 83.633);
    let convex = Convex::circle(center, Angle::from_degrees(0.5));
    let cover = run(convex, 10);
    let ranges = cover.ranges(14).unwrap();
    assert!(!ranges.is_empty());
    assert!(ranges.contains(Mesh::global().locate(&center, 14).unwrap()));

    let far = Mesh::global()
        .locate(&Vector3::from_lat_lon_deg(5.0, 83.633), 14)
        .unwrap();
    assert!(!ranges.contains(far));
}

#[test]
fn test_report_to_file() {
    let cover = run(triangle(), 4);
    let ranges = cover.ranges(20).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.txt");
    let file = std::fs::File::create(&path).unwrap();
    write_ranges(std::io::BufWriter::new(file), &ranges, RangeFormat::Name).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), ranges.len());
    for (line, range) in lines.iter().zip(ranges.pairs()) {
        let (low, high) = line.split_once(", ").unwrap();
        assert_eq!(low.parse::<MeshId>().unwrap(), range.low);
        assert_eq!(high.parse::<MeshId>().unwrap(), range.high);
        assert_eq!(range.low.level(), 20);
    }
}

#[test]
fn test_report_json_round_trip() {
    let cover = run(north(), 2);
    let ranges = cover.ranges(6).unwrap();
    let mut out = tempfile::NamedTempFile::new().unwrap();
    write_ranges(out.as_file_mut(), &ranges, RangeFormat::Json).unwrap();

    let text = std::fs::read_to_string(out.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["level"], 6);
    let pairs: Vec<IdRange> = serde_json::from_value(value["ranges"].clone()).unwrap();
    assert_eq!(pairs, ranges.pairs());
    assert!(pairs.iter().all(|r| r.low.level() == 6 && r.high.level() == 6));
}
