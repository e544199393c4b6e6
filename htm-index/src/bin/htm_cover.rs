use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use htm_core::shapes::parse_vertex;
use htm_core::{Convex, VertexFormat};
use htm_index::constants::DEFAULT_RANGE_LEVEL;
use htm_index::{write_ranges, Cover, CoverConfig, Markup, Mesh, RangeFormat, RangeSet};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Clone, Copy, ValueEnum)]
enum MarkupFilter {
    All,
    Full,
    Partial,
}

#[derive(Parser)]
#[command(name = "htm-cover")]
#[command(about = "Cover convex regions with HTM trixels and look up point ids")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cover a convex polygon and print its id ranges
    Cover(CoverArgs),
    /// Print the trixel holding a point
    Lookup(LookupArgs),
}

#[derive(Parser)]
struct CoverArgs {
    /// Polygon vertices in clockwise order: "x,y,z", or "lat,lon" with --latlon.
    /// Values may start with '-', so give --points last.
    #[arg(long, num_args = 3.., required = true, allow_hyphen_values = true)]
    points: Vec<String>,

    /// Maximum subdivision depth [default: 8]
    #[arg(short, long)]
    depth: Option<u32>,

    /// Level of the ids in the emitted ranges [default: 20]
    #[arg(long)]
    range_level: Option<u32>,

    /// Read vertices as latitude,longitude (decimal degrees or DMS)
    #[arg(long)]
    latlon: bool,

    /// Print ranges as integer ids (same as --format id)
    #[arg(short = 'l', conflicts_with = "format")]
    long_ids: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "name")]
    format: RangeFormat,

    /// Which part of the cover to emit
    #[arg(long, value_enum, default_value = "all")]
    markup: MarkupFilter,

    /// Write ranges to this file instead of stdout
    #[arg(long)]
    file: Option<PathBuf>,

    /// JSON file with max_depth / range_level; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print cover timing
    #[arg(long)]
    timing: bool,
}

#[derive(Parser)]
struct LookupArgs {
    /// Point as "x,y,z", or "lat,lon" with --latlon
    #[arg(allow_hyphen_values = true)]
    point: String,

    /// Level of the returned trixel
    #[arg(short, long, default_value_t = DEFAULT_RANGE_LEVEL)]
    depth: u32,

    /// Read the point as latitude,longitude (decimal degrees or DMS)
    #[arg(long)]
    latlon: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Cover(args) => run_cover(&args),
        Commands::Lookup(args) => run_lookup(&args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();
}

fn vertex_format(latlon: bool) -> VertexFormat {
    if latlon {
        VertexFormat::LatLon
    } else {
        VertexFormat::Cartesian
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CoverConfig> {
    let Some(path) = path else {
        return Ok(CoverConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn run_cover(args: &CoverArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if let Some(level) = args.range_level {
        config.range_level = level;
    }
    config.validate()?;

    let convex = Convex::parse_vertices(&args.points, vertex_format(args.latlon))
        .context("Illegal query polygon")?;
    tracing::debug!(%convex, "Parsed query region");

    let mut cover = Cover::from_config(convex, &config)?;

    let start = args.timing.then(Instant::now);
    let stats = cover.run()?.clone();
    if let Some(start_time) = start {
        eprintln!(
            "Cover computed in {:.2} ms",
            start_time.elapsed().as_secs_f64() * 1000.0
        );
    }
    tracing::info!(
        classified = stats.classified,
        full = stats.full,
        partial = stats.partial,
        outside = stats.outside,
        final_level = stats.final_level,
        "Cover finished"
    );

    let ranges: RangeSet = match args.markup {
        MarkupFilter::All => cover.ranges(config.range_level)?,
        MarkupFilter::Full => cover.ranges_with(Markup::Full, config.range_level)?,
        MarkupFilter::Partial => cover.ranges_with(Markup::Partial, config.range_level)?,
    };
    let format = if args.long_ids {
        RangeFormat::Id
    } else {
        args.format
    };

    match &args.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_ranges(BufWriter::new(file), &ranges, format)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} ranges saved to {}", ranges.len(), path.display());
        }
        None => write_ranges(io::stdout().lock(), &ranges, format)?,
    }

    Ok(())
}

fn run_lookup(args: &LookupArgs) -> anyhow::Result<()> {
    let point = parse_vertex(&args.point, vertex_format(args.latlon))
        .with_context(|| format!("Illegal point '{}'", args.point))?;
    let id = Mesh::global().locate(&point, args.depth)?;
    if !id.is_valid() {
        bail!("Point {} could not be placed in the mesh", args.point);
    }
    println!("{} {}", id.name(), id.id());
    Ok(())
}
