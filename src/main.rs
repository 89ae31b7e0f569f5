use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Value, json};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use geopoly::config::FileConfig;
use geopoly::{
    Coordinate, Feature, FeatureCollection, GeoJson, Haversine, Polygon, Validation,
};

/// Polygon geometry on GeoJSON input
///
/// Examples:
///   # Is a point inside any polygon of the file?
///   geopoly -i lakes.geojson contains --lat 44.0 --lon -77.0
///
///   # Simplify every polygon, writing a new feature collection
///   geopoly -i coast.geojson -o coast.simple.geojson simplify --tolerance 0.01
///
///   # Round the corners from stdin
///   cat parcel.geojson | geopoly smooth --iterations 2
///
///   # A 500 m circle around a point
///   geopoly circle --lat 45.76 --lon 4.84 --radius 500
#[derive(Parser, Debug)]
#[command(name = "geopoly")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches geopoly.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GeoJSON input file (defaults to stdin)
    #[arg(short = 'i', long, global = true)]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long, global = true)]
    output: Option<PathBuf>,

    /// Ring validation mode
    #[arg(long, global = true)]
    validation: Option<Validation>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Test whether a point lies in each polygon
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Points on a ring boundary are not contained
        #[arg(long)]
        ignore_boundary: bool,
    },
    /// Bounding-box center of each polygon
    Center,
    /// Vertex-mean centroid of each polygon
    Centroid,
    /// Area-weighted centroid of each polygon's outer ring
    CenterOfMass,
    /// Reduce vertex count with radial distance and Douglas-Peucker
    Simplify {
        #[arg(long)]
        tolerance: Option<f64>,
        /// Skip the radial-distance pre-pass
        #[arg(long)]
        highest_quality: bool,
    },
    /// Round corners with Chaikin subdivision
    Smooth {
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// Generate a geodesic circle polygon
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Radius in meters
        #[arg(short = 'r', long)]
        radius: f64,
        #[arg(long)]
        vertices: Option<usize>,
    },
    /// Ring and coordinate counts plus validation status
    Info,
}

struct Settings {
    validation: Validation,
    verbose: bool,
    file: FileConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        FileConfig::load_from(config_path)
            .with_context(|| format!("Failed to load config file: {:?}", config_path))?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let settings = Settings {
        validation: args.validation.unwrap_or_else(|| file_config.validation()),
        verbose: args.verbose || file_config.verbose,
        file: file_config,
    };

    init_tracing(settings.verbose);

    if settings.verbose {
        print_configuration(&args, &settings);
    }

    let output = match &args.command {
        Command::Circle {
            lat,
            lon,
            radius,
            vertices,
        } => circle(Coordinate::new(*lat, *lon), *radius, *vertices, &settings)?,
        command => {
            let document = read_input(args.input.as_deref())?;
            run(command, document, &settings)?
        }
    };

    write_output(args.output.as_deref(), &output)?;

    tracing::debug!(
        elapsed_s = total_start.elapsed().as_secs_f32(),
        "done"
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_configuration(args: &Args, settings: &Settings) {
    // stdout carries the JSON result
    eprintln!("Configuration:");
    match &args.input {
        Some(path) => eprintln!("  Input: {}", path.display()),
        None => eprintln!("  Input: <stdin>"),
    }
    match &args.output {
        Some(path) => eprintln!("  Output: {}", path.display()),
        None => eprintln!("  Output: <stdout>"),
    }
    eprintln!("  Validation: {:?}", settings.validation);
    eprintln!(
        "  Simplify: tolerance {} (highest quality: {})",
        settings.file.simplify.tolerance, settings.file.simplify.highest_quality
    );
    eprintln!("  Smooth iterations: {}", settings.file.smooth.iterations);
    eprintln!(
        "  Circle: {} vertices, earth radius {}m",
        settings.file.circle.vertices, settings.file.circle.earth_radius_m
    );
    eprintln!();
}

fn read_input(path: Option<&Path>) -> Result<GeoJson> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read GeoJSON from stdin")?;
            buf
        }
    };
    GeoJson::parse(&contents).context("Failed to parse GeoJSON input")
}

fn write_output(path: Option<&Path>, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    match path {
        Some(path) => std::fs::write(path, text + "\n")
            .with_context(|| format!("Failed to write output file: {:?}", path)),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

fn run(command: &Command, document: GeoJson, settings: &Settings) -> Result<Value> {
    let features = document.into_features();
    let polygon_count: usize = features.iter().map(|f| f.geometry.polygons().len()).sum();
    if polygon_count == 0 {
        bail!("Input contains no Polygon or MultiPolygon geometry");
    }

    if settings.validation == Validation::Strict {
        for (index, feature) in features.iter().enumerate() {
            for polygon in feature.geometry.polygons() {
                polygon
                    .validate()
                    .with_context(|| format!("Invalid polygon in feature {}", index))?;
            }
        }
    }

    let progress = create_progress(features.len());
    let start = Instant::now();

    let output = match command {
        Command::Simplify {
            tolerance,
            highest_quality,
        } => {
            let tolerance = tolerance.unwrap_or(settings.file.simplify.tolerance);
            let highest_quality = *highest_quality || settings.file.simplify.highest_quality;
            if !(tolerance.is_finite() && tolerance >= 0.0) {
                bail!("Tolerance must be a non-negative number, got {}", tolerance);
            }
            transform(&features, &progress, |p| p.simplify(tolerance, highest_quality))?
        }
        Command::Smooth { iterations } => {
            let iterations = iterations.unwrap_or(settings.file.smooth.iterations);
            transform(&features, &progress, |p| p.smooth(iterations))?
        }
        Command::Contains {
            lat,
            lon,
            ignore_boundary,
        } => {
            let point = Coordinate::new(*lat, *lon);
            query(&features, &progress, |p| json!(p.contains(point, *ignore_boundary)))
        }
        Command::Center => query(&features, &progress, |p| json!(p.center())),
        Command::Centroid => query(&features, &progress, |p| json!(p.centroid())),
        Command::CenterOfMass => query(&features, &progress, |p| json!(p.center_of_mass())),
        Command::Info => query(&features, &progress, info),
        Command::Circle { .. } => bail!("circle does not read input"),
    };

    progress.finish_with_message(format!(
        "Processed {} polygons [{:.1}s]",
        polygon_count,
        start.elapsed().as_secs_f32()
    ));
    Ok(output)
}

/// Apply `op` to every polygon, keeping feature ids and properties
fn transform(
    features: &[Feature],
    progress: &ProgressBar,
    op: impl Fn(&Polygon) -> Polygon,
) -> Result<Value> {
    let collection: FeatureCollection = features
        .iter()
        .map(|feature| {
            let mapped = feature.map_polygons(&op);
            progress.inc(1);
            mapped
        })
        .collect();
    serde_json::to_value(collection).context("Failed to encode feature collection")
}

/// One result record per polygon
fn query(features: &[Feature], progress: &ProgressBar, op: impl Fn(&Polygon) -> Value) -> Value {
    let mut records = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        for (polygon_index, polygon) in feature.geometry.polygons().into_iter().enumerate() {
            records.push(json!({
                "feature": index,
                "id": feature.id,
                "polygon": polygon_index,
                "result": op(polygon),
            }));
        }
        progress.inc(1);
    }
    Value::Array(records)
}

fn info(polygon: &Polygon) -> Value {
    let validation = polygon.validate();
    let rings: Vec<Value> = polygon
        .rings()
        .map(|ring| json!({ "coordinates": ring.len(), "closed": ring.is_closed() }))
        .collect();
    json!({
        "rings": polygon.ring_count(),
        "coordinates": polygon.coordinate_count(),
        "ring_detail": rings,
        "valid": validation.is_ok(),
        "error": validation.err().map(|e| e.to_string()),
    })
}

fn circle(center: Coordinate, radius: f64, vertices: Option<usize>, settings: &Settings) -> Result<Value> {
    if !(radius.is_finite() && radius > 0.0) {
        bail!("Radius must be a positive number of meters, got {}", radius);
    }
    let vertices = vertices.unwrap_or(settings.file.circle.vertices);
    let model = Haversine::with_radius(settings.file.circle.earth_radius_m);

    let polygon = Polygon::circle_with(center, radius, vertices, &model);
    tracing::debug!(%center, radius, vertices, "generated circle");

    let feature = Feature::new(polygon).with_properties(json!({
        "center": center,
        "radius_m": radius,
        "vertices": vertices,
    }));
    serde_json::to_value(feature).context("Failed to encode circle")
}

fn create_progress(len: usize) -> ProgressBar {
    if len < 2 {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} features {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}
