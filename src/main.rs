use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ripple_generator::{generate, Interval, RippleConfig, RippleParams};

/// Command-line tool to generate a rippled surface mesh from random epicenters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of grid points along the x axis
    #[arg(long, default_value_t = 1000)]
    width_pixels: usize,

    /// Number of grid points along the y axis
    #[arg(long, default_value_t = 1000)]
    height_pixels: usize,

    /// Number of superposed ripple waves
    #[arg(short, long, default_value_t = 15)]
    num_waves: usize,

    /// Lower bound of the domain, for both epicenters and grid coordinates
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    domain_lo: f64,

    /// Upper bound of the domain
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    domain_hi: f64,

    /// Wave amplitude
    #[arg(short, long, default_value_t = 0.005)]
    amplitude: f64,

    /// Spatial frequency of the cosine term
    #[arg(short = 'k', long, default_value_t = 100.0)]
    wavenumber: f64,

    /// Exponential falloff per unit distance from an epicenter
    #[arg(short, long, default_value_t = 10.0)]
    decay_rate: f64,

    /// Random seed for epicenter placement
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path
    #[arg(short, long, default_value = "ripple_surface.glb")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    println!("Generating rippled surface...");
    println!(
        "Grid: {}x{} points over [{}, {}]",
        args.width_pixels, args.height_pixels, args.domain_lo, args.domain_hi
    );
    println!(
        "Waves: {} with amplitude={}, wavenumber={}, decay_rate={}",
        args.num_waves, args.amplitude, args.wavenumber, args.decay_rate
    );

    let config = RippleConfig {
        width_pixels: args.width_pixels,
        height_pixels: args.height_pixels,
        num_waves: args.num_waves,
        domain: Interval::new(args.domain_lo, args.domain_hi),
        params: RippleParams {
            amplitude: args.amplitude,
            wavenumber: args.wavenumber,
            decay_rate: args.decay_rate,
        },
        seed: args.seed,
    };

    println!("Computing ripple field...");
    let mesh = generate(&config)?;

    let (min_height, max_height) = mesh
        .heights
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    println!(
        "Surface height range: min = {:.6}, max = {:.6}",
        min_height, max_height
    );

    println!("Exporting to {}...", args.output.display());
    mesh.save_glb(&args.output)?;

    println!("Done!");
    Ok(())
}
