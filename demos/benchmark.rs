use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use ripple_generator::epicenter;
use ripple_generator::prelude::*;

fn main() {
    println!("Running Ripple Generator Benchmarks");
    println!("===================================");

    // Grid sizes from quick preview up to the default resolution
    let resolutions = [
        (100, 100),   // 10k points
        (500, 500),   // 250k points
        (1000, 1000), // 1M points
    ];

    for &(width, height) in &resolutions {
        println!("\nGrid size: {}x{} ({} points)", width, height, width * height);

        let domain = Interval::new(-1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(42);
        let waves = epicenter::generate_waves(15, domain, &RippleParams::default(), &mut rng);

        let grid = GridSpec {
            width,
            height,
            domain,
        };

        // Benchmark field synthesis
        let start = Instant::now();
        let field = synthesize_field(&grid, &waves).unwrap();
        println!("  Field synthesis: {:.2?}", start.elapsed());

        // Benchmark mesh assembly
        let start = Instant::now();
        let mesh = SurfaceMesh::from_field(&field);
        println!("  Mesh assembly: {:.2?}", start.elapsed());

        // Only run export on smaller meshes to avoid excessive memory usage
        if width <= 500 {
            let start = Instant::now();
            let mut buffer = Vec::new();
            export_mesh(&mesh, ExportFormat, &mut buffer).unwrap();
            println!(
                "  GLB export: {:.2?} ({}MB)",
                start.elapsed(),
                buffer.len() / (1024 * 1024)
            );
        }
    }
}
