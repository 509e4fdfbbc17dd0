use std::path::PathBuf;

use ripple_generator::prelude::*;

/// Generate the two pond configurations side by side: a dense 15-wave
/// surface and a sparser 5-wave one on the same seed and grid.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating ripple pond variants...");

    let base = RippleConfig {
        width_pixels: 400,
        height_pixels: 400,
        seed: Some(7),
        ..RippleConfig::default()
    };

    let dense = RippleConfig {
        num_waves: 15,
        ..base.clone()
    };

    let sparse = RippleConfig {
        num_waves: 5,
        ..base
    };

    let output_dir = PathBuf::from("./pond_output");
    std::fs::create_dir_all(&output_dir)?;

    for (name, config) in [("dense", dense), ("sparse", sparse)] {
        let mesh = generate(&config)?;
        let path = output_dir.join(format!("pond_{}.glb", name));
        mesh.save_glb(&path)?;
        println!("  {} waves -> {}", config.num_waves, path.display());
    }

    println!("Output files saved to: {}", output_dir.display());
    Ok(())
}
