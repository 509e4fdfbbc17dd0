// Export main modules
mod config;
pub mod epicenter;
mod error;
mod export;
mod field;
mod mesh;

// Re-export everything for public use
pub use config::{GridSpec, Interval, RippleConfig, RippleParams};
pub use epicenter::{generate_waves, sample_epicenters, Wave};
pub use error::RippleError;
pub use export::{export_mesh, ExportFormat};
pub use field::{ripple_height, synthesize_field, HeightField};
pub use mesh::{Face, SurfaceMesh, Vertex};

pub mod prelude {
    pub use crate::config::{GridSpec, Interval, RippleConfig, RippleParams};
    pub use crate::epicenter::{generate_waves, sample_epicenters, Wave};
    pub use crate::error::RippleError;
    pub use crate::export::{export_mesh, ExportFormat};
    pub use crate::field::{synthesize_field, HeightField};
    pub use crate::generate;
    pub use crate::mesh::{Face, SurfaceMesh, Vertex};
}

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Run the full pipeline once: sample epicenters, synthesize the height
/// field, assemble the surface mesh.
pub fn generate(config: &RippleConfig) -> Result<SurfaceMesh, RippleError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let waves = epicenter::generate_waves(config.num_waves, config.domain, &config.params, &mut rng);
    let field = field::synthesize_field(&config.grid(), &waves)?;

    Ok(SurfaceMesh::from_field(&field))
}
