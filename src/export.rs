use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use tempfile::tempdir;

use crate::mesh::SurfaceMesh;

/// Only GLB format is supported for export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportFormat;

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "glb" => Ok(ExportFormat),
            _ => Err(format!("Only GLB format is supported for export, got: {}", s)),
        }
    }
}

/// Export mesh to a writer with the specified format.
pub fn export_mesh<W: Write>(
    mesh: &SurfaceMesh,
    _format: ExportFormat,
    writer: &mut W,
) -> io::Result<()> {
    mesh.export_glb(writer)
}

impl SurfaceMesh {
    /// Export the mesh to a GLB file
    ///
    /// # Arguments
    /// * `path` - The path to save the GLB file to
    pub fn save_glb<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        self.export_glb(&mut file)
    }

    /// Export the mesh as GLB, writing to the provided writer.
    ///
    /// The height-ramp texture coordinate computed at assembly time becomes
    /// `TEXCOORD_0`, carrying the scalar attribute for coloring.
    pub fn export_glb<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        // The glTF builder only writes to paths, so stage through a temp dir
        let temp_dir = tempdir()?;
        let temp_file_path = temp_dir.path().join("surface.glb");

        let mut builder = mesh_tools::GltfBuilder::new();

        let surface_material = builder.create_basic_material(
            Some("SurfaceMaterial".to_string()),
            [0.78, 0.80, 0.84, 1.0], // Pale bone-gray
        );

        // Convert vertex data to the format needed by mesh_tools
        let mut positions = Vec::with_capacity(self.vertices.len());
        let mut normals = Vec::with_capacity(self.vertices.len());
        let mut texcoords = Vec::with_capacity(self.vertices.len());

        for vertex in &self.vertices {
            positions.push(mesh_tools::compat::point3_new(
                vertex.position.x as f32,
                vertex.position.y as f32,
                vertex.position.z as f32,
            ));

            normals.push(mesh_tools::compat::vector3_new(
                vertex.normal.x as f32,
                vertex.normal.y as f32,
                vertex.normal.z as f32,
            ));

            texcoords.push(mesh_tools::compat::vector2_new(
                vertex.uv.x as f32,
                vertex.uv.y as f32,
            ));
        }

        let mut triangles = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            triangles.push(mesh_tools::Triangle::new(
                face.0 as u32,
                face.1 as u32,
                face.2 as u32,
            ));
        }

        let mesh_index = builder.create_simple_mesh(
            Some("RippleSurface".to_string()),
            &positions,
            &triangles,
            Some(normals),
            Some(texcoords),
            Some(surface_material),
        );

        let node_index = builder.add_node(
            Some("RippleSurfaceNode".to_string()),
            Some(mesh_index),
            None,
            None,
            None,
        );

        let scene_index =
            builder.add_scene(Some("RippleScene".to_string()), Some(vec![node_index]));
        builder.gltf.scene = Some(scene_index);

        let temp_file_str = temp_file_path.to_str().ok_or_else(|| {
            io::Error::new(io::ErrorKind::Other, "Failed to convert path to string")
        })?;

        builder.export_glb(temp_file_str).map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Failed to export GLB: {}", e))
        })?;

        // Copy the GLB data to the output writer
        let glb_data = std::fs::read(&temp_file_path)?;
        writer.write_all(&glb_data)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridSpec, Interval, RippleParams};
    use crate::epicenter::generate_waves;
    use crate::field::synthesize_field;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;

    #[test]
    fn glb_export_writes_a_file() {
        let grid = GridSpec {
            width: 4,
            height: 4,
            domain: Interval::new(-1.0, 1.0),
        };
        let mut rng = StdRng::seed_from_u64(42);
        let waves = generate_waves(3, grid.domain, &RippleParams::default(), &mut rng);
        let field = synthesize_field(&grid, &waves).unwrap();
        let mesh = SurfaceMesh::from_field(&field);

        let temp_dir = tempdir().expect("Failed to create temp directory");
        let test_path = temp_dir.path().join("test.glb");

        mesh.save_glb(&test_path).expect("Failed to save GLB file");

        assert!(test_path.exists(), "GLB file was not created");
        let metadata = fs::metadata(&test_path).expect("Failed to get file metadata");
        assert!(metadata.len() > 0, "GLB file is empty");
    }

    #[test]
    fn only_glb_format_parses() {
        assert!("glb".parse::<ExportFormat>().is_ok());
        assert!("GLB".parse::<ExportFormat>().is_ok());
        assert!("obj".parse::<ExportFormat>().is_err());
    }
}
