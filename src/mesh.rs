use glam::{DVec2, DVec3};
use rayon::prelude::*;

use crate::field::HeightField;

/// A vertex in 3D space
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: DVec3,
    pub normal: DVec3,
    pub uv: DVec2,
}

/// A face consisting of three vertex indices
#[derive(Debug, Clone, Copy)]
pub struct Face(pub usize, pub usize, pub usize);

/// Structured surface mesh over the sample grid.
///
/// Vertices are laid out row-major over the grid, and `heights` keeps the
/// raw field values as a parallel scalar attribute in the same order.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    pub grid_width: usize,
    pub grid_height: usize,
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
    pub heights: Vec<f64>,
}

impl SurfaceMesh {
    /// Build the surface mesh for a height field: one vertex per grid point
    /// with the height as the z coordinate, two counter-clockwise triangles
    /// per grid cell.
    ///
    /// The `u` texture coordinate carries the height normalized over the
    /// field's range (0.5 for a flat field), so a 1D ramp texture colors the
    /// surface by elevation.
    pub fn from_field(field: &HeightField) -> Self {
        let w = field.width;
        let h = field.height;

        let (min_h, max_h) = field
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = max_h - min_h;

        // Create vertices in parallel
        let vertices: Vec<Vertex> = (0..h)
            .into_par_iter()
            .flat_map(|row| {
                (0..w)
                    .map(move |col| {
                        let z = field.value(col, row);
                        let t = if range > 0.0 { (z - min_h) / range } else { 0.5 };

                        Vertex {
                            position: DVec3::new(field.xs[col], field.ys[row], z),
                            normal: DVec3::Z,
                            uv: DVec2::new(t, 0.5),
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        // Create face indices
        let faces: Vec<Face> = (0..h.saturating_sub(1))
            .into_par_iter()
            .flat_map(|row| {
                (0..w.saturating_sub(1))
                    .flat_map(move |col| {
                        let a = col + row * w;
                        let b = col + (row + 1) * w;
                        let c = (col + 1) + (row + 1) * w;
                        let d = (col + 1) + row * w;

                        // Two triangles per grid cell
                        vec![Face(a, b, d), Face(b, c, d)]
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        // Degenerate grids produce no faces; their vertices keep +Z normals
        let vertices = if faces.is_empty() {
            vertices
        } else {
            Self::calculate_normals_parallel(vertices, &faces)
        };

        SurfaceMesh {
            grid_width: w,
            grid_height: h,
            vertices,
            faces,
            heights: field.values.clone(),
        }
    }

    /// Calculate vertex normals based on faces (parallel version)
    fn calculate_normals_parallel(vertices: Vec<Vertex>, faces: &[Face]) -> Vec<Vertex> {
        let face_normals: Vec<(usize, usize, usize, DVec3)> = faces
            .par_iter()
            .map(|&Face(i1, i2, i3)| {
                let v1 = vertices[i1].position;
                let v2 = vertices[i2].position;
                let v3 = vertices[i3].position;

                // Collapsed cells contribute a zero vector instead of NaN
                let normal = (v2 - v1).cross(v3 - v1).normalize_or_zero();

                (i1, i2, i3, normal)
            })
            .collect();

        // Thread-safe accumulator for the per-vertex sums
        let normal_accumulators = std::sync::Mutex::new(vec![DVec3::ZERO; vertices.len()]);

        face_normals.par_iter().for_each(|&(i1, i2, i3, normal)| {
            let mut accumulators = normal_accumulators.lock().unwrap();
            accumulators[i1] += normal;
            accumulators[i2] += normal;
            accumulators[i3] += normal;
        });

        let normal_accumulators = normal_accumulators.into_inner().unwrap();

        vertices
            .into_iter()
            .enumerate()
            .map(|(i, mut vertex)| {
                let accumulated = normal_accumulators[i].normalize_or_zero();
                vertex.normal = if accumulated == DVec3::ZERO {
                    DVec3::Z
                } else {
                    accumulated
                };
                vertex
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridSpec, Interval};
    use crate::epicenter::Wave;
    use crate::field::synthesize_field;

    fn test_field(width: usize, height: usize) -> HeightField {
        let grid = GridSpec {
            width,
            height,
            domain: Interval::new(-1.0, 1.0),
        };
        let waves = [Wave {
            center: DVec2::new(0.2, -0.3),
            amplitude: 0.4,
            wavenumber: 25.0,
            decay_rate: 3.0,
        }];
        synthesize_field(&grid, &waves).unwrap()
    }

    #[test]
    fn one_vertex_per_grid_point() {
        let mesh = SurfaceMesh::from_field(&test_field(6, 4));
        assert_eq!(mesh.grid_width, 6);
        assert_eq!(mesh.grid_height, 4);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.heights.len(), 24);
        assert_eq!(mesh.faces.len(), 5 * 3 * 2);
    }

    #[test]
    fn vertices_follow_row_major_grid_order() {
        let field = test_field(5, 3);
        let mesh = SurfaceMesh::from_field(&field);
        for row in 0..3 {
            for col in 0..5 {
                let vertex = mesh.vertices[row * 5 + col];
                assert_eq!(vertex.position.x, field.xs[col]);
                assert_eq!(vertex.position.y, field.ys[row]);
                assert_eq!(vertex.position.z, field.value(col, row));
            }
        }
    }

    #[test]
    fn heights_mirror_field_values() {
        let field = test_field(8, 8);
        let mesh = SurfaceMesh::from_field(&field);
        assert_eq!(mesh.heights, field.values);
    }

    #[test]
    fn face_indices_are_in_range() {
        let mesh = SurfaceMesh::from_field(&test_field(4, 4));
        for &Face(a, b, c) in &mesh.faces {
            assert!(a < 16 && b < 16 && c < 16);
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let mesh = SurfaceMesh::from_field(&test_field(6, 6));
        for vertex in &mesh.vertices {
            assert!((vertex.normal.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn uv_carries_normalized_height() {
        let field = test_field(6, 6);
        let mesh = SurfaceMesh::from_field(&field);
        let min = field.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = field
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        for (vertex, &height) in mesh.vertices.iter().zip(&mesh.heights) {
            let expected = (height - min) / (max - min);
            assert!((vertex.uv.x - expected).abs() < 1e-12);
            assert_eq!(vertex.uv.y, 0.5);
        }
    }

    #[test]
    fn flat_field_maps_to_mid_ramp() {
        let grid = GridSpec {
            width: 4,
            height: 4,
            domain: Interval::new(-1.0, 1.0),
        };
        let field = synthesize_field(&grid, &[]).unwrap();
        let mesh = SurfaceMesh::from_field(&field);
        for vertex in &mesh.vertices {
            assert_eq!(vertex.uv.x, 0.5);
        }
    }

    #[test]
    fn single_row_grid_has_no_faces() {
        let mesh = SurfaceMesh::from_field(&test_field(5, 1));
        assert_eq!(mesh.vertices.len(), 5);
        assert!(mesh.faces.is_empty());
        // Nothing to accumulate from, so normals stay +Z
        for vertex in &mesh.vertices {
            assert_eq!(vertex.normal, DVec3::Z);
        }
    }
}
