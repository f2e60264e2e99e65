//! Triangle meshes for the panel preview, in scene units (meters).

use crate::layout::{HolePosition, MM_PER_SCENE_UNIT};
use crate::params::PanelParams;

/// Segments per hole disc. The painter-projected viewer depth-sorts every
/// triangle per frame, so hole discs stay coarser than a GPU cylinder.
pub const HOLE_SEGMENTS: usize = 12;

pub struct PreviewMesh {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub color: [f32; 4],
}

impl PreviewMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// The panel slab as an axis-aligned box centered on the origin, with the
/// selected finish as its material color.
pub fn panel_mesh(params: &PanelParams) -> PreviewMesh {
    let half_w = (params.screen_width / MM_PER_SCENE_UNIT / 2.0) as f32;
    let half_h = (params.screen_height / MM_PER_SCENE_UNIT / 2.0) as f32;
    let half_t = (params.screen_thickness / MM_PER_SCENE_UNIT / 2.0) as f32;

    let vertices = vec![
        // Bottom face
        [-half_w, -half_h, -half_t],
        [half_w, -half_h, -half_t],
        [half_w, half_h, -half_t],
        [-half_w, half_h, -half_t],
        // Top face
        [-half_w, -half_h, half_t],
        [half_w, -half_h, half_t],
        [half_w, half_h, half_t],
        [-half_w, half_h, half_t],
    ];

    let indices = vec![
        // Bottom face
        0, 1, 2, 0, 2, 3,
        // Top face
        4, 6, 5, 4, 7, 6,
        // Front face
        0, 4, 5, 0, 5, 1,
        // Back face
        2, 6, 7, 2, 7, 3,
        // Left face
        0, 3, 7, 0, 7, 4,
        // Right face
        1, 5, 6, 1, 6, 2,
    ];

    let [r, g, b] = params.finish.rgb();
    PreviewMesh {
        vertices,
        indices,
        color: [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0],
    }
}

/// One disc per hole, slightly proud of the panel's top face so it reads as
/// a perforation against the finish color.
pub fn hole_mesh(params: &PanelParams, positions: &[HolePosition]) -> PreviewMesh {
    let radius = (params.hole_diameter / MM_PER_SCENE_UNIT / 2.0) as f32;
    // Lift above the top face so depth sorting never z-fights the slab.
    let lift = 0.0005_f32;

    let mut vertices = Vec::with_capacity(positions.len() * (HOLE_SEGMENTS + 1));
    let mut indices = Vec::with_capacity(positions.len() * HOLE_SEGMENTS * 3);

    for hole in positions {
        let cx = hole.x as f32;
        let cy = hole.y as f32;
        let cz = hole.z as f32 + lift;

        let center_idx = vertices.len() as u32;
        vertices.push([cx, cy, cz]);
        for s in 0..HOLE_SEGMENTS {
            let angle = s as f32 / HOLE_SEGMENTS as f32 * std::f32::consts::TAU;
            vertices.push([cx + radius * angle.cos(), cy + radius * angle.sin(), cz]);
        }
        for s in 0..HOLE_SEGMENTS as u32 {
            let next = (s + 1) % HOLE_SEGMENTS as u32;
            indices.extend_from_slice(&[center_idx, center_idx + 1 + s, center_idx + 1 + next]);
        }
    }

    PreviewMesh {
        vertices,
        indices,
        color: [1.0, 1.0, 1.0, 1.0],
    }
}

/// Build the full preview scene for one parameter set.
pub fn build_scene(params: &PanelParams, positions: &[HolePosition]) -> Vec<PreviewMesh> {
    vec![panel_mesh(params), hole_mesh(params, positions)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    #[test]
    fn test_panel_mesh_is_a_box() {
        let params = PanelParams::default();
        let mesh = panel_mesh(&params);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 12);

        // Box extents match the panel dimensions in scene units.
        let max_x = mesh.vertices.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
        assert!((max_x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_panel_color_follows_finish() {
        let params = PanelParams::default();
        let mesh = panel_mesh(&params);
        let [r, g, b] = params.finish.rgb();
        assert_eq!(mesh.color[0], r as f32 / 255.0);
        assert_eq!(mesh.color[1], g as f32 / 255.0);
        assert_eq!(mesh.color[2], b as f32 / 255.0);
    }

    #[test]
    fn test_hole_mesh_counts() {
        let params = PanelParams::default();
        let positions = layout::hole_positions(&params);
        let mesh = hole_mesh(&params, &positions);
        assert_eq!(mesh.vertices.len(), positions.len() * (HOLE_SEGMENTS + 1));
        assert_eq!(mesh.triangle_count(), positions.len() * HOLE_SEGMENTS);
    }

    #[test]
    fn test_empty_pattern_builds_empty_hole_mesh() {
        let params = PanelParams {
            hole_diameter: 0.0,
            ..PanelParams::default()
        };
        let positions = layout::hole_positions(&params);
        let mesh = hole_mesh(&params, &positions);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
    }
}
