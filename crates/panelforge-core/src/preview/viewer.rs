//! Painter-projected 3D preview of the perforated panel.
//!
//! Projects the preview meshes through a perspective camera onto the egui
//! painter, depth-sorting triangles back to front. Dragging the background
//! orbits the camera; scrolling zooms.

use egui::{Color32, Pos2, Rect, Stroke, Ui, Vec2};
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

use super::mesh::{self, PreviewMesh};
use crate::layout::HolePattern;
use crate::params::PanelParams;

pub struct PanelViewer {
    meshes: Vec<PreviewMesh>,
    hole_count: usize,
    built_revision: Option<u64>,

    // Camera in spherical coordinates around the panel center, meters.
    camera_distance: f32,
    camera_rotation: (f32, f32), // (phi, theta)
}

impl PanelViewer {
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            hole_count: 0,
            built_revision: None,
            camera_distance: 2.5,
            camera_rotation: (1.2, 1.35),
        }
    }

    /// Rebuild the preview scene when the store has committed a newer
    /// parameter revision than the one the meshes were derived from.
    pub fn sync(&mut self, revision: u64, params: &PanelParams, pattern: &HolePattern) {
        if self.built_revision == Some(revision) {
            return;
        }
        self.meshes = mesh::build_scene(params, &pattern.positions);
        self.hole_count = pattern.hole_count();
        self.built_revision = Some(revision);
    }

    pub fn render(&mut self, ui: &mut Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_rgb(40, 40, 40));

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        if response.dragged() {
            let delta = response.drag_delta();
            self.orbit(delta.x * 0.01, delta.y * 0.01);
        }
        if response.hovered() {
            ui.input(|i| {
                if i.raw_scroll_delta.y != 0.0 {
                    self.zoom(i.raw_scroll_delta.y * 0.002);
                }
            });
        }

        self.paint_meshes(&painter, rect);

        let info_text = format!(
            "Panel Preview\nHoles: {}\nDrag to orbit, scroll to zoom",
            self.hole_count
        );
        painter.text(
            rect.min + Vec2::new(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            info_text,
            egui::FontId::default(),
            Color32::WHITE,
        );
    }

    fn camera_position(&self) -> Point3<f32> {
        let (phi, theta) = self.camera_rotation;
        let d = self.camera_distance;
        Point3::new(
            d * theta.sin() * phi.cos(),
            d * theta.cos(),
            d * theta.sin() * phi.sin(),
        )
    }

    fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let (mut phi, mut theta) = self.camera_rotation;
        phi += delta_x;
        theta += delta_y;
        // Clamp theta to avoid gimbal lock
        theta = theta.clamp(0.1, std::f32::consts::PI - 0.1);
        self.camera_rotation = (phi, theta);
    }

    fn zoom(&mut self, delta: f32) {
        self.camera_distance = (self.camera_distance - delta * 5.0).clamp(0.3, 10.0);
    }

    fn paint_meshes(&self, painter: &egui::Painter, rect: Rect) {
        let aspect = rect.width() / rect.height();
        let projection = Matrix4::new_perspective(aspect, std::f32::consts::FRAC_PI_4, 0.05, 50.0);
        let view = Matrix4::look_at_rh(
            &self.camera_position(),
            &Point3::origin(),
            &Vector3::y_axis(),
        );
        // The panel lies in the xy plane with z as thickness, so the default
        // camera looks down the z axis at the panel face.
        let mvp = projection * view;

        let project = |v: [f32; 3]| -> Option<(Pos2, f32)> {
            let clip: Vector4<f32> = mvp * Vector4::new(v[0], v[1], v[2], 1.0);
            if clip.w <= 0.0 {
                return None;
            }
            let ndc_x = clip.x / clip.w;
            let ndc_y = clip.y / clip.w;
            let depth = clip.z / clip.w;
            let screen = Pos2::new(
                rect.center().x + ndc_x * rect.width() / 2.0,
                rect.center().y - ndc_y * rect.height() / 2.0,
            );
            Some((screen, depth))
        };

        let mut triangles: Vec<(Vec<Pos2>, f32, Color32)> = Vec::new();
        for mesh in &self.meshes {
            let color = Color32::from_rgba_unmultiplied(
                (mesh.color[0] * 255.0) as u8,
                (mesh.color[1] * 255.0) as u8,
                (mesh.color[2] * 255.0) as u8,
                (mesh.color[3] * 255.0) as u8,
            );
            for chunk in mesh.indices.chunks(3) {
                let v1 = mesh.vertices[chunk[0] as usize];
                let v2 = mesh.vertices[chunk[1] as usize];
                let v3 = mesh.vertices[chunk[2] as usize];
                if let (Some((p1, d1)), Some((p2, d2)), Some((p3, d3))) =
                    (project(v1), project(v2), project(v3))
                {
                    let depth = (d1 + d2 + d3) / 3.0;
                    triangles.push((vec![p1, p2, p3], depth, color));
                }
            }
        }

        // Back to front
        triangles.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        for (vertices, _depth, color) in triangles {
            painter.add(egui::Shape::convex_polygon(
                vertices,
                color,
                Stroke::new(0.2, Color32::from_rgba_unmultiplied(0, 0, 0, 40)),
            ));
        }
    }
}

impl Default for PanelViewer {
    fn default() -> Self {
        Self::new()
    }
}
