pub mod mesh;
pub mod viewer;

pub use mesh::{build_scene, PreviewMesh, HOLE_SEGMENTS};
pub use viewer::PanelViewer;
