use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Read the workspace Cargo.toml to extract dependency versions for the
    // startup banner.
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_cargo_toml_path = Path::new(&manifest_dir).join("../../Cargo.toml");
    let workspace_cargo_toml = fs::read_to_string(workspace_cargo_toml_path).unwrap_or_default();

    let mut egui_version = "unknown";
    let mut eframe_version = "unknown";
    let mut nalgebra_version = "unknown";

    for line in workspace_cargo_toml.lines() {
        if line.starts_with("egui = ") {
            egui_version = line.split('"').nth(1).unwrap_or("unknown");
        } else if line.starts_with("eframe = ") {
            eframe_version = line.split('"').nth(1).unwrap_or("unknown");
        } else if line.starts_with("nalgebra = ") {
            nalgebra_version = line.split('"').nth(1).unwrap_or("unknown");
        }
    }

    // These will be available as env!() variables at compile time
    println!("cargo:rustc-env=EGUI_VERSION={}", egui_version);
    println!("cargo:rustc-env=EFRAME_VERSION={}", eframe_version);
    println!("cargo:rustc-env=NALGEBRA_VERSION={}", nalgebra_version);
}
