use wasm_bindgen::prelude::*;

mod render;

/// Render the polygon being edited into an RGBA pixel buffer.
///
/// `vertices` is a flat `[x0, y0, x1, y1, ...]` list in canvas pixels,
/// `preset` a fill preset (1..=6) and `line` a palette index for the outline.
/// Returns `width * height * 4` bytes; the TypeScript frontend copies this
/// into an ImageData for canvas display.
#[wasm_bindgen]
pub fn fill_polygon(
    vertices: &[i32],
    width: u32,
    height: u32,
    preset: u32,
    line: u32,
    closed: bool,
) -> Vec<u8> {
    render::polygon(vertices, width, height, preset, line as usize, closed)
}

/// Triangulate the polygon into `[ax, ay, bx, by, cx, cy, ...]`.
#[wasm_bindgen]
pub fn triangulate_polygon(vertices: &[i32], height: u32) -> js_sys::Float64Array {
    js_sys::Float64Array::from(&render::triangles(vertices, height)[..])
}

/// Extrude the polygon into an interleaved position/normal triangle list.
#[wasm_bindgen]
pub fn extrude_polygon(vertices: &[i32], depth: f32) -> js_sys::Float32Array {
    js_sys::Float32Array::from(&render::mesh(vertices, depth)[..])
}

/// Floats per vertex in `extrude_polygon` output.
#[wasm_bindgen]
pub fn mesh_stride() -> u32 {
    render::MESH_STRIDE as u32
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    "scanfill 0.1.0".to_string()
}
