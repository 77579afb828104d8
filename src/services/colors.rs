use crate::domain::models::{Layers, SubmoduleTable, DEFAULT_COLOR};
use std::collections::HashMap;

const LIGHTNESS: f64 = 0.85;
const SATURATION: f64 = 0.55;

/// Assign pastel rainbow colors by root module.
///
/// Module slots are taken in root-row traversal order; slot `i` of `n` gets
/// hue `i / n` (hue 0 when there is a single slot) at fixed lightness and
/// saturation. Every submodule inherits its owning module's color; a module
/// missing from the color map keeps the neutral gray default. Purely
/// cosmetic. Returns a new registry.
pub fn assign_submodule_colors(submodules: &SubmoduleTable, layers: &Layers) -> SubmoduleTable {
    let root_modules: Vec<&String> = layers.root_layers.iter().flatten().collect();
    let n = root_modules.len();
    let mut module_colors: HashMap<&str, String> = HashMap::new();
    for (i, module) in root_modules.iter().enumerate() {
        let h = if n > 1 { i as f64 / n as f64 } else { 0.0 };
        module_colors.insert(module.as_str(), hls_to_hex(h, LIGHTNESS, SATURATION));
    }

    submodules
        .iter()
        .map(|(sm, data)| {
            let color = module_colors
                .get(data.module.as_str())
                .cloned()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string());
            let mut data = data.clone();
            data.color = color;
            (sm.clone(), data)
        })
        .collect()
}

/// HLS → 24-bit RGB hex, truncating each channel.
fn hls_to_hex(h: f64, l: f64, s: f64) -> String {
    let (r, g, b) = hls_to_rgb(h, l, s);
    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8
    )
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + 1.0 / 3.0),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
