use serde::{Deserialize, Serialize};

/// Scalar-to-colour mapping for single-channel canvases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    #[default]
    Gray,
    /// Inverted gray: low values white, high values black.
    #[serde(rename = "gray_r")]
    GrayReversed,
    Hot,
    Viridis,
}

// Evenly spaced control points, linearly interpolated.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

const HOT_RED_END: f64 = 0.365_079;
const HOT_GREEN_END: f64 = 0.746_032;

impl Colormap {
    /// Map `t` (clamped to `[0, 1]`) to an opaque RGBA colour.
    pub fn map(self, t: f64) -> [u8; 4] {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let [r, g, b] = match self {
            Colormap::Gray => {
                let v = to_u8(t);
                [v, v, v]
            }
            Colormap::GrayReversed => {
                let v = to_u8(1.0 - t);
                [v, v, v]
            }
            Colormap::Hot => [
                to_u8(t / HOT_RED_END),
                to_u8((t - HOT_RED_END) / (HOT_GREEN_END - HOT_RED_END)),
                to_u8((t - HOT_GREEN_END) / (1.0 - HOT_GREEN_END)),
            ],
            Colormap::Viridis => lerp_table(&VIRIDIS, t),
        };
        [r, g, b, 255]
    }
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn lerp_table(table: &[[u8; 3]], t: f64) -> [u8; 3] {
    let pos = t * (table.len() - 1) as f64;
    let lo = (pos.floor() as usize).min(table.len() - 1);
    let hi = (lo + 1).min(table.len() - 1);
    let frac = pos - lo as f64;
    let mut out = [0u8; 3];
    for (c, dst) in out.iter_mut().enumerate() {
        let a = table[lo][c] as f64;
        let b = table[hi][c] as f64;
        *dst = (a + (b - a) * frac).round() as u8;
    }
    out
}
