//! Scalp topography: head geometry, field interpolation, colormap and marker picking.
//!
//! Everything here works in the dataset's own 2-D position units. The panel
//! maps those to screen space; the math stays GUI-free so it can be tested.

use eframe::egui::Color32;

/// Circle enclosing all electrodes, used as the head outline and field mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadGeometry {
    pub center: [f64; 2],
    pub radius: f64,
}

impl HeadGeometry {
    /// Margin between the outermost electrode and the head outline.
    pub const MARGIN: f64 = 1.15;

    pub fn from_positions(positions: &[[f64; 2]]) -> Self {
        if positions.is_empty() {
            return Self {
                center: [0.0, 0.0],
                radius: 1.0,
            };
        }
        let (mut xmin, mut xmax) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut ymin, mut ymax) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in positions {
            xmin = xmin.min(p[0]);
            xmax = xmax.max(p[0]);
            ymin = ymin.min(p[1]);
            ymax = ymax.max(p[1]);
        }
        let center = [(xmin + xmax) / 2.0, (ymin + ymax) / 2.0];
        let reach = positions
            .iter()
            .map(|p| distance(*p, center))
            .fold(0.0f64, f64::max);
        let radius = if reach > 0.0 { reach * Self::MARGIN } else { 1.0 };
        Self { center, radius }
    }

    pub fn contains(&self, p: [f64; 2]) -> bool {
        distance(p, self.center) <= self.radius
    }
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

/// Inverse distance weighted value at `p` (power 2).
pub fn interpolate_value(positions: &[[f64; 2]], values: &[f64], p: [f64; 2]) -> f64 {
    let mut sum_w = 0.0;
    let mut sum_v = 0.0;
    for (pos, v) in positions.iter().zip(values) {
        let d = distance(*pos, p);
        if d < 1e-9 {
            return *v;
        }
        let w = 1.0 / (d * d);
        sum_w += w;
        sum_v += w * v;
    }
    if sum_w > 0.0 {
        sum_v / sum_w
    } else {
        0.0
    }
}

/// Square grid of interpolated values covering the head's bounding box.
///
/// Row 0 is the top (front of the head). Cells whose center lies outside the
/// head disk are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TopoField {
    pub resolution: usize,
    pub geometry: HeadGeometry,
    pub values: Vec<Option<f64>>,
}

impl TopoField {
    /// Center of cell `(row, col)` in position units.
    pub fn cell_center(&self, row: usize, col: usize) -> [f64; 2] {
        cell_center(&self.geometry, self.resolution, row, col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values
            .get(row * self.resolution + col)
            .copied()
            .flatten()
    }

    /// RGBA pixels for a texture, transparent outside the head.
    pub fn to_rgba(&self, colormap: Colormap, vlim: f64) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.values.len() * 4);
        for v in &self.values {
            match v {
                Some(v) => {
                    let c = colormap.color_for(*v, vlim);
                    out.extend_from_slice(&[c.r(), c.g(), c.b(), 255]);
                }
                None => out.extend_from_slice(&[0, 0, 0, 0]),
            }
        }
        out
    }
}

fn cell_center(geometry: &HeadGeometry, resolution: usize, row: usize, col: usize) -> [f64; 2] {
    let side = 2.0 * geometry.radius / resolution as f64;
    [
        geometry.center[0] - geometry.radius + (col as f64 + 0.5) * side,
        geometry.center[1] + geometry.radius - (row as f64 + 0.5) * side,
    ]
}

/// Interpolate one time slice over a `resolution` x `resolution` grid.
pub fn interpolate_field(
    positions: &[[f64; 2]],
    values: &[f64],
    geometry: HeadGeometry,
    resolution: usize,
) -> TopoField {
    let resolution = resolution.max(1);
    let mut out = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        for col in 0..resolution {
            let p = cell_center(&geometry, resolution, row, col);
            out.push(
                geometry
                    .contains(p)
                    .then(|| interpolate_value(positions, values, p)),
            );
        }
    }
    TopoField {
        resolution,
        geometry,
        values: out,
    }
}

/// Diverging colormaps for the scalar field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Colormap {
    /// Blue for negative, white at zero, red for positive.
    #[default]
    RdBuR,
}

const RDBU_R: [(u8, u8, u8); 11] = [
    (5, 48, 97),
    (33, 102, 172),
    (67, 147, 195),
    (146, 197, 222),
    (209, 229, 240),
    (247, 247, 247),
    (253, 219, 199),
    (244, 165, 130),
    (214, 96, 77),
    (178, 24, 43),
    (103, 0, 31),
];

impl Colormap {
    /// Color at normalized position `t` in `[0, 1]`.
    pub fn sample(self, t: f64) -> Color32 {
        let stops = match self {
            Colormap::RdBuR => &RDBU_R,
        };
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
        let x = t * (stops.len() - 1) as f64;
        let i = (x.floor() as usize).min(stops.len() - 2);
        let f = x - i as f64;
        let (a, b) = (stops[i], stops[i + 1]);
        let lerp = |p: u8, q: u8| (p as f64 + (q as f64 - p as f64) * f).round() as u8;
        Color32::from_rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
    }

    /// Color of `value` on the fixed symmetric scale `[-vlim, vlim]`.
    pub fn color_for(self, value: f64, vlim: f64) -> Color32 {
        let vlim = if vlim > 0.0 { vlim } else { 1.0 };
        self.sample((value / vlim + 1.0) / 2.0)
    }
}

/// Index of the marker closest to `point` within `max_distance`.
///
/// Indices refer to `positions` exactly as passed, which must be the same
/// order the markers were drawn in. Ties go to the lower index.
pub fn nearest_marker(positions: &[[f64; 2]], point: [f64; 2], max_distance: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in positions.iter().enumerate() {
        let d = distance(*p, point);
        if d > max_distance {
            continue;
        }
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
