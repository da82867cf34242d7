//! Marching-squares iso-lines and profile selection for the flattened
//! contour projections drawn under per-channel surfaces.
use ndarray::ArrayView2;

/// Straight piece of an iso-line in grid units: `(col, row)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Edge pairs crossed by the iso-line for each corner configuration.
/// Bit order: top-left = 8, top-right = 4, bottom-right = 2, bottom-left = 1.
const CASES: [&[(Edge, Edge)]; 16] = [
    &[],
    &[(Edge::Left, Edge::Bottom)],
    &[(Edge::Bottom, Edge::Right)],
    &[(Edge::Left, Edge::Right)],
    &[(Edge::Top, Edge::Right)],
    &[(Edge::Top, Edge::Right), (Edge::Left, Edge::Bottom)],
    &[(Edge::Top, Edge::Bottom)],
    &[(Edge::Left, Edge::Top)],
    &[(Edge::Left, Edge::Top)],
    &[(Edge::Top, Edge::Bottom)],
    &[(Edge::Left, Edge::Top), (Edge::Bottom, Edge::Right)],
    &[(Edge::Top, Edge::Right)],
    &[(Edge::Left, Edge::Right)],
    &[(Edge::Bottom, Edge::Right)],
    &[(Edge::Left, Edge::Bottom)],
    &[],
];

fn crossing(v0: f64, v1: f64, level: f64) -> f64 {
    if (v1 - v0).abs() < f64::EPSILON {
        0.5
    } else {
        ((level - v0) / (v1 - v0)).clamp(0.0, 1.0)
    }
}

/// Iso-line of `grid` at `level`, as unordered segments.
pub fn iso_segments(grid: ArrayView2<'_, f64>, level: f64) -> Vec<Segment> {
    let (rows, cols) = grid.dim();
    let mut segments = Vec::new();
    if rows < 2 || cols < 2 {
        return segments;
    }

    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let tl = grid[[r, c]];
            let tr = grid[[r, c + 1]];
            let br = grid[[r + 1, c + 1]];
            let bl = grid[[r + 1, c]];

            let case = (usize::from(tl >= level) << 3)
                | (usize::from(tr >= level) << 2)
                | (usize::from(br >= level) << 1)
                | usize::from(bl >= level);

            let (x, y) = (c as f64, r as f64);
            let point = |edge: Edge| match edge {
                Edge::Top => (x + crossing(tl, tr, level), y),
                Edge::Right => (x + 1.0, y + crossing(tr, br, level)),
                Edge::Bottom => (x + crossing(bl, br, level), y + 1.0),
                Edge::Left => (x, y + crossing(tl, bl, level)),
            };

            for &(e0, e1) in CASES[case] {
                segments.push(Segment {
                    from: point(e0),
                    to: point(e1),
                });
            }
        }
    }
    segments
}

/// `count` levels evenly spaced strictly inside `(min, max)`.
pub fn contour_levels(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / (count + 1) as f64;
    (1..=count).map(|i| min + step * i as f64).collect()
}

/// Up to `count` indices spread evenly over `0..len`, endpoints included.
pub fn profile_indices(len: usize, count: usize) -> Vec<usize> {
    match (len, count) {
        (0, _) | (_, 0) => Vec::new(),
        (1, _) | (_, 1) => vec![0],
        _ => {
            let mut indices: Vec<usize> = (0..count)
                .map(|i| ((i * (len - 1)) as f64 / (count - 1) as f64).round() as usize)
                .collect();
            indices.dedup();
            indices
        }
    }
}
