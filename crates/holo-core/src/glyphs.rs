//! Stroke tables for the letter formations.
//!
//! Each glyph is a list of line segments on a unit design grid where x runs
//! 0..1 left to right and y runs 0..1 bottom to top. Curves are approximated
//! by short polylines. The generator maps the grid onto [-0.8, 0.8].

pub type Stroke = ([f32; 2], [f32; 2]);

const A: &[Stroke] = &[
    ([0.0, 0.0], [0.5, 1.0]),
    ([0.5, 1.0], [1.0, 0.0]),
    ([0.25, 0.45], [0.75, 0.45]),
];
const B: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [0.7, 1.0]),
    ([0.7, 1.0], [0.85, 0.85]),
    ([0.85, 0.85], [0.85, 0.65]),
    ([0.85, 0.65], [0.7, 0.5]),
    ([0.0, 0.5], [0.75, 0.5]),
    ([0.75, 0.5], [1.0, 0.35]),
    ([1.0, 0.35], [1.0, 0.15]),
    ([1.0, 0.15], [0.75, 0.0]),
    ([0.75, 0.0], [0.0, 0.0]),
];
const C: &[Stroke] = &[
    ([1.0, 0.85], [0.7, 1.0]),
    ([0.7, 1.0], [0.3, 1.0]),
    ([0.3, 1.0], [0.0, 0.75]),
    ([0.0, 0.75], [0.0, 0.25]),
    ([0.0, 0.25], [0.3, 0.0]),
    ([0.3, 0.0], [0.7, 0.0]),
    ([0.7, 0.0], [1.0, 0.15]),
];
const D: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [0.6, 1.0]),
    ([0.6, 1.0], [1.0, 0.7]),
    ([1.0, 0.7], [1.0, 0.3]),
    ([1.0, 0.3], [0.6, 0.0]),
    ([0.6, 0.0], [0.0, 0.0]),
];
const E: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [1.0, 1.0]),
    ([0.0, 0.5], [0.75, 0.5]),
    ([0.0, 0.0], [1.0, 0.0]),
];
const F: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [1.0, 1.0]),
    ([0.0, 0.5], [0.75, 0.5]),
];
const G: &[Stroke] = &[
    ([1.0, 0.85], [0.7, 1.0]),
    ([0.7, 1.0], [0.3, 1.0]),
    ([0.3, 1.0], [0.0, 0.75]),
    ([0.0, 0.75], [0.0, 0.25]),
    ([0.0, 0.25], [0.3, 0.0]),
    ([0.3, 0.0], [0.7, 0.0]),
    ([0.7, 0.0], [1.0, 0.25]),
    ([1.0, 0.25], [1.0, 0.45]),
    ([1.0, 0.45], [0.55, 0.45]),
];
const H: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([1.0, 0.0], [1.0, 1.0]),
    ([0.0, 0.5], [1.0, 0.5]),
];
const I: &[Stroke] = &[
    ([0.5, 0.0], [0.5, 1.0]),
    ([0.2, 1.0], [0.8, 1.0]),
    ([0.2, 0.0], [0.8, 0.0]),
];
const J: &[Stroke] = &[
    ([0.3, 1.0], [1.0, 1.0]),
    ([0.8, 1.0], [0.8, 0.25]),
    ([0.8, 0.25], [0.55, 0.0]),
    ([0.55, 0.0], [0.25, 0.0]),
    ([0.25, 0.0], [0.0, 0.25]),
];
const K: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 0.45], [1.0, 1.0]),
    ([0.3, 0.6], [1.0, 0.0]),
];
const L: &[Stroke] = &[([0.0, 0.0], [0.0, 1.0]), ([0.0, 0.0], [1.0, 0.0])];
const M: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [0.5, 0.45]),
    ([0.5, 0.45], [1.0, 1.0]),
    ([1.0, 1.0], [1.0, 0.0]),
];
const N: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [1.0, 0.0]),
    ([1.0, 0.0], [1.0, 1.0]),
];
const O: &[Stroke] = &[
    ([0.3, 1.0], [0.7, 1.0]),
    ([0.7, 1.0], [1.0, 0.7]),
    ([1.0, 0.7], [1.0, 0.3]),
    ([1.0, 0.3], [0.7, 0.0]),
    ([0.7, 0.0], [0.3, 0.0]),
    ([0.3, 0.0], [0.0, 0.3]),
    ([0.0, 0.3], [0.0, 0.7]),
    ([0.0, 0.7], [0.3, 1.0]),
];
const P: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [0.75, 1.0]),
    ([0.75, 1.0], [1.0, 0.8]),
    ([1.0, 0.8], [1.0, 0.65]),
    ([1.0, 0.65], [0.75, 0.45]),
    ([0.75, 0.45], [0.0, 0.45]),
];
const Q: &[Stroke] = &[
    ([0.3, 1.0], [0.7, 1.0]),
    ([0.7, 1.0], [1.0, 0.7]),
    ([1.0, 0.7], [1.0, 0.3]),
    ([1.0, 0.3], [0.7, 0.0]),
    ([0.7, 0.0], [0.3, 0.0]),
    ([0.3, 0.0], [0.0, 0.3]),
    ([0.0, 0.3], [0.0, 0.7]),
    ([0.0, 0.7], [0.3, 1.0]),
    ([0.6, 0.3], [1.0, 0.0]),
];
const R: &[Stroke] = &[
    ([0.0, 0.0], [0.0, 1.0]),
    ([0.0, 1.0], [0.75, 1.0]),
    ([0.75, 1.0], [1.0, 0.8]),
    ([1.0, 0.8], [1.0, 0.65]),
    ([1.0, 0.65], [0.75, 0.45]),
    ([0.75, 0.45], [0.0, 0.45]),
    ([0.45, 0.45], [1.0, 0.0]),
];
const S: &[Stroke] = &[
    ([1.0, 0.85], [0.7, 1.0]),
    ([0.7, 1.0], [0.3, 1.0]),
    ([0.3, 1.0], [0.0, 0.8]),
    ([0.0, 0.8], [0.0, 0.6]),
    ([0.0, 0.6], [0.3, 0.5]),
    ([0.3, 0.5], [0.7, 0.5]),
    ([0.7, 0.5], [1.0, 0.4]),
    ([1.0, 0.4], [1.0, 0.2]),
    ([1.0, 0.2], [0.7, 0.0]),
    ([0.7, 0.0], [0.3, 0.0]),
    ([0.3, 0.0], [0.0, 0.15]),
];
const T: &[Stroke] = &[([0.0, 1.0], [1.0, 1.0]), ([0.5, 1.0], [0.5, 0.0])];
const U: &[Stroke] = &[
    ([0.0, 1.0], [0.0, 0.3]),
    ([0.0, 0.3], [0.3, 0.0]),
    ([0.3, 0.0], [0.7, 0.0]),
    ([0.7, 0.0], [1.0, 0.3]),
    ([1.0, 0.3], [1.0, 1.0]),
];
const V: &[Stroke] = &[([0.0, 1.0], [0.5, 0.0]), ([0.5, 0.0], [1.0, 1.0])];
const W: &[Stroke] = &[
    ([0.0, 1.0], [0.25, 0.0]),
    ([0.25, 0.0], [0.5, 0.6]),
    ([0.5, 0.6], [0.75, 0.0]),
    ([0.75, 0.0], [1.0, 1.0]),
];
const X: &[Stroke] = &[([0.0, 0.0], [1.0, 1.0]), ([0.0, 1.0], [1.0, 0.0])];
const Y: &[Stroke] = &[
    ([0.0, 1.0], [0.5, 0.5]),
    ([1.0, 1.0], [0.5, 0.5]),
    ([0.5, 0.5], [0.5, 0.0]),
];
const Z: &[Stroke] = &[
    ([0.0, 1.0], [1.0, 1.0]),
    ([1.0, 1.0], [0.0, 0.0]),
    ([0.0, 0.0], [1.0, 0.0]),
];

/// Strokes for an ASCII letter (case-insensitive), or `None` for anything else.
pub fn strokes(letter: char) -> Option<&'static [Stroke]> {
    let table: &'static [Stroke] = match letter.to_ascii_uppercase() {
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'O' => O,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        _ => return None,
    };
    Some(table)
}

/// Total stroke length of a glyph on the design grid.
pub fn total_length(glyph: &[Stroke]) -> f32 {
    glyph.iter().map(|(a, b)| stroke_length(a, b)).sum()
}

#[inline]
pub fn stroke_length(a: &[f32; 2], b: &[f32; 2]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}
