//! Monospaced stroke font.
//!
//! Glyphs live in the unit square, `(0, 0)` being the bottom left corner. Each stroke is a line
//! segment `[x1, y1, x2, y2]` which the text rasterizer draws as a capsule.

pub type Stroke = [f32; 4];

/// Horizontal distance between consecutive glyph origins, in glyph units.
pub const ADVANCE: f32 = 1.5;

const BOX: [Stroke; 4] = [
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

const A: &[Stroke] = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.0],
    [0.0, 0.5, 1.0, 0.5],
];
const B: &[Stroke] = &[BOX[0], BOX[1], BOX[2], BOX[3], [0.0, 0.5, 1.0, 0.5]];
const C: &[Stroke] = &[[1.0, 1.0, 0.0, 1.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]];
const D: &[Stroke] = &BOX;
const E: &[Stroke] = &[
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.5, 1.0, 0.5],
];
const F: &[Stroke] = &[[1.0, 1.0, 0.0, 1.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.5, 1.0, 0.5]];
const G: &[Stroke] = &[
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 0.5],
    [0.5, 0.5, 1.0, 0.5],
];
const H: &[Stroke] = &[[0.0, 1.0, 0.0, 0.0], [1.0, 1.0, 1.0, 0.0], [0.0, 0.5, 1.0, 0.5]];
const I: &[Stroke] = &[[0.5, 1.0, 0.5, 0.0], [0.0, 1.0, 1.0, 1.0], [0.0, 0.0, 1.0, 0.0]];
const J: &[Stroke] = &[[1.0, 1.0, 1.0, 0.0], [1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.5]];
const K: &[Stroke] = &[[0.0, 1.0, 0.0, 0.0], [1.0, 1.0, 0.0, 0.5], [0.0, 0.5, 1.0, 0.0]];
const L: &[Stroke] = &[[0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]];
const M: &[Stroke] = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.5, 0.5],
    [0.5, 0.5, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.0],
];
const N: &[Stroke] = &[[0.0, 0.0, 0.0, 1.0], [0.0, 1.0, 1.0, 0.0], [1.0, 0.0, 1.0, 1.0]];
const P: &[Stroke] = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.5],
    [1.0, 0.5, 0.0, 0.5],
];
const Q: &[Stroke] = &[BOX[0], BOX[1], BOX[2], BOX[3], [0.5, 0.5, 1.0, 0.0]];
const R: &[Stroke] = &[
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.5],
    [1.0, 0.5, 0.0, 0.5],
    [0.0, 0.5, 1.0, 0.0],
];
const S: &[Stroke] = &[
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 0.5],
    [0.0, 0.5, 1.0, 0.5],
    [1.0, 0.5, 1.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];
const T: &[Stroke] = &[[0.0, 1.0, 1.0, 1.0], [0.5, 1.0, 0.5, 0.0]];
const U: &[Stroke] = &[[0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], [1.0, 0.0, 1.0, 1.0]];
const V: &[Stroke] = &[[0.0, 1.0, 0.5, 0.0], [0.5, 0.0, 1.0, 1.0]];
const W: &[Stroke] = &[
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.5, 0.5],
    [0.5, 0.5, 1.0, 0.0],
    [1.0, 0.0, 1.0, 1.0],
];
const X: &[Stroke] = &[[0.0, 1.0, 1.0, 0.0], [1.0, 1.0, 0.0, 0.0]];
const Y: &[Stroke] = &[[0.0, 1.0, 0.5, 0.5], [1.0, 1.0, 0.5, 0.5], [0.5, 0.5, 0.5, 0.0]];
const Z: &[Stroke] = &[[0.0, 1.0, 1.0, 1.0], [1.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]];

const DIGIT_0: &[Stroke] = &[BOX[0], BOX[1], BOX[2], BOX[3], [0.0, 0.0, 1.0, 1.0]];
const DIGIT_1: &[Stroke] = &[[0.5, 0.0, 0.5, 1.0], [0.25, 0.75, 0.5, 1.0]];
const DIGIT_2: &[Stroke] = &[
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.5],
    [1.0, 0.5, 0.0, 0.5],
    [0.0, 0.5, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
];
const DIGIT_3: &[Stroke] = &[
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.5, 1.0, 0.5],
];
const DIGIT_4: &[Stroke] = &[[0.0, 1.0, 0.0, 0.5], [0.0, 0.5, 1.0, 0.5], [1.0, 1.0, 1.0, 0.0]];
const DIGIT_6: &[Stroke] = &[
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 1.0, 0.5],
    [1.0, 0.5, 0.0, 0.5],
];
const DIGIT_7: &[Stroke] = &[[0.0, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, 0.0]];
const DIGIT_9: &[Stroke] = &[
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 0.5],
    [0.0, 0.5, 1.0, 0.5],
];

const DASH: &[Stroke] = &[[0.0, 0.5, 1.0, 0.5]];
const UNDERSCORE: &[Stroke] = &[[0.0, 0.0, 1.0, 0.0]];

/// Strokes of a character. Letters are case insensitive, unsupported characters are blank.
pub fn glyph(c: char) -> &'static [Stroke] {
    match c.to_ascii_uppercase() {
        'A' => A,
        'B' | '8' => B,
        'C' => C,
        'D' | 'O' => D,
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
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' | '5' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        '0' => DIGIT_0,
        '1' => DIGIT_1,
        '2' => DIGIT_2,
        '3' => DIGIT_3,
        '4' => DIGIT_4,
        '6' => DIGIT_6,
        '7' => DIGIT_7,
        '9' => DIGIT_9,
        '-' => DASH,
        '_' => UNDERSCORE,
        _ => &[],
    }
}
