//! Ready-made instruction sequences for common outlines

use crate::path::{arc_to_relative, line_to_absolute, move_to_absolute, PathInstruction};

/// Outline of a square with its top-left corner at (x, y)
///
/// Drawn down the left edge first; `anticlockwise` reverses the four sides.
pub fn square(size: f64, x: f64, y: f64, anticlockwise: bool) -> Vec<PathInstruction> {
    let mut sides = vec![
        line_to_absolute(x, y + size),
        line_to_absolute(x + size, y + size),
        line_to_absolute(x + size, y),
        line_to_absolute(x, y),
    ];
    if anticlockwise {
        sides.reverse();
    }
    std::iter::once(move_to_absolute(x, y)).chain(sides).collect()
}

/// Outline of a circle centred on (cx, cy), drawn as two half-circle arcs
pub fn circle(r: f64, cx: f64, cy: f64, anticlockwise: bool) -> Vec<PathInstruction> {
    vec![
        move_to_absolute(cx, cy - r),
        arc_to_relative(r, r, 0, false, anticlockwise, 0, 2.0 * r),
        arc_to_relative(r, r, 0, false, anticlockwise, 0, -2.0 * r),
    ]
}
