//! Path drawing instructions and the `d` attribute they make up
//!
//! Each [`PathInstruction`] maps onto one command of the SVG path grammar.
//! Absolute instructions render with an upper-case letter, relative ones
//! with a lower-case letter; arguments go through [`str_number`] so they come
//! out as short as possible.
//!
//! ```rust
//! use svgast::path::{close_path, line_to_relative, move_to_absolute, PathData};
//!
//! let d: PathData = [move_to_absolute(0, 0), line_to_relative(1, 2), close_path()]
//!     .into_iter()
//!     .collect();
//! assert_eq!(d.to_string(), "M 0 0  l 1 2  Z");
//! ```

use std::fmt;

use crate::units::str_number;

/// One drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathInstruction {
    /// Start a new subpath at (x, y)
    MoveTo { x: f64, y: f64, relative: bool },
    /// Straight line to (x, y)
    LineTo { x: f64, y: f64, relative: bool },
    HorizontalLineTo { x: f64, relative: bool },
    VerticalLineTo { y: f64, relative: bool },
    /// Elliptical arc ending at (x, y)
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large: bool,
        sweep: bool,
        x: f64,
        y: f64,
        relative: bool,
    },
    /// Close the current subpath; always rendered as `Z`
    ClosePath { relative: bool },
}

impl PathInstruction {
    pub fn move_to(x: impl Into<f64>, y: impl Into<f64>, relative: bool) -> Self {
        Self::MoveTo {
            x: x.into(),
            y: y.into(),
            relative,
        }
    }

    pub fn line_to(x: impl Into<f64>, y: impl Into<f64>, relative: bool) -> Self {
        Self::LineTo {
            x: x.into(),
            y: y.into(),
            relative,
        }
    }

    pub fn horizontal_line_to(x: impl Into<f64>, relative: bool) -> Self {
        Self::HorizontalLineTo {
            x: x.into(),
            relative,
        }
    }

    pub fn vertical_line_to(y: impl Into<f64>, relative: bool) -> Self {
        Self::VerticalLineTo {
            y: y.into(),
            relative,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        rx: impl Into<f64>,
        ry: impl Into<f64>,
        x_axis_rotation: impl Into<f64>,
        large: bool,
        sweep: bool,
        x: impl Into<f64>,
        y: impl Into<f64>,
        relative: bool,
    ) -> Self {
        Self::ArcTo {
            rx: rx.into(),
            ry: ry.into(),
            x_axis_rotation: x_axis_rotation.into(),
            large,
            sweep,
            x: x.into(),
            y: y.into(),
            relative,
        }
    }

    pub fn close(relative: bool) -> Self {
        Self::ClosePath { relative }
    }

    pub fn is_relative(&self) -> bool {
        match *self {
            Self::MoveTo { relative, .. }
            | Self::LineTo { relative, .. }
            | Self::HorizontalLineTo { relative, .. }
            | Self::VerticalLineTo { relative, .. }
            | Self::ArcTo { relative, .. }
            | Self::ClosePath { relative } => relative,
        }
    }

    /// Command letter, lower-case for relative instructions
    pub fn letter(&self) -> char {
        let letter = match self {
            Self::MoveTo { .. } => 'M',
            Self::LineTo { .. } => 'L',
            Self::HorizontalLineTo { .. } => 'H',
            Self::VerticalLineTo { .. } => 'V',
            Self::ArcTo { .. } => 'A',
            Self::ClosePath { .. } => return 'Z',
        };
        if self.is_relative() {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    /// Arguments in path grammar order, arc flags as 0 or 1
    pub fn args(&self) -> Vec<f64> {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        match *self {
            Self::MoveTo { x, y, .. } | Self::LineTo { x, y, .. } => vec![x, y],
            Self::HorizontalLineTo { x, .. } => vec![x],
            Self::VerticalLineTo { y, .. } => vec![y],
            Self::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large,
                sweep,
                x,
                y,
                ..
            } => vec![rx, ry, x_axis_rotation, flag(large), flag(sweep), x, y],
            Self::ClosePath { .. } => vec![],
        }
    }
}

impl fmt::Display for PathInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        for arg in self.args() {
            write!(f, " {}", str_number(arg))?;
        }
        Ok(())
    }
}

pub fn move_to_absolute(x: impl Into<f64>, y: impl Into<f64>) -> PathInstruction {
    PathInstruction::move_to(x, y, false)
}

pub fn move_to_relative(x: impl Into<f64>, y: impl Into<f64>) -> PathInstruction {
    PathInstruction::move_to(x, y, true)
}

pub fn line_to_absolute(x: impl Into<f64>, y: impl Into<f64>) -> PathInstruction {
    PathInstruction::line_to(x, y, false)
}

pub fn line_to_relative(x: impl Into<f64>, y: impl Into<f64>) -> PathInstruction {
    PathInstruction::line_to(x, y, true)
}

pub fn horizontal_line_to_absolute(x: impl Into<f64>) -> PathInstruction {
    PathInstruction::horizontal_line_to(x, false)
}

pub fn horizontal_line_to_relative(x: impl Into<f64>) -> PathInstruction {
    PathInstruction::horizontal_line_to(x, true)
}

pub fn vertical_line_to_absolute(y: impl Into<f64>) -> PathInstruction {
    PathInstruction::vertical_line_to(y, false)
}

pub fn vertical_line_to_relative(y: impl Into<f64>) -> PathInstruction {
    PathInstruction::vertical_line_to(y, true)
}

pub fn arc_to_absolute(
    rx: impl Into<f64>,
    ry: impl Into<f64>,
    x_axis_rotation: impl Into<f64>,
    large: bool,
    sweep: bool,
    x: impl Into<f64>,
    y: impl Into<f64>,
) -> PathInstruction {
    PathInstruction::arc_to(rx, ry, x_axis_rotation, large, sweep, x, y, false)
}

pub fn arc_to_relative(
    rx: impl Into<f64>,
    ry: impl Into<f64>,
    x_axis_rotation: impl Into<f64>,
    large: bool,
    sweep: bool,
    x: impl Into<f64>,
    y: impl Into<f64>,
) -> PathInstruction {
    PathInstruction::arc_to(rx, ry, x_axis_rotation, large, sweep, x, y, true)
}

pub fn close_path() -> PathInstruction {
    PathInstruction::close(false)
}

/// Ordered instructions forming a path's `d` attribute
///
/// Order is geometry: instructions are never reordered or merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData(Vec<PathInstruction>);

impl PathData {
    pub fn new(instructions: impl IntoIterator<Item = PathInstruction>) -> Self {
        Self(instructions.into_iter().collect())
    }

    pub fn instructions(&self) -> &[PathInstruction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathInstruction> {
        self.0.iter()
    }
}

impl FromIterator<PathInstruction> for PathData {
    fn from_iter<I: IntoIterator<Item = PathInstruction>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<PathInstruction>> for PathData {
    fn from(instructions: Vec<PathInstruction>) -> Self {
        Self(instructions)
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = &'a PathInstruction;
    type IntoIter = std::slice::Iter<'a, PathInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ins) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{}", ins)?;
        }
        Ok(())
    }
}
