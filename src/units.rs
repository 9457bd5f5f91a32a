//! Lengths tagged with SVG units
//!
//! Every [`Length`] keeps its magnitude in canonical pixels, so lengths in
//! different units compare and combine directly. The unit tag only matters
//! when the length is rendered back to text, and for deciding which unit an
//! arithmetic result carries:
//!
//! - two lengths with the same unit produce a result in that unit
//! - any other combination produces a unitless ("user") result
//!
//! ```rust
//! use svgast::{Length, Unit};
//!
//! let sum = Length::mm(23) + Length::mm(19);
//! assert_eq!(sum.to_string(), "42mm");
//!
//! let mixed = Length::inch(2) + Length::px(-138);
//! assert_eq!(mixed.unit(), Unit::User);
//! assert_eq!(mixed, Length::px(42));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::element::Value;
use crate::error::{Result, SvgError};

/// Units a [`Length`] can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Unitless user coordinates
    User,
    Px,
    Pt,
    Pc,
    Mm,
    Cm,
    In,
}

impl Unit {
    /// All units, unitless first
    pub const ALL: [Unit; 7] = [
        Unit::User,
        Unit::Px,
        Unit::Pt,
        Unit::Pc,
        Unit::Mm,
        Unit::Cm,
        Unit::In,
    ];

    /// Number of canonical pixels in one of this unit
    pub fn px_per_unit(self) -> f64 {
        match self {
            Unit::User | Unit::Px => 1.0,
            Unit::Pt => 1.25,
            Unit::Pc => 15.0,
            Unit::Mm => 3.543307,
            Unit::Cm => 35.43307,
            Unit::In => 90.0,
        }
    }

    /// Text appended to a rendered magnitude
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::User => "",
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::User => f.write_str("user"),
            other => f.write_str(other.suffix()),
        }
    }
}

impl FromStr for Unit {
    type Err = SvgError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "user" => Ok(Unit::User),
            "px" => Ok(Unit::Px),
            "pt" => Ok(Unit::Pt),
            "pc" => Ok(Unit::Pc),
            "mm" => Ok(Unit::Mm),
            "cm" => Ok(Unit::Cm),
            "in" => Ok(Unit::In),
            other => Err(SvgError::wrong_kind("unit suffix", format!("'{other}'"))),
        }
    }
}

/// Either a [`Length`] or a bare number
///
/// Anything that accepts "a length or a number" takes `impl Into<Quantity>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Number(f64),
    Length(Length),
}

impl Quantity {
    /// Magnitude in canonical pixels; bare numbers are taken as-is
    pub fn canonical(self) -> f64 {
        match self {
            Quantity::Number(n) => n,
            Quantity::Length(l) => l.px,
        }
    }

    /// Add two quantities; two numbers stay a number
    pub fn add(self, rhs: impl Into<Quantity>) -> Quantity {
        match (self, rhs.into()) {
            (Quantity::Number(a), Quantity::Number(b)) => Quantity::Number(a + b),
            (Quantity::Length(a), b) => Quantity::Length(a.add(b)),
            (Quantity::Number(a), Quantity::Length(b)) => Quantity::Length(b.add(a)),
        }
    }

    /// Subtract `rhs` from this quantity
    pub fn subtract(self, rhs: impl Into<Quantity>) -> Quantity {
        match (self, rhs.into()) {
            (Quantity::Number(a), Quantity::Number(b)) => Quantity::Number(a - b),
            (Quantity::Length(a), b) => Quantity::Length(a.subtract(b)),
            (Quantity::Number(a), Quantity::Length(b)) => Quantity::Length(b.subtract_from(a)),
        }
    }

    /// Divide this quantity by `rhs`
    ///
    /// A bare number can't be divided by a length.
    pub fn divide(self, rhs: impl Into<Quantity>) -> Result<Quantity> {
        match (self, rhs.into()) {
            (Quantity::Number(a), Quantity::Number(b)) => Ok(Quantity::Number(a / b)),
            (Quantity::Length(a), b) => Ok(a.divide(b)),
            (Quantity::Number(_), Quantity::Length(_)) => {
                Err(SvgError::wrong_kind("number divisor", "Length"))
            }
        }
    }
}

impl From<f64> for Quantity {
    fn from(n: f64) -> Self {
        Quantity::Number(n)
    }
}

impl From<f32> for Quantity {
    fn from(n: f32) -> Self {
        Quantity::Number(n.into())
    }
}

impl From<i32> for Quantity {
    fn from(n: i32) -> Self {
        Quantity::Number(n.into())
    }
}

impl From<u32> for Quantity {
    fn from(n: u32) -> Self {
        Quantity::Number(n.into())
    }
}

impl From<Length> for Quantity {
    fn from(l: Length) -> Self {
        Quantity::Length(l)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => f.write_str(&str_number(*n)),
            Quantity::Length(l) => fmt::Display::fmt(l, f),
        }
    }
}

/// A physical length tagged with a [`Unit`]
#[derive(Debug, Clone, Copy)]
pub struct Length {
    px: f64,
    unit: Unit,
}

impl Length {
    /// Create a length in `unit`
    ///
    /// A number is taken to be expressed in `unit`. A length keeps its
    /// canonical magnitude and is re-tagged, so `Length::new(Length::inch(1), Unit::Px)`
    /// renders as `90px`.
    pub fn new(value: impl Into<Quantity>, unit: Unit) -> Self {
        let px = match value.into() {
            Quantity::Number(n) => n * unit.px_per_unit(),
            Quantity::Length(l) => l.px,
        };
        Self { px, unit }
    }

    /// Create a length from a dynamic attribute value
    pub fn from_value(value: &Value, unit: Unit) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(Self::new(*n, unit)),
            Value::Length(l) => Ok(Self::new(*l, unit)),
            other => Err(SvgError::wrong_kind("Length or number", other.kind())),
        }
    }

    pub fn user(n: impl Into<f64>) -> Self {
        Self::new(n.into(), Unit::User)
    }

    pub fn px(n: impl Into<f64>) -> Self {
        Self::new(n.into(), Unit::Px)
    }

    pub fn pt(n: impl Into<f64>) -> Self {
        Self::new(n.into(), Unit::Pt)
    }

    pub fn pc(n: impl Into<f64>) -> Self {
        Self::new(n.into(), Unit::Pc)
    }

    pub fn mm(n: impl Into<f64>) -> Self {
        Self::new(n.into(), Unit::Mm)
    }

    pub fn cm(n: impl Into<f64>) -> Self {
        Self::new(n.into(), Unit::Cm)
    }

    /// Inches (`in` is a keyword)
    pub fn inch(n: impl Into<f64>) -> Self {
        Self::new(n.into(), Unit::In)
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Magnitude in canonical pixels
    pub fn canonical(&self) -> f64 {
        self.px
    }

    /// Magnitude expressed in this length's own unit
    pub fn magnitude(&self) -> f64 {
        self.px / self.unit.px_per_unit()
    }

    /// The same length re-tagged with another unit
    pub fn to_unit(self, unit: Unit) -> Self {
        Self::new(self, unit)
    }

    fn combine(self, rhs: Quantity, op: impl Fn(f64, f64) -> f64) -> Self {
        match rhs {
            Quantity::Length(other) => {
                let unit = if self.unit == other.unit {
                    self.unit
                } else {
                    Unit::User
                };
                Self {
                    px: op(self.px, other.px),
                    unit,
                }
            }
            Quantity::Number(n) => Self {
                px: op(self.px, n),
                unit: Unit::User,
            },
        }
    }

    pub fn add(self, rhs: impl Into<Quantity>) -> Self {
        self.combine(rhs.into(), |a, b| a + b)
    }

    pub fn subtract(self, rhs: impl Into<Quantity>) -> Self {
        self.combine(rhs.into(), |a, b| a - b)
    }

    /// `lhs - self`, always unitless
    pub fn subtract_from(self, lhs: impl Into<f64>) -> Self {
        Self {
            px: lhs.into() - self.px,
            unit: Unit::User,
        }
    }

    fn scale(self, factor: f64) -> Self {
        Self {
            px: self.px * factor,
            unit: self.unit,
        }
    }

    fn shrink(self, divisor: f64) -> Self {
        Self {
            px: self.px / divisor,
            unit: self.unit,
        }
    }

    /// Multiply by a bare number
    ///
    /// Multiplying two lengths is rejected: the result would be an area.
    pub fn multiply(self, rhs: impl Into<Quantity>) -> Result<Self> {
        match rhs.into() {
            Quantity::Number(n) => Ok(self.scale(n)),
            Quantity::Length(_) => Err(SvgError::wrong_kind("number", "Length")),
        }
    }

    /// Divide by a number (keeps the unit) or by a length (unitless ratio)
    pub fn divide(self, rhs: impl Into<Quantity>) -> Quantity {
        match rhs.into() {
            Quantity::Number(n) => Quantity::Length(self.shrink(n)),
            Quantity::Length(other) => Quantity::Number(self.px / other.px),
        }
    }

    pub fn negate(self) -> Self {
        self.scale(-1.0)
    }

    pub fn abs(self) -> Self {
        Self {
            px: self.px.abs(),
            unit: self.unit,
        }
    }

    /// Compare canonical magnitudes; a bare number is taken as pixels
    pub fn equals(&self, other: impl Into<Quantity>) -> bool {
        self.px == other.into().canonical()
    }
}

/// Wrap a bare number as a unitless length; lengths pass through unchanged
pub fn to_length(x: impl Into<Quantity>) -> Length {
    match x.into() {
        Quantity::Length(l) => l,
        Quantity::Number(n) => Length::user(n),
    }
}

/// Render a number in fixed-point with at most six decimals and no trailing zeros
///
/// ```rust
/// use svgast::str_number;
///
/// assert_eq!(str_number(42.0), "42");
/// assert_eq!(str_number(1.5), "1.5");
/// assert_eq!(str_number(1.0 / 3.0), "0.333333");
/// ```
pub fn str_number(n: f64) -> String {
    let fixed = format!("{:.6}", n);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", str_number(self.magnitude()), self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = SvgError;

    /// Parse text such as `10mm`, `-2.5in` or `42`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let unit = Unit::ALL[1..]
            .iter()
            .copied()
            .find(|u| s.ends_with(u.suffix()))
            .unwrap_or(Unit::User);
        let number = &s[..s.len() - unit.suffix().len()];
        let n: f64 = number
            .parse()
            .map_err(|_| SvgError::wrong_kind("length such as '10mm'", format!("'{s}'")))?;
        Ok(Self::new(n, unit))
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<f64> for Length {
    fn eq(&self, other: &f64) -> bool {
        self.equals(*other)
    }
}

impl PartialEq<Length> for f64 {
    fn eq(&self, other: &Length) -> bool {
        other.equals(*self)
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.px.partial_cmp(&other.px)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length::add(self, rhs)
    }
}

impl Add<f64> for Length {
    type Output = Length;

    fn add(self, rhs: f64) -> Length {
        Length::add(self, rhs)
    }
}

impl Add<Length> for f64 {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        rhs.add(self)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        self.subtract(rhs)
    }
}

impl Sub<f64> for Length {
    type Output = Length;

    fn sub(self, rhs: f64) -> Length {
        self.subtract(rhs)
    }
}

impl Sub<Length> for f64 {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        rhs.subtract_from(self)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        self.scale(rhs)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs.scale(self)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        self.shrink(rhs)
    }
}

impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.px / rhs.px
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_value_kind() {
        let err = Length::from_value(&Value::from("hello"), Unit::Mm).unwrap_err();
        assert!(matches!(err, SvgError::WrongKind { .. }));
    }

    #[test]
    fn test_from_value_number() {
        let l = Length::from_value(&Value::Number(42.0), Unit::Mm).unwrap();
        assert_eq!(l.to_string(), "42mm");
    }

    #[test]
    fn test_str() {
        assert_eq!(Length::mm(42).to_string(), "42mm");
        assert_eq!(Length::user(42).to_string(), "42");
        assert_eq!(Length::pt(1.5).to_string(), "1.5pt");
        assert_eq!(Length::inch(-2).to_string(), "-2in");
    }

    #[test]
    fn test_str_every_unit() {
        for unit in Unit::ALL {
            let expected = format!("12.25{}", unit.suffix());
            assert_eq!(Length::new(12.25, unit).to_string(), expected);
        }
    }

    #[test]
    fn test_retag_keeps_canonical() {
        let l = Length::new(Length::inch(1), Unit::Px);
        assert_eq!(l.to_string(), "90px");
        assert_eq!(l.unit(), Unit::Px);
    }

    #[test]
    fn test_eq() {
        assert_eq!(Length::inch(1), 90.0);
        assert_eq!(Length::inch(1), Length::px(90));
        assert_eq!(Length::px(42), Length::user(42));
        assert_eq!(Length::mm(10), Length::cm(1));
    }

    #[test]
    fn test_neq() {
        assert_ne!(Length::mm(10), Length::px(10));
    }

    #[test]
    fn test_abs() {
        assert_eq!(Length::pc(-1).abs(), 15.0);
        assert_eq!(Length::pc(-1).abs().unit(), Unit::Pc);
    }

    #[test]
    fn test_add_same_type() {
        let result = Length::mm(23) + Length::mm(19);
        assert_eq!(result, Length::mm(42));
        assert_eq!(result.unit(), Unit::Mm);
    }

    #[test]
    fn test_add_different_type() {
        let result = Length::inch(2) + Length::px(-138);
        assert_eq!(result, Length::px(42));
        assert_eq!(result.unit(), Unit::User);
    }

    #[test]
    fn test_add_unitless() {
        let result = Length::inch(2) + 90.0;
        assert_eq!(result, Length::inch(3));
        assert_eq!(result.unit(), Unit::User);

        let result = 90.0 + Length::inch(2);
        assert_eq!(result, Length::inch(3));
        assert_eq!(result.unit(), Unit::User);
    }

    #[test]
    fn test_sub_same_type() {
        let result = Length::inch(84) - Length::inch(42);
        assert_eq!(result, Length::inch(42));
        assert_eq!(result.unit(), Unit::In);
    }

    #[test]
    fn test_sub_different_type() {
        let result = Length::inch(1) - Length::px(48);
        assert_eq!(result, Length::user(42));
        assert_eq!(result.unit(), Unit::User);
    }

    #[test]
    fn test_sub_unitless() {
        let result = Length::pc(3) - 3.0;
        assert_eq!(result, 42.0);
        assert_eq!(result.unit(), Unit::User);

        let result = 222.0 - Length::inch(2);
        assert_eq!(result, 42.0);
        assert_eq!(result.unit(), Unit::User);
    }

    #[test]
    fn test_mul() {
        for result in [Length::mm(30) * 1.5, 1.5 * Length::mm(30)] {
            assert_eq!(result, Length::mm(45));
            assert_eq!(result.unit(), Unit::Mm);
        }
        assert!(matches!(
            Length::mm(30).multiply(Length::mm(12)),
            Err(SvgError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_div() {
        let result = Length::pt(8) / 2.0;
        assert_eq!(result, Length::px(5));
        assert_eq!(result.unit(), Unit::Pt);

        assert_eq!(Length::mm(30) / Length::cm(3), 1.0);
        assert_eq!(
            Length::mm(30).divide(Length::cm(3)),
            Quantity::Number(1.0)
        );
        assert!(matches!(
            Quantity::Number(3.0).divide(Length::mm(30)),
            Err(SvgError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Length::mm(30), Length::mm(-30));
        assert_eq!((-Length::mm(30)).unit(), Unit::Mm);
    }

    #[test]
    fn test_quantity_arithmetic() {
        assert_eq!(Quantity::Number(40.0).add(2.0), Quantity::Number(42.0));
        let q = Quantity::Number(90.0).add(Length::inch(2));
        assert_eq!(q, Quantity::Length(Length::inch(3)));
        let q = Quantity::Number(222.0).subtract(Length::inch(2));
        assert_eq!(q, Quantity::Length(Length::user(42)));
    }

    #[test]
    fn test_ordering() {
        assert!(Length::cm(1) > Length::mm(9));
        assert!(Length::pt(4) < Length::px(6));
    }

    #[test]
    fn test_to_length() {
        let l = Length::mm(30);
        assert_eq!(to_length(l).unit(), Unit::Mm);
        let l = to_length(90);
        assert_eq!(l, Length::inch(1));
        assert_eq!(l.unit(), Unit::User);
    }

    #[test]
    fn test_parse() {
        assert_eq!("10mm".parse::<Length>().unwrap(), Length::mm(10));
        assert_eq!("-2.5in".parse::<Length>().unwrap().to_string(), "-2.5in");
        assert_eq!("42".parse::<Length>().unwrap().unit(), Unit::User);
        assert!("tenmm".parse::<Length>().is_err());
        assert!("10furlongs".parse::<Length>().is_err());
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("cm".parse::<Unit>().unwrap(), Unit::Cm);
        assert_eq!("".parse::<Unit>().unwrap(), Unit::User);
        assert!("MM".parse::<Unit>().is_err());
    }

    #[test]
    fn test_str_number() {
        assert_eq!(str_number(0.0), "0");
        assert_eq!(str_number(-0.0), "0");
        assert_eq!(str_number(100.0), "100");
        assert_eq!(str_number(0.125), "0.125");
        assert_eq!(str_number(-7.5), "-7.5");
        assert_eq!(str_number(2.0000001), "2");
    }
}
