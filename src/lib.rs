//! svgast - build SVG documents as a typed element tree
//!
//! This library provides unit-aware lengths, SVG path instructions, an
//! immutable element tree and a writer that serializes the tree to XML.
//!
//! # Example
//!
//! ```rust
//! use svgast::{Element, Length};
//!
//! let svg = Element::svg()
//!     .child(
//!         Element::rect()
//!             .attr("width", Length::mm(10))
//!             .attr("height", Length::mm(10))
//!             .attr("fill", "#bada55")
//!             .build()
//!             .unwrap(),
//!     )
//!     .view_box(0, 0, Length::mm(10), Length::mm(10))
//!     .build()
//!     .unwrap();
//!
//! let xml = svgast::to_string(&svg).unwrap();
//! assert!(xml.contains(r##"<rect fill="#bada55" height="10mm" width="10mm"/>"##));
//! ```

pub mod element;
pub mod error;
pub mod geometry;
pub mod path;
pub mod shapes;
pub mod units;
pub mod writer;

pub use element::{Element, ElementBuilder, Kern, Node, Tag, Value, ViewBox};
pub use error::{Result, SvgError};
pub use geometry::{Axis, BoundingBox, Extent};
pub use path::{PathData, PathInstruction};
pub use units::{str_number, to_length, Length, Quantity, Unit};
pub use writer::{to_string, write, write_with_config, Destination, WriteConfig, XmlElement};
