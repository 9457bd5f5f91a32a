//! Writing element trees out as SVG documents
//!
//! The root element is converted into an [`XmlElement`] tree which is then
//! serialized as UTF-8, pretty-printed, with an XML declaration unless a
//! [`WriteConfig`] says otherwise.

pub mod config;
pub mod xml;

pub use config::WriteConfig;
pub use xml::XmlElement;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::element::{Element, Tag};
use crate::error::{Result, SvgError};

/// Where a document is written
pub enum Destination<'a> {
    /// A file, created or truncated, and closed once written
    Path(&'a Path),
    /// An open sink; flushed but left open
    Sink(&'a mut dyn Write),
}

impl<'a> From<&'a Path> for Destination<'a> {
    fn from(path: &'a Path) -> Self {
        Destination::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for Destination<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Destination::Path(path.as_path())
    }
}

impl<'a> From<&'a str> for Destination<'a> {
    fn from(path: &'a str) -> Self {
        Destination::Path(Path::new(path))
    }
}

impl<'a, W: Write + 'a> From<&'a mut W> for Destination<'a> {
    fn from(sink: &'a mut W) -> Self {
        Destination::Sink(sink)
    }
}

fn ensure_root(root: &Element) -> Result<()> {
    if *root.tag() != Tag::Svg {
        return Err(SvgError::wrong_kind(
            "svg element as document root",
            format!("<{}>", root.tag_name()),
        ));
    }
    Ok(())
}

/// Write `root` with the default configuration
pub fn write<'a>(root: &Element, destination: impl Into<Destination<'a>>) -> Result<()> {
    write_with_config(root, destination, &WriteConfig::default())
}

/// Write `root` as a complete document
///
/// Fails without touching the destination unless `root` is an `svg` element.
pub fn write_with_config<'a>(
    root: &Element,
    destination: impl Into<Destination<'a>>,
    config: &WriteConfig,
) -> Result<()> {
    ensure_root(root)?;
    let tree = root.to_xml();

    match destination.into() {
        Destination::Path(path) => {
            debug!(path = %path.display(), "writing SVG document to file");
            let mut out = BufWriter::new(File::create(path)?);
            tree.write_document(&mut out, config)?;
        }
        Destination::Sink(sink) => {
            debug!("writing SVG document to sink");
            tree.write_document(sink, config)?;
        }
    }
    Ok(())
}

/// Render `root` as a document string with the default configuration
pub fn to_string(root: &Element) -> Result<String> {
    let mut buf = Vec::new();
    write(root, &mut buf)?;
    String::from_utf8(buf).map_err(|e| SvgError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
