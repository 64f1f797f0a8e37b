//! DICOM pixel data location dumping library
//!
//! This is a helper library
//! for scanning DICOM files up to their pixel data
//! and printing what was found on the way in a human readable way.
//!
//! # Examples
//!
//! ```no_run
//! use dicom_scan_dump::{dump_scan_to, scan_file};
//!
//! let (location, report) = scan_file("path/to/file.dcm")?;
//! dump_scan_to(std::io::stdout(), &location, &report)?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
use dicom_scan_core::header::{HasLength, Header};
use dicom_scan_encoding::TransferSyntax;
use dicom_scan_parser::{
    MetadataElement, PixelDataLocation, ScanVisitor, Scanner, StreamSource,
};
use dicom_scan_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{ResultExt, Snafu};
use std::io::{Result as IoResult, Write};
use std::path::Path;

/// An error which may occur while scanning a file.
#[derive(Debug, Snafu)]
pub enum Error {
    /// Could not open the file.
    #[snafu(display("Could not open file"))]
    OpenFile { source: std::io::Error },
    /// Could not locate the pixel data.
    #[snafu(display("Could not locate pixel data"))]
    Scan { source: dicom_scan_parser::Error },
}

/// Everything the scanner reported besides the pixel data location.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanReport {
    /// The resolved transfer syntax
    pub transfer_syntax: Option<&'static TransferSyntax>,
    /// The decoded metadata attributes, in file order
    pub metadata: Vec<MetadataElement>,
}

impl ScanVisitor for ScanReport {
    fn on_transfer_syntax(&mut self, ts: &'static TransferSyntax) {
        self.transfer_syntax = Some(ts);
    }

    fn on_metadata(&mut self, element: MetadataElement) {
        self.metadata.push(element);
    }
}

/// Open and scan the DICOM file at the given path.
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<(PixelDataLocation, ScanReport), Error> {
    let source = StreamSource::open(path).context(OpenFileSnafu)?;
    let mut report = ScanReport::default();
    let location = Scanner::new(source)
        .scan_with(&mut report)
        .context(ScanSnafu)?;
    Ok((location, report))
}

/// Print the outcome of a successful scan to the given writer.
pub fn dump_scan_to<W>(mut to: W, location: &PixelDataLocation, report: &ScanReport) -> IoResult<()>
where
    W: Write,
{
    let ts = location.transfer_syntax;
    writeln!(to, "Transfer Syntax: {} ({})", ts.uid(), ts.name())?;
    writeln!(to, "Parse Mode: {}", location.mode)?;
    for element in &report.metadata {
        writeln!(to, "  {} {}", element.tag, element)?;
    }
    write!(
        to,
        "Pixel Data: offset {}, length {}",
        location.offset,
        location.header.length()
    )?;
    if location.header.is_encapsulated_pixeldata() {
        write!(to, " (encapsulated)")?;
    }
    writeln!(to)
}

/// Print every transfer syntax known to the registry.
pub fn dump_registry_to<W>(mut to: W, registry: &TransferSyntaxRegistry) -> IoResult<()>
where
    W: Write,
{
    let mut all: Vec<_> = registry.iter().collect();
    all.sort_by_key(|ts| ts.code());
    for ts in all {
        let support = if ts.is_supported() { "" } else { " [unsupported]" };
        writeln!(to, "{:>4} {:<24} {}{}", ts.code(), ts.uid(), ts.name(), support)?;
    }
    Ok(())
}
