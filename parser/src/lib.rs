//! This crate provides the scanner which locates the pixel data
//! of a DICOM file in a single forward pass,
//! without reading the pixel data itself.
//!
//! The scanner skips the preamble,
//! reads the file meta group to learn the transfer syntax,
//! and then skips data set elements in the resolved encoding
//! until the pixel data element header is found.
//! On the way, known image pixel description attributes
//! are decoded and reported to a [`ScanVisitor`].
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! ```
//! use dicom_scan_parser::{probe, ErrorKind, Scanner, StreamSource};
//!
//! let mut data = vec![0; 128];
//! data.extend_from_slice(b"DICM");
//! assert!(probe::probe(&data));
//!
//! // no file meta group, no transfer syntax
//! let err = Scanner::new(StreamSource::from_bytes(&data)).scan().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingTransferSyntax);
//! ```

pub mod error;
pub mod probe;
pub mod scanner;
pub mod source;
pub mod visitor;

pub use error::{Error, ErrorKind, Result};
pub use scanner::{PixelDataLocation, Scanner};
pub use source::{ByteSource, StreamSource};
pub use visitor::{MetadataElement, MetadataValue, ScanVisitor};
