//! Error types for the scanner.

use dicom_scan_core::Tag;
use snafu::{Backtrace, Snafu};
use std::fmt;
use std::io;

/// An error which may occur while scanning a DICOM file for its pixel data.
///
/// Every error is terminal:
/// a failed scan cannot be resumed on the same byte source.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data: found {:02X?} instead of the magic code", magic))]
    NotDicom { magic: [u8; 4], backtrace: Backtrace },

    /// The file meta group ended without a transfer syntax UID.
    #[snafu(display("Missing transfer syntax UID in file meta group"))]
    MissingTransferSyntax { backtrace: Backtrace },

    /// The transfer syntax UID is not known.
    #[snafu(display("Unknown transfer syntax `{}`", uid))]
    UnresolvedSyntax { uid: String, backtrace: Backtrace },

    /// The transfer syntax is known,
    /// but scanning it requires a decoding layer which is not available.
    #[snafu(display("Unsupported transfer syntax `{}` ({}): needs further work", uid, name))]
    UnsupportedSyntax {
        uid: String,
        name: &'static str,
        backtrace: Backtrace,
    },

    /// The source ended in the middle of an element,
    /// or before the pixel data was found.
    #[snafu(display("Unexpected end of data at position {}", position))]
    Truncated { position: u64, backtrace: Backtrace },

    /// A data element is internally inconsistent.
    #[snafu(display("Malformed data element {} at position {}: {}", tag, position, reason))]
    MalformedElement {
        tag: Tag,
        position: u64,
        reason: String,
        backtrace: Backtrace,
    },

    /// The byte source failed for reasons other than reaching its end.
    #[snafu(display("Could not read from source at position {}", position))]
    ReadSource {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },

    /// The element header could not be decoded
    /// for reasons other than reaching the end of the source.
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElement {
        position: u64,
        #[snafu(backtrace)]
        source: dicom_scan_encoding::decode::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The category of a scanning error,
/// for callers which only need to tell failures apart.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The magic code is absent.
    NotDicom,
    /// No transfer syntax was declared.
    MissingTransferSyntax,
    /// The transfer syntax is not in the registry.
    UnresolvedSyntax,
    /// The transfer syntax needs unimplemented decompression.
    UnsupportedSyntax,
    /// The stream ended mid-element or before the pixel data.
    Truncated,
    /// An element is internally inconsistent.
    MalformedElement,
    /// Any other I/O failure.
    Io,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotDicom { .. } => ErrorKind::NotDicom,
            Error::MissingTransferSyntax { .. } => ErrorKind::MissingTransferSyntax,
            Error::UnresolvedSyntax { .. } => ErrorKind::UnresolvedSyntax,
            Error::UnsupportedSyntax { .. } => ErrorKind::UnsupportedSyntax,
            Error::Truncated { .. } => ErrorKind::Truncated,
            Error::MalformedElement { .. } => ErrorKind::MalformedElement,
            Error::ReadSource { .. } | Error::DecodeElement { .. } => ErrorKind::Io,
        }
    }

    /// Whether the data is invalid,
    /// as opposed to merely not supported.
    pub fn is_invalid_data(&self) -> bool {
        !matches!(self.kind(), ErrorKind::UnsupportedSyntax | ErrorKind::Io)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ErrorKind::NotDicom => "not DICOM",
            ErrorKind::MissingTransferSyntax => "missing transfer syntax",
            ErrorKind::UnresolvedSyntax => "unresolved transfer syntax",
            ErrorKind::UnsupportedSyntax => "unsupported transfer syntax",
            ErrorKind::Truncated => "truncated",
            ErrorKind::MalformedElement => "malformed element",
            ErrorKind::Io => "I/O error",
        };
        f.write_str(s)
    }
}
