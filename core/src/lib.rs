#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM scanning toolkit,
//! containing the data types shared by the element reader,
//! the transfer syntax registry and the stream scanner.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of a DICOM element header:
//!   tags, value representations, and value lengths
//!   (including the undefined length sentinel).
//! - [`dictionary`] describes the table of pixel description attributes
//!   which the scanner may decode and report on its way to the pixel data.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html

pub mod dictionary;
pub mod header;

pub use dictionary::{EmptyMetadataDictionary, MetadataDictionary, MetadataEntry, MetadataKind};
pub use header::{DataElementHeader, HasLength, Header, Length, Tag, VR};
