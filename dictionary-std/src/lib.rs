//! This crate implements the standard metadata dictionary and constants
//! used while scanning DICOM files for their pixel data.
//!
//! ## Run-time dictionary
//!
//! - [`metadata`]: Contains the image pixel description attributes
//!   (group `0028`) whose values are decoded and reported while scanning,
//!   together with the binary shape of each value.
//!   The dictionary is provided as a singleton
//!   behind the unit type [`StandardMetadataDictionary`].
//!
//! ## Constants
//!
//! - [`tags`], which map an attribute alias to a DICOM tag,
//!   including the structural tags driving the scanner
//!   (pixel data, items and delimiters)
//! - [`entries`], the static table behind the dictionary
pub mod entries;
pub mod metadata;
pub mod tags;

pub use metadata::{StandardMetadataDictionary, StandardMetadataDictionaryRegistry};
