//! This module contains the concept of a metadata dictionary:
//! a table of attributes which a scanner may decode and report
//! while looking for the pixel data,
//! together with the shape of their values.
//!
//! The dictionary itself does not read anything.
//! It only tells the reader how many bytes a value is made of
//! and how those bytes should be interpreted.

use crate::header::Tag;
use std::fmt::{self, Debug};

/// The binary shape of a metadata attribute value.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum MetadataKind {
    /// A single 16-bit unsigned integer (US).
    UnsignedShort,
    /// A single 32-bit unsigned integer (UL).
    UnsignedLong,
    /// A pair of 16-bit unsigned integers,
    /// typically an attribute tag pointer (AT).
    TagPair,
    /// Text of variable length, as declared by the element header.
    Text,
}

impl MetadataKind {
    /// The minimum number of value bytes required to decode this kind,
    /// or `None` for variable length values.
    pub fn fixed_width(self) -> Option<u32> {
        match self {
            MetadataKind::UnsignedShort => Some(2),
            MetadataKind::UnsignedLong | MetadataKind::TagPair => Some(4),
            MetadataKind::Text => None,
        }
    }
}

/// A dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MetadataEntry {
    /// The attribute tag
    pub tag: Tag,
    /// The display label of the attribute, e.g. "Samples per Pixel"
    pub alias: &'static str,
    /// The shape of the value
    pub kind: MetadataKind,
}

impl fmt::Display for MetadataEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.tag, self.alias)
    }
}

/** Type trait for a dictionary of metadata attributes.
 *
 * The methods herein have no generic parameters, so as to enable being
 * used as a trait object.
 */
pub trait MetadataDictionary: Debug {
    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&MetadataEntry>;

    /// Fetch an entry by its label.
    fn by_alias(&self, alias: &str) -> Option<&MetadataEntry>;
}

impl<T: ?Sized> MetadataDictionary for &T
where
    T: MetadataDictionary,
{
    fn by_tag(&self, tag: Tag) -> Option<&MetadataEntry> {
        (**self).by_tag(tag)
    }

    fn by_alias(&self, alias: &str) -> Option<&MetadataEntry> {
        (**self).by_alias(alias)
    }
}

/// A dictionary which knows no attributes.
///
/// Scanning with this dictionary skips every element.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct EmptyMetadataDictionary;

impl MetadataDictionary for EmptyMetadataDictionary {
    fn by_tag(&self, _tag: Tag) -> Option<&MetadataEntry> {
        None
    }

    fn by_alias(&self, _alias: &str) -> Option<&MetadataEntry> {
        None
    }
}
