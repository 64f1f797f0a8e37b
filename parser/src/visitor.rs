//! The side channel through which the scanner reports
//! what it learns on the way to the pixel data.

use dicom_scan_core::Tag;
use dicom_scan_encoding::TransferSyntax;
use std::fmt;

/// A decoded metadata attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// A 16-bit unsigned integer
    UnsignedShort(u16),
    /// A 32-bit unsigned integer
    UnsignedLong(u32),
    /// A pair of 16-bit unsigned integers, usually a tag pointer
    TagPair(Tag),
    /// Text, without its trailing padding
    Text(String),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MetadataValue::UnsignedShort(v) => write!(f, "{}", v),
            MetadataValue::UnsignedLong(v) => write!(f, "{}", v),
            MetadataValue::TagPair(Tag(g, e)) => write!(f, "({}),({})", g, e),
            MetadataValue::Text(s) => f.write_str(s),
        }
    }
}

/// A metadata attribute found while scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataElement {
    /// the attribute tag
    pub tag: Tag,
    /// the display label from the dictionary
    pub alias: &'static str,
    /// the decoded value
    pub value: MetadataValue,
    /// the declared value length, in bytes
    pub length: u32,
}

impl fmt::Display for MetadataElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.alias, self.value)
    }
}

/// Receiver of the information found by a scanner.
///
/// All methods do nothing by default.
pub trait ScanVisitor {
    /// Called once the transfer syntax of the data set is resolved.
    fn on_transfer_syntax(&mut self, _ts: &'static TransferSyntax) {}

    /// Called for every metadata attribute decoded in the data set.
    fn on_metadata(&mut self, _element: MetadataElement) {}
}

impl ScanVisitor for () {}

impl ScanVisitor for Vec<MetadataElement> {
    fn on_metadata(&mut self, element: MetadataElement) {
        self.push(element);
    }
}

impl<T: ?Sized> ScanVisitor for &mut T
where
    T: ScanVisitor,
{
    fn on_transfer_syntax(&mut self, ts: &'static TransferSyntax) {
        (**self).on_transfer_syntax(ts)
    }

    fn on_metadata(&mut self, element: MetadataElement) {
        (**self).on_metadata(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_values() {
        assert_eq!(MetadataValue::UnsignedShort(512).to_string(), "512");
        assert_eq!(MetadataValue::UnsignedLong(70000).to_string(), "70000");
        assert_eq!(
            MetadataValue::TagPair(Tag(0x0018, 0x1063)).to_string(),
            "(24),(4195)"
        );
        let element = MetadataElement {
            tag: Tag(0x0028, 0x0004),
            alias: "Photometric Interpretation",
            value: MetadataValue::Text("MONOCHROME2".to_string()),
            length: 12,
        };
        assert_eq!(element.to_string(), "Photometric Interpretation: MONOCHROME2");
    }

    #[test]
    fn vec_collects_metadata() {
        let mut v: Vec<MetadataElement> = Vec::new();
        let element = MetadataElement {
            tag: Tag(0x0028, 0x0010),
            alias: "Rows",
            value: MetadataValue::UnsignedShort(4),
            length: 2,
        };
        (&mut v).on_metadata(element.clone());
        ().on_metadata(element.clone());
        assert_eq!(v, vec![element]);
    }
}
