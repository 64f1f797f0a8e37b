//! The parse mode of a DICOM data set:
//! everything an element reader needs to know
//! in order to find the boundaries of the next data element.

use byteordered::Endianness;
use std::fmt;

/// How value lengths are encoded in each data element header.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VrStyle {
    /// Each header carries a two-letter value representation,
    /// which determines whether the value length takes 2 or 4 bytes.
    Explicit,
    /// No value representation is present,
    /// and the value length always takes 4 bytes.
    Implicit,
}

/// Compression applied by a transfer syntax.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Compression {
    /// No compression, or only the pixel data is encapsulated.
    None,
    /// The whole data set is deflated.
    Deflate,
    /// The pixel data is run-length encoded.
    Rle,
}

/// The encoding parameters under which data element headers are decoded.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ParseMode {
    /// the byte order of tags and lengths
    pub byte_order: Endianness,
    /// the value length encoding style
    pub vr_style: VrStyle,
    /// compression in effect (only recorded, never applied here)
    pub compression: Compression,
}

impl ParseMode {
    /// The mode of the file meta information group,
    /// which is always in _Explicit VR Little Endian_.
    pub const FILE_META: ParseMode = ParseMode {
        byte_order: Endianness::Little,
        vr_style: VrStyle::Explicit,
        compression: Compression::None,
    };

    /// Create a parse mode without compression.
    pub const fn new(byte_order: Endianness, vr_style: VrStyle) -> Self {
        ParseMode {
            byte_order,
            vr_style,
            compression: Compression::None,
        }
    }

    /// Replace the compression of this mode.
    pub const fn with_compression(self, compression: Compression) -> Self {
        ParseMode {
            byte_order: self.byte_order,
            vr_style: self.vr_style,
            compression,
        }
    }

    /// Whether headers carry an explicit value representation.
    #[inline]
    pub fn is_explicit_vr(&self) -> bool {
        self.vr_style == VrStyle::Explicit
    }
}

impl Default for ParseMode {
    fn default() -> Self {
        ParseMode::FILE_META
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let vr = match self.vr_style {
            VrStyle::Explicit => "Explicit",
            VrStyle::Implicit => "Implicit",
        };
        let endianness = match self.byte_order {
            Endianness::Little => "Little",
            Endianness::Big => "Big",
        };
        write!(f, "{} VR {} Endian", vr, endianness)?;
        match self.compression {
            Compression::None => Ok(()),
            Compression::Deflate => f.write_str(" (deflate)"),
            Compression::Rle => f.write_str(" (RLE)"),
        }
    }
}
