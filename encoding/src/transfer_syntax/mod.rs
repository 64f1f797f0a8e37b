//! Module containing the DICOM Transfer Syntax data structure and related methods.
//! The `TransferSyntax` describes how a data set is encoded:
//! its byte order, whether value representations are explicit,
//! and which codec (if any) its content requires.
//!
//! This crate does not host specific transfer syntaxes. Instead, they are
//! declared in the `dicom-scan-transfer-syntax-registry` crate,
//! which implements [`TransferSyntaxIndex`].
//!
//! [`TransferSyntaxIndex`]: ./trait.TransferSyntaxIndex.html

use crate::mode::{Compression, ParseMode, VrStyle};
use byteordered::Endianness;

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The numeric type code, derived from the trailing UID components.
    code: u16,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements.
    codec: Codec,
}

/// A description regarding the encoding and decoding requirements
/// of a transfer syntax.
/// This is also used as a means to describe whether pixel data is encapsulated.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Codec {
    /// No codec is given, nor is it required.
    None,
    /// The pixel data is encapsulated in a compressed image or video format.
    /// Data sets can still be parsed and the pixel data located.
    EncapsulatedPixelData,
    /// The pixel data is encapsulated and compressed with RLE Lossless.
    RleLossless,
    /// Custom decoding of the entire data set is required
    /// (e.g. _Deflated Explicit VR Little Endian_),
    /// which is not supported.
    Dataset,
}

/// Trait for containers of transfer syntax specifiers.
///
/// Types implementing this trait are held responsible for populating
/// themselves with a set of transfer syntaxes, which can be supported
/// or not. Usually, only one implementation of this trait is used for the
/// entire program.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of trailing padding (`\0` or space) in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

/// Remove the trailing padding of a UID value,
/// as read from a DICOM data element.
///
/// ```
/// # use dicom_scan_encoding::transfer_syntax::trim_uid;
/// assert_eq!(trim_uid("1.2.840.10008.1.2.1\0"), "1.2.840.10008.1.2.1");
/// assert_eq!(trim_uid("1.2.840.10008.1.2 "), "1.2.840.10008.1.2");
/// ```
pub fn trim_uid(uid: &str) -> &str {
    uid.trim_end_matches(|c| c == '\0' || c == ' ')
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        code: u16,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            code,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Create a new descriptor
    /// with the requirements of _Explicit VR Little Endian_.
    pub const fn new_ele(uid: &'static str, name: &'static str, code: u16, codec: Codec) -> Self {
        TransferSyntax::new(uid, name, code, Endianness::Little, true, codec)
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain the numeric type code of this transfer syntax.
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether this transfer syntax expects an explicit VR.
    pub const fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain this transfer syntax' codec specification.
    pub const fn codec(&self) -> Codec {
        self.codec
    }

    /// Check whether the data set of this transfer syntax
    /// can be scanned without an additional decoding layer.
    pub fn is_supported(&self) -> bool {
        self.codec != Codec::Dataset
    }

    /// Check whether the pixel data is encapsulated.
    pub fn is_encapsulated_pixel_data(&self) -> bool {
        matches!(
            self.codec,
            Codec::EncapsulatedPixelData | Codec::RleLossless
        )
    }

    /// Obtain the compression implied by this transfer syntax.
    pub fn compression(&self) -> Compression {
        match self.codec {
            Codec::Dataset => Compression::Deflate,
            Codec::RleLossless => Compression::Rle,
            Codec::None | Codec::EncapsulatedPixelData => Compression::None,
        }
    }

    /// Derive the parse mode of a data set in this transfer syntax.
    pub fn parse_mode(&self) -> ParseMode {
        let vr_style = if self.explicit_vr {
            VrStyle::Explicit
        } else {
            VrStyle::Implicit
        };
        ParseMode::new(self.byte_order, vr_style).with_compression(self.compression())
    }
}
