//! This module contains all DICOM data element header decoding logic.
//!
//! A decoder reads the tag of the next element,
//! followed by its value representation (if explicit) and its value length.
//! The value itself is left in the source,
//! to be read or skipped by the caller.

use self::basic::{BasicDecoder, BigEndianBasicDecoder, LittleEndianBasicDecoder};
use self::explicit::{ExplicitVRBigEndianDecoder, ExplicitVRLittleEndianDecoder};
use self::implicit::{ImplicitVRBigEndianDecoder, ImplicitVRLittleEndianDecoder};
use crate::mode::{ParseMode, VrStyle};
use byteordered::Endianness;
use dicom_scan_core::header::{DataElementHeader, Length};
use dicom_scan_core::{Tag, VR};
use snafu::{Backtrace, Snafu};
use std::io::{self, Read};

pub mod basic;
pub mod explicit;
pub mod implicit;

/// Module-level error type:
/// for errors which may occur while decoding DICOM data element headers.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read the header's tag field: {}", source))]
    ReadTag {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's value representation: {}", source))]
    ReadVr {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes: {}", source))]
    ReadReserved {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's element length field: {}", source))]
    ReadLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Failed to read the header's item length field: {}", source))]
    ReadItemLength {
        backtrace: Backtrace,
        source: io::Error,
    },
    #[snafu(display("Unrecognized value representation {:02X?} in element {}", bytes, tag))]
    UnknownVr {
        tag: Tag,
        bytes: [u8; 2],
        backtrace: Backtrace,
    },
}

impl Error {
    /// Check whether the decoding failed
    /// because the source ended before the header was complete.
    pub fn is_eof(&self) -> bool {
        match self {
            Error::ReadTag { source, .. }
            | Error::ReadVr { source, .. }
            | Error::ReadReserved { source, .. }
            | Error::ReadLength { source, .. }
            | Error::ReadItemLength { source, .. } => {
                source.kind() == io::ErrorKind::UnexpectedEof
            }
            Error::UnknownVr { .. } => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/** Obtain a data element decoder for reading the data elements in a DICOM
 * file's Meta information. According to the standard, these are always
 * encoded in Explicit VR Little Endian.
 */
pub fn file_header_decoder() -> ExplicitVRLittleEndianDecoder {
    ExplicitVRLittleEndianDecoder::default()
}

/** Type trait for reading and decoding basic data values from a data source.
 *
 * This trait aims to provide methods for reading binary numbers based on the
 * source's endianness. Unlike `Decode`, this trait is not object safe.
 * However, it doesn't have to because there are, and only will be, two
 * possible implementations (`LittleEndianBasicDecoder` and
 * `BigEndianBasicDecoder`).
 */
pub trait BasicDecode {
    /// Retrieve the source's endianness, as expected by this decoder.
    fn endianness(&self) -> Endianness;

    /// Decode an unsigned short value from the given source.
    fn decode_us<S>(&self, source: S) -> std::io::Result<u16>
    where
        S: Read;

    /// Decode an unsigned long value from the given source.
    fn decode_ul<S>(&self, source: S) -> std::io::Result<u32>
    where
        S: Read;

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, mut source: S) -> std::io::Result<Tag>
    where
        S: Read,
    {
        let g = self.decode_us(&mut source)?;
        let e = self.decode_us(source)?;
        Ok(Tag(g, e))
    }
}

impl<'a, T: ?Sized> BasicDecode for &'a T
where
    T: BasicDecode,
{
    fn endianness(&self) -> Endianness {
        (*self).endianness()
    }

    fn decode_us<S>(&self, source: S) -> std::io::Result<u16>
    where
        S: Read,
    {
        (**self).decode_us(source)
    }

    fn decode_ul<S>(&self, source: S) -> std::io::Result<u32>
    where
        S: Read,
    {
        (**self).decode_ul(source)
    }

    fn decode_tag<S>(&self, source: S) -> std::io::Result<Tag>
    where
        S: Read,
    {
        (**self).decode_tag(source)
    }
}

/** Type trait for reading and decoding DICOM data element headers.
 *
 * The specific behaviour of decoding, even when abstracted from the original source,
 * depends on the parse mode.
 */
pub trait Decode {
    /** Fetch and decode the next data element header from the given source.
     * This method returns only the header of the element. At the end of this operation, the source
     * will be pointing at the element's value data, which should be read or skipped as necessary.
     *
     * Decoding an item or sequence delimiter is considered valid, and so should be properly handled
     * by the decoder. The value representation in this case should be `UN`.
     *
     * Returns the expected header and the exact number of bytes read from the source.
     */
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        let tag = self.decode_tag(source)?;
        let (vr, len, bytes_read) = self.decode_length(tag, source)?;
        Ok((DataElementHeader::new(tag, vr, len), 4 + bytes_read))
    }

    /// Decode a DICOM attribute tag from the given source.
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read;

    /** Decode the rest of a data element header whose tag was already read:
     * the value representation, if applicable, and the value length.
     *
     * Returns the value representation (`UN` when not explicitly encoded),
     * the value length, which may be undefined,
     * and the exact number of bytes read from the source.
     */
    fn decode_length<S>(&self, tag: Tag, source: &mut S) -> Result<(VR, Length, usize)>
    where
        S: ?Sized + Read;
}

impl<'a, T: ?Sized> Decode for &'a T
where
    T: Decode,
{
    fn decode_header<S>(&self, source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        (**self).decode_header(source)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        (**self).decode_tag(source)
    }

    fn decode_length<S>(&self, tag: Tag, source: &mut S) -> Result<(VR, Length, usize)>
    where
        S: ?Sized + Read,
    {
        (**self).decode_length(tag, source)
    }
}

/// Check whether the tag belongs to an item or a delimiter,
/// whose headers never carry a value representation.
#[inline]
pub(crate) fn is_item_or_delimiter(tag: Tag) -> bool {
    tag.group() == 0xFFFE
}

/// A data element header decoder for any parse mode, decided at run-time.
/// Since only four combinations are possible,
/// this enum may become more efficient than the use of a trait object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ModeDecoder {
    /// Explicit VR Little Endian
    ExplicitLE(ExplicitVRLittleEndianDecoder),
    /// Explicit VR Big Endian
    ExplicitBE(ExplicitVRBigEndianDecoder),
    /// Implicit VR Little Endian
    ImplicitLE(ImplicitVRLittleEndianDecoder),
    /// Implicit VR Big Endian (retired, not defined by any standard transfer syntax)
    ImplicitBE(ImplicitVRBigEndianDecoder),
}

impl ModeDecoder {
    /// Create a decoder for the given parse mode.
    pub fn new(mode: ParseMode) -> Self {
        match (mode.vr_style, mode.byte_order) {
            (VrStyle::Explicit, Endianness::Little) => ExplicitLE(Default::default()),
            (VrStyle::Explicit, Endianness::Big) => ExplicitBE(Default::default()),
            (VrStyle::Implicit, Endianness::Little) => ImplicitLE(Default::default()),
            (VrStyle::Implicit, Endianness::Big) => ImplicitBE(Default::default()),
        }
    }

    /// Obtain a basic decoder with the same byte order,
    /// for reading primitive values.
    pub fn basic(&self) -> BasicDecoder {
        match self {
            ExplicitLE(_) | ImplicitLE(_) => BasicDecoder::LE(LittleEndianBasicDecoder),
            ExplicitBE(_) | ImplicitBE(_) => BasicDecoder::BE(BigEndianBasicDecoder),
        }
    }
}

impl From<ParseMode> for ModeDecoder {
    fn from(mode: ParseMode) -> Self {
        ModeDecoder::new(mode)
    }
}

use self::ModeDecoder::{ExplicitBE, ExplicitLE, ImplicitBE, ImplicitLE};

macro_rules! for_all {
    ($s: expr, |$e: ident| $f: expr) => {
        match *$s {
            ExplicitLE(ref $e) => $f,
            ExplicitBE(ref $e) => $f,
            ImplicitLE(ref $e) => $f,
            ImplicitBE(ref $e) => $f,
        }
    };
}

impl Decode for ModeDecoder {
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        for_all!(self, |e| e.decode_tag(source))
    }

    fn decode_length<S>(&self, tag: Tag, source: &mut S) -> Result<(VR, Length, usize)>
    where
        S: ?Sized + Read,
    {
        for_all!(self, |e| e.decode_length(tag, source))
    }
}
