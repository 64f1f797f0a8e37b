//! Explicit VR data element header decoding, in either byte order.

use crate::decode::basic::{BigEndianBasicDecoder, LittleEndianBasicDecoder};
use crate::decode::{
    is_item_or_delimiter, BasicDecode, Decode, ReadItemLengthSnafu, ReadLengthSnafu,
    ReadReservedSnafu, ReadTagSnafu, ReadVrSnafu, Result, UnknownVrSnafu,
};
use dicom_scan_core::header::Length;
use dicom_scan_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element header decoder for explicit VR transfer syntaxes.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ExplicitVRDecoder<BD> {
    basic: BD,
}

/// A data element decoder for the Explicit VR Little Endian transfer syntax.
pub type ExplicitVRLittleEndianDecoder = ExplicitVRDecoder<LittleEndianBasicDecoder>;

/// A data element decoder for the Explicit VR Big Endian transfer syntax.
pub type ExplicitVRBigEndianDecoder = ExplicitVRDecoder<BigEndianBasicDecoder>;

impl<BD> Decode for ExplicitVRDecoder<BD>
where
    BD: BasicDecode,
{
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }

    fn decode_length<S>(&self, tag: Tag, source: &mut S) -> Result<(VR, Length, usize)>
    where
        S: ?Sized + Read,
    {
        if is_item_or_delimiter(tag) {
            // items and delimiters do not have VR or reserved field
            let len = self
                .basic
                .decode_ul(&mut *source)
                .context(ReadItemLengthSnafu)?;
            return Ok((VR::UN, Length(len), 4));
        }

        // retrieve explicit VR
        let mut buf = [0u8; 2];
        source.read_exact(&mut buf).context(ReadVrSnafu)?;
        let vr = match VR::from_binary(buf) {
            Some(vr) => vr,
            None => return UnknownVrSnafu { tag, bytes: buf }.fail(),
        };

        if vr.has_long_length() {
            // PS3.5 7.1.2: 2 reserved bytes, then a 32-bit value length
            source.read_exact(&mut buf).context(ReadReservedSnafu)?;
            let len = self
                .basic
                .decode_ul(&mut *source)
                .context(ReadLengthSnafu)?;
            Ok((vr, Length(len), 8))
        } else {
            let len = self
                .basic
                .decode_us(&mut *source)
                .context(ReadLengthSnafu)?;
            Ok((vr, Length(u32::from(len)), 4))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExplicitVRBigEndianDecoder, ExplicitVRLittleEndianDecoder};
    use crate::decode::Decode;
    use dicom_scan_core::header::{HasLength, Header, Length};
    use dicom_scan_core::{Tag, VR};
    use std::io::{Cursor, Read, Seek, SeekFrom};

    // manually crafting some DICOM data elements
    //  Tag: (0002,0002) Media Storage SOP Class UID
    //  VR: UI
    //  Length: 26
    //  Value: "1.2.840.10008.5.1.4.1.1.1\0"
    // --
    //  Tag: (0002,0010) Transfer Syntax UID
    //  VR: UI
    //  Length: 20
    //  Value: "1.2.840.10008.1.2.1\0" == ExplicitVRLittleEndian
    // --
    #[rustfmt::skip]
    const RAW: &[u8; 62] = &[
        0x02, 0x00, 0x02, 0x00, 0x55, 0x49, 0x1a, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30, 0x2e,
        0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e, 0x31, 0x2e,
        0x31, 0x00,
        0x02, 0x00, 0x10, 0x00, 0x55, 0x49, 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30, 0x2e,
        0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e, 0x31, 0x00,
    ];

    #[test]
    fn decode_data_elements() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW.as_ref());
        {
            // read first element
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(2, 2));
            assert_eq!(elem.vr(), VR::UI);
            assert_eq!(elem.length(), Length(26));
            assert_eq!(bytes_read, 8);
            // read only half of the value data
            let mut buffer = [0; 13];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(&buffer, b"1.2.840.10008".as_ref());
        }
        // cursor should now be @ #21 (there is no automatic skipping)
        assert_eq!(cursor.seek(SeekFrom::Current(0)).unwrap(), 21);
        // cursor should now be @ #34 after skipping
        assert_eq!(cursor.seek(SeekFrom::Current(13)).unwrap(), 34);
        {
            // read second element
            let (elem, _bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(2, 16));
            assert_eq!(elem.vr(), VR::UI);
            assert_eq!(elem.length(), Length(20));
            // read all data
            let mut buffer = [0; 20];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(&buffer, b"1.2.840.10008.1.2.1\0".as_ref());
        }
    }

    #[rustfmt::skip]
    const RAW_LONG: &[u8] = &[
        // (7FE0,0010) PixelData, OW, reserved, length 16
        0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00, 0x00, 0x10, 0x00, 0x00, 0x00,
        // (0008,1140) ReferencedImageSequence, SQ, reserved, undefined length
        0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        // (0040,A160) TextValue, UT, reserved, length 2
        0x40, 0x00, 0x60, 0xA1, b'U', b'T', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_long_form_lengths() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_LONG);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(elem.vr(), VR::OW);
        assert_eq!(elem.length(), Length(16));
        assert_eq!(bytes_read, 12);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x1140));
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.length().is_undefined());
        assert_eq!(bytes_read, 12);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.vr(), VR::UT);
        assert_eq!(elem.length(), Length(2));
        assert_eq!(bytes_read, 12);
        assert_eq!(cursor.position(), 36);
    }

    #[rustfmt::skip]
    const RAW_ITEMS: &[u8] = &[
        // Item, undefined length
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
        // Item delimiter
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // Item, length 4
        0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
        // Sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_items() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_ITEMS);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_item());
        assert_eq!(elem.vr(), VR::UN);
        assert!(elem.length().is_undefined());
        assert_eq!(bytes_read, 8);

        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_item_delimiter());
        assert_eq!(elem.length(), Length(0));

        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_item());
        assert_eq!(elem.length(), Length(4));
        cursor.seek(SeekFrom::Current(4)).unwrap();

        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_sequence_delimiter());
        assert_eq!(cursor.position(), RAW_ITEMS.len() as u64);
    }

    // (0028,0010) Rows, US, length 2, value 512
    // (7FE0,0010) PixelData, OB, reserved, undefined length
    #[rustfmt::skip]
    const RAW_BE: &[u8] = &[
        0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00,
        0x7F, 0xE0, 0x00, 0x10, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ];

    #[test]
    fn decode_explicit_vr_be() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_BE);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(elem.vr(), VR::US);
        assert_eq!(elem.length(), Length(2));
        assert_eq!(bytes_read, 8);
        cursor.seek(SeekFrom::Current(2)).unwrap();

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_pixel_data());
        assert!(elem.is_encapsulated_pixeldata());
        assert_eq!(bytes_read, 12);
    }
}
