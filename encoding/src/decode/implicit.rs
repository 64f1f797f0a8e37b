//! Implicit VR data element header decoding, in either byte order.
//!
//! Without a dictionary of attributes, the value representation
//! of an implicit VR element cannot be known,
//! so it is always reported as `UN`.
//! Every value length takes 32 bits.

use crate::decode::basic::{BigEndianBasicDecoder, LittleEndianBasicDecoder};
use crate::decode::{
    is_item_or_delimiter, BasicDecode, Decode, ReadItemLengthSnafu, ReadLengthSnafu,
    ReadTagSnafu, Result,
};
use dicom_scan_core::header::Length;
use dicom_scan_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element header decoder for implicit VR transfer syntaxes.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ImplicitVRDecoder<BD> {
    basic: BD,
}

/// A data element decoder for the Implicit VR Little Endian transfer syntax.
pub type ImplicitVRLittleEndianDecoder = ImplicitVRDecoder<LittleEndianBasicDecoder>;

/// A data element decoder for implicit VR in big endian,
/// which no standard transfer syntax defines.
pub type ImplicitVRBigEndianDecoder = ImplicitVRDecoder<BigEndianBasicDecoder>;

impl<BD> Decode for ImplicitVRDecoder<BD>
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
        let len = if is_item_or_delimiter(tag) {
            self.basic
                .decode_ul(&mut *source)
                .context(ReadItemLengthSnafu)?
        } else {
            self.basic
                .decode_ul(&mut *source)
                .context(ReadLengthSnafu)?
        };
        Ok((VR::UN, Length(len), 4))
    }
}

#[cfg(test)]
mod tests {
    use super::{ImplicitVRBigEndianDecoder, ImplicitVRLittleEndianDecoder};
    use crate::decode::Decode;
    use dicom_scan_core::header::{HasLength, Header, Length};
    use dicom_scan_core::{Tag, VR};
    use std::io::{Cursor, Read, Seek, SeekFrom};

    // manually crafting some DICOM data elements
    //  Tag: (0002,0002) Media Storage SOP Class UID
    //  Length: 26
    //  Value: "1.2.840.10008.5.1.4.1.1.1\0"
    // --
    //  Tag: (0002,0010) Transfer Syntax UID
    //  Length: 20
    //  Value: "1.2.840.10008.1.2.1\0" == ExplicitVRLittleEndian
    // --
    #[rustfmt::skip]
    const RAW: &[u8; 62] = &[
        0x02, 0x00, 0x02, 0x00, 0x1a, 0x00, 0x00, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30, 0x2e,
        0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e, 0x31, 0x2e,
        0x31, 0x00,
        0x02, 0x00, 0x10, 0x00, 0x14, 0x00, 0x00, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30, 0x2e,
        0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e, 0x31, 0x00,
    ];

    #[test]
    fn implicit_vr_le() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW.as_ref());
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0002, 0x0002));
            assert_eq!(elem.vr(), VR::UN);
            assert_eq!(elem.length(), Length(26));
            assert_eq!(bytes_read, 8);
            // read only half of the data
            let mut buffer: Vec<u8> = vec![0; 13];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(buffer.as_slice(), b"1.2.840.10008".as_ref());
        }
        // cursor should now be @ #21 (there is no automatic skipping)
        assert_eq!(cursor.seek(SeekFrom::Current(0)).unwrap(), 21);
        // cursor should now be @ #34 after skipping
        assert_eq!(cursor.seek(SeekFrom::Current(13)).unwrap(), 34);
        {
            let (elem, _bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0002, 0x0010));
            assert_eq!(elem.vr(), VR::UN);
            assert_eq!(elem.length(), Length(20));
            let mut buffer: Vec<u8> = vec![0; 20];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(buffer.as_slice(), b"1.2.840.10008.1.2.1\0".as_ref());
        }
    }

    #[rustfmt::skip]
    const RAW_ITEMS: &[u8] = &[
        // (0008,1140) ReferencedImageSequence, undefined length
        0x08, 0x00, 0x40, 0x11, 0xFF, 0xFF, 0xFF, 0xFF,
        // Item, length 0
        0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
        // Sequence delimiter
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_items() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_ITEMS);

        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x1140));
        assert!(elem.length().is_undefined());

        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_item());
        assert!(elem.is_empty());

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_sequence_delimiter());
        assert_eq!(bytes_read, 8);
    }

    #[test]
    fn implicit_vr_be() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            // (0028,0010) Rows, length 2
            0x00, 0x28, 0x00, 0x10, 0x00, 0x00, 0x00, 0x02,
        ];
        let dec = ImplicitVRBigEndianDecoder::default();
        let (elem, _) = dec.decode_header(&mut Cursor::new(raw)).unwrap();
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(elem.length(), Length(2));
    }
}
