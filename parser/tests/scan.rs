//! Scanning tests over hand-crafted DICOM files.

use dicom_scan_core::dictionary::EmptyMetadataDictionary;
use dicom_scan_core::header::{HasLength, Header, Length};
use dicom_scan_core::Tag;
use dicom_scan_encoding::{Endianness, VrStyle};
use dicom_scan_parser::{
    ErrorKind, MetadataElement, MetadataValue, PixelDataLocation, ScanVisitor, Scanner,
    StreamSource,
};

const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";
const IMPLICIT_VR_LE: &str = "1.2.840.10008.1.2";
const EXPLICIT_VR_BE: &str = "1.2.840.10008.1.2.2";
const DEFLATED: &str = "1.2.840.10008.1.2.1.99";
const JPEG_BASELINE: &str = "1.2.840.10008.1.2.4.50";

const PIXEL_DATA: (u16, u16) = (0x7FE0, 0x0010);
const ROWS: (u16, u16) = (0x0028, 0x0010);
const COLUMNS: (u16, u16) = (0x0028, 0x0011);

fn is_long(vr: &[u8; 2]) -> bool {
    matches!(vr, b"OB" | b"OW" | b"OF" | b"SQ" | b"UT" | b"UN")
}

/// an element in explicit VR little endian
fn ele(tag: (u16, u16), vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.0.to_le_bytes());
    out.extend_from_slice(&tag.1.to_le_bytes());
    out.extend_from_slice(vr);
    if is_long(vr) {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    } else {
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
    }
    out.extend_from_slice(value);
    out
}

/// the header of an element of undefined length in explicit VR little endian
fn ele_undefined(tag: (u16, u16), vr: &[u8; 2]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.0.to_le_bytes());
    out.extend_from_slice(&tag.1.to_le_bytes());
    out.extend_from_slice(vr);
    out.extend_from_slice(&[0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
    out
}

/// an element in explicit VR big endian
fn ele_be(tag: (u16, u16), vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.0.to_be_bytes());
    out.extend_from_slice(&tag.1.to_be_bytes());
    out.extend_from_slice(vr);
    if is_long(vr) {
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&(value.len() as u32).to_be_bytes());
    } else {
        out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    }
    out.extend_from_slice(value);
    out
}

/// the header of an element of undefined length in explicit VR big endian
fn ele_undefined_be(tag: (u16, u16), vr: &[u8; 2]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.0.to_be_bytes());
    out.extend_from_slice(&tag.1.to_be_bytes());
    out.extend_from_slice(vr);
    out.extend_from_slice(&[0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
    out
}

/// an item or delimiter header, big endian
fn item_tag_be(element: u16, len: u32) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    out.extend_from_slice(&element.to_be_bytes());
    out.extend_from_slice(&len.to_be_bytes());
    out
}

/// an element in implicit VR little endian
fn ele_implicit(tag: (u16, u16), value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag.0.to_le_bytes());
    out.extend_from_slice(&tag.1.to_le_bytes());
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
    out
}

/// an item or delimiter header, little endian
fn item_tag(element: u16, len: u32) -> Vec<u8> {
    let mut out = vec![0xFE, 0xFF];
    out.extend_from_slice(&element.to_le_bytes());
    out.extend_from_slice(&len.to_le_bytes());
    out
}

fn item(len: u32) -> Vec<u8> {
    item_tag(0xE000, len)
}

fn item_delimiter() -> Vec<u8> {
    item_tag(0xE00D, 0)
}

fn sequence_delimiter() -> Vec<u8> {
    item_tag(0xE0DD, 0)
}

fn preamble() -> Vec<u8> {
    let mut out = vec![0; 128];
    out.extend_from_slice(b"DICM");
    out
}

fn file_meta(uid: &str) -> Vec<u8> {
    let mut uid = uid.as_bytes().to_vec();
    if uid.len() % 2 == 1 {
        uid.push(0);
    }
    let mut rest = ele((0x0002, 0x0001), b"OB", &[0x00, 0x01]);
    rest.extend(ele((0x0002, 0x0002), b"UI", b"1.2.840.10008.5.1.4.1.1.7\0"));
    rest.extend(ele((0x0002, 0x0010), b"UI", &uid));
    let mut out = ele((0x0002, 0x0000), b"UL", &(rest.len() as u32).to_le_bytes());
    out.extend(rest);
    out
}

fn dicom_file(uid: &str, data_set: &[u8]) -> Vec<u8> {
    let mut out = preamble();
    out.extend(file_meta(uid));
    out.extend_from_slice(data_set);
    out
}

fn scan(data: &[u8]) -> dicom_scan_parser::Result<PixelDataLocation> {
    Scanner::new(StreamSource::from_bytes(data)).scan()
}

fn scan_metadata(data: &[u8]) -> (PixelDataLocation, Vec<MetadataElement>) {
    let mut metadata = Vec::new();
    let location = Scanner::new(StreamSource::from_bytes(data))
        .scan_with(&mut metadata)
        .expect("scan should succeed");
    (location, metadata)
}

fn scan_err(data: &[u8]) -> ErrorKind {
    scan(data).expect_err("scan should fail").kind()
}

#[test]
fn finds_pixel_data_in_explicit_vr_le() {
    let mut data_set = ele((0x0008, 0x0060), b"CS", b"OT");
    data_set.extend(ele((0x0010, 0x0010), b"PN", b"Doe^John"));
    let mut data = dicom_file(EXPLICIT_VR_LE, &data_set);
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 10]));

    let location = scan(&data).unwrap();
    assert_eq!(location.offset, expected_offset);
    assert_eq!(location.header.tag(), Tag(0x7FE0, 0x0010));
    assert_eq!(location.header.length(), Length(10));
    assert_eq!(location.transfer_syntax.uid(), EXPLICIT_VR_LE);
    assert_eq!(location.mode.byte_order, Endianness::Little);
    assert_eq!(location.mode.vr_style, VrStyle::Explicit);
    // the payload is right there
    assert_eq!(&data[location.offset as usize..], &[0; 10]);
}

#[test]
fn deflated_syntax_is_unsupported() {
    let mut data = dicom_file(DEFLATED, &[]);
    data.extend(ele(PIXEL_DATA, b"OB", &[0; 4]));
    assert_eq!(scan_err(&data), ErrorKind::UnsupportedSyntax);
}

#[test]
fn unknown_syntax_is_unresolved() {
    let mut data = dicom_file("1.2.3.4.5.6", &[]);
    data.extend(ele(PIXEL_DATA, b"OB", &[0; 4]));
    assert_eq!(scan_err(&data), ErrorKind::UnresolvedSyntax);
}

#[test]
fn undefined_length_element_is_skipped_through_its_delimiter() {
    // (0008,1140) SQ of undefined length with two inner elements
    let mut data_set = ele_undefined((0x0008, 0x1140), b"SQ");
    data_set.extend(item(10));
    data_set.extend(ele((0x0008, 0x1150), b"UI", b"1.2"));
    data_set.extend(item(0));
    data_set.extend(sequence_delimiter());
    // the next sibling
    data_set.extend(ele(ROWS, b"US", &[0x00, 0x02]));

    let mut data = dicom_file(EXPLICIT_VR_LE, &data_set);
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 4]));

    let (location, metadata) = scan_metadata(&data);
    assert_eq!(location.offset, expected_offset);
    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].tag, Tag(0x0028, 0x0010));
    assert_eq!(metadata[0].value, MetadataValue::UnsignedShort(512));
}

#[test]
fn truncated_after_file_meta() {
    let data = dicom_file(EXPLICIT_VR_LE, &[]);
    assert_eq!(scan_err(&data), ErrorKind::Truncated);
}

#[test]
fn truncated_in_the_middle_of_a_header() {
    let mut data = dicom_file(EXPLICIT_VR_LE, &ele(ROWS, b"US", &[1, 0]));
    data.extend_from_slice(&[0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00]);
    assert_eq!(scan_err(&data), ErrorKind::Truncated);
}

#[test]
fn truncated_in_the_middle_of_a_value() {
    let mut data = dicom_file(EXPLICIT_VR_LE, &[]);
    let mut element = ele((0x0010, 0x0010), b"PN", b"Doe^John");
    element.truncate(element.len() - 3);
    data.extend(element);
    assert_eq!(scan_err(&data), ErrorKind::Truncated);
}

#[test]
fn truncated_inside_a_sequence() {
    let mut data_set = ele_undefined((0x0008, 0x1140), b"SQ");
    data_set.extend(item(0));
    let data = dicom_file(EXPLICIT_VR_LE, &data_set);
    assert_eq!(scan_err(&data), ErrorKind::Truncated);
}

#[test]
fn truncated_preamble() {
    assert_eq!(scan_err(&[]), ErrorKind::Truncated);
    assert_eq!(scan_err(&[0; 130]), ErrorKind::Truncated);
}

#[test]
fn not_dicom() {
    let mut data = vec![0; 128];
    data.extend_from_slice(b"DICN");
    data.extend(file_meta(EXPLICIT_VR_LE));
    assert_eq!(scan_err(&data), ErrorKind::NotDicom);
}

#[test]
fn missing_transfer_syntax() {
    let mut data = preamble();
    data.extend(ele((0x0002, 0x0001), b"OB", &[0x00, 0x01]));
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    assert_eq!(scan_err(&data), ErrorKind::MissingTransferSyntax);
}

#[test]
fn oversized_transfer_syntax_uid() {
    let mut data = preamble();
    data.extend(ele((0x0002, 0x0010), b"UI", &[b'1'; 66]));
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    assert_eq!(scan_err(&data), ErrorKind::MalformedElement);
}

#[test]
fn padded_transfer_syntax_uid() {
    let mut data = preamble();
    data.extend(ele((0x0002, 0x0010), b"UI", b"1.2.840.10008.1.2.1 "));
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    assert_eq!(scan(&data).unwrap().offset, expected_offset);
}

#[test]
fn unknown_vr_is_malformed() {
    let mut data = dicom_file(EXPLICIT_VR_LE, &[]);
    data.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, b'Q', b'Q', 0x02, 0x00, b'O', b'T']);
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    assert_eq!(scan_err(&data), ErrorKind::MalformedElement);
}

#[test]
fn explicit_vr_big_endian_rederives_the_first_tag() {
    let mut data_set = ele_be(ROWS, b"US", &[0x02, 0x00]);
    // a sequence of undefined length with one item of each kind
    data_set.extend(ele_undefined_be((0x0008, 0x1140), b"SQ"));
    data_set.extend(item_tag_be(0xE000, 0xFFFF_FFFF));
    data_set.extend(ele_be((0x0008, 0x1150), b"UI", b"1.2\0"));
    data_set.extend(item_tag_be(0xE00D, 0));
    data_set.extend(item_tag_be(0xE000, 2));
    data_set.extend_from_slice(&[0xAB, 0xCD]);
    data_set.extend(item_tag_be(0xE0DD, 0));
    data_set.extend(ele_be(COLUMNS, b"US", &[0x01, 0x00]));
    let mut data = dicom_file(EXPLICIT_VR_BE, &data_set);
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele_be(PIXEL_DATA, b"OW", &[0; 8]));

    let (location, metadata) = scan_metadata(&data);
    assert_eq!(location.offset, expected_offset);
    assert_eq!(location.header.length(), Length(8));
    assert_eq!(location.mode.byte_order, Endianness::Big);
    assert_eq!(
        metadata.iter().map(|e| (e.tag, e.value.clone())).collect::<Vec<_>>(),
        vec![
            (Tag(0x0028, 0x0010), MetadataValue::UnsignedShort(512)),
            (Tag(0x0028, 0x0011), MetadataValue::UnsignedShort(256)),
        ]
    );
}

#[test]
fn implicit_vr_little_endian() {
    let mut data_set = ele_implicit((0x0008, 0x0060), b"OT");
    data_set.extend(ele_implicit(COLUMNS, &[0x40, 0x00]));
    // an undefined length sequence with an undefined length item
    data_set.extend_from_slice(&[0x08, 0x00, 0x40, 0x11, 0xFF, 0xFF, 0xFF, 0xFF]);
    data_set.extend(item(0xFFFF_FFFF));
    data_set.extend(ele_implicit((0x0008, 0x1150), b"1.2\0"));
    data_set.extend(item_delimiter());
    data_set.extend(sequence_delimiter());
    let mut data = dicom_file(IMPLICIT_VR_LE, &data_set);
    let expected_offset = data.len() as u64 + 8;
    data.extend(ele_implicit(PIXEL_DATA, &[0; 6]));

    let (location, metadata) = scan_metadata(&data);
    assert_eq!(location.offset, expected_offset);
    assert_eq!(location.mode.vr_style, VrStyle::Implicit);
    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].value, MetadataValue::UnsignedShort(64));
}

#[test]
fn undefined_and_defined_lengths_end_at_the_same_place() {
    let mut content = item(0xFFFF_FFFF);
    content.extend(ele((0x0008, 0x1150), b"UI", b"1.2"));
    content.extend(ele_undefined((0x0008, 0x1199), b"SQ"));
    content.extend(sequence_delimiter());
    content.extend(item_delimiter());
    content.extend(item(4));
    content.extend_from_slice(&[0; 4]);

    let mut defined = ele((0x0008, 0x1140), b"SQ", &content);
    defined.extend(ele(ROWS, b"US", &[0x10, 0x00]));
    defined.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));

    let mut undefined = ele_undefined((0x0008, 0x1140), b"SQ");
    undefined.extend_from_slice(&content);
    undefined.extend(sequence_delimiter());
    undefined.extend(ele(ROWS, b"US", &[0x10, 0x00]));
    undefined.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));

    let (a, meta_a) = scan_metadata(&dicom_file(EXPLICIT_VR_LE, &defined));
    let (b, meta_b) = scan_metadata(&dicom_file(EXPLICIT_VR_LE, &undefined));
    // the only difference is the sequence delimiter
    assert_eq!(b.offset - a.offset, 8);
    assert_eq!(meta_a, meta_b);
    assert_eq!(meta_a[0].value, MetadataValue::UnsignedShort(16));
}

#[test]
fn deep_nesting() {
    const DEPTH: usize = 2000;
    let mut data_set = Vec::new();
    for _ in 0..DEPTH {
        data_set.extend(ele_undefined((0x0008, 0x1140), b"SQ"));
        data_set.extend(item(0xFFFF_FFFF));
    }
    for _ in 0..DEPTH {
        data_set.extend(item_delimiter());
        data_set.extend(sequence_delimiter());
    }
    let mut data = dicom_file(EXPLICIT_VR_LE, &data_set);
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    assert_eq!(scan(&data).unwrap().offset, expected_offset);
}

#[test]
fn stray_and_irregular_delimiters_are_tolerated() {
    let mut data_set = ele_undefined((0x0008, 0x1140), b"SQ");
    // item delimiter out of place
    data_set.extend(item_delimiter());
    // sequence delimiter with a non-zero length
    data_set.extend(item_tag(0xE0DD, 4));
    data_set.extend(ele(ROWS, b"US", &[0x03, 0x00]));
    let mut data = dicom_file(EXPLICIT_VR_LE, &data_set);
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));

    let (location, metadata) = scan_metadata(&data);
    assert_eq!(location.offset, expected_offset);
    assert_eq!(metadata[0].value, MetadataValue::UnsignedShort(3));
}

#[test]
fn scanning_is_idempotent() {
    let mut data_set = ele(ROWS, b"US", &[0x00, 0x01]);
    data_set.extend(ele_undefined((0x0008, 0x1140), b"SQ"));
    data_set.extend(sequence_delimiter());
    let mut data = dicom_file(EXPLICIT_VR_LE, &data_set);
    data.extend(ele(PIXEL_DATA, b"OB", &[0; 2]));

    let first = scan_metadata(&data);
    let second = scan_metadata(&data);
    assert_eq!(first, second);
}

#[test]
fn scanning_encapsulated_pixel_data_is_idempotent() {
    let mut data = dicom_file(JPEG_BASELINE, &ele(ROWS, b"US", &[0x01, 0x00]));
    data.extend(ele_undefined(PIXEL_DATA, b"OB"));
    data.extend(item(0));

    let first = scan(&data).unwrap();
    let second = scan(&data).unwrap();
    assert!(first.header.length().is_undefined());
    assert_eq!(first, first.clone());
    assert_eq!(first, second);
}

#[test]
fn decodes_metadata_fields() {
    let mut data_set = ele((0x0028, 0x0002), b"US", &[0x01, 0x00]);
    data_set.extend(ele((0x0028, 0x0004), b"CS", b"MONOCHROME2 "));
    data_set.extend(ele((0x0028, 0x0009), b"AT", &[0x18, 0x00, 0x63, 0x10]));
    // longer than needed: the rest is skipped
    data_set.extend(ele(ROWS, b"US", &[0x00, 0x02, 0x00, 0x01]));
    data_set.extend(ele(COLUMNS, b"US", &[0x00, 0x02]));
    // not in the table
    data_set.extend(ele((0x0028, 0x7FFF), b"US", &[0x00, 0x00]));
    data_set.extend(ele((0x0028, 0x9001), b"UL", &[0x70, 0x11, 0x01, 0x00]));
    let mut data = dicom_file(EXPLICIT_VR_LE, &data_set);
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));

    let (_, metadata) = scan_metadata(&data);
    let values: Vec<_> = metadata
        .iter()
        .map(|e| (e.alias, e.value.clone()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("Samples per Pixel", MetadataValue::UnsignedShort(1)),
            (
                "Photometric Interpretation",
                MetadataValue::Text("MONOCHROME2".to_string())
            ),
            (
                "Frame Increment Pointer",
                MetadataValue::TagPair(Tag(0x0018, 0x1063))
            ),
            ("Rows", MetadataValue::UnsignedShort(512)),
            ("Columns", MetadataValue::UnsignedShort(512)),
            ("Data Point Rows", MetadataValue::UnsignedLong(70_000)),
        ]
    );
    assert_eq!(metadata[3].length, 4);
    assert_eq!(metadata[1].to_string(), "Photometric Interpretation: MONOCHROME2");
}

#[test]
fn metadata_of_undefined_length_is_skipped() {
    let mut data_set = ele_undefined((0x0028, 0x0004), b"UN");
    data_set.extend(sequence_delimiter());
    data_set.extend(ele(ROWS, b"US", &[0x05, 0x00]));
    let mut data = dicom_file(EXPLICIT_VR_LE, &data_set);
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));

    let (_, metadata) = scan_metadata(&data);
    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].alias, "Rows");
}

#[test]
fn oversized_text_is_malformed() {
    let text = vec![b'A'; 1026];
    let mut data = dicom_file(EXPLICIT_VR_LE, &ele((0x0028, 0x0004), b"UT", &text));
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    assert_eq!(scan_err(&data), ErrorKind::MalformedElement);

    // exactly at the limit is fine
    let text = vec![b'A'; 1024];
    let mut data = dicom_file(EXPLICIT_VR_LE, &ele((0x0028, 0x0004), b"UT", &text));
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    let (_, metadata) = scan_metadata(&data);
    assert_eq!(metadata[0].value, MetadataValue::Text("A".repeat(1024)));
}

#[test]
fn short_metadata_field_is_malformed() {
    let mut data = dicom_file(EXPLICIT_VR_LE, &ele(ROWS, b"US", &[0x01]));
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));
    assert_eq!(scan_err(&data), ErrorKind::MalformedElement);
}

#[test]
fn empty_dictionary_reports_nothing() {
    let mut data = dicom_file(EXPLICIT_VR_LE, &ele(ROWS, b"US", &[0x01, 0x00]));
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));

    let mut metadata: Vec<MetadataElement> = Vec::new();
    let location =
        Scanner::with_dictionary(StreamSource::from_bytes(&data), EmptyMetadataDictionary)
            .scan_with(&mut metadata)
            .unwrap();
    assert_eq!(location.offset, expected_offset);
    assert!(metadata.is_empty());
}

#[test]
fn encapsulated_pixel_data() {
    let mut data = dicom_file(JPEG_BASELINE, &ele(ROWS, b"US", &[0x01, 0x00]));
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele_undefined(PIXEL_DATA, b"OB"));
    data.extend(item(0));

    let location = scan(&data).unwrap();
    assert_eq!(location.offset, expected_offset);
    assert!(location.header.is_encapsulated_pixeldata());
    assert!(location.transfer_syntax.is_encapsulated_pixel_data());
}

#[test]
fn visitor_sees_the_transfer_syntax() {
    #[derive(Default)]
    struct Recorder {
        uid: Option<&'static str>,
        count: usize,
    }

    impl ScanVisitor for Recorder {
        fn on_transfer_syntax(&mut self, ts: &'static dicom_scan_encoding::TransferSyntax) {
            self.uid = Some(ts.uid());
        }

        fn on_metadata(&mut self, _element: MetadataElement) {
            self.count += 1;
        }
    }

    let mut data = dicom_file(EXPLICIT_VR_LE, &ele(ROWS, b"US", &[0x01, 0x00]));
    data.extend(ele(PIXEL_DATA, b"OW", &[0; 2]));

    let mut recorder = Recorder::default();
    Scanner::new(StreamSource::from_bytes(&data))
        .scan_with(&mut recorder)
        .unwrap();
    assert_eq!(recorder.uid, Some(EXPLICIT_VR_LE));
    assert_eq!(recorder.count, 1);
}

#[test]
fn scans_through_a_borrowed_source() {
    let mut data = dicom_file(EXPLICIT_VR_LE, &[]);
    let expected_offset = data.len() as u64 + 12;
    data.extend(ele(PIXEL_DATA, b"OW", &[1, 2, 3, 4]));

    let mut source = StreamSource::from_bytes(&data);
    let location = Scanner::new(&mut source).scan().unwrap();
    assert_eq!(location.offset, expected_offset);
    // the source is left at the start of the pixel data
    let rest = source.into_inner();
    assert_eq!(rest, &[1, 2, 3, 4]);
}
