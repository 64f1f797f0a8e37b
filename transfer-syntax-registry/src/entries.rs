//! A list of compiled transfer syntax specifiers.
//!
//! The constants exported here make up the registry's table.
//!
//! - **Fully implemented** means that data sets in the transfer syntax
//!   can be scanned and the pixel data located.
//!   Encapsulated pixel data is located but never decoded.
//! - **Stub descriptors** serve to provide information about
//!   the transfer syntax, which cannot be scanned without
//!   an additional decoding layer.
//!
//! The numeric code of each entry follows the dotted suffix of its UID.

use byteordered::Endianness;
use dicom_scan_encoding::transfer_syntax::{Codec, TransferSyntax as Ts};

// -- the three base transfer syntaxes, fully supported --

/// **Fully implemented:** Implicit VR Little Endian
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    0,
    Endianness::Little,
    false,
    Codec::None,
);

/// **Fully implemented:** Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new_ele(
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    1,
    Codec::None,
);

// -- known but not supported --

/// **Stub descriptor:** Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new_ele(
    "1.2.840.10008.1.2.1.99",
    "Deflated Explicit VR Little Endian",
    199,
    Codec::Dataset,
);

/// **Fully implemented:** Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    2,
    Endianness::Big,
    true,
    Codec::None,
);

// -- JPEG family, encapsulated pixel data --

/// **Fully implemented:** JPEG Baseline (Process 1)
pub const JPEG_BASELINE: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.50",
    "JPEG Baseline (Process 1)",
    450,
);

/// **Fully implemented:** JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.51",
    "JPEG Extended (Process 2 & 4)",
    451,
);

/// **Fully implemented:** JPEG Extended (Process 3 & 5) (Retired)
pub const JPEG_EXTENDED_PROCESS_3_5: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.52",
    "JPEG Extended (Process 3 & 5)",
    452,
);

/// **Fully implemented:** JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8) (Retired)
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL_6_8: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.53",
    "JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8)",
    453,
);

/// **Fully implemented:** JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9) (Retired)
pub const JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL_7_9: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.54",
    "JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9)",
    454,
);

/// **Fully implemented:** JPEG Full Progression, Non-Hierarchical (Process 10 & 12) (Retired)
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL_10_12: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.55",
    "JPEG Full Progression, Non-Hierarchical (Process 10 & 12)",
    455,
);

/// **Fully implemented:** JPEG Full Progression, Non-Hierarchical (Process 11 & 13) (Retired)
pub const JPEG_FULL_PROGRESSION_NON_HIERARCHICAL_11_13: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.56",
    "JPEG Full Progression, Non-Hierarchical (Process 11 & 13)",
    456,
);

/// **Fully implemented:** JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
    457,
);

/// **Fully implemented:** JPEG Lossless, Non-Hierarchical (Process 15) (Retired)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_15: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.58",
    "JPEG Lossless, Non-Hierarchical (Process 15)",
    458,
);

/// **Fully implemented:** JPEG Extended, Hierarchical (Process 16 & 18) (Retired)
pub const JPEG_EXTENDED_HIERARCHICAL_16_18: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.59",
    "JPEG Extended, Hierarchical (Process 16 & 18)",
    459,
);

/// **Fully implemented:** JPEG Extended, Hierarchical (Process 17 & 19) (Retired)
pub const JPEG_EXTENDED_HIERARCHICAL_17_19: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.60",
    "JPEG Extended, Hierarchical (Process 17 & 19)",
    460,
);

/// **Fully implemented:** JPEG Spectral Selection, Hierarchical (Process 20 & 22) (Retired)
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL_20_22: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.61",
    "JPEG Spectral Selection, Hierarchical (Process 20 & 22)",
    461,
);

/// **Fully implemented:** JPEG Spectral Selection, Hierarchical (Process 21 & 23) (Retired)
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL_21_23: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.62",
    "JPEG Spectral Selection, Hierarchical (Process 21 & 23)",
    462,
);

/// **Fully implemented:** JPEG Full Progression, Hierarchical (Process 24 & 26) (Retired)
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL_24_26: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.63",
    "JPEG Full Progression, Hierarchical (Process 24 & 26)",
    463,
);

/// **Fully implemented:** JPEG Full Progression, Hierarchical (Process 25 & 27) (Retired)
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL_25_27: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.64",
    "JPEG Full Progression, Hierarchical (Process 25 & 27)",
    464,
);

/// **Fully implemented:** JPEG Lossless, Hierarchical (Process 28) (Retired)
pub const JPEG_LOSSLESS_HIERARCHICAL_28: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.65",
    "JPEG Lossless, Hierarchical (Process 28)",
    465,
);

/// **Fully implemented:** JPEG Lossless, Hierarchical (Process 29) (Retired)
pub const JPEG_LOSSLESS_HIERARCHICAL_29: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.66",
    "JPEG Lossless, Hierarchical (Process 29)",
    466,
);

/// **Fully implemented:** JPEG (reserved 4.67)
pub const JPEG_RESERVED_67: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.67",
    "JPEG (reserved 4.67)",
    467,
);

/// **Fully implemented:** JPEG (reserved 4.68)
pub const JPEG_RESERVED_68: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.68",
    "JPEG (reserved 4.68)",
    468,
);

/// **Fully implemented:** JPEG (reserved 4.69)
pub const JPEG_RESERVED_69: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.69",
    "JPEG (reserved 4.69)",
    469,
);

/// **Fully implemented:** JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1])
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.70",
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1])",
    470,
);

// -- JPEG-LS, JPEG 2000 and JPIP, encapsulated pixel data --

/// **Fully implemented:** JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS_IMAGE_COMPRESSION: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.80",
    "JPEG-LS Lossless Image Compression",
    480,
);

/// **Fully implemented:** JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_LOSSY_IMAGE_COMPRESSION: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.81",
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
    481,
);

/// **Fully implemented:** JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
    490,
);

/// **Fully implemented:** JPEG 2000 Image Compression
pub const JPEG_2000_IMAGE_COMPRESSION: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.91",
    "JPEG 2000 Image Compression",
    491,
);

/// **Fully implemented:** JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)
pub const JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.92",
    "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)",
    492,
);

/// **Fully implemented:** JPEG 2000 Part 2 Multi-component Image Compression
pub const JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.93",
    "JPEG 2000 Part 2 Multi-component Image Compression",
    493,
);

/// **Fully implemented:** JPIP Referenced
pub const JPIP_REFERENCED: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.94",
    "JPIP Referenced",
    494,
);

/// **Fully implemented:** JPIP Referenced Deflate
pub const JPIP_REFERENCED_DEFLATE: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.95",
    "JPIP Referenced Deflate",
    495,
);

// -- other encodings --

/// **Fully implemented:** RLE Lossless
pub const RLE_LOSSLESS: Ts = Ts::new_ele(
    "1.2.840.10008.1.2.5",
    "RLE Lossless",
    5,
    Codec::RleLossless,
);

/// **Fully implemented:** RFC 2557 MIME encapsulation (Retired)
pub const RFC_2557_MIME_ENCAPSULATION: Ts = Ts::new_ele(
    "1.2.840.10008.1.2.6.1",
    "RFC 2557 MIME encapsulation",
    61,
    Codec::None,
);

/// **Fully implemented:** MPEG2 Main Profile / Main Level
pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.100",
    "MPEG2 Main Profile / Main Level",
    4100,
);

/// **Fully implemented:** MPEG-4 AVC/H.264 High Profile / Level 4.1
pub const MPEG4_AVC_H264_HIGH_PROFILE: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.102",
    "MPEG-4 AVC/H.264 High Profile / Level 4.1",
    4102,
);

/// **Fully implemented:** MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1
pub const MPEG4_AVC_H264_BD_COMPATIBLE_HIGH_PROFILE: Ts = create_encapsulated(
    "1.2.840.10008.1.2.4.103",
    "MPEG-4 AVC/H.264 BD-compatible High Profile / Level 4.1",
    4103,
);

/// create a TS with encapsulated pixel data
const fn create_encapsulated(uid: &'static str, name: &'static str, code: u16) -> Ts {
    Ts::new(
        uid,
        name,
        code,
        Endianness::Little,
        true,
        Codec::EncapsulatedPixelData,
    )
}

/// All entries of the registry, in table order.
pub(crate) const ALL: [&Ts; 38] = [
    &IMPLICIT_VR_LITTLE_ENDIAN,
    &EXPLICIT_VR_LITTLE_ENDIAN,
    &DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    &EXPLICIT_VR_BIG_ENDIAN,
    &JPEG_BASELINE,
    &JPEG_EXTENDED,
    &JPEG_EXTENDED_PROCESS_3_5,
    &JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL_6_8,
    &JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL_7_9,
    &JPEG_FULL_PROGRESSION_NON_HIERARCHICAL_10_12,
    &JPEG_FULL_PROGRESSION_NON_HIERARCHICAL_11_13,
    &JPEG_LOSSLESS_NON_HIERARCHICAL,
    &JPEG_LOSSLESS_NON_HIERARCHICAL_15,
    &JPEG_EXTENDED_HIERARCHICAL_16_18,
    &JPEG_EXTENDED_HIERARCHICAL_17_19,
    &JPEG_SPECTRAL_SELECTION_HIERARCHICAL_20_22,
    &JPEG_SPECTRAL_SELECTION_HIERARCHICAL_21_23,
    &JPEG_FULL_PROGRESSION_HIERARCHICAL_24_26,
    &JPEG_FULL_PROGRESSION_HIERARCHICAL_25_27,
    &JPEG_LOSSLESS_HIERARCHICAL_28,
    &JPEG_LOSSLESS_HIERARCHICAL_29,
    &JPEG_RESERVED_67,
    &JPEG_RESERVED_68,
    &JPEG_RESERVED_69,
    &JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
    &JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
    &JPEG_LS_LOSSY_IMAGE_COMPRESSION,
    &JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
    &JPEG_2000_IMAGE_COMPRESSION,
    &JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY,
    &JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION,
    &JPIP_REFERENCED,
    &JPIP_REFERENCED_DEFLATE,
    &RLE_LOSSLESS,
    &RFC_2557_MIME_ENCAPSULATION,
    &MPEG2_MAIN_PROFILE_MAIN_LEVEL,
    &MPEG4_AVC_H264_HIGH_PROFILE,
    &MPEG4_AVC_H264_BD_COMPATIBLE_HIGH_PROFILE,
];
