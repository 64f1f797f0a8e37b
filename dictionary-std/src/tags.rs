//! Tag constants for the attributes the scanner is concerned with.
//!
//! Besides the structural tags which drive the scanning procedure,
//! every attribute of the [metadata table](crate::entries) is
//! available here by its alias in upper snake case.

use dicom_scan_core::Tag;

/// The group of all file meta information attributes.
pub const FILE_META_GROUP: u16 = 0x0002;

/// The group of the image pixel description attributes,
/// subject to metadata decoding.
pub const IMAGE_PIXEL_GROUP: u16 = 0x0028;

/// TransferSyntaxUID (0002,0010)
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// PixelData (7FE0,0010)
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Item (FFFE,E000)
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D)
#[rustfmt::skip]
pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD)
#[rustfmt::skip]
pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
/// Samples per Pixel (0028,0002)
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Samples per Pixel Used (0028,0003)
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL_USED: Tag = Tag(0x0028, 0x0003);
/// Photometric Interpretation (0028,0004)
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Image Dimensions (0028,0005)
#[rustfmt::skip]
pub const IMAGE_DIMENSIONS: Tag = Tag(0x0028, 0x0005);
/// Planar Configuration (0028,0006)
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number of Frames (0028,0008)
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Frame Increment Pointer (0028,0009)
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Frame Dimension Pointer (0028,000A)
#[rustfmt::skip]
pub const FRAME_DIMENSION_POINTER: Tag = Tag(0x0028, 0x000A);
/// Rows (0028,0010)
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011)
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Planes (0028,0012)
#[rustfmt::skip]
pub const PLANES: Tag = Tag(0x0028, 0x0012);
/// Ultrasound Color Data Present (0028,0014)
#[rustfmt::skip]
pub const ULTRASOUND_COLOR_DATA_PRESENT: Tag = Tag(0x0028, 0x0014);
/// Pixel Spacing (0028,0030)
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Zoom Factor (0028,0031)
#[rustfmt::skip]
pub const ZOOM_FACTOR: Tag = Tag(0x0028, 0x0031);
/// Zoom Center (0028,0032)
#[rustfmt::skip]
pub const ZOOM_CENTER: Tag = Tag(0x0028, 0x0032);
/// Pixel Aspect Ratio (0028,0034)
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Image Format (0028,0040)
#[rustfmt::skip]
pub const IMAGE_FORMAT: Tag = Tag(0x0028, 0x0040);
/// Manipulated Image (0028,0050)
#[rustfmt::skip]
pub const MANIPULATED_IMAGE: Tag = Tag(0x0028, 0x0050);
/// Corrected Image (0028,0051)
#[rustfmt::skip]
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
/// Compression Recognition Code (0028,005F)
#[rustfmt::skip]
pub const COMPRESSION_RECOGNITION_CODE: Tag = Tag(0x0028, 0x005F);
/// Compression Code (0028,0060)
#[rustfmt::skip]
pub const COMPRESSION_CODE: Tag = Tag(0x0028, 0x0060);
/// Compression Originator (0028,0061)
#[rustfmt::skip]
pub const COMPRESSION_ORIGINATOR: Tag = Tag(0x0028, 0x0061);
/// Compression Label (0028,0062)
#[rustfmt::skip]
pub const COMPRESSION_LABEL: Tag = Tag(0x0028, 0x0062);
/// Compression Description (0028,0063)
#[rustfmt::skip]
pub const COMPRESSION_DESCRIPTION: Tag = Tag(0x0028, 0x0063);
/// Compression Sequence (0028,0065)
#[rustfmt::skip]
pub const COMPRESSION_SEQUENCE: Tag = Tag(0x0028, 0x0065);
/// Compression Step Pointers (0028,0066)
#[rustfmt::skip]
pub const COMPRESSION_STEP_POINTERS: Tag = Tag(0x0028, 0x0066);
/// Repeat Interval (0028,0068)
#[rustfmt::skip]
pub const REPEAT_INTERVAL: Tag = Tag(0x0028, 0x0068);
/// Bits Grouped (0028,0069)
#[rustfmt::skip]
pub const BITS_GROUPED: Tag = Tag(0x0028, 0x0069);
/// Perimeter Table (0028,0070)
#[rustfmt::skip]
pub const PERIMETER_TABLE: Tag = Tag(0x0028, 0x0070);
/// Perimeter Value (0028,0071)
#[rustfmt::skip]
pub const PERIMETER_VALUE: Tag = Tag(0x0028, 0x0071);
/// Predictor Rows (0028,0080)
#[rustfmt::skip]
pub const PREDICTOR_ROWS: Tag = Tag(0x0028, 0x0080);
/// Predictor Columns (0028,0081)
#[rustfmt::skip]
pub const PREDICTOR_COLUMNS: Tag = Tag(0x0028, 0x0081);
/// Predictor Constants (0028,0082)
#[rustfmt::skip]
pub const PREDICTOR_CONSTANTS: Tag = Tag(0x0028, 0x0082);
/// Blocked Pixels (0028,0090)
#[rustfmt::skip]
pub const BLOCKED_PIXELS: Tag = Tag(0x0028, 0x0090);
/// Block Rows (0028,0091)
#[rustfmt::skip]
pub const BLOCK_ROWS: Tag = Tag(0x0028, 0x0091);
/// Block Columns (0028,0092)
#[rustfmt::skip]
pub const BLOCK_COLUMNS: Tag = Tag(0x0028, 0x0092);
/// Row Overlap (0028,0093)
#[rustfmt::skip]
pub const ROW_OVERLAP: Tag = Tag(0x0028, 0x0093);
/// Column Overlap (0028,0094)
#[rustfmt::skip]
pub const COLUMN_OVERLAP: Tag = Tag(0x0028, 0x0094);
/// Bits Allocated (0028,0100)
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored (0028,0101)
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit (0028,0102)
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation (0028,0103)
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Valid Pixel Value (0028,0104)
#[rustfmt::skip]
pub const SMALLEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0104);
/// Largest Valid Pixel Value (0028,0105)
#[rustfmt::skip]
pub const LARGEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0105);
/// Smallest Image Pixel Value (0028,0106)
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value (0028,0107)
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Smallest Pixel Value in Series (0028,0108)
#[rustfmt::skip]
pub const SMALLEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0108);
/// Largest Pixel Value in Series (0028,0109)
#[rustfmt::skip]
pub const LARGEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0109);
/// Smallest Image Pixel Value in Plane (0028,0110)
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0110);
/// Largest Image Pixel Value in Plane (0028,0111)
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0111);
/// Pixel Padding Value (0028,0120)
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// Pixel Padding Range Limit (0028,0121)
#[rustfmt::skip]
pub const PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0121);
/// Image Location (0028,0200)
#[rustfmt::skip]
pub const IMAGE_LOCATION: Tag = Tag(0x0028, 0x0200);
/// Quality Control Image (0028,0300)
#[rustfmt::skip]
pub const QUALITY_CONTROL_IMAGE: Tag = Tag(0x0028, 0x0300);
/// Burned In Annotation (0028,0301)
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// Recognizable Visual Features (0028,0302)
#[rustfmt::skip]
pub const RECOGNIZABLE_VISUAL_FEATURES: Tag = Tag(0x0028, 0x0302);
/// Longitudinal Temporal Information Modified (0028,0303)
#[rustfmt::skip]
pub const LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED: Tag = Tag(0x0028, 0x0303);
/// Referenced Color Palette Instance UID (0028,0304)
#[rustfmt::skip]
pub const REFERENCED_COLOR_PALETTE_INSTANCE_UID: Tag = Tag(0x0028, 0x0304);
/// Transform Label (0028,0400)
#[rustfmt::skip]
pub const TRANSFORM_LABEL: Tag = Tag(0x0028, 0x0400);
/// Transform Version Number (0028,0401)
#[rustfmt::skip]
pub const TRANSFORM_VERSION_NUMBER: Tag = Tag(0x0028, 0x0401);
/// Number of Transform Steps (0028,0402)
#[rustfmt::skip]
pub const NUMBER_OF_TRANSFORM_STEPS: Tag = Tag(0x0028, 0x0402);
/// Sequence of Compressed Data (0028,0403)
#[rustfmt::skip]
pub const SEQUENCE_OF_COMPRESSED_DATA: Tag = Tag(0x0028, 0x0403);
/// Details of Coefficients (0028,0404)
#[rustfmt::skip]
pub const DETAILS_OF_COEFFICIENTS: Tag = Tag(0x0028, 0x0404);
/// DCT Label (0028,0700)
#[rustfmt::skip]
pub const DCT_LABEL: Tag = Tag(0x0028, 0x0700);
/// Data Block Description (0028,0701)
#[rustfmt::skip]
pub const DATA_BLOCK_DESCRIPTION: Tag = Tag(0x0028, 0x0701);
/// Data Block (0028,0702)
#[rustfmt::skip]
pub const DATA_BLOCK: Tag = Tag(0x0028, 0x0702);
/// Normalization Factor Format (0028,0710)
#[rustfmt::skip]
pub const NORMALIZATION_FACTOR_FORMAT: Tag = Tag(0x0028, 0x0710);
/// Zonal Map Number Format (0028,0720)
#[rustfmt::skip]
pub const ZONAL_MAP_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0720);
/// Zonal Map Location (0028,0721)
#[rustfmt::skip]
pub const ZONAL_MAP_LOCATION: Tag = Tag(0x0028, 0x0721);
/// Zonal Map Format (0028,0722)
#[rustfmt::skip]
pub const ZONAL_MAP_FORMAT: Tag = Tag(0x0028, 0x0722);
/// Adaptive Map Format (0028,0730)
#[rustfmt::skip]
pub const ADAPTIVE_MAP_FORMAT: Tag = Tag(0x0028, 0x0730);
/// Code Number Format (0028,0740)
#[rustfmt::skip]
pub const CODE_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0740);
/// Pixel Spacing Calibration Type (0028,0A02)
#[rustfmt::skip]
pub const PIXEL_SPACING_CALIBRATION_TYPE: Tag = Tag(0x0028, 0x0A02);
/// Pixel Spacing Calibration Description (0028,0A04)
#[rustfmt::skip]
pub const PIXEL_SPACING_CALIBRATION_DESCRIPTION: Tag = Tag(0x0028, 0x0A04);
/// Pixel Intensity Relationship (0028,1040)
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// Pixel Intensity Relationship Sign (0028,1041)
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_SIGN: Tag = Tag(0x0028, 0x1041);
/// Window Center (0028,1050)
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width (0028,1051)
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept (0028,1052)
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope (0028,1053)
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type (0028,1054)
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Window Center & Width Explanation (0028,1055)
#[rustfmt::skip]
pub const WINDOW_CENTER_AND_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOI LUT Function (0028,1056)
#[rustfmt::skip]
pub const VOI_LUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// Gray Scale (0028,1080)
#[rustfmt::skip]
pub const GRAY_SCALE: Tag = Tag(0x0028, 0x1080);
/// Recommended Viewing Mode (0028,1090)
#[rustfmt::skip]
pub const RECOMMENDED_VIEWING_MODE: Tag = Tag(0x0028, 0x1090);
/// Gray Lookup Table Descriptor (0028,1100)
#[rustfmt::skip]
pub const GRAY_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1100);
/// Red Palette Color Lookup Table Descriptor (0028,1101)
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// Green Palette Color Lookup Table Descriptor (0028,1102)
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// Blue Palette Color Lookup Table Descriptor (0028,1103)
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// Alpha Palette Color Lookup Table Descriptor (0028,1104)
#[rustfmt::skip]
pub const ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1104);
/// Large Red Palette Color Lookup Table Descriptor (0028,1111)
#[rustfmt::skip]
pub const LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1111);
/// Large Green Palette Color Lookup Table Descriptor (0028,1112)
#[rustfmt::skip]
pub const LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1112);
/// Large Blue Palette Color Lookup Table Descriptor (0028,1113)
#[rustfmt::skip]
pub const LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1113);
/// Palette Color Lookup Table UID (0028,1199)
#[rustfmt::skip]
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// Large Palette Color Lookup Table UID (0028,1214)
#[rustfmt::skip]
pub const LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1214);
/// Breast Implant Present (0028,1300)
#[rustfmt::skip]
pub const BREAST_IMPLANT_PRESENT: Tag = Tag(0x0028, 0x1300);
/// Partial View (0028,1350)
#[rustfmt::skip]
pub const PARTIAL_VIEW: Tag = Tag(0x0028, 0x1350);
/// Partial View Description (0028,1351)
#[rustfmt::skip]
pub const PARTIAL_VIEW_DESCRIPTION: Tag = Tag(0x0028, 0x1351);
/// Spatial Locations Preserved (0028,135A)
#[rustfmt::skip]
pub const SPATIAL_LOCATIONS_PRESERVED: Tag = Tag(0x0028, 0x135A);
/// Data Path Assignment (0028,1402)
#[rustfmt::skip]
pub const DATA_PATH_ASSIGNMENT: Tag = Tag(0x0028, 0x1402);
/// Bits Mapped to Color Lookup Table (0028,1403)
#[rustfmt::skip]
pub const BITS_MAPPED_TO_COLOR_LOOKUP_TABLE: Tag = Tag(0x0028, 0x1403);
/// Blending LUT 1 Transfer Function (0028,1405)
#[rustfmt::skip]
pub const BLENDING_LUT_1_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1405);
/// Blending Lookup Table Descriptor (0028,1407)
#[rustfmt::skip]
pub const BLENDING_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1407);
/// Blending LUT 2 Transfer Function (0028,140D)
#[rustfmt::skip]
pub const BLENDING_LUT_2_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140D);
/// Data Path ID (0028,140E)
#[rustfmt::skip]
pub const DATA_PATH_ID: Tag = Tag(0x0028, 0x140E);
/// RGB LUT Transfer Function (0028,140F)
#[rustfmt::skip]
pub const RGB_LUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140F);
/// Alpha LUT Transfer Function (0028,1410)
#[rustfmt::skip]
pub const ALPHA_LUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1410);
/// Color Space (0028,2002)
#[rustfmt::skip]
pub const COLOR_SPACE: Tag = Tag(0x0028, 0x2002);
/// Lossy Image Compression (0028,2110)
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio (0028,2112)
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// Lossy Image Compression Method (0028,2114)
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// LUT Descriptor (0028,3002)
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUT Explanation (0028,3003)
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// Modality LUT Type (0028,3004)
#[rustfmt::skip]
pub const MODALITY_LUT_TYPE: Tag = Tag(0x0028, 0x3004);
/// Image Presentation Comments (0028,4000)
#[rustfmt::skip]
pub const IMAGE_PRESENTATION_COMMENTS: Tag = Tag(0x0028, 0x4000);
/// Representative Frame Number (0028,6010)
#[rustfmt::skip]
pub const REPRESENTATIVE_FRAME_NUMBER: Tag = Tag(0x0028, 0x6010);
/// Frame Numbers of Interest (FOI) (0028,6020)
#[rustfmt::skip]
pub const FRAME_NUMBERS_OF_INTEREST_FOI: Tag = Tag(0x0028, 0x6020);
/// Frame of Interest Description (0028,6022)
#[rustfmt::skip]
pub const FRAME_OF_INTEREST_DESCRIPTION: Tag = Tag(0x0028, 0x6022);
/// Frame of Interest Type (0028,6023)
#[rustfmt::skip]
pub const FRAME_OF_INTEREST_TYPE: Tag = Tag(0x0028, 0x6023);
/// Mask Pointer(s) (0028,6030)
#[rustfmt::skip]
pub const MASK_POINTER_S: Tag = Tag(0x0028, 0x6030);
/// R Wave Pointer (0028,6040)
#[rustfmt::skip]
pub const R_WAVE_POINTER: Tag = Tag(0x0028, 0x6040);
/// Mask Operation (0028,6101)
#[rustfmt::skip]
pub const MASK_OPERATION: Tag = Tag(0x0028, 0x6101);
/// Applicable Frame Range (0028,6102)
#[rustfmt::skip]
pub const APPLICABLE_FRAME_RANGE: Tag = Tag(0x0028, 0x6102);
/// Mask Frame Numbers (0028,6110)
#[rustfmt::skip]
pub const MASK_FRAME_NUMBERS: Tag = Tag(0x0028, 0x6110);
/// Contrast Frame Averaging (0028,6112)
#[rustfmt::skip]
pub const CONTRAST_FRAME_AVERAGING: Tag = Tag(0x0028, 0x6112);
/// TID Offset (0028,6120)
#[rustfmt::skip]
pub const TID_OFFSET: Tag = Tag(0x0028, 0x6120);
/// Mask Operation Explanation (0028,6190)
#[rustfmt::skip]
pub const MASK_OPERATION_EXPLANATION: Tag = Tag(0x0028, 0x6190);
/// Number of Display Subsystems (0028,7001)
#[rustfmt::skip]
pub const NUMBER_OF_DISPLAY_SUBSYSTEMS: Tag = Tag(0x0028, 0x7001);
/// Current Configuration ID (0028,7002)
#[rustfmt::skip]
pub const CURRENT_CONFIGURATION_ID: Tag = Tag(0x0028, 0x7002);
/// Display Subsystem ID (0028,7003)
#[rustfmt::skip]
pub const DISPLAY_SUBSYSTEM_ID: Tag = Tag(0x0028, 0x7003);
/// Display Subsystem Name (0028,7004)
#[rustfmt::skip]
pub const DISPLAY_SUBSYSTEM_NAME: Tag = Tag(0x0028, 0x7004);
/// Display Subsystem Description (0028,7005)
#[rustfmt::skip]
pub const DISPLAY_SUBSYSTEM_DESCRIPTION: Tag = Tag(0x0028, 0x7005);
/// System Status (0028,7006)
#[rustfmt::skip]
pub const SYSTEM_STATUS: Tag = Tag(0x0028, 0x7006);
/// System Status Comment (0028,7007)
#[rustfmt::skip]
pub const SYSTEM_STATUS_COMMENT: Tag = Tag(0x0028, 0x7007);
/// Luminance Characteristics ID (0028,7009)
#[rustfmt::skip]
pub const LUMINANCE_CHARACTERISTICS_ID: Tag = Tag(0x0028, 0x7009);
/// Configuration ID (0028,700B)
#[rustfmt::skip]
pub const CONFIGURATION_ID: Tag = Tag(0x0028, 0x700B);
/// Configuration Name (0028,700C)
#[rustfmt::skip]
pub const CONFIGURATION_NAME: Tag = Tag(0x0028, 0x700C);
/// Configuration Description (0028,700D)
#[rustfmt::skip]
pub const CONFIGURATION_DESCRIPTION: Tag = Tag(0x0028, 0x700D);
/// Referenced Target Luminance Characteristics ID (0028,700E)
#[rustfmt::skip]
pub const REFERENCED_TARGET_LUMINANCE_CHARACTERISTICS_ID: Tag = Tag(0x0028, 0x700E);
/// Measurement Functions (0028,7013)
#[rustfmt::skip]
pub const MEASUREMENT_FUNCTIONS: Tag = Tag(0x0028, 0x7013);
/// Measurement Equipment Type (0028,7014)
#[rustfmt::skip]
pub const MEASUREMENT_EQUIPMENT_TYPE: Tag = Tag(0x0028, 0x7014);
/// DDL Value (0028,7017)
#[rustfmt::skip]
pub const DDL_VALUE: Tag = Tag(0x0028, 0x7017);
/// Display Function Type (0028,7019)
#[rustfmt::skip]
pub const DISPLAY_FUNCTION_TYPE: Tag = Tag(0x0028, 0x7019);
/// Number of Luminance Points (0028,701B)
#[rustfmt::skip]
pub const NUMBER_OF_LUMINANCE_POINTS: Tag = Tag(0x0028, 0x701B);
/// Luminance Response Description (0028,7020)
#[rustfmt::skip]
pub const LUMINANCE_RESPONSE_DESCRIPTION: Tag = Tag(0x0028, 0x7020);
/// White Point Flag (0028,7021)
#[rustfmt::skip]
pub const WHITE_POINT_FLAG: Tag = Tag(0x0028, 0x7021);
/// Ambient Light Value Source (0028,7025)
#[rustfmt::skip]
pub const AMBIENT_LIGHT_VALUE_SOURCE: Tag = Tag(0x0028, 0x7025);
/// Measured Characteristics (0028,7026)
#[rustfmt::skip]
pub const MEASURED_CHARACTERISTICS: Tag = Tag(0x0028, 0x7026);
/// Test Result (0028,7029)
#[rustfmt::skip]
pub const TEST_RESULT: Tag = Tag(0x0028, 0x7029);
/// Test Result Comment (0028,702A)
#[rustfmt::skip]
pub const TEST_RESULT_COMMENT: Tag = Tag(0x0028, 0x702A);
/// Test Image Validation (0028,702B)
#[rustfmt::skip]
pub const TEST_IMAGE_VALIDATION: Tag = Tag(0x0028, 0x702B);
/// Data Point Rows (0028,9001)
#[rustfmt::skip]
pub const DATA_POINT_ROWS: Tag = Tag(0x0028, 0x9001);
/// Data Point Columns (0028,9002)
#[rustfmt::skip]
pub const DATA_POINT_COLUMNS: Tag = Tag(0x0028, 0x9002);
/// Signal Domain Columns (0028,9003)
#[rustfmt::skip]
pub const SIGNAL_DOMAIN_COLUMNS: Tag = Tag(0x0028, 0x9003);
/// Largest Monochrome Pixel Value (0028,9099)
#[rustfmt::skip]
pub const LARGEST_MONOCHROME_PIXEL_VALUE: Tag = Tag(0x0028, 0x9099);
/// Data Representation (0028,9108)
#[rustfmt::skip]
pub const DATA_REPRESENTATION: Tag = Tag(0x0028, 0x9108);
/// Signal Domain Rows (0028,9235)
#[rustfmt::skip]
pub const SIGNAL_DOMAIN_ROWS: Tag = Tag(0x0028, 0x9235);
/// Subtraction Item ID (0028,9416)
#[rustfmt::skip]
pub const SUBTRACTION_ITEM_ID: Tag = Tag(0x0028, 0x9416);
/// Geometrical Properties (0028,9444)
#[rustfmt::skip]
pub const GEOMETRICAL_PROPERTIES: Tag = Tag(0x0028, 0x9444);
/// Image Processing Applied (0028,9446)
#[rustfmt::skip]
pub const IMAGE_PROCESSING_APPLIED: Tag = Tag(0x0028, 0x9446);
/// Mask Selection Mode (0028,9454)
#[rustfmt::skip]
pub const MASK_SELECTION_MODE: Tag = Tag(0x0028, 0x9454);
/// LUT Function (0028,9474)
#[rustfmt::skip]
pub const LUT_FUNCTION: Tag = Tag(0x0028, 0x9474);
/// Vertices of the Region (0028,9503)
#[rustfmt::skip]
pub const VERTICES_OF_THE_REGION: Tag = Tag(0x0028, 0x9503);
/// Pixel Shift Frame Range (0028,9506)
#[rustfmt::skip]
pub const PIXEL_SHIFT_FRAME_RANGE: Tag = Tag(0x0028, 0x9506);
/// LUT Frame Range (0028,9507)
#[rustfmt::skip]
pub const LUT_FRAME_RANGE: Tag = Tag(0x0028, 0x9507);
/// Image to Equipment Mapping Matrix (0028,9520)
#[rustfmt::skip]
pub const IMAGE_TO_EQUIPMENT_MAPPING_MATRIX: Tag = Tag(0x0028, 0x9520);
/// Equipment Coordinate System Identification (0028,9537)
#[rustfmt::skip]
pub const EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION: Tag = Tag(0x0028, 0x9537);
