//! The static table of image pixel description attributes (group 0028)
//! whose values are decoded while scanning.

use crate::tags::*;
use dicom_scan_core::dictionary::{MetadataEntry, MetadataKind::*};

type E = MetadataEntry;

/// All metadata entries, sorted by tag.
#[rustfmt::skip]
pub const ENTRIES: &[E] = &[
    E { tag: SAMPLES_PER_PIXEL, alias: "Samples per Pixel", kind: UnsignedShort },
    E { tag: SAMPLES_PER_PIXEL_USED, alias: "Samples per Pixel Used", kind: UnsignedShort },
    E { tag: PHOTOMETRIC_INTERPRETATION, alias: "Photometric Interpretation", kind: Text },
    E { tag: IMAGE_DIMENSIONS, alias: "Image Dimensions", kind: UnsignedShort },
    E { tag: PLANAR_CONFIGURATION, alias: "Planar Configuration", kind: UnsignedShort },
    E { tag: NUMBER_OF_FRAMES, alias: "Number of Frames", kind: Text },
    E { tag: FRAME_INCREMENT_POINTER, alias: "Frame Increment Pointer", kind: TagPair },
    E { tag: FRAME_DIMENSION_POINTER, alias: "Frame Dimension Pointer", kind: TagPair },
    E { tag: ROWS, alias: "Rows", kind: UnsignedShort },
    E { tag: COLUMNS, alias: "Columns", kind: UnsignedShort },
    E { tag: PLANES, alias: "Planes", kind: UnsignedShort },
    E { tag: ULTRASOUND_COLOR_DATA_PRESENT, alias: "Ultrasound Color Data Present", kind: UnsignedShort },
    E { tag: PIXEL_SPACING, alias: "Pixel Spacing", kind: Text },
    E { tag: ZOOM_FACTOR, alias: "Zoom Factor", kind: Text },
    E { tag: ZOOM_CENTER, alias: "Zoom Center", kind: Text },
    E { tag: PIXEL_ASPECT_RATIO, alias: "Pixel Aspect Ratio", kind: Text },
    E { tag: IMAGE_FORMAT, alias: "Image Format", kind: Text },
    E { tag: MANIPULATED_IMAGE, alias: "Manipulated Image", kind: Text },
    E { tag: CORRECTED_IMAGE, alias: "Corrected Image", kind: Text },
    E { tag: COMPRESSION_RECOGNITION_CODE, alias: "Compression Recognition Code", kind: Text },
    E { tag: COMPRESSION_CODE, alias: "Compression Code", kind: Text },
    E { tag: COMPRESSION_ORIGINATOR, alias: "Compression Originator", kind: Text },
    E { tag: COMPRESSION_LABEL, alias: "Compression Label", kind: Text },
    E { tag: COMPRESSION_DESCRIPTION, alias: "Compression Description", kind: Text },
    E { tag: COMPRESSION_SEQUENCE, alias: "Compression Sequence", kind: Text },
    E { tag: COMPRESSION_STEP_POINTERS, alias: "Compression Step Pointers", kind: TagPair },
    E { tag: REPEAT_INTERVAL, alias: "Repeat Interval", kind: UnsignedShort },
    E { tag: BITS_GROUPED, alias: "Bits Grouped", kind: UnsignedShort },
    E { tag: PERIMETER_TABLE, alias: "Perimeter Table", kind: UnsignedShort },
    E { tag: PERIMETER_VALUE, alias: "Perimeter Value", kind: UnsignedShort },
    E { tag: PREDICTOR_ROWS, alias: "Predictor Rows", kind: UnsignedShort },
    E { tag: PREDICTOR_COLUMNS, alias: "Predictor Columns", kind: UnsignedShort },
    E { tag: PREDICTOR_CONSTANTS, alias: "Predictor Constants", kind: UnsignedShort },
    E { tag: BLOCKED_PIXELS, alias: "Blocked Pixels", kind: Text },
    E { tag: BLOCK_ROWS, alias: "Block Rows", kind: UnsignedShort },
    E { tag: BLOCK_COLUMNS, alias: "Block Columns", kind: UnsignedShort },
    E { tag: ROW_OVERLAP, alias: "Row Overlap", kind: UnsignedShort },
    E { tag: COLUMN_OVERLAP, alias: "Column Overlap", kind: UnsignedShort },
    E { tag: BITS_ALLOCATED, alias: "Bits Allocated", kind: UnsignedShort },
    E { tag: BITS_STORED, alias: "Bits Stored", kind: UnsignedShort },
    E { tag: HIGH_BIT, alias: "High Bit", kind: UnsignedShort },
    E { tag: PIXEL_REPRESENTATION, alias: "Pixel Representation", kind: UnsignedShort },
    E { tag: SMALLEST_VALID_PIXEL_VALUE, alias: "Smallest Valid Pixel Value", kind: UnsignedShort },
    E { tag: LARGEST_VALID_PIXEL_VALUE, alias: "Largest Valid Pixel Value", kind: UnsignedShort },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "Smallest Image Pixel Value", kind: UnsignedShort },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "Largest Image Pixel Value", kind: UnsignedShort },
    E { tag: SMALLEST_PIXEL_VALUE_IN_SERIES, alias: "Smallest Pixel Value in Series", kind: UnsignedShort },
    E { tag: LARGEST_PIXEL_VALUE_IN_SERIES, alias: "Largest Pixel Value in Series", kind: UnsignedShort },
    E { tag: SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE, alias: "Smallest Image Pixel Value in Plane", kind: UnsignedShort },
    E { tag: LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE, alias: "Largest Image Pixel Value in Plane", kind: UnsignedShort },
    E { tag: PIXEL_PADDING_VALUE, alias: "Pixel Padding Value", kind: UnsignedShort },
    E { tag: PIXEL_PADDING_RANGE_LIMIT, alias: "Pixel Padding Range Limit", kind: UnsignedShort },
    E { tag: IMAGE_LOCATION, alias: "Image Location", kind: UnsignedShort },
    E { tag: QUALITY_CONTROL_IMAGE, alias: "Quality Control Image", kind: Text },
    E { tag: BURNED_IN_ANNOTATION, alias: "Burned In Annotation", kind: Text },
    E { tag: RECOGNIZABLE_VISUAL_FEATURES, alias: "Recognizable Visual Features", kind: Text },
    E { tag: LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED, alias: "Longitudinal Temporal Information Modified", kind: Text },
    E { tag: REFERENCED_COLOR_PALETTE_INSTANCE_UID, alias: "Referenced Color Palette Instance UID", kind: Text },
    E { tag: TRANSFORM_LABEL, alias: "Transform Label", kind: Text },
    E { tag: TRANSFORM_VERSION_NUMBER, alias: "Transform Version Number", kind: Text },
    E { tag: NUMBER_OF_TRANSFORM_STEPS, alias: "Number of Transform Steps", kind: UnsignedShort },
    E { tag: SEQUENCE_OF_COMPRESSED_DATA, alias: "Sequence of Compressed Data", kind: Text },
    E { tag: DETAILS_OF_COEFFICIENTS, alias: "Details of Coefficients", kind: TagPair },
    E { tag: DCT_LABEL, alias: "DCT Label", kind: Text },
    E { tag: DATA_BLOCK_DESCRIPTION, alias: "Data Block Description", kind: Text },
    E { tag: DATA_BLOCK, alias: "Data Block", kind: TagPair },
    E { tag: NORMALIZATION_FACTOR_FORMAT, alias: "Normalization Factor Format", kind: UnsignedShort },
    E { tag: ZONAL_MAP_NUMBER_FORMAT, alias: "Zonal Map Number Format", kind: UnsignedShort },
    E { tag: ZONAL_MAP_LOCATION, alias: "Zonal Map Location", kind: TagPair },
    E { tag: ZONAL_MAP_FORMAT, alias: "Zonal Map Format", kind: UnsignedShort },
    E { tag: ADAPTIVE_MAP_FORMAT, alias: "Adaptive Map Format", kind: UnsignedShort },
    E { tag: CODE_NUMBER_FORMAT, alias: "Code Number Format", kind: UnsignedShort },
    E { tag: PIXEL_SPACING_CALIBRATION_TYPE, alias: "Pixel Spacing Calibration Type", kind: Text },
    E { tag: PIXEL_SPACING_CALIBRATION_DESCRIPTION, alias: "Pixel Spacing Calibration Description", kind: Text },
    E { tag: PIXEL_INTENSITY_RELATIONSHIP, alias: "Pixel Intensity Relationship", kind: Text },
    E { tag: PIXEL_INTENSITY_RELATIONSHIP_SIGN, alias: "Pixel Intensity Relationship Sign", kind: UnsignedShort },
    E { tag: WINDOW_CENTER, alias: "Window Center", kind: Text },
    E { tag: WINDOW_WIDTH, alias: "Window Width", kind: Text },
    E { tag: RESCALE_INTERCEPT, alias: "Rescale Intercept", kind: Text },
    E { tag: RESCALE_SLOPE, alias: "Rescale Slope", kind: Text },
    E { tag: RESCALE_TYPE, alias: "Rescale Type", kind: Text },
    E { tag: WINDOW_CENTER_AND_WIDTH_EXPLANATION, alias: "Window Center & Width Explanation", kind: Text },
    E { tag: VOI_LUT_FUNCTION, alias: "VOI LUT Function", kind: Text },
    E { tag: GRAY_SCALE, alias: "Gray Scale", kind: Text },
    E { tag: RECOMMENDED_VIEWING_MODE, alias: "Recommended Viewing Mode", kind: Text },
    E { tag: GRAY_LOOKUP_TABLE_DESCRIPTOR, alias: "Gray Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "Red Palette Color Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "Green Palette Color Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "Blue Palette Color Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "Alpha Palette Color Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "Large Red Palette Color Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "Large Green Palette Color Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "Large Blue Palette Color Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: PALETTE_COLOR_LOOKUP_TABLE_UID, alias: "Palette Color Lookup Table UID", kind: Text },
    E { tag: LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID, alias: "Large Palette Color Lookup Table UID", kind: Text },
    E { tag: BREAST_IMPLANT_PRESENT, alias: "Breast Implant Present", kind: Text },
    E { tag: PARTIAL_VIEW, alias: "Partial View", kind: Text },
    E { tag: PARTIAL_VIEW_DESCRIPTION, alias: "Partial View Description", kind: Text },
    E { tag: SPATIAL_LOCATIONS_PRESERVED, alias: "Spatial Locations Preserved", kind: Text },
    E { tag: DATA_PATH_ASSIGNMENT, alias: "Data Path Assignment", kind: Text },
    E { tag: BITS_MAPPED_TO_COLOR_LOOKUP_TABLE, alias: "Bits Mapped to Color Lookup Table", kind: UnsignedShort },
    E { tag: BLENDING_LUT_1_TRANSFER_FUNCTION, alias: "Blending LUT 1 Transfer Function", kind: Text },
    E { tag: BLENDING_LOOKUP_TABLE_DESCRIPTOR, alias: "Blending Lookup Table Descriptor", kind: UnsignedShort },
    E { tag: BLENDING_LUT_2_TRANSFER_FUNCTION, alias: "Blending LUT 2 Transfer Function", kind: Text },
    E { tag: DATA_PATH_ID, alias: "Data Path ID", kind: Text },
    E { tag: RGB_LUT_TRANSFER_FUNCTION, alias: "RGB LUT Transfer Function", kind: Text },
    E { tag: ALPHA_LUT_TRANSFER_FUNCTION, alias: "Alpha LUT Transfer Function", kind: Text },
    E { tag: COLOR_SPACE, alias: "Color Space", kind: Text },
    E { tag: LOSSY_IMAGE_COMPRESSION, alias: "Lossy Image Compression", kind: Text },
    E { tag: LOSSY_IMAGE_COMPRESSION_RATIO, alias: "Lossy Image Compression Ratio", kind: Text },
    E { tag: LOSSY_IMAGE_COMPRESSION_METHOD, alias: "Lossy Image Compression Method", kind: Text },
    E { tag: LUT_DESCRIPTOR, alias: "LUT Descriptor", kind: UnsignedShort },
    E { tag: LUT_EXPLANATION, alias: "LUT Explanation", kind: Text },
    E { tag: MODALITY_LUT_TYPE, alias: "Modality LUT Type", kind: Text },
    E { tag: IMAGE_PRESENTATION_COMMENTS, alias: "Image Presentation Comments", kind: Text },
    E { tag: REPRESENTATIVE_FRAME_NUMBER, alias: "Representative Frame Number", kind: UnsignedShort },
    E { tag: FRAME_NUMBERS_OF_INTEREST_FOI, alias: "Frame Numbers of Interest (FOI)", kind: UnsignedShort },
    E { tag: FRAME_OF_INTEREST_DESCRIPTION, alias: "Frame of Interest Description", kind: Text },
    E { tag: FRAME_OF_INTEREST_TYPE, alias: "Frame of Interest Type", kind: Text },
    E { tag: MASK_POINTER_S, alias: "Mask Pointer(s)", kind: UnsignedShort },
    E { tag: R_WAVE_POINTER, alias: "R Wave Pointer", kind: UnsignedShort },
    E { tag: MASK_OPERATION, alias: "Mask Operation", kind: Text },
    E { tag: APPLICABLE_FRAME_RANGE, alias: "Applicable Frame Range", kind: UnsignedShort },
    E { tag: MASK_FRAME_NUMBERS, alias: "Mask Frame Numbers", kind: UnsignedShort },
    E { tag: CONTRAST_FRAME_AVERAGING, alias: "Contrast Frame Averaging", kind: UnsignedShort },
    E { tag: TID_OFFSET, alias: "TID Offset", kind: UnsignedShort },
    E { tag: MASK_OPERATION_EXPLANATION, alias: "Mask Operation Explanation", kind: Text },
    E { tag: NUMBER_OF_DISPLAY_SUBSYSTEMS, alias: "Number of Display Subsystems", kind: UnsignedShort },
    E { tag: CURRENT_CONFIGURATION_ID, alias: "Current Configuration ID", kind: UnsignedShort },
    E { tag: DISPLAY_SUBSYSTEM_ID, alias: "Display Subsystem ID", kind: UnsignedShort },
    E { tag: DISPLAY_SUBSYSTEM_NAME, alias: "Display Subsystem Name", kind: Text },
    E { tag: DISPLAY_SUBSYSTEM_DESCRIPTION, alias: "Display Subsystem Description", kind: Text },
    E { tag: SYSTEM_STATUS, alias: "System Status", kind: Text },
    E { tag: SYSTEM_STATUS_COMMENT, alias: "System Status Comment", kind: Text },
    E { tag: LUMINANCE_CHARACTERISTICS_ID, alias: "Luminance Characteristics ID", kind: UnsignedShort },
    E { tag: CONFIGURATION_ID, alias: "Configuration ID", kind: UnsignedShort },
    E { tag: CONFIGURATION_NAME, alias: "Configuration Name", kind: Text },
    E { tag: CONFIGURATION_DESCRIPTION, alias: "Configuration Description", kind: Text },
    E { tag: REFERENCED_TARGET_LUMINANCE_CHARACTERISTICS_ID, alias: "Referenced Target Luminance Characteristics ID", kind: UnsignedShort },
    E { tag: MEASUREMENT_FUNCTIONS, alias: "Measurement Functions", kind: Text },
    E { tag: MEASUREMENT_EQUIPMENT_TYPE, alias: "Measurement Equipment Type", kind: Text },
    E { tag: DDL_VALUE, alias: "DDL Value", kind: UnsignedShort },
    E { tag: DISPLAY_FUNCTION_TYPE, alias: "Display Function Type", kind: Text },
    E { tag: NUMBER_OF_LUMINANCE_POINTS, alias: "Number of Luminance Points", kind: UnsignedShort },
    E { tag: LUMINANCE_RESPONSE_DESCRIPTION, alias: "Luminance Response Description", kind: Text },
    E { tag: WHITE_POINT_FLAG, alias: "White Point Flag", kind: Text },
    E { tag: AMBIENT_LIGHT_VALUE_SOURCE, alias: "Ambient Light Value Source", kind: Text },
    E { tag: MEASURED_CHARACTERISTICS, alias: "Measured Characteristics", kind: Text },
    E { tag: TEST_RESULT, alias: "Test Result", kind: Text },
    E { tag: TEST_RESULT_COMMENT, alias: "Test Result Comment", kind: Text },
    E { tag: TEST_IMAGE_VALIDATION, alias: "Test Image Validation", kind: Text },
    E { tag: DATA_POINT_ROWS, alias: "Data Point Rows", kind: UnsignedLong },
    E { tag: DATA_POINT_COLUMNS, alias: "Data Point Columns", kind: UnsignedLong },
    E { tag: SIGNAL_DOMAIN_COLUMNS, alias: "Signal Domain Columns", kind: Text },
    E { tag: LARGEST_MONOCHROME_PIXEL_VALUE, alias: "Largest Monochrome Pixel Value", kind: UnsignedShort },
    E { tag: DATA_REPRESENTATION, alias: "Data Representation", kind: Text },
    E { tag: SIGNAL_DOMAIN_ROWS, alias: "Signal Domain Rows", kind: Text },
    E { tag: SUBTRACTION_ITEM_ID, alias: "Subtraction Item ID", kind: UnsignedShort },
    E { tag: GEOMETRICAL_PROPERTIES, alias: "Geometrical Properties", kind: Text },
    E { tag: IMAGE_PROCESSING_APPLIED, alias: "Image Processing Applied", kind: Text },
    E { tag: MASK_SELECTION_MODE, alias: "Mask Selection Mode", kind: Text },
    E { tag: LUT_FUNCTION, alias: "LUT Function", kind: Text },
    E { tag: VERTICES_OF_THE_REGION, alias: "Vertices of the Region", kind: UnsignedShort },
    E { tag: PIXEL_SHIFT_FRAME_RANGE, alias: "Pixel Shift Frame Range", kind: UnsignedShort },
    E { tag: LUT_FRAME_RANGE, alias: "LUT Frame Range", kind: UnsignedShort },
    E { tag: IMAGE_TO_EQUIPMENT_MAPPING_MATRIX, alias: "Image to Equipment Mapping Matrix", kind: Text },
    E { tag: EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION, alias: "Equipment Coordinate System Identification", kind: Text },
];
