//! Quick detection of DICOM files from their first bytes.

/// The magic code following the preamble of a DICOM file.
pub const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// The length of the preamble preceding the magic code.
pub const PREAMBLE_LENGTH: usize = 128;

/// The score given to a buffer which is certainly a DICOM file.
pub const PROBE_SCORE_MAX: u32 = 100;

/// Check whether the given leading bytes of a file
/// carry the `DICM` magic code right after the preamble.
///
/// Buffers shorter than 132 bytes never match.
///
/// ```
/// # use dicom_scan_parser::probe::probe;
/// let mut buf = vec![0; 132];
/// assert!(!probe(&buf));
/// buf[128..132].copy_from_slice(b"DICM");
/// assert!(probe(&buf));
/// ```
pub fn probe(buf: &[u8]) -> bool {
    buf.get(PREAMBLE_LENGTH..PREAMBLE_LENGTH + 4) == Some(&DICM_MAGIC_CODE[..])
}

/// Score the likelihood of the given leading bytes belonging to a DICOM file:
/// [`PROBE_SCORE_MAX`] on a match, 0 otherwise.
pub fn probe_score(buf: &[u8]) -> u32 {
    if probe(buf) {
        PROBE_SCORE_MAX
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_buffers_never_match() {
        assert!(!probe(&[]));
        assert!(!probe(b"DICM"));
        let mut buf = vec![0; 131];
        buf[128..131].copy_from_slice(b"DIC");
        assert!(!probe(&buf));
        assert_eq!(probe_score(&buf), 0);
    }

    #[test]
    fn magic_after_preamble() {
        let mut buf = vec![0xAA; 200];
        buf[128..132].copy_from_slice(&DICM_MAGIC_CODE);
        assert!(probe(&buf));
        assert_eq!(probe_score(&buf), PROBE_SCORE_MAX);

        // magic code at the start is not enough
        let mut buf = vec![0; 200];
        buf[0..4].copy_from_slice(b"DICM");
        assert!(!probe(&buf));
    }
}
