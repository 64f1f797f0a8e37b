//! The stream scanner: a single forward pass over a DICOM file,
//! from the preamble to the header of the pixel data element.
//!
//! The scanner goes through the following states:
//!
//! 1. skip the 128-byte preamble and check the `DICM` magic code;
//! 2. read the file meta group in _Explicit VR Little Endian_,
//!    keeping the transfer syntax UID;
//! 3. resolve the transfer syntax and fix the parse mode;
//! 4. skip data set elements in that mode,
//!    decoding the known image pixel description attributes on the way,
//!    until the pixel data element header is read.
//!
//! Elements of undefined length are skipped by scanning their inner elements
//! until the matching delimiter.
//! Open containers are kept in an explicit stack,
//! so nesting depth is bounded only by memory.

use crate::error::{
    DecodeElementSnafu, MalformedElementSnafu, MissingTransferSyntaxSnafu, NotDicomSnafu,
    ReadSourceSnafu, Result, TruncatedSnafu, UnresolvedSyntaxSnafu, UnsupportedSyntaxSnafu,
};
use crate::probe::{DICM_MAGIC_CODE, PREAMBLE_LENGTH};
use crate::source::ByteSource;
use crate::visitor::{MetadataElement, MetadataValue, ScanVisitor};
use crate::Error;
use dicom_scan_core::dictionary::{MetadataDictionary, MetadataEntry, MetadataKind};
use dicom_scan_core::header::{DataElementHeader, Header, Length};
use dicom_scan_core::Tag;
use dicom_scan_dictionary_std::tags::{
    FILE_META_GROUP, IMAGE_PIXEL_GROUP, ITEM_DELIMITER, SEQUENCE_DELIMITER, TRANSFER_SYNTAX_UID,
};
use dicom_scan_dictionary_std::StandardMetadataDictionary;
use dicom_scan_encoding::decode::basic::BasicDecoder;
use dicom_scan_encoding::decode::{self, BasicDecode, Decode};
use dicom_scan_encoding::transfer_syntax::trim_uid;
use dicom_scan_encoding::{ModeDecoder, ParseMode, TransferSyntax};
use dicom_scan_transfer_syntax_registry::{get_registry, ResolveError};
use snafu::IntoError;
use std::io::{self, Read};

/// The maximum length of a transfer syntax UID value.
pub const MAX_UID_LENGTH: u32 = 64;

/// The maximum length of a metadata text value,
/// as for the Short Text (ST) value representation.
pub const MAX_TEXT_LENGTH: u32 = 1024;

/// Where the pixel data of a DICOM file starts.
#[derive(Debug, Clone)]
pub struct PixelDataLocation {
    /// The byte offset of the pixel data value,
    /// right after the pixel data element header.
    pub offset: u64,
    /// The header of the pixel data element.
    /// Its length is undefined if the pixel data is encapsulated.
    pub header: DataElementHeader,
    /// The transfer syntax of the data set.
    pub transfer_syntax: &'static TransferSyntax,
    /// The parse mode derived from the transfer syntax.
    pub mode: ParseMode,
}

/// Two locations are equal if they describe the same pixel data header
/// at the same offset, even if its length is undefined.
impl PartialEq for PixelDataLocation {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
            && self.header.tag == other.header.tag
            && self.header.vr == other.header.vr
            && self.header.len.inner_eq(other.header.len)
            && self.transfer_syntax == other.transfer_syntax
            && self.mode == other.mode
    }
}

/// What ends an open container of undefined length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Container {
    /// A sequence or any other non-item element,
    /// ended by a sequence delimiter.
    Sequence,
    /// An item, ended by an item delimiter.
    Item,
}

impl Container {
    fn of(header: &DataElementHeader) -> Self {
        if header.is_item() {
            Container::Item
        } else {
            Container::Sequence
        }
    }

    fn terminator(self) -> Tag {
        match self {
            Container::Sequence => SEQUENCE_DELIMITER,
            Container::Item => ITEM_DELIMITER,
        }
    }
}

/// A scanner for locating the pixel data of a DICOM file.
///
/// The scanner owns its byte source for the duration of one scan.
/// See the [module documentation](self) for the procedure.
#[derive(Debug)]
pub struct Scanner<S, D = StandardMetadataDictionary> {
    source: S,
    dictionary: D,
    mode: ParseMode,
    decoder: ModeDecoder,
}

impl<S> Scanner<S>
where
    S: ByteSource,
{
    /// Create a scanner which reports the standard metadata attributes.
    pub fn new(source: S) -> Self {
        Scanner::with_dictionary(source, StandardMetadataDictionary)
    }
}

impl<S, D> Scanner<S, D>
where
    S: ByteSource,
    D: MetadataDictionary,
{
    /// Create a scanner which reports the metadata attributes
    /// known by the given dictionary.
    pub fn with_dictionary(source: S, dictionary: D) -> Self {
        Scanner {
            source,
            dictionary,
            mode: ParseMode::FILE_META,
            decoder: ModeDecoder::new(ParseMode::FILE_META),
        }
    }

    /// Scan the source until the pixel data is found.
    pub fn scan(self) -> Result<PixelDataLocation> {
        self.scan_with(&mut ())
    }

    /// Scan the source until the pixel data is found,
    /// reporting the transfer syntax and metadata attributes to the visitor.
    pub fn scan_with<V>(mut self, visitor: &mut V) -> Result<PixelDataLocation>
    where
        V: ?Sized + ScanVisitor,
    {
        self.read_preamble()?;
        let (uid, next_tag) = self.scan_file_meta()?;
        let ts = self.resolve_syntax(uid)?;
        visitor.on_transfer_syntax(ts);
        let first_tag = next_tag.map(|tag| self.rederive_tag(tag));
        self.scan_data_set(first_tag, ts, visitor)
    }

    fn read_preamble(&mut self) -> Result<()> {
        let skipped = self
            .source
            .skip(PREAMBLE_LENGTH as u64)
            .map_err(|e| self.io_error(e))?;
        if skipped < PREAMBLE_LENGTH as u64 {
            return TruncatedSnafu {
                position: self.source.position(),
            }
            .fail();
        }
        let mut magic = [0u8; 4];
        self.source
            .read_exact(&mut magic)
            .map_err(|e| self.io_error(e))?;
        if magic != DICM_MAGIC_CODE {
            return NotDicomSnafu { magic }.fail();
        }
        Ok(())
    }

    /// Read the file meta group,
    /// returning the transfer syntax UID and the tag of the first element
    /// outside of the group, if any.
    fn scan_file_meta(&mut self) -> Result<(Option<String>, Option<Tag>)> {
        let mut uid = None;
        loop {
            if self.at_end()? {
                return Ok((uid, None));
            }
            let tag = self.read_tag()?;
            if tag.group() != FILE_META_GROUP {
                return Ok((uid, Some(tag)));
            }
            let header = self.read_length(tag)?;
            if tag == TRANSFER_SYNTAX_UID {
                uid = Some(self.read_uid(&header)?);
            } else {
                self.skip_element(&header)?;
            }
        }
    }

    fn read_uid(&mut self, header: &DataElementHeader) -> Result<String> {
        let position = self.source.position();
        let len = match header.len.get() {
            Some(len) if len <= MAX_UID_LENGTH => len,
            Some(len) => {
                return MalformedElementSnafu {
                    tag: header.tag,
                    position,
                    reason: format!(
                        "transfer syntax UID length {} exceeds {}",
                        len, MAX_UID_LENGTH
                    ),
                }
                .fail()
            }
            None => {
                return MalformedElementSnafu {
                    tag: header.tag,
                    position,
                    reason: "undefined transfer syntax UID length",
                }
                .fail()
            }
        };
        let mut buf = vec![0; len as usize];
        self.source
            .read_exact(&mut buf)
            .map_err(|e| self.io_error(e))?;
        Ok(trim_uid(&String::from_utf8_lossy(&buf)).to_string())
    }

    fn resolve_syntax(&mut self, uid: Option<String>) -> Result<&'static TransferSyntax> {
        let uid = match uid {
            Some(uid) => uid,
            None => return MissingTransferSyntaxSnafu.fail(),
        };
        let ts = match get_registry().resolve(&uid) {
            Ok(ts) => ts,
            Err(ResolveError::Unresolved { uid }) => return UnresolvedSyntaxSnafu { uid }.fail(),
            Err(ResolveError::Unsupported { uid, name }) => {
                return UnsupportedSyntaxSnafu { uid, name }.fail()
            }
        };
        self.mode = ts.parse_mode();
        self.decoder = ModeDecoder::new(self.mode);
        tracing::debug!("Transfer syntax: {} ({}), {}", ts.name(), ts.uid(), self.mode);
        Ok(ts)
    }

    /// Reinterpret the tag read in file meta mode under the data set mode.
    ///
    /// The four bytes are the same,
    /// so only a change of byte order makes a difference.
    fn rederive_tag(&self, tag: Tag) -> Tag {
        if self.mode.byte_order != ParseMode::FILE_META.byte_order {
            tag.swap_bytes()
        } else {
            tag
        }
    }

    fn scan_data_set<V>(
        &mut self,
        mut pending: Option<Tag>,
        ts: &'static TransferSyntax,
        visitor: &mut V,
    ) -> Result<PixelDataLocation>
    where
        V: ?Sized + ScanVisitor,
    {
        loop {
            let tag = match pending.take() {
                Some(tag) => tag,
                None => {
                    if self.at_end()? {
                        // no pixel data in the whole data set
                        return TruncatedSnafu {
                            position: self.source.position(),
                        }
                        .fail();
                    }
                    self.read_tag()?
                }
            };
            let header = self.read_length(tag)?;

            if header.is_pixel_data() {
                let offset = self.source.position();
                tracing::debug!("Pixel data found at {} ({})", offset, header.len);
                return Ok(PixelDataLocation {
                    offset,
                    header,
                    transfer_syntax: ts,
                    mode: self.mode,
                });
            }

            if tag.group() == IMAGE_PIXEL_GROUP && header.len.is_defined() {
                if let Some(entry) = self.dictionary.by_tag(tag).copied() {
                    self.read_metadata(entry, &header, visitor)?;
                    continue;
                }
            }

            self.skip_element(&header)?;
        }
    }

    fn read_metadata<V>(
        &mut self,
        entry: MetadataEntry,
        header: &DataElementHeader,
        visitor: &mut V,
    ) -> Result<()>
    where
        V: ?Sized + ScanVisitor,
    {
        let position = self.source.position();
        let len = header.len.0;
        match entry.kind.fixed_width() {
            Some(width) if len < width => {
                return MalformedElementSnafu {
                    tag: header.tag,
                    position,
                    reason: format!("{} bytes are too few for {}", len, entry.alias),
                }
                .fail();
            }
            None if len > MAX_TEXT_LENGTH => {
                return MalformedElementSnafu {
                    tag: header.tag,
                    position,
                    reason: format!(
                        "text length {} exceeds {} for {}",
                        len, MAX_TEXT_LENGTH, entry.alias
                    ),
                }
                .fail();
            }
            _ => {}
        }

        let basic: BasicDecoder = self.decoder.basic();
        let (value, consumed) = match entry.kind {
            MetadataKind::UnsignedShort => {
                let v = basic
                    .decode_us(&mut self.source)
                    .map_err(|e| self.io_error(e))?;
                (MetadataValue::UnsignedShort(v), 2)
            }
            MetadataKind::UnsignedLong => {
                let v = basic
                    .decode_ul(&mut self.source)
                    .map_err(|e| self.io_error(e))?;
                (MetadataValue::UnsignedLong(v), 4)
            }
            MetadataKind::TagPair => {
                let v = basic
                    .decode_tag(&mut self.source)
                    .map_err(|e| self.io_error(e))?;
                (MetadataValue::TagPair(v), 4)
            }
            MetadataKind::Text => {
                let mut buf = vec![0; len as usize];
                self.source
                    .read_exact(&mut buf)
                    .map_err(|e| self.io_error(e))?;
                let text = String::from_utf8_lossy(&buf);
                let text = text.trim_end_matches(|c| c == '\0' || c == ' ');
                (MetadataValue::Text(text.to_string()), len)
            }
        };
        // the declared length may cover more than the value read
        self.skip_exact(u64::from(len - consumed))?;

        tracing::debug!("{}: {}", entry.alias, value);
        visitor.on_metadata(MetadataElement {
            tag: header.tag,
            alias: entry.alias,
            value,
            length: len,
        });
        Ok(())
    }

    /// Skip the value of an element whose header was just read,
    /// scanning nested elements if its length is undefined.
    fn skip_element(&mut self, header: &DataElementHeader) -> Result<()> {
        match header.len.get() {
            Some(len) => {
                tracing::trace!("Skipping {} {} ({} bytes)", header.tag, header.vr, len);
                self.skip_exact(u64::from(len))
            }
            None => self.skip_nested(header),
        }
    }

    /// Skip the content of an element of undefined length,
    /// up to and including its delimiter.
    fn skip_nested(&mut self, header: &DataElementHeader) -> Result<()> {
        tracing::trace!("Skipping nested content of {}", header.tag);
        let mut open = vec![Container::of(header)];

        while let Some(&current) = open.last() {
            if self.at_end()? {
                return TruncatedSnafu {
                    position: self.source.position(),
                }
                .fail();
            }
            let tag = self.read_tag()?;
            let inner = self.read_length(tag)?;

            if tag == current.terminator() {
                self.check_delimiter(&inner);
                open.pop();
                continue;
            }

            if tag == ITEM_DELIMITER || tag == SEQUENCE_DELIMITER {
                // delimiter of the wrong kind, has no value
                self.check_delimiter(&inner);
                continue;
            }

            match inner.len.get() {
                Some(len) => self.skip_exact(u64::from(len))?,
                None => open.push(Container::of(&inner)),
            }
        }
        Ok(())
    }

    fn check_delimiter(&self, header: &DataElementHeader) {
        if header.len != Length(0) {
            tracing::warn!(
                "Delimiter {} with non-zero length {} at position {}",
                header.tag,
                header.len,
                self.source.position()
            );
        }
    }

    fn skip_exact(&mut self, n: u64) -> Result<()> {
        let skipped = self.source.skip(n).map_err(|e| self.io_error(e))?;
        if skipped < n {
            return TruncatedSnafu {
                position: self.source.position(),
            }
            .fail();
        }
        Ok(())
    }

    fn at_end(&mut self) -> Result<bool> {
        self.source.at_end().map_err(|e| self.io_error(e))
    }

    fn read_tag(&mut self) -> Result<Tag> {
        self.decoder
            .decode_tag(&mut self.source)
            .map_err(|e| self.decode_error(e))
    }

    fn read_length(&mut self, tag: Tag) -> Result<DataElementHeader> {
        let (vr, len, _bytes_read) = self
            .decoder
            .decode_length(tag, &mut self.source)
            .map_err(|e| self.decode_error(e))?;
        Ok(DataElementHeader::new(tag, vr, len))
    }

    fn io_error(&self, e: io::Error) -> Error {
        let position = self.source.position();
        if e.kind() == io::ErrorKind::UnexpectedEof {
            TruncatedSnafu { position }.build()
        } else {
            ReadSourceSnafu { position }.into_error(e)
        }
    }

    fn decode_error(&self, e: decode::Error) -> Error {
        let position = self.source.position();
        match e {
            e if e.is_eof() => TruncatedSnafu { position }.build(),
            decode::Error::UnknownVr { tag, bytes, .. } => MalformedElementSnafu {
                tag,
                position,
                reason: format!("unrecognized value representation {:02X?}", bytes),
            }
            .build(),
            e => DecodeElementSnafu { position }.into_error(e),
        }
    }
}
