use crate::entries::ENTRIES;
use dicom_scan_core::dictionary::{MetadataDictionary, MetadataEntry};
use dicom_scan_core::header::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardMetadataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard metadata dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardMetadataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardMetadataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard metadata dictionary.
///
/// This structure is made opaque via the unit type [`StandardMetadataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardMetadataDictionaryRegistry {
    /// mapping: alias → entry
    by_alias: HashMap<&'static str, &'static MetadataEntry>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static MetadataEntry>,
}

impl StandardMetadataDictionaryRegistry {
    fn new() -> StandardMetadataDictionaryRegistry {
        StandardMetadataDictionaryRegistry {
            by_alias: HashMap::with_capacity(ENTRIES.len()),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static MetadataEntry) -> &mut Self {
        self.by_alias.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        self
    }

    /// The number of attributes in the dictionary.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the dictionary has no attributes.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// A metadata dictionary which consults
/// the library's global table of image pixel description attributes.
///
/// This is the dictionary used by default when scanning DICOM files.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardMetadataDictionary;

impl MetadataDictionary for StandardMetadataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&MetadataEntry> {
        registry().by_tag.get(&tag).copied()
    }

    fn by_alias(&self, alias: &str) -> Option<&MetadataEntry> {
        registry().by_alias.get(alias).copied()
    }
}

impl Display for StandardMetadataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Image Pixel Metadata Dictionary")
    }
}

fn init_dictionary() -> StandardMetadataDictionaryRegistry {
    let mut d = StandardMetadataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}
