//! This crate contains the DICOM transfer syntax registry.
//! The transfer syntax registry maps a DICOM UID of a transfer syntax into the
//! respective transfer syntax specifier.
//!
//! Lookups are exact and case sensitive,
//! save for the trailing padding of the UID value,
//! which is ignored.
//!
//! ```
//! use dicom_scan_transfer_syntax_registry::{get_registry, ResolveError};
//!
//! let ts = get_registry().resolve("1.2.840.10008.1.2.2\0")?;
//! assert_eq!(ts.name(), "Explicit VR Big Endian");
//! assert_eq!(ts.code(), 2);
//!
//! let err = get_registry().resolve("1.2.840.10008.1.2.1.99").unwrap_err();
//! assert!(matches!(err, ResolveError::Unsupported { .. }));
//! # Ok::<(), ResolveError>(())
//! ```

pub mod entries;

use dicom_scan_encoding::transfer_syntax::{trim_uid, TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use snafu::Snafu;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// An error resolving a transfer syntax UID into a usable descriptor.
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum ResolveError {
    /// The UID is not known to the registry.
    #[snafu(display("Unknown transfer syntax `{}`", uid))]
    Unresolved { uid: String },
    /// The UID is known, but data sets in this transfer syntax
    /// need a decoding layer which is not available.
    #[snafu(display("Unsupported transfer syntax `{}` ({}): needs further work", uid, name))]
    Unsupported { uid: String, name: &'static str },
}

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<&'static str, &'static TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistry {
    /// Obtain a transfer syntax descriptor by its UID.
    ///
    /// Trailing `\0` or space padding is stripped before the lookup.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<&'static TransferSyntax> {
        self.m.get(trim_uid(uid.as_ref())).copied()
    }

    /// Obtain a transfer syntax descriptor by its UID,
    /// failing if it is unknown or cannot be scanned.
    pub fn resolve<U: AsRef<str>>(&self, uid: U) -> Result<&'static TransferSyntax, ResolveError> {
        let uid = trim_uid(uid.as_ref());
        match self.get(uid) {
            None => UnresolvedSnafu { uid }.fail(),
            Some(ts) if !ts.is_supported() => UnsupportedSnafu {
                uid,
                name: ts.name(),
            }
            .fail(),
            Some(ts) => Ok(ts),
        }
    }

    /// The number of transfer syntaxes in the registry.
    pub fn len(&self) -> usize {
        self.m.len()
    }

    /// Whether the registry is empty, which never happens in practice.
    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    /// Iterate over all registered transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TransferSyntax> + '_ {
        self.m.values().copied()
    }

    /// Register the given transfer syntax (TS) to the system.
    /// A TS with an already registered UID is not replaced,
    /// in which case this function returns `false`.
    fn register(&mut self, ts: &'static TransferSyntax) -> bool {
        match self.m.entry(ts.uid()) {
            Entry::Occupied(e) => {
                tracing::warn!(
                    "Duplicate transfer syntax {}: keeping `{}`, ignoring `{}`",
                    ts.uid(),
                    e.get().name(),
                    ts.name()
                );
                false
            }
            Entry::Vacant(e) => {
                e.insert(ts);
                true
            }
        }
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        TransferSyntaxRegistry::get(self, uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistry = initialize_registry();
}

/// Retrieve the default transfer syntax,
/// assumed when a data set is not preceded by file meta information.
pub fn default() -> &'static TransferSyntax {
    &entries::IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &REGISTRY
}

fn initialize_registry() -> TransferSyntaxRegistry {
    let mut registry = TransferSyntaxRegistry {
        m: HashMap::with_capacity(entries::ALL.len()),
    };
    for ts in entries::ALL.iter().copied() {
        registry.register(ts);
    }
    registry
}
