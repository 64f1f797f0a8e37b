//! DICOM element header decoding primitives.
//!
//! This crate provides the element reader of the scanning toolkit:
//! given a [parse mode] (byte order and value representation style),
//! it decodes one data element header at a time,
//! telling apart the undefined length sentinel from any concrete length.
//! This crate also hosts the concept of [transfer syntax specifier],
//! from which a parse mode is derived at run-time.
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! [parse mode]: ./mode/index.html
//! [transfer syntax specifier]: ./transfer_syntax/index.html

pub mod decode;
pub mod mode;
pub mod transfer_syntax;

pub use byteordered::Endianness;
pub use decode::{Decode, ModeDecoder};
pub use mode::{Compression, ParseMode, VrStyle};
pub use transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
