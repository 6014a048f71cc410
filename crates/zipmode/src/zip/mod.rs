//! ZIP format structures.
//!
//! Layout structs for the records this crate reads: the End of Central
//! Directory record and the central directory file header. Signatures are
//! read separately from the structs, which mirror the on-disk layout
//! byte for byte.

mod central_dir;
mod eocd;

pub use central_dir::{CentralDirectoryHeader, HOST_UNIX};
pub use eocd::{EocdRecord, ZIP64_EOCD_MAGIC, ZIP64_EOCD_SIGNATURE};
