//! Read-only scanner for Unix file attributes stored in ZIP archives.
//!
//! Every entry in a ZIP central directory carries a `version made by` field
//! and a 32-bit `external file attributes` field. When the entry was
//! produced on a Unix host (high byte of `version made by` equals 3), the
//! upper 16 bits of the attributes hold the POSIX file mode. This crate
//! locates the central directory through the End of Central Directory
//! record at the tail of the archive and builds a map from entry name to
//! attributes for all Unix-authored entries.
//!
//! File contents are never read or decompressed, and Zip64 archives are
//! detected and rejected rather than parsed.
//!
//! # Example
//!
//! ```no_run
//! use zipmode::unix_external_file_attributes;
//!
//! let scan = unix_external_file_attributes("bundle.zip")?;
//! for (name, attrs) in &scan.attributes {
//!     println!("{:06o} {}", attrs >> 16, name);
//! }
//! if let Some(mismatch) = scan.count_mismatch {
//!     eprintln!(
//!         "directory declared {} entries but {} were found",
//!         mismatch.declared, mismatch.found
//!     );
//! }
//! # Ok::<(), zipmode::Error>(())
//! ```

mod error;
mod reader;
mod scan;
pub mod zip;

pub use error::{Error, Result};
pub use reader::BinaryReader;
pub use scan::{unix_external_file_attributes, AttributeScan, CountMismatch};
