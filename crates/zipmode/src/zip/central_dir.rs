//! Central directory file header layout.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Host OS marker in the high byte of `version_made_by` for Unix.
pub const HOST_UNIX: u16 = 3;

/// Central directory file header (without signature).
///
/// One header per archive entry, stored contiguously in the central
/// directory and followed by the file name, extra field, and file comment.
/// The 4-byte signature (0x02014b50) is read separately before this struct.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct CentralDirectoryHeader {
    /// Version made by; the high byte identifies the originating host OS
    pub version_made_by: u16,
    /// Version needed to extract
    pub version_needed: u16,
    /// General purpose bit flag
    pub flags: u16,
    /// Compression method
    pub compression_method: u16,
    /// Last modification time (DOS format)
    pub mod_time: u16,
    /// Last modification date (DOS format)
    pub mod_date: u16,
    /// CRC-32 of uncompressed data
    pub crc32: u32,
    /// Compressed size
    pub compressed_size: u32,
    /// Uncompressed size
    pub uncompressed_size: u32,
    /// File name length
    pub file_name_length: u16,
    /// Extra field length
    pub extra_field_length: u16,
    /// File comment length
    pub file_comment_length: u16,
    /// Disk number where the file starts
    pub disk_number_start: u16,
    /// Internal file attributes
    pub internal_attrs: u16,
    /// External file attributes; upper 16 bits hold the POSIX mode for
    /// Unix-authored entries
    pub external_attrs: u32,
    /// Relative offset of the local file header
    pub local_header_offset: u32,
}

impl CentralDirectoryHeader {
    /// Central directory signature bytes.
    pub const MAGIC: [u8; 4] = [0x50, 0x4b, 0x01, 0x02];

    /// Central directory signature as u32.
    pub const SIGNATURE: u32 = 0x0201_4b50;

    /// Whether the entry was authored on a Unix host.
    pub fn is_unix(&self) -> bool {
        self.version_made_by >> 8 == HOST_UNIX
    }

    /// Variable-length data following the file name.
    pub fn trailing_data_size(&self) -> usize {
        self.extra_field_length as usize + self.file_comment_length as usize
    }
}
