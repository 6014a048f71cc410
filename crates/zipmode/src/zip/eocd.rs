//! End of Central Directory (EOCD) record layout.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// End of Central Directory record (without signature).
///
/// The EOCD sits at the tail of the archive, after the central directory
/// and before an optional comment of unknown length, which is why it has to
/// be found by scanning backward from the end. The 4-byte signature
/// (0x06054b50) is read separately before this struct.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct EocdRecord {
    /// Number of this disk
    pub disk_number: u16,
    /// Disk where the central directory starts
    pub central_dir_disk: u16,
    /// Number of central directory records on this disk
    pub entries_on_disk: u16,
    /// Total number of central directory records
    pub entries_total: u16,
    /// Size of the central directory in bytes
    pub central_dir_size: u32,
    /// Offset of the start of the central directory
    pub central_dir_offset: u32,
    /// Comment length
    pub comment_length: u16,
}

impl EocdRecord {
    /// EOCD signature bytes.
    pub const MAGIC: [u8; 4] = [0x50, 0x4b, 0x05, 0x06];

    /// EOCD signature as u32.
    pub const SIGNATURE: u32 = 0x0605_4b50;

    /// True when the directory offset is the Zip64 sentinel, meaning the
    /// real offset lives in a Zip64 record.
    pub fn needs_zip64_offset(&self) -> bool {
        self.central_dir_offset == u32::MAX
    }
}

/// Zip64 End of Central Directory signature as u32.
///
/// Encountering this during the backward scan means the archive uses Zip64
/// records; the regular EOCD cannot be trusted without parsing them.
pub const ZIP64_EOCD_SIGNATURE: u32 = 0x0606_4b50;

/// Zip64 End of Central Directory signature bytes.
pub const ZIP64_EOCD_MAGIC: [u8; 4] = [0x50, 0x4b, 0x06, 0x06];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_matches_on_disk_layout() {
        // 22-byte EOCD minus the 4-byte signature.
        assert_eq!(std::mem::size_of::<EocdRecord>(), 18);
    }

    #[test]
    fn magic_is_signature_in_little_endian() {
        assert_eq!(u32::from_le_bytes(EocdRecord::MAGIC), EocdRecord::SIGNATURE);
        assert_eq!(u32::from_le_bytes(ZIP64_EOCD_MAGIC), ZIP64_EOCD_SIGNATURE);
    }
}
