//! Central directory scanner.
//!
//! The data this crate cares about sits at the end of the archive, after
//! the compressed contents: the End of Central Directory record is located
//! by a backward signature scan, and points at the central directory,
//! which is then walked entry by entry.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::reader::BinaryReader;
use crate::zip::{CentralDirectoryHeader, EocdRecord, ZIP64_EOCD_SIGNATURE};
use crate::{Error, Result};

/// Result of scanning an archive's central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeScan {
    /// External file attributes keyed by entry name.
    ///
    /// Contains only entries authored on a Unix host; for those, the upper
    /// 16 bits hold the POSIX file mode. The format does not forbid
    /// duplicate entry names; the last occurrence in the directory wins.
    pub attributes: HashMap<String, u32>,
    /// Set when the directory declared more entries than could be parsed.
    ///
    /// Real-world tools sometimes write a trailer whose entry count
    /// disagrees with the directory itself; the scan still returns every
    /// entry it could read.
    pub count_mismatch: Option<CountMismatch>,
}

/// Disagreement between the declared and parsed entry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    /// Entry count declared by the End of Central Directory record.
    pub declared: u16,
    /// Entries actually parsed before the directory ended.
    pub found: u16,
}

impl AttributeScan {
    /// Scan an archive on disk.
    ///
    /// The file is opened read-only and memory-mapped for the duration of
    /// the scan.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Scan an archive already in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let eocd_offset = locate_eocd(data)?;
        let mut reader = BinaryReader::new_at(data, eocd_offset + 4);
        let eocd: EocdRecord = reader.read_struct()?;

        if eocd.needs_zip64_offset() {
            return Err(Error::Zip64Unsupported);
        }

        let declared = eocd.entries_on_disk;
        let mut attributes = HashMap::new();
        let mut found: u16 = 0;

        reader.seek(eocd.central_dir_offset as usize);
        while found < declared {
            // Anything other than an entry signature ends the directory;
            // the trailer's entry count is not trusted over the data.
            if reader.read_u32()? != CentralDirectoryHeader::SIGNATURE {
                break;
            }
            let header: CentralDirectoryHeader = reader.read_struct()?;

            let name_length = header.file_name_length as usize;
            let name_bytes = reader
                .read_bytes(name_length)
                .map_err(|_| Error::TruncatedFileName {
                    length: name_length,
                })?;
            reader.advance(header.trailing_data_size());
            found += 1;

            if header.is_unix() {
                let name = String::from_utf8_lossy(name_bytes).into_owned();
                attributes.insert(name, header.external_attrs);
            }
        }

        let count_mismatch = (found != declared).then_some(CountMismatch { declared, found });

        Ok(Self {
            attributes,
            count_mismatch,
        })
    }

    /// True when the declared entry count matched what was parsed.
    pub fn is_consistent(&self) -> bool {
        self.count_mismatch.is_none()
    }
}

/// Map every Unix-authored entry of the archive at `path` to its 32-bit
/// external file attributes.
pub fn unix_external_file_attributes<P: AsRef<Path>>(path: P) -> Result<AttributeScan> {
    AttributeScan::from_path(path)
}

/// Find the End of Central Directory record.
///
/// Its position is not knowable up front because a comment of unknown
/// length may follow it, so the signature is searched one offset at a time
/// backward, starting four bytes from the end. The first match from the end
/// wins; a comment that itself contains the signature bytes can fool this,
/// which is a known trade-off of the format.
fn locate_eocd(data: &[u8]) -> Result<usize> {
    if data.len() < 4 {
        return Err(Error::EocdNotFound);
    }
    // Both signatures of interest start with 'P'; visiting occurrences of
    // that byte in descending order is equivalent to the byte-at-a-time
    // backward scan.
    for offset in memchr::memrchr_iter(b'P', &data[..data.len() - 3]) {
        let signature = u32::from_le_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        if signature == EocdRecord::SIGNATURE {
            return Ok(offset);
        }
        if signature == ZIP64_EOCD_SIGNATURE {
            return Err(Error::Zip64Unsupported);
        }
    }
    Err(Error::EocdNotFound)
}
