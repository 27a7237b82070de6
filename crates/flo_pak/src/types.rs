//! Base types for structure of PAK file.

use binrw::BinRead;

/// PAK file entry record
///
/// Defines one record of the entry table. The name field is padded to 260 bytes with NUL
/// bytes, and the 28 reserved bytes that close each record carry no known meaning.
/// All data is stored in little endian format
#[derive(BinRead, Debug, Clone, PartialEq, Eq)]
#[br(little)]
pub struct PakEntry {
    /// Raw name bytes, NUL padded
    #[br(count = 260)]
    pub name_raw: Vec<u8>,

    /// The offset to the data for this entry from the start of the file
    pub offset: u32,

    /// The size of the data for this entry in bytes
    #[br(pad_after = 28)]
    pub length: u32,
}

impl PakEntry {
    /// Entry name with NUL padding stripped, decoded as UTF-8.
    ///
    /// Decoding is lossy; keep [`PakEntry::name_raw`] around when the original
    /// bytes matter.
    pub fn name(&self) -> String {
        let stripped: Vec<u8> = self
            .name_raw
            .iter()
            .copied()
            .filter(|byte| *byte != b'\0')
            .collect();

        String::from_utf8_lossy(&stripped).into_owned()
    }
}
