//! Types for reading PAK archives
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use indexmap::IndexMap;
use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::{EntryNotFoundError, Error, Result},
    types::PakEntry,
};

/// Structure representing a PAK archive entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PakEntryData {
    /// Name of the entry
    pub name: Box<str>,
    /// Raw entry name. To be used when name was incorrectly decoded.
    pub name_raw: Box<[u8]>,
    /// Offset of the entry's data from the start of the archive
    pub offset: u64,
    /// Size of the entry's data in bytes
    pub length: u64,
}

/// PAK archive reader
///
/// The entry table is read once when the archive is opened; every content read reopens the
/// backing file with its own handle, so a [`PakArchive`] holds no open file and concurrent
/// reads never share a cursor.
///
/// ```no_run
/// fn list_pak_contents(path: &str) -> flo_pak::error::Result<()> {
///     let pak = flo_pak::PakArchive::open(path)?;
///
///     for name in pak.file_names() {
///         let content = pak.read_content(name)?;
///         println!("{}: {} bytes", name, content.len());
///     }
///
///     Ok(())
/// }
/// ```
pub struct PakArchive {
    path: PathBuf,
    entries: IndexMap<Box<str>, PakEntryData>,
}

impl PakArchive {
    /// Open a PAK archive and read the entry table it contains.
    pub fn open(path: impl AsRef<Path>) -> Result<PakArchive> {
        let path = path.as_ref().to_path_buf();

        let mut file = File::open(&path)?;
        let file_len = file.metadata()?.len();

        let entries = Self::get_entries(&mut file, file_len)?;
        debug!(path = %path.display(), entries = entries.len(), "opened pak archive");

        Ok(PakArchive { path, entries })
    }

    /// Number of entries contained in this PAK.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this PAK archive contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path of the backing file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns an iterator over all the entry names in this archive, in declaration order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_ref())
    }

    /// Returns an iterator over the entry metadata in this archive, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &PakEntryData> {
        self.entries.values()
    }

    /// Get the index of an entry by name, if it's present.
    #[inline(always)]
    pub fn index_for_name(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    /// Get the name of an entry, if it's present.
    #[inline(always)]
    pub fn name_for_index(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(|(name, _)| name.as_ref())
    }

    /// Search for an entry's metadata by name
    pub fn by_name(&self, name: &str) -> Result<&PakEntryData> {
        self.entries.get(name).ok_or(Error::EntryNotFound(
            EntryNotFoundError::Name(name.to_owned()),
        ))
    }

    /// Get a contained entry's metadata by index
    pub fn by_index(&self, index: usize) -> Result<&PakEntryData> {
        self.entries
            .get_index(index)
            .map(|(_, data)| data)
            .ok_or(Error::EntryNotFound(EntryNotFoundError::Index(index)))
    }

    /// Read the data for an entry by name.
    ///
    /// The backing file is reopened for each call and read with an independent cursor.
    pub fn read_content(&self, name: &str) -> Result<Vec<u8>> {
        let entry = self.by_name(name)?;

        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(entry.offset))?;

        let mut buffer = vec![0u8; entry.length as usize];
        file.read_exact(&mut buffer)?;

        Ok(buffer)
    }

    fn get_entries<R: Read + Seek>(
        reader: &mut R,
        file_len: u64,
    ) -> Result<IndexMap<Box<str>, PakEntryData>> {
        let count = reader.read_i32::<LittleEndian>().map_err(eof_as_invalid)?;
        if count < 0 {
            return Err(Error::InvalidArchive);
        }

        let mut entries = IndexMap::with_capacity(count as usize);
        for _ in 0..count {
            let record = PakEntry::read(reader).map_err(|e| match e {
                binrw::Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    Error::InvalidArchive
                }
                e => Error::BinRWError(e),
            })?;

            let entry = PakEntryData {
                name: record.name().into(),
                name_raw: record.name_raw.clone().into(),
                offset: record.offset as u64,
                length: record.length as u64,
            };

            if entry.offset + entry.length > file_len {
                return Err(Error::EntryOutOfBounds {
                    name: entry.name.into(),
                });
            }

            entries.insert(entry.name.clone(), entry);
        }

        Ok(entries)
    }
}

fn eof_as_invalid(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::InvalidArchive
    } else {
        Error::IOError(err)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use crate::error::Error;
    use crate::read::PakArchive;

    fn record(name: &str, offset: u32, length: u32) -> Vec<u8> {
        let mut bytes = vec![0u8; 260];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        bytes.extend_from_slice(&offset.to_le_bytes());
        bytes.extend_from_slice(&length.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 28]);
        bytes
    }

    fn table(records: &[Vec<u8>]) -> Vec<u8> {
        let mut bytes = (records.len() as i32).to_le_bytes().to_vec();
        for record in records {
            bytes.extend_from_slice(record);
        }
        bytes
    }

    #[test]
    fn read_empty_table() {
        let input = table(&[]);

        let entries = PakArchive::get_entries(&mut Cursor::new(&input), input.len() as u64);
        assert!(entries.is_ok());
        assert!(entries.unwrap().is_empty());
    }

    #[test]
    fn read_table_preserves_declaration_order() {
        let mut input = table(&[record("b.dat", 600, 10), record("a.bin", 620, 4)]);
        input.resize(700, 0);

        let entries = PakArchive::get_entries(&mut Cursor::new(&input), 700).unwrap();
        let names: Vec<&str> = entries.keys().map(|name| name.as_ref()).collect();
        assert_eq!(names, vec!["b.dat", "a.bin"]);
    }

    #[test]
    fn read_negative_count() {
        let input = (-1i32).to_le_bytes();

        let entries = PakArchive::get_entries(&mut Cursor::new(&input[..]), 4);
        assert!(matches!(entries, Err(Error::InvalidArchive)));
    }

    #[test]
    fn read_truncated_table() {
        // Declares two entries but only carries one.
        let mut input = table(&[record("only.bin", 300, 1)]);
        input[..4].copy_from_slice(&2i32.to_le_bytes());

        let entries = PakArchive::get_entries(&mut Cursor::new(&input), 400);
        assert!(matches!(entries, Err(Error::InvalidArchive)));
    }

    #[test]
    fn read_entry_out_of_bounds() {
        let input = table(&[record("huge.bin", 300, 4096)]);

        let entries = PakArchive::get_entries(&mut Cursor::new(&input), input.len() as u64);
        assert!(matches!(
            entries,
            Err(Error::EntryOutOfBounds { name }) if name == "huge.bin"
        ));
    }
}
