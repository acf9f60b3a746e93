//! Fixed-layout binary save records.
//!
//! A save is a single little-endian record: a 4-byte magic constant
//! (`"SUD1"`), a 4-byte format version, then four 9×9 arrays of `i32` in
//! row-major order (current board, clue mask as 0/1, original puzzle, full
//! solution) for a total of 1304 bytes. Writes always overwrite the whole
//! file; loads reject anything with the wrong length, magic, or version and
//! the caller falls back to generating a fresh puzzle.
//!
//! Cell values are otherwise taken verbatim, with one deviation from the
//! wire contract: a value outside `0..=9` is rejected as
//! [`SaveError::BadCell`], since [`Board`] cannot represent it.

use std::{fs, io, path::Path};

use sudoq_core::{Board, ClueMask};

/// Magic constant at the start of every save record (ASCII `"SUD1"`).
pub const SAVE_MAGIC: u32 = 0x5355_4431;

/// Current save format version.
pub const SAVE_VERSION: u32 = 1;

/// Exact byte length of a save record: 8 header bytes plus four 9×9 arrays
/// of 32-bit integers.
pub const SAVE_LEN: usize = 8 + 4 * 4 * 81;

/// The four boards that make up a persisted game session.
///
/// # Examples
///
/// ```
/// use sudoq_core::{Board, ClueMask};
/// use sudoq_game::SaveData;
///
/// let data = SaveData {
///     board: Board::new(),
///     fixed: ClueMask::new(),
///     original: Board::new(),
///     solution: Board::new(),
/// };
///
/// let bytes = data.to_bytes();
/// assert_eq!(bytes.len(), sudoq_game::SAVE_LEN);
/// assert_eq!(SaveData::from_bytes(&bytes), Ok(data));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveData {
    /// The board as currently played.
    pub board: Board,
    /// Clue mask of the original puzzle.
    pub fixed: ClueMask,
    /// The puzzle as originally given.
    pub original: Board,
    /// The full solution.
    pub solution: Board,
}

/// Error returned when decoding a save record fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SaveError {
    /// The record is not exactly [`SAVE_LEN`] bytes.
    #[display("expected {SAVE_LEN} bytes, found {found}")]
    BadLength {
        /// Number of bytes found.
        found: usize,
    },
    /// The magic constant does not match [`SAVE_MAGIC`].
    #[display("bad magic: expected {SAVE_MAGIC:#010x}, found {found:#010x}")]
    BadMagic {
        /// The magic value found.
        found: u32,
    },
    /// The format version is not [`SAVE_VERSION`].
    #[display("unsupported save version {found}")]
    UnsupportedVersion {
        /// The version found.
        found: u32,
    },
    /// A board cell held a value outside `0..=9`.
    #[display("cell value {value} at index {index} is out of range")]
    BadCell {
        /// Flat index of the offending cell within its array.
        index: usize,
        /// The value found.
        value: i32,
    },
}

/// Error returned when reading a save file fails.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read save file: {_0}")]
    Io(io::Error),
    /// The file contents are not a valid save record.
    #[display("corrupt save file: {_0}")]
    Corrupt(SaveError),
}

impl SaveData {
    /// Encodes the record into its fixed 1304-byte layout.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; SAVE_LEN] {
        let mut bytes = [0u8; SAVE_LEN];
        bytes[0..4].copy_from_slice(&SAVE_MAGIC.to_le_bytes());
        bytes[4..8].copy_from_slice(&SAVE_VERSION.to_le_bytes());

        let mut offset = 8;
        offset = write_board(&mut bytes, offset, &self.board);
        for row in self.fixed.cells() {
            for &fixed in row {
                let value: i32 = i32::from(fixed);
                bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
                offset += 4;
            }
        }
        offset = write_board(&mut bytes, offset, &self.original);
        offset = write_board(&mut bytes, offset, &self.solution);
        debug_assert_eq!(offset, SAVE_LEN);
        bytes
    }

    /// Decodes a record from raw bytes.
    ///
    /// Beyond the length, magic, and version checks, cells are taken
    /// verbatim; no Sudoku-rule validation is applied. A cell value outside
    /// the representable `0..=9` domain is still rejected, since the typed
    /// boards cannot hold it.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] naming the first check that failed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SaveError> {
        if bytes.len() != SAVE_LEN {
            return Err(SaveError::BadLength { found: bytes.len() });
        }
        let magic = read_u32(bytes, 0);
        if magic != SAVE_MAGIC {
            return Err(SaveError::BadMagic { found: magic });
        }
        let version = read_u32(bytes, 4);
        if version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion { found: version });
        }

        let board = read_board(bytes, 8)?;
        let mut fixed = [[false; 9]; 9];
        for (i, row) in fixed.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = read_i32(bytes, 8 + 324 + (i * 9 + j) * 4) != 0;
            }
        }
        let original = read_board(bytes, 8 + 2 * 324)?;
        let solution = read_board(bytes, 8 + 3 * 324)?;

        Ok(Self {
            board,
            fixed: ClueMask::from_cells(fixed),
            original,
            solution,
        })
    }
}

/// Writes a save record to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns any I/O error from the underlying write.
pub fn write_save(path: impl AsRef<Path>, data: &SaveData) -> io::Result<()> {
    fs::write(path, data.to_bytes())
}

/// Reads and decodes a save record from `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::Corrupt`] when its contents fail validation.
pub fn read_save(path: impl AsRef<Path>) -> Result<SaveData, LoadError> {
    let bytes = fs::read(path)?;
    Ok(SaveData::from_bytes(&bytes)?)
}

fn write_board(bytes: &mut [u8], mut offset: usize, board: &Board) -> usize {
    for row in board.cells() {
        for &v in row {
            let value = i32::from(v);
            bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
            offset += 4;
        }
    }
    offset
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_board(bytes: &[u8], offset: usize) -> Result<Board, SaveError> {
    let mut board = Board::new();
    for i in 0..81 {
        let value = read_i32(bytes, offset + i * 4);
        match u8::try_from(value) {
            Ok(v) if v <= 9 => board.set(i / 9, i % 9, v),
            _ => return Err(SaveError::BadCell { index: i, value }),
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use sudoq_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn sample() -> SaveData {
        let puzzle = PuzzleGenerator::new()
            .generate_with_seed(5, PuzzleSeed::from_phrase("save sample"))
            .unwrap();
        SaveData {
            board: puzzle.problem,
            fixed: puzzle.fixed,
            original: puzzle.problem,
            solution: puzzle.solution,
        }
    }

    #[test]
    fn test_round_trip() {
        let data = sample();
        let bytes = data.to_bytes();
        assert_eq!(bytes.len(), 1304);
        assert_eq!(SaveData::from_bytes(&bytes), Ok(data));
    }

    #[test]
    fn test_header_layout() {
        let bytes = sample().to_bytes();
        // Little-endian "SUD1" magic then version 1
        assert_eq!(&bytes[0..4], &[0x31, 0x44, 0x55, 0x53]);
        assert_eq!(&bytes[4..8], &[1, 0, 0, 0]);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let bytes = sample().to_bytes();
        assert_eq!(
            SaveData::from_bytes(&bytes[..SAVE_LEN - 1]),
            Err(SaveError::BadLength { found: SAVE_LEN - 1 })
        );
        assert_eq!(
            SaveData::from_bytes(&[]),
            Err(SaveError::BadLength { found: 0 })
        );
    }

    #[test]
    fn test_rejects_corrupt_magic() {
        let mut bytes = sample().to_bytes();
        bytes[0] ^= 0xff;
        assert!(matches!(
            SaveData::from_bytes(&bytes),
            Err(SaveError::BadMagic { .. })
        ));
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let mut bytes = sample().to_bytes();
        bytes[4] = 2;
        assert_eq!(
            SaveData::from_bytes(&bytes),
            Err(SaveError::UnsupportedVersion { found: 2 })
        );
    }

    #[test]
    fn test_rejects_out_of_domain_cell() {
        let mut bytes = sample().to_bytes();
        // First cell of the current board
        bytes[8..12].copy_from_slice(&12i32.to_le_bytes());
        assert_eq!(
            SaveData::from_bytes(&bytes),
            Err(SaveError::BadCell { index: 0, value: 12 })
        );
    }

    #[test]
    fn test_file_round_trip() {
        let data = sample();
        let path = std::env::temp_dir().join(format!("sudoq-save-test-{}.sud", std::process::id()));

        write_save(&path, &data).unwrap();
        let loaded = read_save(&path).unwrap();
        assert_eq!(loaded, data);

        // Corrupting the magic makes the load fail as corrupt, not I/O
        let mut bytes = data.to_bytes();
        bytes[0] = 0;
        fs::write(&path, bytes).unwrap();
        assert!(matches!(read_save(&path), Err(LoadError::Corrupt(_))));

        fs::remove_file(&path).unwrap();
    }
}
