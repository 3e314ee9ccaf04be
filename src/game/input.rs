//! Parsing a cell choice typed at the prompt.

use derive_more::Display;
use tracing::instrument;

/// Why a typed cell choice was rejected.
///
/// Never surfaced to the player; the engine just asks again.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CellInputError {
    /// The line is not a string of digits.
    #[display("{:?} is not a cell number", _0)]
    NotANumber(String),

    /// The number does not name an open cell.
    #[display("cell {} is not open", _0)]
    NotOpen(u64),
}

impl std::error::Error for CellInputError {}

/// Parses one line of input into a linear cell index.
///
/// Surrounding whitespace is ignored. The rest must be ASCII digits naming
/// one of `open_cells`.
#[instrument]
pub fn parse_cell_choice(line: &str, open_cells: &[u8]) -> Result<u8, CellInputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CellInputError::NotANumber(trimmed.to_string()));
    }

    // All digits, so the only parse failure left is overflow.
    let number: u64 = trimmed.parse().unwrap_or(u64::MAX);

    open_cells
        .iter()
        .copied()
        .find(|cell| u64::from(*cell) == number)
        .ok_or(CellInputError::NotOpen(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn test_accepts_open_cell() {
        assert_eq!(parse_cell_choice("5", &ALL), Ok(5));
        assert_eq!(parse_cell_choice("7\n", &ALL), Ok(7));
        assert_eq!(parse_cell_choice(" 3 \r\n", &ALL), Ok(3));
    }

    #[test]
    fn test_leading_zeros_are_well_formed() {
        assert_eq!(parse_cell_choice("05", &ALL), Ok(5));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            parse_cell_choice("x", &ALL),
            Err(CellInputError::NotANumber("x".to_string()))
        );
        assert!(parse_cell_choice("", &ALL).is_err());
        assert!(parse_cell_choice("-1", &ALL).is_err());
        assert!(parse_cell_choice("+1", &ALL).is_err());
        assert!(parse_cell_choice("4.0", &ALL).is_err());
        assert!(parse_cell_choice("1 2", &ALL).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(parse_cell_choice("10", &ALL), Err(CellInputError::NotOpen(10)));
        assert_eq!(parse_cell_choice("0", &ALL), Err(CellInputError::NotOpen(0)));
        assert_eq!(
            parse_cell_choice("99999999999999999999999", &ALL),
            Err(CellInputError::NotOpen(u64::MAX))
        );
    }

    #[test]
    fn test_rejects_played_cell() {
        let open = [2, 3, 4, 6, 7, 8, 9];
        assert_eq!(parse_cell_choice("1", &open), Err(CellInputError::NotOpen(1)));
        assert_eq!(parse_cell_choice("5", &open), Err(CellInputError::NotOpen(5)));
        assert_eq!(parse_cell_choice("2", &open), Ok(2));
    }
}
