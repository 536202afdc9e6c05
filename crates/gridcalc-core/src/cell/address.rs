//! A1-style cell addresses and rectangular ranges

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use lazy_regex::regex_captures;
use std::fmt;
use std::str::FromStr;

/// Location of one cell in a grid
///
/// Rows and columns are zero-based. Column letters use bijective base-26
/// numbering: `A` = 0, `Z` = 25, `AA` = 26. `$` markers are kept so an
/// address prints the way it was written, but lookup ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Zero-based row (row 1 in A1 notation is 0)
    pub row: u32,
    /// Zero-based column (A=0 ... XFD=16383)
    pub col: u16,
    /// Row written with `$`
    #[cfg_attr(feature = "serde", serde(default))]
    pub row_absolute: bool,
    /// Column written with `$`
    #[cfg_attr(feature = "serde", serde(default))]
    pub col_absolute: bool,
}

impl CellAddress {
    /// Relative address at `(row, col)`
    pub fn new(row: u32, col: u16) -> Self {
        Self::with_absolute(row, col, false, false)
    }

    pub fn with_absolute(row: u32, col: u16, row_absolute: bool, col_absolute: bool) -> Self {
        Self {
            row,
            col,
            row_absolute,
            col_absolute,
        }
    }

    /// Parse A1 notation, case-insensitively
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!((addr.row, addr.col), (0, 0));
    ///
    /// let addr = CellAddress::parse("$b$2").unwrap();
    /// assert_eq!((addr.row, addr.col), (1, 1));
    /// assert!(addr.row_absolute && addr.col_absolute);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (_, col_dollar, letters, row_dollar, digits) =
            regex_captures!(r"^(\$?)([A-Za-z]+)(\$?)([0-9]+)$", s)
                .ok_or_else(|| Error::InvalidAddress(format!("'{}' is not an A1 address", s)))?;

        let col = Self::letters_to_column(letters)?;

        // A row number too long for u64 is out of bounds as well
        let row_number = digits.parse::<u64>().unwrap_or(u64::MAX);
        if row_number == 0 {
            return Err(Error::InvalidAddress(format!("row 0 in '{}'", s)));
        }
        if row_number > MAX_ROWS as u64 {
            return Err(Error::RowOutOfBounds(
                u32::try_from(row_number - 1).unwrap_or(u32::MAX),
                MAX_ROWS - 1,
            ));
        }

        Ok(Self::with_absolute(
            (row_number - 1) as u32,
            col,
            !row_dollar.is_empty(),
            !col_dollar.is_empty(),
        ))
    }

    /// Column letters for a zero-based index (0 = A, 26 = AA)
    pub fn column_to_letters(col: u16) -> String {
        let mut letters = Vec::with_capacity(3);
        let mut n = col as u32 + 1;
        while n > 0 {
            let digit = (n - 1) % 26;
            letters.push(b'A' + digit as u8);
            n = (n - 1) / 26;
        }
        letters.iter().rev().map(|&b| b as char).collect()
    }

    /// Zero-based index for column letters (A = 0, AA = 26), case-insensitive
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let number = letters.chars().try_fold(0u32, |acc, c| {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!("invalid column letter '{}'", c)));
            }
            let digit = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
            acc.checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .filter(|&v| v <= MAX_COLS as u32)
                .ok_or_else(|| Error::ColumnOutOfBounds(acc, MAX_COLS - 1))
        })?;

        Ok((number - 1) as u16)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_marker = if self.col_absolute { "$" } else { "" };
        let row_marker = if self.row_absolute { "$" } else { "" };
        write!(
            f,
            "{}{}{}{}",
            col_marker,
            Self::column_to_letters(self.col),
            row_marker,
            self.row as u64 + 1
        )
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Inclusive rectangle of cells (e.g. "A1:B10")
///
/// `start` is always the top-left corner and `end` the bottom-right, however
/// the corners were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    /// Range spanning two opposite corners
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        let (top, bottom) = if a.row <= b.row { (a, b) } else { (b, a) };
        let (left, right) = if a.col <= b.col { (a, b) } else { (b, a) };

        Self {
            start: CellAddress::with_absolute(
                top.row,
                left.col,
                top.row_absolute,
                left.col_absolute,
            ),
            end: CellAddress::with_absolute(
                bottom.row,
                right.col,
                bottom.row_absolute,
                right.col_absolute,
            ),
        }
    }

    /// Parse `A1:B10`; a lone address is a 1x1 range
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
            Some((_, end)) if end.contains(':') => Err(Error::InvalidRange(s.to_string())),
            Some((start, end)) => Ok(Self::new(CellAddress::parse(start)?, CellAddress::parse(end)?)),
        }
    }

    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Number of cells, without materializing them
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Addresses in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> {
        let (first_col, last_col) = (self.start.col, self.end.col);
        (self.start.row..=self.end.row)
            .flat_map(move |row| (first_col..=last_col).map(move |col| CellAddress::new(row, col)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
