//! Columnar transposition
//!
//! Plaintext letters (case folded, everything else dropped) are written
//! row-major into a grid of `columns` columns and read back column by column
//! in the key's read order. With `n` letters the grid has
//! `rows = ceil(n / columns)`; the last `columns * rows - n` columns are one
//! row shorter.

use serde::{Deserialize, Serialize};

use super::normalize::letters_only;
use crate::level::LevelError;

/// Column read order for a transposition grid.
///
/// `order[k]` is the grid column emitted k-th. Always a permutation of
/// `0..order.len()` with at least one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ColumnKey {
    order: Vec<usize>,
}

impl ColumnKey {
    /// Plain columnar key: read columns left to right (0 is treated as 1)
    pub fn columns(columns: usize) -> Self {
        Self {
            order: (0..columns.max(1)).collect(),
        }
    }

    /// Explicit read order; must be a permutation of `0..n`
    pub fn permutation(order: Vec<usize>) -> Result<Self, LevelError> {
        if order.is_empty() {
            return Err(LevelError::InvalidParameters(
                "transposition key needs at least one column".into(),
            ));
        }
        let mut seen = vec![false; order.len()];
        for &col in &order {
            match seen.get_mut(col) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(LevelError::InvalidParameters(format!(
                        "transposition order {:?} is not a permutation",
                        order
                    )));
                }
            }
        }
        Ok(Self { order })
    }

    /// Keyword key: columns are read in alphabetical order of the keyword's
    /// letters, ties broken left to right ("zebra" reads a, b, e, r, z).
    pub fn from_keyword(keyword: &str) -> Result<Self, LevelError> {
        let letters = letters_only(keyword);
        if letters.is_empty() {
            return Err(LevelError::InvalidParameters(format!(
                "transposition keyword {:?} has no letters",
                keyword
            )));
        }
        let mut order: Vec<usize> = (0..letters.len()).collect();
        let bytes = letters.as_bytes();
        order.sort_by_key(|&i| bytes[i]);
        Ok(Self { order })
    }

    pub fn column_count(&self) -> usize {
        self.order.len()
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// True when columns are read left to right
    pub fn is_sequential(&self) -> bool {
        self.order.iter().enumerate().all(|(i, &c)| i == c)
    }
}

impl TryFrom<Vec<usize>> for ColumnKey {
    type Error = LevelError;

    fn try_from(order: Vec<usize>) -> Result<Self, Self::Error> {
        Self::permutation(order)
    }
}

impl From<ColumnKey> for Vec<usize> {
    fn from(key: ColumnKey) -> Self {
        key.order
    }
}

/// Grid shape for `len` letters in `columns` columns: (rows, short columns)
pub fn grid_shape(len: usize, columns: usize) -> (usize, usize) {
    let rows = len.div_ceil(columns);
    (rows, columns * rows - len)
}

pub fn encode(text: &str, key: &ColumnKey) -> String {
    let letters: Vec<char> = letters_only(text).chars().collect();
    let columns = key.column_count();

    key.order
        .iter()
        .flat_map(|&col| letters.iter().skip(col).step_by(columns))
        .collect()
}

pub fn decode(text: &str, key: &ColumnKey) -> String {
    let letters: Vec<char> = letters_only(text).chars().collect();
    let columns = key.column_count();
    let (rows, short_cols) = grid_shape(letters.len(), columns);

    // Slice the flat ciphertext back into grid columns
    let mut grid: Vec<&[char]> = vec![&letters[..0]; columns];
    let mut idx = 0;
    for &col in &key.order {
        let len = if col >= columns - short_cols { rows - 1 } else { rows };
        grid[col] = &letters[idx..idx + len];
        idx += len;
    }

    let mut out = String::with_capacity(letters.len());
    for row in 0..rows {
        for column in &grid {
            if let Some(&ch) = column.get(row) {
                out.push(ch);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transposition_hello_four_columns() {
        let key = ColumnKey::columns(4);
        assert_eq!(grid_shape(5, 4), (2, 3));
        assert_eq!(encode("hello", &key), "hoell");
        assert_eq!(decode("hoell", &key), "hello");
    }

    #[test]
    fn test_transposition_drops_non_letters_and_folds_case() {
        let key = ColumnKey::columns(4);
        assert_eq!(encode("This is a steganogram", &key), "titnahseomiaggssar");
        assert_eq!(decode("TITN-AHSE omiagg ssar", &key), "thisisasteganogram");
    }

    #[test]
    fn test_transposition_exact_grid() {
        let key = ColumnKey::columns(3);
        assert_eq!(encode("abcdef", &key), "adbecf");
        assert_eq!(decode("adbecf", &key), "abcdef");
    }

    #[test]
    fn test_transposition_zero_columns_is_one() {
        let key = ColumnKey::columns(0);
        assert_eq!(key.column_count(), 1);
        assert_eq!(encode("Abc", &key), "abc");
    }

    #[test]
    fn test_transposition_more_columns_than_letters() {
        let key = ColumnKey::columns(8);
        assert_eq!(encode("abc", &key), "abc");
        assert_eq!(decode("abc", &key), "abc");
    }

    #[test]
    fn test_keyword_order() {
        let key = ColumnKey::from_keyword("zebra").unwrap();
        assert_eq!(key.order(), &[4, 2, 1, 3, 0]);
        assert!(!key.is_sequential());

        // grid: h e l l o / w o r l d
        assert_eq!(encode("hello world", &key), "odlreollhw");
        assert_eq!(decode("odlreollhw", &key), "helloworld");

        // short columns follow grid position, not read order
        assert_eq!(encode("hello", &ColumnKey::from_keyword("cab").unwrap()), "eolhl");
        assert_eq!(decode("eolhl", &ColumnKey::from_keyword("cab").unwrap()), "hello");
    }

    #[test]
    fn test_keyword_ties_are_stable() {
        let key = ColumnKey::from_keyword("bab").unwrap();
        assert_eq!(key.order(), &[1, 0, 2]);
        assert!(ColumnKey::from_keyword("123").is_err());
    }

    #[test]
    fn test_permutation_validation() {
        assert!(ColumnKey::permutation(vec![2, 0, 1]).is_ok());
        assert!(ColumnKey::permutation(vec![]).is_err());
        assert!(ColumnKey::permutation(vec![0, 0, 1]).is_err());
        assert!(ColumnKey::permutation(vec![0, 3]).is_err());
    }

    #[test]
    fn test_column_key_serde_validates() {
        let key: ColumnKey = serde_json::from_str("[1,0,2]").unwrap();
        assert_eq!(key.order(), &[1, 0, 2]);
        assert!(serde_json::from_str::<ColumnKey>("[1,1]").is_err());
        assert_eq!(serde_json::to_string(&ColumnKey::columns(3)).unwrap(), "[0,1,2]");
    }

    fn arb_key() -> impl Strategy<Value = ColumnKey> {
        (1usize..9)
            .prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
            .prop_map(|order| ColumnKey::permutation(order).unwrap())
    }

    proptest! {
        #[test]
        fn prop_transposition_round_trip(s in "[A-Za-z ]{0,48}", key in arb_key()) {
            prop_assert_eq!(decode(&encode(&s, &key), &key), letters_only(&s));
        }

        #[test]
        fn prop_transposition_preserves_letters(s in "[a-z]{0,48}", cols in 1usize..10) {
            let key = ColumnKey::columns(cols);
            let mut sorted_in: Vec<char> = s.chars().collect();
            let mut sorted_out: Vec<char> = encode(&s, &key).chars().collect();
            sorted_in.sort_unstable();
            sorted_out.sort_unstable();
            prop_assert_eq!(sorted_in, sorted_out);
        }
    }
}
