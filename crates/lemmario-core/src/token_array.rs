//! Kolumnowa tablica list tokenów.
//!
//! Układ jak w kolumnie listowej Arrow: jeden płaski bufor wartości
//! i tablica offsetów, gdzie wiersz `i` to `values[offsets[i]..offsets[i + 1]]`.
//! Niezmiennik: `offsets.len() == len() + 1`, offsety niemalejące,
//! ostatni równy `values.len()`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct TokenArray {
    offsets: Vec<usize>,
    values: Vec<String>,
}

impl Default for TokenArray {
    fn default() -> Self {
        TokenArray {
            offsets: vec![0],
            values: Vec::new(),
        }
    }
}

impl TokenArray {
    pub fn new() -> Self {
        TokenArray::default()
    }

    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut array = TokenArray::new();
        for row in rows {
            array.push_row(row);
        }
        array
    }

    pub fn push_row<R, S>(&mut self, row: R)
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(row.into_iter().map(Into::into));
        self.offsets.push(self.values.len());
    }

    /// Liczba wierszy.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Łączna liczba tokenów we wszystkich wierszach.
    pub fn total_tokens(&self) -> usize {
        self.values.len()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        if index >= self.len() {
            return None;
        }
        Some(&self.values[self.offsets[index]..self.offsets[index + 1]])
    }

    pub fn rows(&self) -> Rows<'_> {
        Rows {
            array: self,
            next: 0,
        }
    }

    /// Kopia wierszy jako zwykłe wektory.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows().map(<[String]>::to_vec).collect()
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

pub struct Rows<'a> {
    array: &'a TokenArray,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [String];

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.array.row(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl<R, S> FromIterator<R> for TokenArray
where
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        TokenArray::from_rows(iter)
    }
}

impl From<Vec<Vec<String>>> for TokenArray {
    fn from(rows: Vec<Vec<String>>) -> Self {
        TokenArray::from_rows(rows)
    }
}

impl From<TokenArray> for Vec<Vec<String>> {
    fn from(array: TokenArray) -> Self {
        array.to_rows()
    }
}
