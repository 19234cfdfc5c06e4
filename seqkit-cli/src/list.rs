use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A list of integers given on the command line as `1,2,3`.
///
/// An empty argument is the empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IntList(Vec<i64>);

impl IntList {
    pub(crate) fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl FromStr for IntList {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(IntList(Vec::new()));
        }
        s.split(',')
            .map(|part| part.trim().parse())
            .collect::<Result<Vec<_>, _>>()
            .map(IntList)
    }
}

impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&seqkit::iterables::to_display_string(self.as_slice()))
    }
}
