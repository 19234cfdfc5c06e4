use std::fmt;

use super::traits::Sequence;

/// Write items as `[a, b, c]`.
pub(crate) fn write_items<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

/// Displays a traversal of a sequence.
pub(crate) struct DisplaySequence<S>(pub(crate) S);

impl<S> fmt::Display for DisplaySequence<S>
where
    S: Sequence,
    S::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.0.items())
    }
}

/// Displays a borrowed slice, used for the chunks of a list partition.
pub(crate) struct DisplaySlice<'a, T>(pub(crate) &'a [T]);

impl<T> fmt::Display for DisplaySlice<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, self.0)
    }
}
