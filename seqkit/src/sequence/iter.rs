use super::traits::IntoItems;

/// An iterator over the items of a concatenation.
///
/// The next part is only taken from the outer cursor once the current one
/// is exhausted.
pub struct ConcatItems<I, P>
where
    P: IntoItems,
{
    parts: I,
    current: Option<P::IntoItems>,
}

impl<I, P> ConcatItems<I, P>
where
    P: IntoItems,
{
    pub(crate) fn new(parts: I) -> Self {
        Self {
            parts,
            current: None,
        }
    }
}

impl<I, P> Iterator for ConcatItems<I, P>
where
    I: Iterator<Item = P>,
    P: IntoItems,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // if there are any more items in the current part,
            // supply those
            if let Some(current) = &mut self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                } else {
                    self.current = None;
                }
            }
            // if not, move on to the next part; no more parts means we're done
            let part = self.parts.next()?;
            self.current = Some(part.into_items());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // later parts may be infinite, and we can't know without starting
        // them, so the current part only gives a lower bound
        let (lower, upper) = match &self.current {
            Some(current) => current.size_hint(),
            None => (0, Some(0)),
        };
        if self.parts.size_hint().1 == Some(0) {
            (lower, upper)
        } else {
            (lower, None)
        }
    }
}
