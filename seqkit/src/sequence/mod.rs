/// A sequence is an ordered, possibly lazy and possibly infinite collection
/// of items that can be traversed any number of times.
///
/// The [`Sequence`] trait is the single capability everything else is
/// built on; stored collections implement it directly and lazy views wrap
/// other sequences.
mod display;
mod iter;
mod traits;
mod variant;
mod view;

pub(crate) use display::{write_items, DisplaySequence, DisplaySlice};
pub use iter::ConcatItems;
pub use traits::{IntoItems, Sequence, SequenceExt};
pub use variant::{from_fn, FromFn};
pub use view::{Concat, Limit};
