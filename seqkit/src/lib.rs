//! Combinators over restartable sequences.
//!
//! A [`Sequence`] hands out a fresh cursor every time it is traversed. The
//! functions in [`iterables`] combine, slice, inspect and materialize
//! sequences; [`lists`] adds views over slices. Lazy views such as
//! [`Concat`] and [`Limit`] are sequences themselves, so they can be
//! traversed again and nested.
//!
//! ```
//! use seqkit::iterables::{concat, partition, to_display_string};
//!
//! let joined = concat([vec![1, 2, 3], vec![4, 5, 6]]);
//! assert_eq!(to_display_string(&joined), "[1, 2, 3, 4, 5, 6]");
//!
//! let parts = partition(&joined, 2).unwrap();
//! assert_eq!(parts.to_string(), "[[1, 2], [3, 4], [5, 6]]");
//! ```

mod collection;
pub mod creation;
pub mod error;
pub mod iterables;
pub mod lists;
pub mod multiset;
mod partition;
mod sequence;

pub use collection::MutableCollection;
pub use error::{Error, Result};
pub use multiset::Multiset;
pub use partition::{Chunk, ChunkItems, Partition, PartitionItems};
pub use sequence::{
    from_fn, Concat, ConcatItems, FromFn, IntoItems, Limit, Sequence, SequenceExt,
};
