use clap::Parser;
use seqkit::{iterables, lists};

use crate::list::IntList;

#[derive(Debug, Parser)]
pub(crate) struct Concat {
    /// lists to concatenate, in order
    #[arg(allow_hyphen_values = true)]
    lists: Vec<IntList>,
}

impl Concat {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        let parts = self.lists.iter().map(IntList::as_slice).collect::<Vec<_>>();
        let joined = iterables::concat(parts);
        Ok(joined.to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Partition {
    /// list to split
    #[arg(allow_hyphen_values = true)]
    list: IntList,
    /// number of items per chunk
    size: usize,
}

impl Partition {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        let parts = iterables::partition(self.list.as_slice(), self.size)?;
        Ok(parts.to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Limit {
    /// list to cut short
    #[arg(allow_hyphen_values = true)]
    list: IntList,
    /// maximum number of items to keep
    max: usize,
}

impl Limit {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(iterables::limit(self.list.as_slice(), self.max).to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Reverse {
    /// list to reverse
    #[arg(allow_hyphen_values = true)]
    list: IntList,
}

impl Reverse {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(lists::reverse(self.list.as_slice()).to_string())
    }
}
