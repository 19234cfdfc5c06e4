use clap::Parser;
use seqkit::iterables;

use crate::list::IntList;

#[derive(Debug, Parser)]
pub(crate) struct Frequency {
    /// list to search
    #[arg(allow_hyphen_values = true)]
    list: IntList,
    /// value to count
    #[arg(allow_hyphen_values = true)]
    value: i64,
}

impl Frequency {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(iterables::frequency(self.list.as_slice(), &self.value).to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct First {
    #[arg(allow_hyphen_values = true)]
    list: IntList,
    /// value to print if the list is empty
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    default: i64,
}

impl First {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(iterables::get_first(self.list.as_slice(), self.default).to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Last {
    #[arg(allow_hyphen_values = true)]
    list: IntList,
    /// value to print if the list is empty.
    /// Without it an empty list is an error.
    #[arg(long, allow_hyphen_values = true)]
    default: Option<i64>,
}

impl Last {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        let last = match self.default {
            Some(default) => iterables::get_last_or(self.list.as_slice(), default),
            None => iterables::get_last(self.list.as_slice())?,
        };
        Ok(last.to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Equal {
    #[arg(allow_hyphen_values = true)]
    a: IntList,
    #[arg(allow_hyphen_values = true)]
    b: IntList,
}

impl Equal {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(iterables::elements_equal(self.a.as_slice(), self.b.as_slice()).to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Only {
    /// list that should hold exactly one item
    #[arg(allow_hyphen_values = true)]
    list: IntList,
}

impl Only {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(iterables::get_only_element(self.list.as_slice())?.to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Size {
    #[arg(allow_hyphen_values = true)]
    list: IntList,
}

impl Size {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(iterables::size(self.list.as_slice()).to_string())
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Get {
    #[arg(allow_hyphen_values = true)]
    list: IntList,
    /// zero-based position of the item
    index: usize,
}

impl Get {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        Ok(iterables::get(self.list.as_slice(), self.index)?.to_string())
    }
}
