use std::fmt::Write;

use clap::Parser;
use seqkit::iterables::{
    add_all_into, concat, contains_value, elements_equal, frequency, get, get_first, get_last,
    get_only_element, is_empty, limit, partition, remove_all_matching, retain_all_matching, size,
    to_array, to_display_string,
};
use seqkit::lists::{partition_list, reverse};

#[derive(Debug, Parser)]
pub(crate) struct Demo {}

impl Demo {
    pub(crate) fn run(&self) -> anyhow::Result<String> {
        let mut out = String::new();
        iterables(&mut out)?;
        lists(&mut out)?;
        Ok(out.trim_end().to_string())
    }
}

fn iterables(out: &mut String) -> anyhow::Result<()> {
    let concatenated = concat([vec![1, 2, 3], vec![4, 5, 6]]);
    writeln!(out, "concat: {}", concatenated)?;
    writeln!(out, "frequency of 1: {}", frequency(&concatenated, &1))?;
    writeln!(out, "partition by 2: {}", partition(&concatenated, 2)?)?;
    writeln!(out, "first: {}", get_first(&concatenated, 0))?;
    writeln!(out, "last: {}", get_last(&concatenated)?)?;

    let other = concat([vec![4, 5, 6], vec![1, 2, 3]]);
    writeln!(out, "other: {}", other)?;
    writeln!(
        out,
        "elements equal: {}",
        elements_equal(&concatenated, &other)
    )?;

    let limited = limit(&concatenated, 1);
    writeln!(out, "limit 1: {}", limited)?;
    writeln!(out, "only element: {}", get_only_element(&limited)?)?;

    let mut numbers = vec![-1, 0];
    add_all_into(&mut numbers, &concatenated);
    writeln!(out, "add all: {}", to_display_string(&numbers))?;
    writeln!(out, "contains 1: {}", contains_value(&concatenated, &1))?;
    let removed = remove_all_matching(&mut numbers, [6, 9]);
    writeln!(
        out,
        "remove [6, 9]: {} {}",
        removed,
        to_display_string(&numbers)
    )?;

    let mut numbers = vec![-1, 0];
    let retained = retain_all_matching(&mut numbers, [0]);
    writeln!(
        out,
        "retain [0]: {} {}",
        retained,
        to_display_string(&numbers)
    )?;

    writeln!(out, "size: {}", size(&concatenated))?;
    let array = to_array(&concatenated)
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "array: {}", array)?;
    writeln!(out, "empty list is empty: {}", is_empty(Vec::<i32>::new()))?;
    writeln!(out, "at index 1: {}", get(&concatenated, 1)?)?;
    Ok(())
}

fn lists(out: &mut String) -> anyhow::Result<()> {
    let count_up = [1, 2, 3, 4, 5];
    writeln!(out, "reverse: {}", reverse(&count_up))?;
    writeln!(out, "list partition by 2: {}", partition_list(&count_up, 2)?)?;
    Ok(())
}
