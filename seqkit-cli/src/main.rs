mod combine;
mod demo;
mod inspect;
mod list;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// lists are given as comma-separated integers, such as `1,2,3`
#[derive(Subcommand)]
enum Commands {
    /// Concatenate lists into one.
    Concat(combine::Concat),
    /// Count how often a value occurs in a list.
    Frequency(inspect::Frequency),
    /// Split a list into chunks of a fixed size.
    ///
    /// The last chunk holds whatever is left over.
    Partition(combine::Partition),
    /// Print the first item of a list.
    First(inspect::First),
    /// Print the last item of a list.
    Last(inspect::Last),
    /// Check whether two lists hold the same items in the same order.
    Equal(inspect::Equal),
    /// Keep at most a number of items from the front of a list.
    Limit(combine::Limit),
    /// Print the only item of a list; fails unless there is exactly one.
    Only(inspect::Only),
    /// Print the number of items in a list.
    Size(inspect::Size),
    /// Print the item at an index.
    Get(inspect::Get),
    /// Print a list in reverse order.
    Reverse(combine::Reverse),
    /// Walk through every operation on a fixed example.
    Demo(demo::Demo),
}

impl Commands {
    fn run(&self) -> anyhow::Result<String> {
        match self {
            Commands::Concat(concat) => concat.run(),
            Commands::Frequency(frequency) => frequency.run(),
            Commands::Partition(partition) => partition.run(),
            Commands::First(first) => first.run(),
            Commands::Last(last) => last.run(),
            Commands::Equal(equal) => equal.run(),
            Commands::Limit(limit) => limit.run(),
            Commands::Only(only) => only.run(),
            Commands::Size(size) => size.run(),
            Commands::Get(get) => get.run(),
            Commands::Reverse(reverse) => reverse.run(),
            Commands::Demo(demo) => demo.run(),
        }
    }
}

// stdout is reserved for results, so logs go to stderr
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let output = cli.command.run()?;
    tracing::debug!(bytes = output.len(), "command finished");
    println!("{}", output);
    Ok(())
}
