use std::convert::Infallible;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unbalanced_bst::{Path, Tree, Value};

#[derive(Parser, Debug)]
#[command(
    name = "unbalanced-bst",
    about = "Build an unbalanced binary search tree and draw it"
)]
struct Cli {
    /// Values to insert, in order. Integers and text can't be mixed.
    #[arg(
        value_parser = parse_value,
        default_values_t = [4, 2, 3, 1, 6, 5, 7].map(Value::Int)
    )]
    values: Vec<Value>,

    /// Print the path to the node holding this value.
    #[arg(long, value_parser = parse_value)]
    find: Option<Value>,

    /// Print the value at this comma separated path, e.g. `right,left`.
    #[arg(long)]
    path: Option<Path>,

    /// Report misses instead of falling back to the root.
    #[arg(long)]
    strict: bool,

    /// Don't draw the tree.
    #[arg(long)]
    no_render: bool,
}

/// Goes through `FromStr` so integers come out as `Value::Int`. Clap would otherwise pick the
/// `From<&str>` conversion and read everything as text.
fn parse_value(s: &str) -> std::result::Result<Value, Infallible> {
    s.parse()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let tree = Tree::from_values(cli.values).context("failed to build tree")?;
    info!(len = tree.len(), height = tree.height(), "built tree");

    if !cli.no_render {
        for line in tree.render() {
            writeln!(out, "{line}")?;
        }
    }

    if let Some(value) = &cli.find {
        let node = if cli.strict {
            tree.get(value)
        } else {
            tree.find_value(value)
        };
        match node {
            Some(node) => writeln!(out, "{}", node.path())?,
            None => writeln!(out, "{value} not found")?,
        }
    }

    if let Some(path) = &cli.path {
        let node = if cli.strict {
            tree.get_path(path)
        } else {
            tree.find_path(path)
        };
        match node {
            Some(node) => writeln!(out, "{}", node.value())?,
            None => writeln!(out, "nothing at {path}")?,
        }
    }

    let min = tree.min_node().context("no minimum")?;
    let max = tree.max_node().context("no maximum")?;
    writeln!(out, "min: {}", min.value())?;
    writeln!(out, "max: {}", max.value())?;

    Ok(())
}
