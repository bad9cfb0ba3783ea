use anyhow::{Context, Result};
use clap::Parser;

use seqre::{Pattern, ValueCheck};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern over numeric comparator atoms, e.g. "^(<3 >2+?) (>2) =5+ .* %2$"
    pattern: String,

    /// Integer sequence to match against
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let pattern = Pattern::compile(&args.pattern, ValueCheck::parse)
        .with_context(|| format!("cannot compile pattern {:?}", args.pattern))?;

    let mut matcher = pattern.matcher(&args.values, |check, value| check.check(*value));
    if !matcher.matches() {
        println!("no match");
        std::process::exit(1);
    }

    let result = matcher.result().context("match result missing")?;
    for id in 0..=pattern.group_count() {
        match result.span(id) {
            Some((start, end)) => {
                println!("group[{id}] = {:?} at {start}..{end}", result.group(id));
            }
            None => println!("group[{id}] = (no capture)"),
        }
    }
    Ok(())
}
