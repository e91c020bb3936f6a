use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use penelope::accum::{Accumulator, Collect, Finish};
use penelope::cursor::{over, Cursor};

#[derive(Parser, Debug)]
#[command(name = "penelope", about = "Lazy pipeline toolkit for line-oriented numeric streams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a combinator pipeline to a numeric input file.
    Pipeline {
        /// Input file (one integer per line).
        input: PathBuf,
        /// Comma-separated stages: even, odd, positive, square, double, negate, abs.
        #[arg(long, default_value = "even,square")]
        ops: String,
        /// Discard this many elements before the first output.
        #[arg(long)]
        skip: Option<usize>,
        /// Stop after this many elements.
        #[arg(long)]
        take: Option<usize>,
    },
    /// Chunk the input into fixed-size batches.
    Batch {
        /// Input file (one integer per line).
        input: PathBuf,
        /// Elements per batch.
        #[arg(long, default_value_t = 8)]
        size: usize,
    },
    /// Drop duplicate values, keeping first occurrences.
    Dedupe {
        /// Input file (one integer per line).
        input: PathBuf,
    },
    /// Pair two inputs in lockstep, ending with the shorter.
    Zip {
        /// Left input file (one integer per line).
        left: PathBuf,
        /// Right input file (one integer per line).
        right: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pipeline {
            input,
            ops,
            skip,
            take,
        } => run_pipeline(input, &ops, skip, take)?,
        Commands::Batch { input, size } => run_batch(input, size)?,
        Commands::Dedupe { input } => run_dedupe(input)?,
        Commands::Zip { left, right } => run_zip(left, right)?,
    }

    Ok(())
}

fn run_pipeline(input: PathBuf, ops: &str, skip: Option<usize>, take: Option<usize>) -> Result<()> {
    let values = read_numbers(&input)?;
    info!(count = values.len(), "loaded input");

    let mut cursor: Box<dyn Cursor<Item = i64>> = Box::new(over(values));
    for op in ops.split(',').map(str::trim).filter(|op| !op.is_empty()) {
        cursor = stage(cursor, op)?;
        debug!(stage = op, "added pipeline stage");
    }
    if let Some(count) = skip {
        cursor = Box::new(cursor.skip(count));
    }
    if let Some(count) = take {
        cursor = Box::new(cursor.take(count));
    }

    let mut ahead = cursor.look_ahead();
    if !ahead.has_next() {
        info!("pipeline produced no output");
        return Ok(());
    }

    let mut produced = 0usize;
    for value in ahead.into_iter() {
        produced += 1;
        println!("{value}");
    }
    info!(produced, "pipeline finished");

    Ok(())
}

fn stage(cursor: Box<dyn Cursor<Item = i64>>, op: &str) -> Result<Box<dyn Cursor<Item = i64>>> {
    let staged: Box<dyn Cursor<Item = i64>> = match op {
        "even" => Box::new(cursor.filter(|value| value % 2 == 0)),
        "odd" => Box::new(cursor.filter(|value| value % 2 != 0)),
        "positive" => Box::new(cursor.filter(|value| *value > 0)),
        "square" => Box::new(cursor.map(|value| value * value)),
        "double" => Box::new(cursor.map(|value| value * 2)),
        "negate" => Box::new(cursor.map(|value| -value)),
        "abs" => Box::new(cursor.map(i64::abs)),
        other => bail!("unknown pipeline stage `{other}`"),
    };
    Ok(staged)
}

fn run_batch(input: PathBuf, size: usize) -> Result<()> {
    if size == 0 {
        bail!("batch size must be non-zero");
    }
    let values = read_numbers(&input)?;
    info!(count = values.len(), size, "batching input");

    let mut batches = over(values).group_vec(size);
    let mut index = 0usize;
    while let Some(batch) = batches.next() {
        let row: Vec<String> = batch.iter().map(i64::to_string).collect();
        println!("batch {}\t{}", index, row.join("\t"));
        index += 1;
    }

    Ok(())
}

fn run_dedupe(input: PathBuf) -> Result<()> {
    let values = read_numbers(&input)?;
    let total = values.len();

    let mut unique = Collect::<Vec<i64>, i64>::new().normalizing();
    over(values).drain_into(&mut unique);
    let kept = unique.finish();
    info!(total, kept = kept.len(), "deduplicated input");

    for value in kept {
        println!("{value}");
    }

    Ok(())
}

fn run_zip(left: PathBuf, right: PathBuf) -> Result<()> {
    let left_values = read_numbers(&left)?;
    let right_values = read_numbers(&right)?;

    let mut pairs = over(left_values).zip(over(right_values));
    while let Some((a, b)) = pairs.next() {
        println!("{a}\t{b}");
    }

    Ok(())
}

fn read_numbers(path: &Path) -> Result<Vec<i64>> {
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
    );

    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: i64 = trimmed
            .parse()
            .with_context(|| format!("invalid integer on line {} of {}", index + 1, path.display()))?;
        values.push(value);
    }

    Ok(values)
}
