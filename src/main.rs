use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seqalg::{comparison, minmax, modifying, non_modifying, set, RotateStrategy};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seqalg", about = "Run sequence algorithms over comma-separated integers")]
struct Cli {
    /// Log at debug level unless SEQALG_LOG or RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Seed for shuffle and sample (random when omitted).
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Separator used when printing sequences.
    #[arg(long, global = true, default_value = ",")]
    separator: String,
    /// Print results as JSON.
    #[cfg(feature = "serde")]
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rotate left so the element at `mid` comes first.
    Rotate {
        /// Input sequence, e.g. `1,2,3,4,5`.
        #[arg(allow_hyphen_values = true)]
        values: String,
        /// Index that becomes the new front.
        #[arg(long)]
        mid: usize,
        /// forward-swap, reversal or cycle-leader (chosen by length if omitted).
        #[arg(long)]
        strategy: Option<RotateStrategy>,
    },
    /// Shift elements left or right, dropping those pushed off the end.
    Shift {
        /// Input sequence.
        #[arg(allow_hyphen_values = true)]
        values: String,
        /// Number of places to shift.
        #[arg(long, default_value_t = 1)]
        by: usize,
        /// Shift direction.
        #[arg(long, value_enum, default_value_t = Direction::Left)]
        direction: Direction,
    },
    /// Collapse runs of equal neighbours.
    Unique {
        /// Input sequence.
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Remove every occurrence of a value.
    Remove {
        /// Input sequence.
        #[arg(allow_hyphen_values = true)]
        values: String,
        /// Value to remove.
        #[arg(long, allow_hyphen_values = true)]
        value: i64,
    },
    /// Reverse the sequence.
    Reverse {
        /// Input sequence.
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Locate the first occurrence of a subsequence.
    Search {
        /// Sequence to search in.
        #[arg(allow_hyphen_values = true)]
        haystack: String,
        /// Subsequence to look for.
        #[arg(allow_hyphen_values = true)]
        needle: String,
    },
    /// Locate the last occurrence of a subsequence.
    FindEnd {
        /// Sequence to search in.
        #[arg(allow_hyphen_values = true)]
        haystack: String,
        /// Subsequence to look for.
        #[arg(allow_hyphen_values = true)]
        needle: String,
    },
    /// Report the smallest and largest values and their positions.
    Minmax {
        /// Input sequence.
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Compare two sequences lexicographically.
    Compare {
        /// First sequence.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second sequence.
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Combine two sorted sequences.
    Set {
        /// Operation to apply.
        #[arg(value_enum)]
        op: SetOpArg,
        /// First sorted sequence.
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second sorted sequence.
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Randomly permute the sequence.
    Shuffle {
        /// Input sequence.
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Pick elements uniformly at random, keeping their order.
    Sample {
        /// Input sequence.
        #[arg(allow_hyphen_values = true)]
        values: String,
        /// Number of elements to pick.
        #[arg(long)]
        count: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SetOpArg {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
    Merge,
    Includes,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
struct RunConfig {
    seed: Option<u64>,
    separator: String,
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    json: bool,
}

impl RunConfig {
    fn new() -> Self {
        Self {
            seed: None,
            separator: ",".to_string(),
            json: false,
        }
    }

    fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RunConfig::new()
        .with_seed(cli.seed)
        .with_separator(cli.separator.clone());
    #[cfg(feature = "serde")]
    let config = config.with_json(cli.json);
    debug!(?config, "starting");

    run(cli.command, &config)
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SEQALG_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, config: &RunConfig) -> Result<()> {
    match command {
        Commands::Rotate {
            values,
            mid,
            strategy,
        } => {
            let mut v = parse_values(&values)?;
            let strategy = strategy.unwrap_or_else(|| RotateStrategy::for_len(v.len()));
            modifying::rotate_with(&mut v, mid, strategy)
                .with_context(|| format!("cannot rotate {} elements at {}", v.len(), mid))?;
            print_values(config, &v)
        }
        Commands::Shift {
            values,
            by,
            direction,
        } => {
            let mut v = parse_values(&values)?;
            let kept = match direction {
                Direction::Left => modifying::shift_left(&mut v, by),
                Direction::Right => modifying::shift_right(&mut v, by),
            };
            print_values(config, &v[kept])
        }
        Commands::Unique { values } => {
            let mut v = parse_values(&values)?;
            let len = modifying::unique(&mut v);
            print_values(config, &v[..len])
        }
        Commands::Remove { values, value } => {
            let mut v = parse_values(&values)?;
            let len = modifying::remove(&mut v, &value);
            print_values(config, &v[..len])
        }
        Commands::Reverse { values } => {
            let mut v = parse_values(&values)?;
            modifying::reverse(&mut v);
            print_values(config, &v)
        }
        Commands::Search { haystack, needle } => {
            let hay = parse_values(&haystack)?;
            let needle = parse_values(&needle)?;
            print_position(config, non_modifying::search(&hay, &needle))
        }
        Commands::FindEnd { haystack, needle } => {
            let hay = parse_values(&haystack)?;
            let needle = parse_values(&needle)?;
            print_position(config, non_modifying::find_end(&hay, &needle))
        }
        Commands::Minmax { values } => {
            let v = parse_values(&values)?;
            let Some(positions) = minmax::minmax_element(&v) else {
                bail!("minmax needs at least one value");
            };
            let extremes = positions.map(|i| v[i]);
            if emit_json(config, &(positions, extremes))? {
                return Ok(());
            }
            println!(
                "min={} at {}\tmax={} at {}",
                extremes.min, positions.min, extremes.max, positions.max
            );
            Ok(())
        }
        Commands::Compare { a, b } => {
            let a = parse_values(&a)?;
            let b = parse_values(&b)?;
            let ordering = comparison::lexicographical_compare_three_way(&a, &b);
            let mismatch = non_modifying::mismatch(&a, &b);
            println!("{ordering:?}\tfirst difference at {mismatch}");
            Ok(())
        }
        Commands::Set { op, a, b } => {
            let a = parse_sorted(&a, "first")?;
            let b = parse_sorted(&b, "second")?;
            let mut out = Vec::new();
            match op {
                SetOpArg::Union => set::set_union(a, b, &mut out)?,
                SetOpArg::Intersection => set::set_intersection(a, b, &mut out)?,
                SetOpArg::Difference => set::set_difference(a, b, &mut out)?,
                SetOpArg::SymmetricDifference => set::set_symmetric_difference(a, b, &mut out)?,
                SetOpArg::Merge => set::merge(a, b, &mut out)?,
                SetOpArg::Includes => {
                    println!("{}", set::includes(&a, &b));
                    return Ok(());
                }
            };
            print_values(config, &out)
        }
        Commands::Shuffle { values } => {
            let mut v = parse_values(&values)?;
            modifying::shuffle(&mut v, &mut config.rng());
            print_values(config, &v)
        }
        Commands::Sample { values, count } => {
            let v = parse_values(&values)?;
            let mut out = Vec::with_capacity(count.min(v.len()));
            modifying::sample(&v, count, &mut out, &mut config.rng())?;
            print_values(config, &out)
        }
    }
}

fn parse_values(text: &str) -> Result<Vec<i64>> {
    text.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .enumerate()
        .map(|(idx, field)| {
            field
                .parse::<i64>()
                .with_context(|| format!("value {} (`{}`) is not an integer", idx + 1, field))
        })
        .collect()
}

fn parse_sorted(text: &str, which: &str) -> Result<Vec<i64>> {
    let values = parse_values(text)?;
    if let Some(idx) = non_modifying::adjacent_find_by(&values, |a, b| b < a) {
        bail!(
            "{} sequence is not sorted: {} is followed by {}",
            which,
            values[idx],
            values[idx + 1]
        );
    }
    Ok(values)
}

fn print_values(config: &RunConfig, values: &[i64]) -> Result<()> {
    if emit_json(config, &values)? {
        return Ok(());
    }
    let rendered: Vec<String> = values.iter().map(i64::to_string).collect();
    println!("{}", rendered.join(config.separator.as_str()));
    Ok(())
}

fn print_position(config: &RunConfig, found: Option<std::ops::Range<usize>>) -> Result<()> {
    if emit_json(config, &found)? {
        return Ok(());
    }
    match found {
        Some(range) => println!("[{}, {})", range.start, range.end),
        None => println!("not found"),
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn emit_json<T: serde::Serialize>(config: &RunConfig, value: &T) -> Result<bool> {
    if !config.json {
        return Ok(false);
    }
    println!(
        "{}",
        serde_json::to_string(value).context("failed to render JSON output")?
    );
    Ok(true)
}

#[cfg(not(feature = "serde"))]
fn emit_json<T>(_config: &RunConfig, _value: &T) -> Result<bool> {
    Ok(false)
}
