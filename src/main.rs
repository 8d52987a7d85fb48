//! BrainHAL CLI: an interactive conversation with a (possibly persisted) brain.
//!
//! Thin wrapper over the `brainhal` library crate.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use brainhal::{
    Brain, BrainConfig, DEFAULT_ORDER, GenerationLimit, WordLists, load_swap_file, load_word_list,
};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// BrainHAL: a conversational bot built on bidirectional order-N Markov tries.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Brain file to load and save. Without it the brain lives in memory.
    #[arg(long)]
    brain: Option<PathBuf>,

    /// Model order (context length). Must match an existing brain file.
    #[arg(long, default_value_t = DEFAULT_ORDER, value_parser = clap::value_parser!(u8).range(1..))]
    order: u8,

    /// PRNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Training file: one phrase per line, '#' comments.
    #[arg(long)]
    train: Option<PathBuf>,

    /// Directory with word lists (brainhal.ban, .aux, .swp) replacing the brain's own.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Reply search budget in milliseconds.
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// Maximum reply candidates per input (0 = no limit).
    #[arg(long, default_value_t = 0)]
    max_iterations: usize,

    /// Answer without learning from the input.
    #[arg(long)]
    no_learn: bool,
}

impl Args {
    fn limit(&self) -> GenerationLimit {
        match (self.timeout_ms, self.max_iterations) {
            (ms, 0) => GenerationLimit::Timeout(Duration::from_millis(ms)),
            (0, n) => GenerationLimit::Iterations(n),
            (ms, n) => GenerationLimit::Both {
                timeout: Duration::from_millis(ms),
                max_iterations: n,
            },
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal());
    Registry::default().with(filter).with(fmt_layer).init();
}

/// Replace whichever lists have a file in `dir`.
fn load_word_lists(dir: &Path, lists: &mut WordLists) -> io::Result<()> {
    let ban = dir.join("brainhal.ban");
    if ban.exists() {
        lists.banned = load_word_list(&ban)?.into_iter().collect();
    }
    let aux = dir.join("brainhal.aux");
    if aux.exists() {
        lists.auxiliary = load_word_list(&aux)?.into_iter().collect();
    }
    let swp = dir.join("brainhal.swp");
    if swp.exists() {
        lists.swap = load_swap_file(&swp)?;
    }
    info!(
        dir = %dir.display(),
        banned = lists.banned.len(),
        auxiliary = lists.auxiliary.len(),
        swaps = lists.swap.len(),
        "word lists loaded"
    );
    Ok(())
}

fn main() -> Result<(), brainhal::Error> {
    let args = Args::parse();
    init_tracing();

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let config = BrainConfig {
        path: args.brain.clone(),
        order: args.order,
        limit: args.limit(),
    };
    let mut brain = Brain::open(config, rng)?;

    if let Some(dir) = &args.data_dir {
        load_word_lists(dir, brain.word_lists_mut())?;
    }
    if let Some(path) = &args.train {
        brain.train_file(path)?;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = if args.no_learn {
            brain.reply_nolearn(trimmed)
        } else {
            brain.reply(trimmed)
        };
        writeln!(stdout, "HAL: {reply}")?;
        stdout.flush()?;
    }

    brain.close()
}
