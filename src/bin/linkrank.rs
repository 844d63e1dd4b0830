// src/bin/linkrank.rs
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use linkrank_core::config::RankConfig;
use linkrank_core::crawl;
use linkrank_core::rank::{iterate_pagerank_run, sample_pagerank};
use linkrank_core::reporting;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank over a directory of hyperlinked HTML pages")]
struct Cli {
    /// Directory containing the HTML corpus
    corpus: PathBuf,

    /// Damping factor in [0, 1]
    #[arg(long)]
    damping: Option<f64>,

    /// Number of random-walk samples
    #[arg(long)]
    samples: Option<usize>,

    /// Seed for the sampler's RNG (for reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Print crawl statistics to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RankConfig::load(Path::new("."))?;
    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    let corpus = crawl::crawl(&cli.corpus)?;
    if cli.verbose {
        eprintln!(
            "crawled {} pages from {}",
            corpus.len(),
            cli.corpus.display()
        );
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sampled = sample_pagerank(&corpus, &config, &mut rng)?;
    print!("{}", reporting::render_sampling(&sampled, config.samples));

    let run = iterate_pagerank_run(&corpus, &config)?;
    print!("{}", reporting::render_iteration(&run));

    Ok(())
}
