//! RangeBench - compares range-sum workloads with and without the LRU range cache

mod runner;
mod workload;

use anyhow::{ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rangecache::RangeQueryService;
use tracing::{info, warn};

use crate::runner::{run_cached, run_uncached, speedup};
use crate::workload::{make_queries, random_array, WorkloadSpec};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Array length
    #[arg(short = 'n', long, default_value_t = 100_000)]
    size: usize,

    /// Number of queries in the workload
    #[arg(short, long, default_value_t = 50_000)]
    queries: usize,

    /// Cache capacity (number of ranges)
    #[arg(short, long, default_value_t = 1000)]
    capacity: usize,

    /// Number of distinct hot ranges
    #[arg(long, default_value_t = 30)]
    hot_pool: usize,

    /// Probability that a range query hits the hot pool
    #[arg(long, default_value_t = 0.95)]
    p_hot: f64,

    /// Probability that a query is a point update
    #[arg(long, default_value_t = 0.03)]
    p_update: f64,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Run both variants on the same array and compare every answer
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    ensure!(args.size > 0, "array size must be positive");
    ensure!((0.0..=1.0).contains(&args.p_hot), "--p-hot must be within [0, 1]");
    ensure!((0.0..=1.0).contains(&args.p_update), "--p-update must be within [0, 1]");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Starting RangeBench v{}", env!("CARGO_PKG_VERSION"));
    info!("Array size: {}", args.size);
    info!("Queries: {}", args.queries);
    info!("Cache capacity: {}", args.capacity);

    let spec = WorkloadSpec {
        size: args.size,
        queries: args.queries,
        hot_pool: args.hot_pool,
        p_hot: args.p_hot,
        p_update: args.p_update,
    };
    let queries = make_queries(&spec, &mut rng);

    // Uncached baseline
    let mut array = random_array(args.size, &mut rng);
    let verify_array = args.verify.then(|| array.clone());
    let baseline = run_uncached(&mut array, &queries)?;
    info!("Uncached run finished in {:?}", baseline.elapsed);

    // Cached run on a fresh array with a fresh cache
    let mut array = match verify_array {
        Some(array) => array,
        None => random_array(args.size, &mut rng),
    };
    let mut service = RangeQueryService::new(args.capacity)?;
    let cached = run_cached(&mut service, &mut array, &queries)?;
    info!("Cached run finished in {:?}", cached.elapsed);

    if args.verify {
        if baseline.answers == cached.answers {
            info!("Verified {} range answers", cached.answers.len());
        } else {
            warn!("Cached answers differ from uncached answers");
            anyhow::bail!("verification failed");
        }
    }

    let stats = service.stats();
    println!("\nPerformance results:");
    println!("No cache : {:.2} s", baseline.elapsed.as_secs_f64());
    println!(
        "LRU cache: {:.2} s  (speedup x{:.1})",
        cached.elapsed.as_secs_f64(),
        speedup(baseline.elapsed, cached.elapsed)
    );
    println!(
        "Hit ratio: {:.1}%  ({} hits, {} misses, {} evictions, {} invalidations)",
        stats.hit_ratio() * 100.0,
        stats.hits(),
        stats.misses(),
        stats.evictions(),
        stats.invalidations()
    );

    Ok(())
}
