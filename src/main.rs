use std::{path::PathBuf, time::Instant};

use apriori::{mine, misc::log::targets, AprioriError, MiningConfig, Report, TransactionStore};
use clap::Parser;
use log::info;

/// Mine frequent itemsets and association rules from a transaction file.
///
/// Each line of the input is one transaction, items separated by whitespace.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Transaction file
    #[arg(short, long)]
    input: PathBuf,

    /// Minimum support, a fraction in (0, 1]
    #[arg(short, long, allow_negative_numbers = true)]
    support: f32,

    /// Minimum confidence, a fraction in [0, 1]
    #[arg(short, long, allow_negative_numbers = true)]
    confidence: f32,

    /// Largest itemset length to mine
    #[arg(long)]
    max_len: Option<usize>,
}

fn config_from_args(args: &Args) -> Result<MiningConfig, AprioriError> {
    let config = MiningConfig::new(args.support, args.confidence)?;
    match args.max_len {
        Some(max_len) => Ok(config.with_max_len(max_len)?),
        None => Ok(config),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let store = match TransactionStore::from_path(&args.input) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let mined = mine(&store, &config);
    info!(
        target: targets::MINE,
        "Mined {} itemsets and {} rules in {:?}",
        mined.lattice.num_itemsets(),
        mined.rules.len(),
        start.elapsed()
    );

    print!(
        "{}",
        Report::new(&mined.lattice, &mined.rules, store.inventory())
    );
}
