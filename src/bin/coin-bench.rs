use std::process::ExitCode;

use clap::Parser;

use coinage::{
    find_coins_greedy, find_min_coins, render_table, run_bench, CANONICAL_COINS,
};

#[derive(Parser, Debug)]
#[clap(name = "coin-bench", about = "Greedy vs DP coin change benchmark")]
struct Cli {
    /// Comma-separated amounts to test
    #[arg(long, default_value = "113,1000,5000,10000,50000")]
    amounts: String,

    /// Solver calls per repeat
    #[arg(long, default_value_t = 200)]
    number: u32,

    /// Repeat count (minimum time across repeats is reported)
    #[arg(long, default_value_t = 5)]
    repeat: u32,

    /// Print greedy and DP solutions for a fixed demonstration set of
    /// amounts instead of benchmarking
    #[arg(long)]
    demo: bool,
}

fn parse_amounts(raw: &str) -> Result<Vec<i64>, String> {
    let mut amounts = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let amount: i64 = part
            .parse()
            .map_err(|_| format!("malformed amount '{part}'"))?;
        if amount < 0 {
            return Err(format!("amount must be >= 0, got {amount}"));
        }
        amounts.push(amount);
    }
    if amounts.is_empty() {
        return Err("no amounts given".to_string());
    }
    Ok(amounts)
}

fn run_demo() -> ExitCode {
    println!("COINS: {:?}", CANONICAL_COINS);
    for amount in [0, 1, 6, 11, 31, 113, 999] {
        // Both solvers are total over the canonical set, so errors here
        // would mean a bug rather than bad input.
        let (greedy, dp) = match (
            find_coins_greedy(amount, &CANONICAL_COINS),
            find_min_coins(amount, &CANONICAL_COINS),
        ) {
            (Ok(g), Ok(d)) => (g, d),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("solver failed for amount {amount}: {e}");
                return ExitCode::FAILURE;
            }
        };
        println!("\nAmount = {amount}");
        println!("Greedy: {greedy}");
        println!("DP    : {dp}");
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.demo {
        return run_demo();
    }

    let amounts = match parse_amounts(&cli.amounts) {
        Ok(amounts) => amounts,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };
    if cli.number == 0 || cli.repeat == 0 {
        eprintln!("error: --number and --repeat must be >= 1");
        return ExitCode::FAILURE;
    }

    let rows = run_bench(&amounts, &CANONICAL_COINS, cli.number, cli.repeat);

    println!("=== Performance comparison ===");
    println!("COINS: {:?}", CANONICAL_COINS);
    println!();
    print!("{}", render_table(&rows));
    println!();
    println!("Notes:");
    println!("- Greedy is O(k) in the number of denominations, essentially constant here.");
    println!("- DP is O(amount * k), so its time grows with the numeric magnitude of the amount.");
    println!("- DP guarantees the minimum coin count for any denomination set.");
    println!("- For {:?} greedy matches the optimum: the set is canonical.", CANONICAL_COINS);

    ExitCode::SUCCESS
}
