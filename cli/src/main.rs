//! prbg - seed a named generator and print draws
//!
//! Usage: `prbg <algorithm> <seed> [count]`
//!
//! Seeds the chosen family through `SeedMaterial` and prints `count`
//! 64-bit draws (default 10), one per line. Exists to exercise the library
//! end to end; `prbg list` prints the available algorithms with their
//! capabilities.

use std::env;
use std::process::ExitCode;

use prbg_core_rs::{Algorithm, Generator, SeedMaterial};

fn usage() -> ExitCode {
    eprintln!("usage: prbg <algorithm> <seed> [count]");
    eprintln!("       prbg list");
    ExitCode::FAILURE
}

fn list() {
    for algorithm in Algorithm::ALL {
        let mut caps = Vec::new();
        if algorithm.supports_jump() {
            caps.push("jump");
        }
        if algorithm.supports_advance() {
            caps.push("advance");
        }
        if algorithm.supports_streams() {
            caps.push("streams");
        }
        println!(
            "{:<12} {}-bit native, seed words >= {}{}{}",
            algorithm.name(),
            algorithm.native_bits(),
            algorithm.min_seed_words(),
            if caps.is_empty() { "" } else { ", " },
            caps.join("/")
        );
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let algorithm = Algorithm::from_name(&args[0])
        .ok_or_else(|| format!("unknown algorithm '{}' (try 'prbg list')", args[0]))?;
    let seed: u64 = args[1]
        .parse()
        .map_err(|_| format!("seed must be an unsigned integer, got '{}'", args[1]))?;
    let count: usize = match args.get(2) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("count must be an unsigned integer, got '{raw}'"))?,
        None => 10,
    };

    let entropy = SeedMaterial::from_seed(seed).generate(algorithm.min_seed_words());
    let mut gen = Generator::seeded(algorithm, &entropy).map_err(|e| e.to_string())?;
    for _ in 0..count {
        let draw = gen.next_u64().map_err(|e| e.to_string())?;
        println!("{:#018x}", draw);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [cmd] if cmd.as_str() == "list" => {
            list();
            ExitCode::SUCCESS
        }
        args @ [_, _] | args @ [_, _, _] => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(message) => {
                eprintln!("error: {message}");
                ExitCode::FAILURE
            }
        },
        _ => usage(),
    }
}
