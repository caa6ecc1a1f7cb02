// src/main.rs

use std::process::ExitCode;

use log::{error, info, warn};
use env_logger::Env;

use ulam::config::UlamConfig;
use ulam::core::ulam_run::UlamRun;
use ulam::reference::verify_range;

fn usage() {
    eprintln!("usage: ulam [C] [--config <file>] [--fresh] [--verify]");
    eprintln!("  C          compute U(1,N) blocks up to C*N (default from config)");
    eprintln!("  --config   configuration file (default ulam.toml / ulam.yaml)");
    eprintln!("  --fresh    ignore persisted state and start from the seed");
    eprintln!("  --verify   check the blocks against direct computation");
}

fn run(args: &[String]) -> ulam::Result<bool> {
    let mut config_path: Option<&str> = None;
    let mut bound_multiplier: Option<i64> = None;
    let mut fresh = false;
    let mut verify = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config_path = iter.next().map(String::as_str),
            "--fresh" => fresh = true,
            "--verify" => verify = true,
            "-h" | "--help" => {
                usage();
                return Ok(true);
            }
            other => match other.parse::<i64>() {
                Ok(c) if c > 0 => bound_multiplier = Some(c),
                _ => {
                    usage();
                    return Ok(false);
                }
            },
        }
    }

    let mut config = match config_path {
        Some(path) => UlamConfig::load_from_file(path)?,
        None => UlamConfig::load()?,
    };
    if fresh {
        config.resume = false;
    }
    let bound_multiplier = bound_multiplier.unwrap_or(config.bound_multiplier);
    let (min_n, max_n) = (config.verify.min_n, config.verify.max_n);

    let run = UlamRun::new(config);
    let summary = run.write_all_data_up_to(bound_multiplier)?;

    println!("U(1,N) up to {}N, valid for {}", bound_multiplier, summary.validity);
    for block in run.saved_ulam()?.coefficient_pairs() {
        println!("{:?}", block);
    }

    if verify {
        let mismatches = verify_range(bound_multiplier, min_n, max_n)?;
        let invalid: Vec<_> = mismatches.iter().filter(|m| m.within_validity).collect();
        if !invalid.is_empty() {
            error!("{} values of N disagree with direct computation", invalid.len());
            return Ok(false);
        }
        if !mismatches.is_empty() {
            warn!("{} values of N below the validity bound differ", mismatches.len());
        }
        info!("Blocks agree with direct computation for N in {}..={}", min_n, max_n);
    }

    Ok(true)
}

fn main() -> ExitCode {
    // Log level falls back to the configured one
    let default_level = UlamConfig::load()
        .map(|config| config.log_level)
        .unwrap_or_else(|_| "info".to_string());
    let env = Env::default()
        .filter_or("ULAM_LOG_LEVEL", default_level)
        .write_style_or("ULAM_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
