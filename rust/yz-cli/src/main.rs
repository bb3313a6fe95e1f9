//! yz: command-line Yatzy scorer.
//!
//! Subcommands:
//! - score
//! - best
//! - categories

use std::env;
use std::process;

use yz_core::{Category, Config, Roll, Score, Yatzy};
use yz_logging::{hash_config_bytes, NdjsonWriter, ScoreEventV1};

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

/// Options shared by `score` and `best`.
#[derive(Debug, Default)]
struct RollArgs {
    dice: Option<String>,
    category: Option<Category>,
    config: Option<String>,
    log: Option<String>,
    no_validate: bool,
}

/// Parse options for `cmd`. Returns None if help was printed.
fn parse_roll_args(
    cmd: &str,
    usage: &str,
    args: &[String],
    allow_category: bool,
) -> Option<RollArgs> {
    let mut out = RollArgs::default();

    let value_of = |i: usize, flag: &str| -> String {
        match args.get(i + 1) {
            Some(v) => v.clone(),
            None => fail(format!("Missing value for {flag}")),
        }
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{usage}");
                return None;
            }
            "--dice" | "-d" => {
                out.dice = Some(value_of(i, "--dice"));
                i += 2;
            }
            "--category" | "-c" if allow_category => {
                let v = value_of(i, "--category");
                out.category = Some(v.parse().unwrap_or_else(|e| fail(e)));
                i += 2;
            }
            "--config" => {
                out.config = Some(value_of(i, "--config"));
                i += 2;
            }
            "--log" => {
                out.log = Some(value_of(i, "--log"));
                i += 2;
            }
            "--no-validate" => {
                out.no_validate = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `yz {cmd}`: {other}");
                eprintln!("Run `yz {cmd} --help` for usage.");
                process::exit(1);
            }
        }
    }
    Some(out)
}

/// Load the config file (if any) and return it with the hash of its bytes.
fn load_config(path: Option<&str>) -> (Config, Option<String>) {
    let Some(path) = path else {
        return (Config::default(), None);
    };
    let (cfg, bytes) = Config::load_with_bytes(path)
        .unwrap_or_else(|e| fail(format!("Failed to load config {path}: {e}")));
    (cfg, Some(hash_config_bytes(&bytes)))
}

fn build_roll(dice: Option<&str>, validate: bool) -> Roll {
    let Some(dice) = dice else {
        fail("Missing --dice");
    };
    let roll: Roll = dice
        .parse()
        .unwrap_or_else(|e| fail(format!("Invalid --dice value {dice:?}: {e}")));
    if validate {
        roll.validate()
            .unwrap_or_else(|e| fail(format!("Invalid --dice value {dice:?}: {e}")));
    }
    roll
}

/// Append one score event per entry, if an event log is configured.
fn log_scores(
    args: &RollArgs,
    cfg: &Config,
    config_hash: Option<String>,
    roll: &Roll,
    scores: &[(Category, Score)],
) {
    let path = args
        .log
        .clone()
        .or_else(|| cfg.logging.events_path.clone());
    let Some(path) = path else {
        return;
    };

    let mut w = NdjsonWriter::open_append_with_flush(&path, cfg.logging.flush_every_lines)
        .unwrap_or_else(|e| fail(format!("Failed to open event log {path}: {e}")));
    for &(cat, score) in scores {
        let event = ScoreEventV1::new(*roll.values(), cat.name(), score)
            .with_config_hash(config_hash.clone());
        w.write_event(&event)
            .unwrap_or_else(|e| fail(format!("Failed to write event log: {e}")));
    }
    w.flush()
        .unwrap_or_else(|e| fail(format!("Failed to flush event log: {e}")));
}

fn cmd_score(args: &[String]) {
    let usage = r#"yz score

USAGE:
    yz score --dice 1,2,3,4,5 [--category NAME] [--config PATH] [--log PATH] [--no-validate]

OPTIONS:
    -d, --dice D        Five die faces, comma or space separated
    -c, --category C    Score a single category (ones, chance, yatzy)
    --config PATH       YAML config (default: built-in defaults)
    --log PATH          Append NDJSON score events to PATH
    --no-validate       Accept faces outside 1..=6
"#;
    let Some(args) = parse_roll_args("score", usage, args, true) else {
        return;
    };
    let (cfg, config_hash) = load_config(args.config.as_deref());
    let roll = build_roll(
        args.dice.as_deref(),
        cfg.dice.validate_faces && !args.no_validate,
    );

    let categories = match args.category {
        Some(c) => vec![c],
        None => cfg.scoring.categories.clone(),
    };
    let scorer = Yatzy::new();
    let scores: Vec<(Category, Score)> = categories
        .iter()
        .map(|&c| (c, scorer.score(c, &roll)))
        .collect();

    for (cat, score) in &scores {
        println!("{cat}: {score}");
    }
    log_scores(&args, &cfg, config_hash, &roll, &scores);
}

fn cmd_best(args: &[String]) {
    let usage = r#"yz best

USAGE:
    yz best --dice 1,2,3,4,5 [--config PATH] [--log PATH] [--no-validate]

OPTIONS:
    -d, --dice D        Five die faces, comma or space separated
    --config PATH       YAML config (default: built-in defaults)
    --log PATH          Append the chosen category as an NDJSON score event
    --no-validate       Accept faces outside 1..=6
"#;
    let Some(args) = parse_roll_args("best", usage, args, false) else {
        return;
    };
    let (cfg, config_hash) = load_config(args.config.as_deref());
    let roll = build_roll(
        args.dice.as_deref(),
        cfg.dice.validate_faces && !args.no_validate,
    );

    let (cat, score) = Yatzy::new().best(&roll);
    println!("{cat}: {score}");
    log_scores(&args, &cfg, config_hash, &roll, &[(cat, score)]);
}

fn cmd_categories(args: &[String]) {
    // Takes no options; the first argument is either help or an error.
    if let Some(arg) = args.first() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("yz categories\n\nUSAGE:\n    yz categories");
                return;
            }
            other => {
                eprintln!("Unknown option for `yz categories`: {other}");
                eprintln!("Run `yz categories --help` for usage.");
                process::exit(1);
            }
        }
    }

    for c in Category::ALL {
        println!("{c}");
    }
}

fn print_help() {
    eprintln!(
        r#"yz - Yatzy scorer

USAGE:
    yz <COMMAND> [OPTIONS]

COMMANDS:
    score               Score a roll in one or all categories
    best                Print the highest-scoring category for a roll
    categories          List supported categories

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version
"#
    );
}

fn print_version() {
    println!("yz {}", yz_core::VERSION);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        "best" => {
            cmd_best(&args[2..]);
        }
        "categories" => {
            cmd_categories(&args[2..]);
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run `yz --help` for usage.");
            process::exit(1);
        }
    }
}
