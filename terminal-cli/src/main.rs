//! `wheel`: generate, inspect, and grade wheel cipher tasks from the command line.
//!
//! Output goes to stdout as JSON; logs go to stderr.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use wheel_execution::{
    most_frequent, request_hint, BigramSpan, GradingPolicy, HintHistory, Reflection,
    SentenceGenerator, TaskConfig, TaskData, FRENCH_BIGRAMS,
};
use wheel_types::{Alphabet, HintKind, HintRequest};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "wheel", version, about = "Wheel bigram cipher task tools")]
struct Args {
    /// YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `log_level` from the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pin the seed and key to their development values
    #[arg(long, global = true)]
    dev_mode: bool,

    /// Reflection family (outward|swapped)
    #[arg(long, global = true, value_parser = parse_reflection)]
    reflection: Option<Reflection>,

    /// Grading policy (exact_key|table_equivalence)
    #[arg(long, global = true, value_parser = parse_grading)]
    grading: Option<GradingPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a task and print its public data
    Task {
        #[arg(long)]
        seed: u64,
        /// Hint history (JSON array of requests)
        #[arg(long)]
        hints: Option<String>,
        /// Also print the private data
        #[arg(long)]
        reveal: bool,
    },
    /// Encode text with the key of a seed
    Encode {
        #[arg(long)]
        seed: u64,
        #[arg(long)]
        text: String,
    },
    /// Decode text with the key of a seed
    Decode {
        #[arg(long)]
        seed: u64,
        #[arg(long)]
        text: String,
    },
    /// Check a hint request against a history
    Hint {
        #[arg(long, default_value = "[]")]
        history: String,
        #[arg(long)]
        cell: usize,
        /// type_1/key or type_2/plain
        #[arg(long)]
        kind: HintKind,
        /// Grant the hint against the key of this seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Grade an answer (`{"keys": [...]}`)
    Grade {
        #[arg(long)]
        seed: u64,
        #[arg(long)]
        answer: String,
        #[arg(long, default_value = "[]")]
        hints: String,
    },
    /// Wheel positions drawn for a selected bigram
    Span {
        #[arg(long)]
        l1: usize,
        #[arg(long)]
        l2: usize,
    },
    /// Most frequent bigrams of a task's cipher text
    Frequency {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn parse_reflection(raw: &str) -> Result<Reflection, String> {
    serde_yaml::from_str(raw).map_err(|_| format!("unknown reflection {raw:?}"))
}

fn parse_grading(raw: &str) -> Result<GradingPolicy, String> {
    serde_yaml::from_str(raw).map_err(|_| format!("unknown grading policy {raw:?}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    // Setup logging
    let level = config.level()?;
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }
    debug!(?config, "loaded config");

    let output = run(&args.command, &config.task)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if args.dev_mode {
        config.task.dev_mode = true;
    }
    if let Some(reflection) = args.reflection {
        config.task.variant.reflection = reflection;
    }
    if let Some(grading) = args.grading {
        config.task.variant.grading = grading;
    }
}

fn generate(seed: u64, task: &TaskConfig, history: &HintHistory) -> Result<TaskData> {
    TaskData::generate(seed, task, &SentenceGenerator, history)
        .with_context(|| format!("failed to generate task for seed {seed}"))
}

fn to_value(value: &impl Serialize) -> Result<serde_json::Value> {
    serde_json::to_value(value).context("failed to serialize output")
}

fn run(command: &Command, task: &TaskConfig) -> Result<serde_json::Value> {
    match command {
        Command::Task {
            seed,
            hints,
            reveal,
        } => {
            let history = HintHistory::from_legacy_json(hints.as_deref().unwrap_or("[]"))
                .context("invalid hint history")?;
            let data = generate(*seed, task, &history)?;
            let mut out = json!({ "publicData": to_value(&data.public_data())? });
            if *reveal {
                out["privateData"] = to_value(&data.private_data())?;
            }
            Ok(out)
        }
        Command::Encode { seed, text } => {
            let data = generate(*seed, task, &HintHistory::new())?;
            Ok(json!({ "text": data.table().encode(text) }))
        }
        Command::Decode { seed, text } => {
            let data = generate(*seed, task, &HintHistory::new())?;
            Ok(json!({ "text": data.table().decode(text) }))
        }
        Command::Hint {
            history,
            cell,
            kind,
            seed,
        } => {
            let request = HintRequest::new(*cell, *kind);
            let accepted = request_hint(history, request, &Alphabet::standard())
                .context("hint request refused")?;
            info!(cell, %kind, "hint request accepted");
            let mut out = json!({ "request": to_value(&accepted)? });
            if let Some(seed) = seed {
                let data = generate(*seed, task, &HintHistory::new())?;
                let hint = wheel_execution::grant(accepted, &data.key, &data.alphabet)
                    .context("hint could not be granted")?;
                out["hint"] = to_value(&hint)?;
            }
            Ok(out)
        }
        Command::Grade {
            seed,
            answer,
            hints,
        } => {
            let history = HintHistory::from_legacy_json(hints).context("invalid hint history")?;
            let data = generate(*seed, task, &history)?;
            let grade = data
                .grader()
                .grade_json(answer, history.len())
                .context("could not grade answer")?;
            to_value(&grade)
        }
        Command::Span { l1, l2 } => {
            let n = Alphabet::standard().len();
            anyhow::ensure!(*l1 < n && *l2 < n, "positions must be below {n}");
            to_value(&BigramSpan::new(n, *l1, *l2))
        }
        Command::Frequency { seed, limit } => {
            let data = generate(*seed, task, &HintHistory::new())?;
            let reference: Vec<_> = FRENCH_BIGRAMS
                .iter()
                .take(*limit)
                .map(|(bigram, percent)| json!({ "bigram": bigram, "percent": percent }))
                .collect();
            Ok(json!({
                "cipher": to_value(&most_frequent(&data.alphabet, &data.cipher_text, *limit))?,
                "french": reference,
            }))
        }
    }
}
