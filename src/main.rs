// src/main.rs
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use name_match_lib::levenshtein::{self, LevenshteinOptions};
use name_match_lib::utils::env::load_env;
use name_match_lib::utils::match_config::resolve_config;
use name_match_lib::{NameInput, NameMatchConfigOverrides, NameMatcher};

const EXIT_NO_MATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(author, version, about = "Decide whether two person or business names refer to the same entity", long_about = None)]
struct Cli {
    /// JSON file with configuration overrides (camelCase field names).
    /// Falls back to NAME_MATCH_CONFIG_PATH.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: OverrideArgs,

    /// Verbose logging (per-pair score breakdown)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct OverrideArgs {
    /// Weight of the exact token-set score
    #[arg(long, global = true)]
    set_score_weight: Option<f64>,

    /// Weight of the fuzzy token score
    #[arg(long, global = true)]
    fuzzy_score_weight: Option<f64>,

    /// Minimum combined score to declare a match
    #[arg(long, global = true)]
    approval_threshold: Option<f64>,

    /// Minimum token length for truncated-prefix comparison
    #[arg(long, global = true)]
    token_partial_length_threshold: Option<usize>,

    /// Maximum edit distance for a fuzzy token match
    #[arg(long, global = true)]
    levenshtein_threshold: Option<usize>,

    /// Replace the excluded-word list (repeat or comma-separate)
    #[arg(long, global = true, value_delimiter = ',')]
    excluded_words: Option<Vec<String>>,
}

impl From<OverrideArgs> for NameMatchConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            set_score_weight: args.set_score_weight,
            fuzzy_score_weight: args.fuzzy_score_weight,
            approval_threshold: args.approval_threshold,
            token_partial_length_threshold: args.token_partial_length_threshold,
            levenshtein_threshold: args.levenshtein_threshold,
            excluded_words: args.excluded_words,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Compare two sets of name variants; exits 0 on a match, 1 on no match, 2 on error
    Compare {
        /// Name variant for the first entity (repeatable)
        #[arg(long, required = true)]
        left: Vec<String>,
        /// Name variant for the second entity (repeatable)
        #[arg(long, required = true)]
        right: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show the set, fuzzy and combined scores for one pair
    Score {
        name1: String,
        name2: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized tokens of a name
    Normalize {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Levenshtein distance between two strings
    Distance {
        a: String,
        b: String,
        /// Compare characters exactly instead of by base letter
        #[arg(long)]
        no_collator: bool,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn main() -> ExitCode {
    load_env();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = cli
        .config
        .or_else(|| std::env::var_os("NAME_MATCH_CONFIG_PATH").map(PathBuf::from));
    let config = resolve_config(config_path.as_deref(), cli.overrides.into())?;
    let matcher = NameMatcher::new(config);

    match cli.command {
        Command::Compare { left, right, json } => {
            let is_match = matcher.are_similar(NameInput::Variants(left), NameInput::Variants(right));
            if json {
                println!("{}", serde_json::json!({ "match": is_match }));
            } else {
                println!("{}", if is_match { "match" } else { "no match" });
            }
            return Ok(if is_match { ExitCode::SUCCESS } else { ExitCode::from(EXIT_NO_MATCH) });
        }
        Command::Score { name1, name2, json } => {
            let score = matcher.score(&name1, &name2);
            if json {
                println!("{}", serde_json::to_string_pretty(&score)?);
            } else {
                println!("set:      {:.4}", score.set_score);
                println!("fuzzy:    {:.4}", score.fuzzy_score);
                println!(
                    "combined: {:.4} (threshold {})",
                    score.combined,
                    matcher.config().approval_threshold
                );
                println!("verdict:  {}", if score.is_match { "match" } else { "no match" });
            }
        }
        Command::Normalize { name, json } => {
            let tokens = matcher.normalize(&name);
            if json {
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                println!("{}", tokens.join(" "));
            }
        }
        Command::Distance { a, b, no_collator } => {
            let options = if no_collator {
                LevenshteinOptions::exact()
            } else {
                LevenshteinOptions::default()
            };
            println!("{}", levenshtein::distance(&a, &b, &options));
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(matcher.config())?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
