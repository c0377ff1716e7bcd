//! merkle CLI - Command line interface for merkle_commit
//!
//! Computes roots and full trees over hex-encoded or raw 32-byte hashes.
//! Output is JSON by default so the tool can be driven from scripts.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use merkle_commit::{codec, combine_hash, compute_root, Hash, MerkleTree};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "MERKLE_LOG";

#[derive(Parser)]
#[command(name = "merkle")]
#[command(about = "Double-SHA256 merkle roots over ordered hash sequences")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the merkle root of the given hashes
    Root {
        #[command(flatten)]
        leaves: LeafArgs,
        /// Write the root as 32 raw bytes instead of formatted output
        #[arg(long)]
        raw: bool,
    },

    /// Build and print the full tree
    Tree {
        #[command(flatten)]
        leaves: LeafArgs,
        /// Dump the node arena with child ids instead of per-level hashes
        #[arg(long)]
        arena: bool,
    },

    /// Combine two hashes into their parent
    Combine {
        /// Left child (hex)
        left: String,
        /// Right child (hex)
        right: String,
        /// Write the parent as 32 raw bytes instead of formatted output
        #[arg(long)]
        raw: bool,
    },

    /// SHA-256 a string, handy for producing leaf hashes
    Digest {
        /// Text to hash
        text: String,
    },
}

#[derive(Args)]
struct LeafArgs {
    /// Leaf hashes in hex; read from --input or stdin when omitted
    hashes: Vec<String>,

    /// Read leaves from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input is concatenated raw 32-byte hashes rather than hex
    #[arg(long)]
    binary: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Root { leaves, raw } => {
            let leaves = read_leaves(&leaves)?;
            let root = compute_root(&leaves);
            if raw {
                return write_raw(&root);
            }
            output(
                cli.format,
                &serde_json::json!({
                    "root": root,
                    "leaves": leaves.len(),
                }),
                &root.to_hex(),
            );
        }

        Commands::Tree { leaves, arena } => {
            let leaves = read_leaves(&leaves)?;
            let tree = MerkleTree::build(&leaves)?;
            if arena {
                println!("{}", tree.to_json()?);
                return Ok(());
            }
            let levels: Vec<Vec<Hash>> = tree
                .levels()
                .map(|level| level.iter().map(|n| n.hash()).collect())
                .collect();

            let mut text = format!("root:  {}\ndepth: {}\n", tree.root_hash(), tree.depth());
            for (i, level) in levels.iter().enumerate() {
                let hashes: Vec<String> = level.iter().map(Hash::short).collect();
                text.push_str(&format!("level {}: {}\n", i, hashes.join(" ")));
            }

            output(
                cli.format,
                &serde_json::json!({
                    "root": tree.root_hash(),
                    "depth": tree.depth(),
                    "leaves": tree.leaf_count(),
                    "levels": levels,
                }),
                text.trim_end(),
            );
        }

        Commands::Combine { left, right, raw } => {
            let left = parse_hash(&left)?;
            let right = parse_hash(&right)?;
            let parent = combine_hash(&left, &right);
            if raw {
                return write_raw(&parent);
            }
            output(
                cli.format,
                &serde_json::json!({ "hash": parent }),
                &parent.to_hex(),
            );
        }

        Commands::Digest { text } => {
            let hash = Hash::digest(text.as_bytes());
            output(cli.format, &serde_json::json!({ "hash": hash }), &hash.to_hex());
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_leaves(args: &LeafArgs) -> anyhow::Result<Vec<Hash>> {
    if !args.hashes.is_empty() {
        return args.hashes.iter().map(|s| parse_hash(s)).collect();
    }

    let mut data = Vec::new();
    match &args.input {
        Some(path) => {
            std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?
                .read_to_end(&mut data)?;
        }
        None => {
            std::io::stdin().read_to_end(&mut data)?;
        }
    }

    if args.binary {
        return Ok(codec::read_hashes(&data)?);
    }

    let text = String::from_utf8(data).context("Hex input is not valid UTF-8")?;
    text.split_whitespace().map(parse_hash).collect()
}

fn write_raw(hash: &Hash) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    codec::write_hash(&mut stdout, hash)?;
    stdout.flush()?;
    Ok(())
}

fn parse_hash(s: &str) -> anyhow::Result<Hash> {
    Hash::from_hex(s).map_err(|e| anyhow::anyhow!("Invalid hash '{}': {}", s, e))
}

fn output(format: OutputFormat, value: &serde_json::Value, text: &str) {
    match format {
        OutputFormat::Json => println!("{}", value),
        OutputFormat::Text => println!("{}", text),
    }
}
