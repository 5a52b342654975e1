//! notespan CLI
//!
//! A thin command-line consumer of the content engine. A note file is a JSON
//! array of blocks; every command follows the same orchestration path: load
//! the blocks, resolve the driver for a block's type through the registry,
//! invoke the generic operation, persist the returned payload wholesale.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use notespan_config::Config;
use notespan_engine::blocks::{Block, DriverRegistry, OpParams};
use notespan_engine::text::{Run, merge_adjacent_parallel};

#[derive(Parser)]
#[command(name = "notespan")]
#[command(about = "notespan - block-based note content engine")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `notespan_engine=debug`
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a note's blocks with their plain-text previews
    Preview {
        /// Note file (resolved against the configured notes directory)
        note: PathBuf,
    },
    /// Apply a generic operation to one block
    Apply {
        note: PathBuf,
        /// Target block id
        block_id: Uuid,
        /// Operation name, e.g. apply_style
        op: String,
        /// Operation parameters as a JSON object,
        /// e.g. '{"start": 0, "end": 5, "style": "bold"}'
        #[arg(long)]
        params: String,
    },
    /// Convert a block to another registered type
    ChangeType {
        note: PathBuf,
        block_id: Uuid,
        new_type: String,
    },
    /// Re-normalize the run lists of a note's text blocks
    Normalize { note: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring unreadable config: {e}");
        None
    });
    let registry = DriverRegistry::with_builtin_drivers();

    match cli.command {
        Commands::Preview { note } => {
            let path = resolve_note_path(&note, config.as_ref());
            let blocks = load_note(&path)?;
            for block in &blocks {
                let preview = registry
                    .get_as_first(block)
                    .unwrap_or_else(|e| format!("<{e}>"));
                println!("{}  {:8}  {}", block.id, block.kind, preview);
            }
        }
        Commands::Apply {
            note,
            block_id,
            op,
            params,
        } => {
            let path = resolve_note_path(&note, config.as_ref());
            let params: OpParams =
                serde_json::from_str(&params).context("`--params` must be a JSON object")?;
            let mut blocks = load_note(&path)?;
            let block = find_block(&mut blocks, block_id, &path)?;

            let payload = registry.apply_op(block, &op, &params)?;
            block.replace_data(payload);

            save_note(&path, &blocks)?;
            println!("applied `{op}` to block {block_id}");
        }
        Commands::ChangeType {
            note,
            block_id,
            new_type,
        } => {
            let path = resolve_note_path(&note, config.as_ref());
            let mut blocks = load_note(&path)?;
            let block = find_block(&mut blocks, block_id, &path)?;

            let payload = registry.change_type(block, &new_type)?;
            block.replace_data(payload);
            block.kind = new_type.clone();

            save_note(&path, &blocks)?;
            println!("block {block_id} is now `{new_type}`");
        }
        Commands::Normalize { note } => {
            let path = resolve_note_path(&note, config.as_ref());
            let workers = config.map_or_else(|| Config::default().merge_workers, |c| c.merge_workers);
            let mut blocks = load_note(&path)?;
            let changed = normalize_text_blocks(&mut blocks, workers)?;

            save_note(&path, &blocks)?;
            println!("normalized {changed} text block(s)");
        }
    }

    Ok(())
}

fn init_logging(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// Relative note paths resolve against the configured notes directory when
/// they don't point at an existing file directly.
fn resolve_note_path(note: &Path, config: Option<&Config>) -> PathBuf {
    if note.is_absolute() || note.exists() {
        return note.to_path_buf();
    }
    match config {
        Some(config) => config.notes_path.join(note),
        None => note.to_path_buf(),
    }
}

fn load_note(path: &Path) -> Result<Vec<Block>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read note file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode note file {}", path.display()))
}

fn save_note(path: &Path, blocks: &[Block]) -> Result<()> {
    let content = serde_json::to_string_pretty(blocks)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write note file {}", path.display()))
}

fn find_block<'b>(blocks: &'b mut [Block], id: Uuid, path: &Path) -> Result<&'b mut Block> {
    let Some(block) = blocks.iter_mut().find(|b| b.id == id) else {
        bail!("block {id} not found in {}", path.display());
    };
    Ok(block)
}

/// Run the parallel normalizer over every text block's run list.
/// Returns how many blocks actually changed.
fn normalize_text_blocks(blocks: &mut [Block], workers: usize) -> Result<usize> {
    let mut changed = 0;
    for block in blocks.iter_mut().filter(|b| b.kind == "text") {
        let runs: Vec<Run> = serde_json::from_value(block.data.clone())
            .with_context(|| format!("block {} has a malformed run list", block.id))?;
        let normalized = merge_adjacent_parallel(runs.clone(), workers);
        if normalized != runs {
            block.replace_data(serde_json::to_value(&normalized)?);
            changed += 1;
        }
    }
    Ok(changed)
}
