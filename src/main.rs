use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fanout_board::{Board, BoardConfig};
use fanout_core::{Cursor, Layer};
use fanout_library::Library;
use fanout_parts::{DualInline, FlatNoLead, ImportOptions, LibraryPart, Part};
use fanout_route::MismatchPolicy;
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Placement plan (YAML)
    #[arg(value_name = "PLAN")]
    plan: PathBuf,

    /// Print every pad after placement
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Deserialize)]
struct Plan {
    #[serde(default)]
    board: BoardConfig,
    parts: Vec<PartPlan>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum PartPlan {
    DualInline {
        at: [f64; 2],
        #[serde(default)]
        rotation: f64,
        #[serde(default = "default_true")]
        escape: bool,
        #[serde(default)]
        policy: MismatchPolicy,
    },
    FlatNoLead {
        at: [f64; 2],
        #[serde(default)]
        rotation: f64,
        #[serde(default = "default_true")]
        escape: bool,
        #[serde(default)]
        policy: MismatchPolicy,
    },
    Library {
        library: PathBuf,
        package: String,
        at: [f64; 2],
        #[serde(default)]
        rotation: f64,
        #[serde(default)]
        escape: bool,
        #[serde(default = "default_true")]
        silk: bool,
        #[serde(default = "default_true")]
        labels: bool,
    },
}

impl PartPlan {
    fn kind(&self) -> &'static str {
        match self {
            PartPlan::DualInline { .. } => "dual-inline",
            PartPlan::FlatNoLead { .. } => "flat-no-lead",
            PartPlan::Library { .. } => "library",
        }
    }
}

fn default_true() -> bool {
    true
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let content = std::fs::read_to_string(&cli.plan)
        .with_context(|| format!("Failed to read plan file: {:?}", cli.plan))?;
    let plan: Plan = serde_yaml::from_str(&content)
        .with_context(|| "Failed to parse placement plan")?;

    // Library paths in the plan are relative to the plan itself.
    let base = cli.plan.parent().unwrap_or_else(|| Path::new("."));
    let mut board = Board::new(plan.board);

    for entry in &plan.parts {
        let (part, at, rotation, escape): (Box<dyn Part>, [f64; 2], f64, bool) = match entry {
            PartPlan::DualInline {
                at,
                rotation,
                escape,
                policy,
            } => (
                Box::new(DualInline {
                    policy: *policy,
                    ..DualInline::default()
                }),
                *at,
                *rotation,
                *escape,
            ),
            PartPlan::FlatNoLead {
                at,
                rotation,
                escape,
                policy,
            } => (
                Box::new(FlatNoLead {
                    policy: *policy,
                    ..FlatNoLead::default()
                }),
                *at,
                *rotation,
                *escape,
            ),
            PartPlan::Library {
                library,
                package,
                at,
                rotation,
                escape,
                silk,
                labels,
            } => {
                let path = base.join(library);
                let lib = Library::from_path(&path)
                    .with_context(|| format!("Failed to load library: {:?}", path))?;
                let options = ImportOptions {
                    silk_outline: *silk,
                    pad_labels: *labels,
                };
                let part = LibraryPart::from_library(&lib, package, options)
                    .with_context(|| format!("Failed to look up package in {:?}", path))?;
                (Box::new(part), *at, *rotation, *escape)
            }
        };

        let anchor = Cursor::with_heading(at[0], at[1], rotation);
        debug!(kind = entry.kind(), x = at[0], y = at[1], rotation, "placing part");
        let pads = part
            .place(anchor, &mut board)
            .with_context(|| format!("Failed to place {} part", entry.kind()))?;
        println!("{} {}: {} pads.", pads.owner(), entry.kind(), pads.len());
        if cli.debug {
            for pad in pads.pads() {
                println!(
                    "  {} ({:.2}, {:.2}) {}",
                    pad.label(),
                    pad.cursor.position.x,
                    pad.cursor.position.y,
                    pad.layer
                );
            }
        }

        if escape {
            let river = part
                .escape(&pads, &mut board)
                .with_context(|| format!("Failed to escape {} part", entry.kind()))?;
            println!("  river of {} stubs.", river.len());
        }
    }

    println!(
        "Board {:.0} x {:.0} mm: {} drills, {} tracks.",
        board.config().size[0],
        board.config().size[1],
        board.drills().len(),
        board.tracks().len()
    );
    if cli.debug {
        for layer in Layer::all() {
            println!("  {}: {} shapes.", layer, board.shapes(layer).len());
        }
    }

    Ok(())
}
