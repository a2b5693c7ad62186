use anyhow::Result;
use clap::Parser;
use facility_layout::{
    Config, LayoutCostEvaluator, Placement, ReportFormat, export_ranking, format_cost,
    optimize::{distinct_up_to_mirroring, rank_complete_layouts, summarize},
};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Rank every complete facility layout by material-flow cost", long_about = None)]
struct Args {
    /// Number of ranked layouts to print
    #[arg(short, long, default_value_t = 10)]
    top: usize,

    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    /// Write the full ranking to the output directory
    #[arg(short, long)]
    export: bool,

    /// Export format (overrides the config file)
    #[arg(short, long)]
    format: Option<ReportFormat>,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();
    let config = Config::load_or_default(Some(args.config.as_path()))?;

    let evaluator = LayoutCostEvaluator::default();
    let ranking = rank_complete_layouts(&evaluator);
    let Some(summary) = summarize(&ranking) else {
        error!("No layouts to rank.");
        return Ok(());
    };

    info!("=== Layout Ranking ===");
    info!("Layouts evaluated: {}", summary.count);
    info!(
        "Cost min / mean / max: {} / {:.1} / {}",
        summary.min, summary.mean, summary.max
    );
    info!(
        "Slot-order layout cost: {}",
        format_cost(evaluator.evaluate(&Placement::identity()))
    );

    let best: Vec<_> = ranking
        .iter()
        .take_while(|r| r.cost == summary.min)
        .cloned()
        .collect();
    let distinct = distinct_up_to_mirroring(&best);
    println!(
        "Best cost {} reached by {} layout(s), {} up to mirroring:",
        format_cost(summary.min),
        best.len(),
        distinct.len()
    );
    for entry in &distinct {
        println!("{}\n", entry.placement);
    }

    println!("Top {}:", args.top.min(ranking.len()));
    for (i, entry) in ranking.iter().take(args.top).enumerate() {
        println!(
            "{:>4}. {}  cost {}",
            i + 1,
            entry.placement.to_slot_sequence(),
            format_cost(entry.cost)
        );
    }

    if args.export {
        let format = args.format.unwrap_or(config.export.format);
        let path = export_ranking(&ranking, Some(&config.export.output_dir), format)?;
        info!("Ranking saved to: {}", path.display());
    }

    Ok(())
}
