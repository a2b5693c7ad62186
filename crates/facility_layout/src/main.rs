use anyhow::{Context, Result};
use clap::Parser;
use facility_layout::{Config, LayoutCostEvaluator, Placement, ReportFormat, export_report};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Evaluate the material-flow cost of a facility layout", long_about = None)]
struct Args {
    /// Department per slot, slot 1 first ("_" for empty), e.g. "1,2,3,4,5,6"
    #[arg(short, long)]
    layout: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    /// Write the cost breakdown to the output directory
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

    let placement = match (&args.layout, config.initial_placement()?) {
        (Some(seq), _) => Placement::from_slot_sequence(seq)
            .with_context(|| format!("invalid --layout '{seq}'"))?,
        (None, Some(initial)) => initial,
        (None, None) => {
            info!("No layout given, evaluating departments in slot order");
            Placement::identity()
        }
    };
    if !placement.is_complete() {
        warn!(
            "{} department(s) not placed; their flows are excluded",
            placement.pool().count()
        );
    }

    let evaluator = LayoutCostEvaluator::default();
    let report = evaluator.report(&placement);
    println!("{report}");

    if args.export {
        let format = args.format.unwrap_or(config.export.format);
        let path = export_report(&report, Some(&config.export.output_dir), format)?;
        info!("Cost breakdown saved to: {}", path.display());
    }

    Ok(())
}
