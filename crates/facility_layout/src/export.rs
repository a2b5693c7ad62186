use crate::{
    constants::{RANKING_FILE_PREFIX, REPORT_FILE_PREFIX},
    error::{LayoutError, Result},
    evaluator::CostReport,
    optimize::RankedLayout,
};
use chrono::Local;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use strum_macros::{Display, EnumString};

/// Output file format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct Stamped<'a, T: Serialize> {
    generated_at: String,
    #[serde(flatten)]
    body: &'a T,
}

#[derive(Serialize)]
struct RankingBody<'a> {
    layouts: &'a [RankedLayout],
}

/// Writes the per-flow breakdown of `report` to a timestamped file
pub fn export_report(
    report: &CostReport,
    output_dir: Option<&Path>,
    format: ReportFormat,
) -> Result<PathBuf> {
    let (file_path, writer) = create_output(REPORT_FILE_PREFIX, output_dir, format)?;
    match format {
        ReportFormat::Csv => {
            let mut wtr = csv_writer(writer);
            wtr.write_record([
                "From", "To", "FromSlot", "ToSlot", "Distance", "Flow", "Factor", "Cost",
            ])?;
            for term in &report.flows {
                wtr.write_record([
                    term.from.to_string(),
                    term.to.to_string(),
                    term.from_slot.to_string(),
                    term.to_slot.to_string(),
                    term.distance.to_string(),
                    term.flow.to_string(),
                    term.factor.to_string(),
                    term.cost.to_string(),
                ])?;
            }
            let total = report.total.to_string();
            wtr.write_record(["Total", "", "", "", "", "", "", total.as_str()])?;
            wtr.flush()?;
        }
        ReportFormat::Json => write_json(writer, report)?,
    }
    Ok(file_path)
}

/// Writes a ranking of complete layouts (cheapest first) to a timestamped file
pub fn export_ranking(
    ranking: &[RankedLayout],
    output_dir: Option<&Path>,
    format: ReportFormat,
) -> Result<PathBuf> {
    let (file_path, writer) = create_output(RANKING_FILE_PREFIX, output_dir, format)?;
    match format {
        ReportFormat::Csv => {
            let mut wtr = csv_writer(writer);
            wtr.write_record(["Rank", "Layout", "Cost"])?;
            for (i, entry) in ranking.iter().enumerate() {
                let rank = (i + 1).to_string();
                let layout = entry.placement.to_slot_sequence();
                let cost = entry.cost.to_string();
                wtr.write_record([rank.as_str(), layout.as_str(), cost.as_str()])?;
            }
            wtr.flush()?;
        }
        ReportFormat::Json => write_json(writer, &RankingBody { layouts: ranking })?,
    }
    Ok(file_path)
}

fn create_output(
    prefix: &str,
    output_dir: Option<&Path>,
    format: ReportFormat,
) -> Result<(PathBuf, BufWriter<File>)> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let filename = format!("{prefix}_{timestamp}.{}", format.extension());

    let file_path = if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| LayoutError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        dir.join(&filename)
    } else {
        filename.into()
    };

    let file = File::create(&file_path).map_err(|e| LayoutError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;
    Ok((file_path, BufWriter::new(file)))
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }
    builder.from_writer(writer)
}

fn write_json<W: Write, T: Serialize>(mut writer: W, body: &T) -> Result<()> {
    let stamped = Stamped {
        generated_at: Local::now().to_rfc3339(),
        body,
    };
    serde_json::to_writer_pretty(&mut writer, &stamped)?;
    writer.flush()?;
    Ok(())
}
