// mod.rs - Tally, chart and table outputs

pub mod chart;
pub mod export;
pub mod pdf;
pub mod png;
pub mod tally;

// Re-export main types for convenience
pub use chart::ChartLayout;
pub use export::write_tally_tsv;
pub use pdf::render_pdf;
pub use png::render_png;
pub use tally::{sample_name, TargetTally, TARGET_VOCABULARY};

use crate::logging;
use std::path::{Path, PathBuf};

/// Files written for one sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub pdf: PathBuf,
    pub png: PathBuf,
    pub tsv: PathBuf,
}

impl ReportPaths {
    /// `<sample>_TargetCheck.{pdf,png,tsv}` inside `dir`
    pub fn for_sample(dir: &Path, sample: &str) -> Self {
        let stem = format!("{}_TargetCheck", sample);
        Self {
            pdf: dir.join(format!("{}.pdf", stem)),
            png: dir.join(format!("{}.png", stem)),
            tsv: dir.join(format!("{}.tsv", stem)),
        }
    }
}

/// Export the tally table and render the chart twice next to `filtered`
pub fn write_report(filtered: &Path, tally: &TargetTally, dpi: u32) -> Result<ReportPaths, String> {
    let sample = sample_name(filtered);
    let dir = filtered.parent().unwrap_or_else(|| Path::new(""));
    let paths = ReportPaths::for_sample(dir, &sample);

    // The table goes first so the counts survive a chart failure
    write_tally_tsv(&paths.tsv, tally)?;
    logging::info(format!(
        "Created CSV virulence activator count data at {}",
        paths.tsv.display()
    ));

    let layout = ChartLayout::new(&sample, tally)?;
    render_pdf(&layout, &paths.pdf)?;
    logging::info(format!("Created plot at {}", paths.pdf.display()));
    render_png(&layout, &paths.png, dpi)?;
    logging::info(format!("Created plot at {}", paths.png.display()));
    Ok(paths)
}
