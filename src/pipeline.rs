// pipeline.rs - Index, search, filter, tally and report for one assembly

use crate::core::{FilterSummary, HitFilter};
use crate::logging;
use crate::report::{self, ReportPaths, TargetTally};
use crate::search::{self, Activation, BlastTools, DatabaseStatus};
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

/// Resolved settings for a single query run
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySettings {
    pub infile: PathBuf,
    pub database: PathBuf,
    /// Output directory; defaults to the directory holding `infile`
    pub outdir: Option<PathBuf>,
    pub tools: BlastTools,
    pub filter: HitFilter,
    pub dpi: u32,
}

impl QuerySettings {
    pub fn new(infile: PathBuf, database: PathBuf) -> Self {
        Self {
            infile,
            database,
            outdir: None,
            tools: BlastTools::default(),
            filter: HitFilter::default(),
            dpi: report::png::DEFAULT_DPI,
        }
    }

    /// Directory all outputs are written to
    pub fn output_dir(&self) -> PathBuf {
        match &self.outdir {
            Some(dir) => dir.clone(),
            None => match self.infile.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            },
        }
    }
}

/// Filtered hits and their tally
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredHits {
    pub path: PathBuf,
    pub summary: FilterSummary,
    pub tally: TargetTally,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryReport {
    pub database: DatabaseStatus,
    pub active_hits: PathBuf,
    pub filtered: FilteredHits,
    pub outputs: ReportPaths,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// No activator marker was hit; the run stopped after the search
    Inactive { hits: PathBuf },
    Complete(QueryReport),
}

/// Virulence factor query of one assembly
pub struct VfdbQuery {
    settings: QuerySettings,
}

impl VfdbQuery {
    pub fn new(settings: QuerySettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    pub fn run(&self) -> Result<QueryOutcome, String> {
        logging::info("Started VDB Query");

        let (database, activation) = self.search()?;
        let active = match activation {
            Activation::Active(path) => path,
            Activation::Inactive(path) => {
                logging::info("No virulence activators found. Quitting.");
                logging::info(format!("See potential virulence factors in {}", path.display()));
                return Ok(QueryOutcome::Inactive { hits: path });
            }
        };

        let filtered = self.filter_hits(&active)?;
        let outputs = report::write_report(&filtered.path, &filtered.tally, self.settings.dpi)?;

        logging::info("Process Complete");
        Ok(QueryOutcome::Complete(QueryReport {
            database,
            active_hits: active,
            filtered,
            outputs,
        }))
    }

    /// Ensure the index exists, run blastn and classify the raw hits
    pub fn search(&self) -> Result<(DatabaseStatus, Activation), String> {
        let settings = &self.settings;
        let outdir = settings.output_dir();
        create_dir_all(&outdir).map_err(|e| {
            format!("Failed to create output directory '{}': {}", outdir.display(), e)
        })?;

        let status = search::ensure_database(&settings.database, &settings.tools)?;
        let raw = search::raw_hits_path(&settings.infile, &outdir);
        search::run_blastn(&settings.infile, &settings.database, &raw, &settings.tools)?;
        let activation = search::classify(&raw)?;
        Ok((status, activation))
    }

    /// Apply the coverage/identity filter to active hits and tally the result
    pub fn filter_hits(&self, active: &Path) -> Result<FilteredHits, String> {
        let filter = self.settings.filter;
        let path = HitFilter::filtered_path(active);
        let summary = filter.filter_file(active, &path)?;
        logging::info(format!(
            "Kept {} of {} hits (coverage >= {}, identity >= {}%)",
            summary.kept, summary.total, filter.min_coverage, filter.min_identity
        ));

        let tally = TargetTally::from_filtered(&path)?;
        Ok(FilteredHits {
            path,
            summary,
            tally,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    const ACTIVE_HITS: &str = "\
contig_1\tplcR Transcriptional activator\t858\t858\t10\t867\tplus\t99.53\t1570
contig_1\tpapR Signal peptide\t147\t147\t900\t1046\tplus\t100.000\t270
contig_4\tNheA BC1809 Non-hemolytic enterotoxin lytic component L2\t1161\t1161\t1\t1161\tminus\t97.0\t2000
contig_4\tNheB BC1810 Non-hemolytic enterotoxin lytic component L1\t1209\t600\t1\t600\tminus\t97.0\t1000
contig_7\tCytK BC1110 Cytotoxin K\t1011\t1011\t1\t1011\tplus\t68.5\t900
";

    const INACTIVE_HITS: &str = "\
contig_4\tNheA BC1809 Non-hemolytic enterotoxin lytic component L2\t1161\t1161\t1\t1161\tminus\t97.0\t2000
";

    fn write_script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{}", body)).unwrap();
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    /// Fake BLAST+ tools: makeblastdb touches the index files, blastn copies canned hits to -out
    fn setup(hits: &str) -> (TempDir, QuerySettings) {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        let canned = root.join("canned.tsv");
        fs::write(&canned, hits).unwrap();

        let blastn = root.join("blastn");
        write_script(
            &blastn,
            &format!(
                "while [ $# -gt 0 ]; do\n  if [ \"$1\" = \"-out\" ]; then out=\"$2\"; fi\n  shift\ndone\ncat '{}' > \"$out\"\n",
                canned.display()
            ),
        );
        let makeblastdb = root.join("makeblastdb");
        write_script(
            &makeblastdb,
            "while [ $# -gt 0 ]; do\n  if [ \"$1\" = \"-in\" ]; then db=\"$2\"; fi\n  shift\ndone\ntouch \"$db.nhr\" \"$db.nin\" \"$db.nsq\"\n",
        );

        fs::create_dir(root.join("db")).unwrap();
        let database = root.join("db").join("VFDB_setB_nt.fas");
        fs::write(&database, ">VFG000001 plcR\nACGT\n").unwrap();
        let infile = root.join("2019-SEQ-0042.fasta");
        fs::write(&infile, ">contig_1\nACGTACGT\n").unwrap();

        let mut settings = QuerySettings::new(infile, database);
        settings.tools = BlastTools {
            blastn,
            makeblastdb,
            threads: Some(2),
        };
        (dir, settings)
    }

    #[test]
    fn test_output_dir_defaults_to_input_directory() {
        let settings = QuerySettings::new("/data/run1/s.fasta".into(), "/db/v.fas".into());
        assert_eq!(settings.output_dir(), PathBuf::from("/data/run1"));

        let bare = QuerySettings::new("s.fasta".into(), "v.fas".into());
        assert_eq!(bare.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_search_builds_index_then_detects_it() {
        let (dir, settings) = setup(ACTIVE_HITS);
        let query = VfdbQuery::new(settings);

        let (status, activation) = query.search().unwrap();
        assert_eq!(status, DatabaseStatus::Created);
        assert_eq!(
            activation,
            Activation::Active(dir.path().join("2019-SEQ-0042.VFDB_Active"))
        );

        let (status, _) = query.search().unwrap();
        assert_eq!(status, DatabaseStatus::Existing);
    }

    #[test]
    fn test_run_stops_without_activators() {
        let (dir, settings) = setup(INACTIVE_HITS);
        let outcome = VfdbQuery::new(settings).run().unwrap();

        let hits = dir.path().join("2019-SEQ-0042.VFDB_NOT-Active");
        assert_eq!(outcome, QueryOutcome::Inactive { hits: hits.clone() });
        assert_eq!(fs::read_to_string(&hits).unwrap(), INACTIVE_HITS);
        assert!(!dir.path().join("2019-SEQ-0042.VFDB_BLASTn").exists());
        assert!(!dir.path().join("2019-SEQ-0042_TargetCheck.tsv").exists());
    }

    #[test]
    fn test_filter_hits_after_search() {
        let (dir, mut settings) = setup(ACTIVE_HITS);
        let outdir = dir.path().join("results");
        settings.outdir = Some(outdir.clone());
        let query = VfdbQuery::new(settings);

        let (_, activation) = query.search().unwrap();
        assert_eq!(activation.path(), outdir.join("2019-SEQ-0042.VFDB_Active"));

        let filtered = query.filter_hits(activation.path()).unwrap();
        assert_eq!(filtered.path, outdir.join("2019-SEQ-0042.VFDB_Active_Filtered"));
        assert_eq!(filtered.summary, FilterSummary { total: 5, kept: 3 });
        assert_eq!(filtered.tally.get("plcR Transcriptional activator"), Some(1));
        assert_eq!(filtered.tally.get("papR Signal peptide"), Some(1));
        assert_eq!(
            filtered.tally.get("NheA BC1809 Non-hemolytic enterotoxin lytic component L2"),
            Some(1)
        );
        assert_eq!(
            filtered.tally.get("NheB BC1810 Non-hemolytic enterotoxin lytic component L1"),
            Some(0)
        );
        assert_eq!(filtered.tally.get("CytK BC1110 Cytotoxin K"), Some(0));
    }

    #[test]
    fn test_failed_blastn_is_an_error() {
        let (dir, mut settings) = setup(ACTIVE_HITS);
        let broken = dir.path().join("broken-blastn");
        write_script(&broken, "echo 'BLAST query/options error' >&2\nexit 1\n");
        settings.tools.blastn = broken;

        let err = VfdbQuery::new(settings).run().unwrap_err();
        assert!(err.contains("blastn exited with"));
        assert!(err.contains("BLAST query/options error"));
    }

    #[test]
    fn test_run_writes_all_outputs() {
        let (dir, settings) = setup(ACTIVE_HITS);
        let outcome = VfdbQuery::new(settings).run().unwrap();

        let report = match outcome {
            QueryOutcome::Complete(report) => report,
            other => panic!("expected a complete run, got {:?}", other),
        };
        assert_eq!(report.database, DatabaseStatus::Created);
        assert!(report.outputs.pdf.exists());
        assert!(report.outputs.png.exists());
        assert!(report.outputs.tsv.exists());
        assert_eq!(
            report.outputs.tsv,
            dir.path().join("2019-SEQ-0042_TargetCheck.tsv")
        );
    }
}
