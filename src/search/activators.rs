// activators.rs - Virulence activator marker check on raw hits

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reference titles of the plcR/papR regulators; one of these must be hit
/// for the virulence regulon to be considered active.
pub const ACTIVATOR_MARKERS: [&str; 2] = ["plcR Transcriptional activator", "papR Signal peptide"];

pub const ACTIVE_EXTENSION: &str = "VFDB_Active";
pub const INACTIVE_EXTENSION: &str = "VFDB_NOT-Active";

/// Raw hits after classification, pointing at the renamed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Active(PathBuf),
    Inactive(PathBuf),
}

impl Activation {
    pub fn path(&self) -> &Path {
        match self {
            Activation::Active(p) | Activation::Inactive(p) => p,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Activation::Active(_))
    }
}

/// True if any hit's subject title (second column) is an activator marker
pub fn has_activator<I, S>(lines: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().any(|line| {
        line.as_ref()
            .split('\t')
            .nth(1)
            .map(|title| ACTIVATOR_MARKERS.contains(&title))
            .unwrap_or(false)
    })
}

/// Rename the raw hit file according to whether an activator was found
pub fn classify(raw: &Path) -> Result<Activation, String> {
    let file = File::open(raw)
        .map_err(|e| format!("Failed to open blastn output '{}': {}", raw.display(), e))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .map_err(|e| format!("Failed to read blastn output '{}': {}", raw.display(), e))?;

    let (activation, target) = if has_activator(&lines) {
        let target = raw.with_extension(ACTIVE_EXTENSION);
        (Activation::Active(target.clone()), target)
    } else {
        let target = raw.with_extension(INACTIVE_EXTENSION);
        (Activation::Inactive(target.clone()), target)
    };

    fs::rename(raw, &target).map_err(|e| {
        format!(
            "Failed to rename '{}' to '{}': {}",
            raw.display(),
            target.display(),
            e
        )
    })?;
    Ok(activation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_activator_exact_match_only() {
        assert!(has_activator(["c1\tpapR Signal peptide\t147\t147\t1\t147\tplus\t100.0\t270"]));
        assert!(!has_activator(["c1\tpapR Signal peptide precursor\t147\t147"]));
        assert!(!has_activator(["c1\tplcr transcriptional activator\t1"]));
    }

    #[test]
    fn test_has_activator_ignores_short_lines() {
        let lines = vec!["".to_string(), "just-one-column".to_string()];
        assert!(!has_activator(&lines));
    }

    #[test]
    fn test_marker_only_counts_in_title_column() {
        assert!(!has_activator(["plcR Transcriptional activator\tHlyII BC3523 Hemolysin II"]));
    }

    #[test]
    fn test_classify_active() {
        let dir = TempDir::new().unwrap();
        let raw = dir.path().join("s1.VFDB_BLASTn");
        fs::write(
            &raw,
            "c1\tCytK BC1110 Cytotoxin K\t1011\t1011\t1\t1011\tplus\t99\t1800\n\
             c2\tplcR Transcriptional activator\t858\t858\t1\t858\tplus\t99\t1500\n",
        )
        .unwrap();

        let activation = classify(&raw).unwrap();
        assert!(activation.is_active());
        assert_eq!(activation.path(), dir.path().join("s1.VFDB_Active"));
        assert!(!raw.exists());
        assert!(activation.path().exists());
    }

    #[test]
    fn test_classify_inactive() {
        let dir = TempDir::new().unwrap();
        let raw = dir.path().join("s2.VFDB_BLASTn");
        fs::write(&raw, "c1\tCytK BC1110 Cytotoxin K\t1011\t1011\t1\t1011\tplus\t99\t1800\n").unwrap();

        let activation = classify(&raw).unwrap();
        assert_eq!(
            activation,
            Activation::Inactive(dir.path().join("s2.VFDB_NOT-Active"))
        );
        assert!(activation.path().exists());
    }

    #[test]
    fn test_classify_empty_output_is_inactive() {
        let dir = TempDir::new().unwrap();
        let raw = dir.path().join("s3.VFDB_BLASTn");
        fs::write(&raw, "").unwrap();
        assert!(!classify(&raw).unwrap().is_active());
    }

    #[test]
    fn test_classify_missing_file() {
        let err = classify(Path::new("/nonexistent/x.VFDB_BLASTn")).unwrap_err();
        assert!(err.contains("Failed to open blastn output"));
    }
}
