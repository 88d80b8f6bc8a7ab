// blastn.rs - Nucleotide search of an assembly against the VFDB

use crate::core::hit::outfmt_arg;
use crate::logging;
use crate::search::tools::{run_tool, BlastTools};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension of the raw blastn output before activator classification
pub const RAW_EXTENSION: &str = "VFDB_BLASTn";

/// Where the raw hits for `infile` are written inside `outdir`
pub fn raw_hits_path(infile: &Path, outdir: &Path) -> PathBuf {
    let name = infile.file_name().map(PathBuf::from).unwrap_or_default();
    outdir.join(name).with_extension(RAW_EXTENSION)
}

/// Command line arguments passed to blastn
pub fn blastn_args(infile: &Path, database: &Path, out: &Path, threads: Option<usize>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-db".into(),
        database.as_os_str().to_os_string(),
        "-query".into(),
        infile.as_os_str().to_os_string(),
        "-outfmt".into(),
        outfmt_arg().into(),
        "-out".into(),
        out.as_os_str().to_os_string(),
    ];
    if let Some(n) = threads {
        args.push("-num_threads".into());
        args.push(n.to_string().into());
    }
    args
}

/// Run blastn and write tabular hits to `out`
pub fn run_blastn(infile: &Path, database: &Path, out: &Path, tools: &BlastTools) -> Result<(), String> {
    logging::info(format!("Running blastn on {}", infile.display()));
    run_tool(
        tools.blastn.as_os_str(),
        blastn_args(infile, database, out, tools.threads),
        "blastn",
    )?;

    if !out.exists() {
        return Err(format!(
            "blastn finished but produced no output at '{}'",
            out.display()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_hits_path_replaces_extension() {
        let path = raw_hits_path(Path::new("/in/2019-SEQ-0042.fasta"), Path::new("/out"));
        assert_eq!(path, PathBuf::from("/out/2019-SEQ-0042.VFDB_BLASTn"));
    }

    #[test]
    fn test_raw_hits_path_keeps_inner_dots() {
        let path = raw_hits_path(Path::new("asm.v2.fna"), Path::new("res"));
        assert_eq!(path, PathBuf::from("res/asm.v2.VFDB_BLASTn"));
    }

    #[test]
    fn test_blastn_args_without_threads() {
        let args = blastn_args(
            Path::new("q.fasta"),
            Path::new("db/vfdb.fas"),
            Path::new("q.VFDB_BLASTn"),
            None,
        );
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "-db",
                "db/vfdb.fas",
                "-query",
                "q.fasta",
                "-outfmt",
                "6 qseqid stitle slen length qstart qend sstrand pident score",
                "-out",
                "q.VFDB_BLASTn",
            ]
        );
    }

    #[test]
    fn test_blastn_args_with_threads() {
        let args = blastn_args(Path::new("q"), Path::new("d"), Path::new("o"), Some(8));
        let tail: Vec<String> = args[args.len() - 2..]
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(tail, vec!["-num_threads", "8"]);
    }
}
