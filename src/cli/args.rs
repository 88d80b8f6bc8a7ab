// args.rs - Command line arguments definition

use argh::FromArgs;

pub const DEFAULT_BLASTN: &str = "blastn";
pub const DEFAULT_MAKEBLASTDB: &str = "makeblastdb";

#[derive(FromArgs, Debug, Clone, PartialEq)]
/// vfdbquery - Search an assembly against the Virulence Factor Database (VFDB)
/// and chart the detected virulence genes
pub struct Args {
    /// FASTA file that you want to search against the VFDB
    #[argh(option, short = 'i')]
    pub infile: Option<String>,

    /// path to the Virulence Factor Database (VFDB) FASTA
    #[argh(option, short = 'd')]
    pub database: Option<String>,

    /// output directory (default: directory containing --infile)
    #[argh(option, short = 'o')]
    pub outdir: Option<String>,

    /// blastn executable (default: blastn)
    #[argh(option, default = "String::from(DEFAULT_BLASTN)")]
    pub blastn: String,

    /// makeblastdb executable (default: makeblastdb)
    #[argh(option, default = "String::from(DEFAULT_MAKEBLASTDB)")]
    pub makeblastdb: String,

    /// number of blastn threads (default: blastn's own default)
    #[argh(option, short = 't')]
    pub threads: Option<usize>,

    /// minimum alignment length over reference length, 0.0-1.0 (default: 0.7)
    #[argh(option, default = "0.7")]
    pub min_coverage: f64,

    /// minimum percent identity, 0.0-100.0 (default: 70.0)
    #[argh(option, default = "70.0")]
    pub min_identity: f64,

    /// resolution of the PNG chart in dots per inch (default: 300)
    #[argh(option, default = "300")]
    pub dpi: u32,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// validate inputs without running any searches (dry run)
    #[argh(switch)]
    pub dry_run: bool,
}
