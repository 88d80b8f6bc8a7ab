// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{DEFAULT_BLASTN, DEFAULT_MAKEBLASTDB};
use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    ///
    /// Config values fill options that are unset or still equal to their
    /// defaults. argh cannot tell `--dpi 300` from no `--dpi`, so an explicit
    /// CLI value equal to the default is also replaced by the config.
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.infile.is_none() {
            self.infile = config.infile;
        }
        if self.database.is_none() {
            self.database = config.database;
        }
        if self.outdir.is_none() {
            self.outdir = config.outdir;
        }

        // External tools (only override defaults, not explicit CLI values)
        if self.blastn == DEFAULT_BLASTN {
            if let Some(blastn) = config.blastn {
                self.blastn = blastn;
            }
        }
        if self.makeblastdb == DEFAULT_MAKEBLASTDB {
            if let Some(makeblastdb) = config.makeblastdb {
                self.makeblastdb = makeblastdb;
            }
        }
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Hit filter (only override defaults)
        if self.min_coverage == 0.7 {
            if let Some(min_coverage) = config.min_coverage {
                self.min_coverage = min_coverage;
            }
        }
        if self.min_identity == 70.0 {
            if let Some(min_identity) = config.min_identity {
                self.min_identity = min_identity;
            }
        }

        // Chart
        if self.dpi == 300 {
            if let Some(dpi) = config.dpi {
                self.dpi = dpi;
            }
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
