// hit.rs - blastn tabular hit record

/// Columns requested from blastn with `-outfmt 6`, in output order
pub const HIT_COLUMNS: [&str; 9] = [
    "qseqid", "stitle", "slen", "length", "qstart", "qend", "sstrand", "pident", "score",
];

/// The `-outfmt` argument matching [`HIT_COLUMNS`]
pub fn outfmt_arg() -> String {
    format!("6 {}", HIT_COLUMNS.join(" "))
}

/// Header line written at the top of filtered hit files
pub fn header_line() -> String {
    HIT_COLUMNS.join("\t")
}

/// A single alignment between a query contig and a reference gene
#[derive(Debug, Clone, PartialEq)]
pub struct BlastHit {
    pub qseqid: String,
    pub stitle: String,
    pub slen: u64,
    pub length: u64,
    pub qstart: u64,
    pub qend: u64,
    pub sstrand: String,
    pub pident: f64,
    pub score: f64,
}

impl BlastHit {
    /// Parse one tab-separated line; `line_num` is 1-based and only used in errors
    pub fn parse_line(line: &str, line_num: usize) -> Result<Self, String> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if fields.len() < HIT_COLUMNS.len() {
            return Err(format!(
                "Line {} has {} columns, expected {}",
                line_num,
                fields.len(),
                HIT_COLUMNS.len()
            ));
        }

        Ok(Self {
            qseqid: fields[0].to_string(),
            stitle: fields[1].to_string(),
            slen: parse_field(fields[2], "slen", line_num)?,
            length: parse_field(fields[3], "length", line_num)?,
            qstart: parse_field(fields[4], "qstart", line_num)?,
            qend: parse_field(fields[5], "qend", line_num)?,
            sstrand: fields[6].to_string(),
            pident: parse_field(fields[7], "pident", line_num)?,
            score: parse_field(fields[8], "score", line_num)?,
        })
    }

    /// Fraction of the reference gene covered by the alignment
    pub fn coverage(&self) -> f64 {
        if self.slen == 0 {
            return 0.0;
        }
        self.length as f64 / self.slen as f64
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, column: &str, line_num: usize) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid {} value '{}' at line {}", column, raw, line_num))
}
