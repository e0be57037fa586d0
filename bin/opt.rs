use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ldsgen::config::{SequenceConfig, SequenceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// The generator to sample from, e.g. `halton` or `sphere_n`
    #[clap(value_name = "KIND", required_unless_present = "config")]
    pub kind: Option<SequenceKind>,
    /// Comma-separated bases, one per coordinate stream
    #[clap(long, short, value_delimiter = ',')]
    pub bases: Vec<u64>,
    /// Comma-separated digit counts for the fixed-point generators
    #[clap(long, value_delimiter = ',')]
    pub scales: Vec<u32>,
    /// Index to start from
    #[clap(long, short, default_value = "0")]
    pub seed: u64,
    /// Number of points to print
    #[clap(long = "count", short = 'n', default_value = "10")]
    pub count: usize,
    /// Output format
    #[clap(long, short, value_enum, default_value = "csv")]
    pub format: Format,
    /// Path to a YAML generator config. Overrides KIND, bases, scales, and
    /// seed.
    #[clap(long, short, conflicts_with = "kind")]
    pub config: Option<PathBuf>,
}

impl SampleArgs {
    /// The generator config described by the command line arguments, if
    /// no config file was given
    pub fn sequence_config(&self) -> Option<SequenceConfig> {
        self.kind.map(|kind| {
            SequenceConfig::new(kind)
                .bases(self.bases.clone())
                .scales(self.scales.clone())
                .seed(self.seed)
        })
    }
}

#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Sphere table dimension
    #[clap(value_name = "N", allow_negative_numbers = true)]
    pub n: i64,
}

#[derive(Parser, Debug)]
#[clap(
    name = "ldsgen",
    about = "Low-discrepancy sequence generator",
    version
)]
pub enum Opt {
    /// Print points from a low-discrepancy sequence
    #[clap(name = "sample")]
    Sample(SampleArgs),
    /// Print the inverse-CDF table used for sphere dimension N
    #[clap(name = "table")]
    Table(TableArgs),
}
