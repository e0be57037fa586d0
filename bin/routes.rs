use std::io::{self, BufWriter, Write};

use ldsgen::config::{Row, SequenceConfig};
use ldsgen::table::TableCache;
use ldsgen::Sequence;
use log::info;

use crate::opt;

fn write_rows<W: Write>(
    mut out: W,
    rows: &[Row],
    format: opt::Format,
) -> io::Result<()> {
    match format {
        opt::Format::Csv => {
            let mut writer =
                csv::WriterBuilder::new().has_headers(false).from_writer(out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()
        }
        opt::Format::Json => {
            serde_json::to_writer(&mut out, rows)?;
            writeln!(out)?;
            out.flush()
        }
    }
}

fn write_stdout(rows: &[Row], format: opt::Format) -> io::Result<()> {
    let stdout = io::stdout();
    write_rows(BufWriter::new(stdout.lock()), rows, format)
}

pub fn sample(cmd: opt::SampleArgs) -> i32 {
    let config = match (&cmd.config, cmd.sequence_config()) {
        (Some(path), _) => match SequenceConfig::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Could not load config {}: {err}", path.display());
                return 1;
            }
        },
        (None, Some(config)) => config,
        (None, None) => {
            eprintln!("No generator provided.");
            return 1;
        }
    };

    let seq = match config.build() {
        Ok(seq) => seq,
        Err(err) => {
            eprintln!("Could not build {} generator: {err}", config.kind);
            return 1;
        }
    };

    info!(
        "sampling {} points from {} with bases {:?} starting at {}",
        cmd.count, config.kind, config.bases, config.seed
    );

    let rows = seq.batch(cmd.count);
    if let Err(err) = write_stdout(&rows, cmd.format) {
        eprintln!("Failed to write output: {err}");
        return 1;
    }
    0
}

pub fn table(cmd: opt::TableArgs) -> i32 {
    let cache = TableCache::global();
    let table = match cache.get_tp(cmd.n) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    info!("printing inverse-CDF table for n = {}", cmd.n);

    let rows: Vec<Row> = cache
        .grid()
        .iter()
        .zip(table.iter())
        .map(|(&angle, &value)| Row::Real(vec![angle, value]))
        .collect();

    if let Err(err) = write_stdout(&rows, opt::Format::Csv) {
        eprintln!("Failed to write output: {err}");
        return 1;
    }
    0
}
