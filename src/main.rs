//! # paradedup
//!
//! Removes parallel duplicates (identical sentence pairs) from a line-aligned bilingual corpus.
//!
//! ```sh
//! paradedup 0.1.0
//! parallel-duplicate removal for aligned bilingual corpora.
//!
//! USAGE:
//!     paradedup <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     dedup         Remove parallel duplicates from a corpus pair
//!     duplicates    List the duplicate lines of a single corpus file
//!     help          Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
use paradedup::error::Error;
use paradedup::processing::duplicates::list_duplicates;
use paradedup::processing::ParallelDedup;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Paradedup::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Paradedup::Dedup(d) => {
            let mut dedup = ParallelDedup::new(d.src_a, d.src_b, d.threads).with_strategy(d.strategy);
            if d.dst_a.is_some() || d.dst_b.is_some() {
                let (default_a, default_b) = dedup.destinations();
                let dst_a = d.dst_a.unwrap_or_else(|| default_a.to_path_buf());
                let dst_b = d.dst_b.unwrap_or_else(|| default_b.to_path_buf());
                dedup = dedup.with_destinations(dst_a, dst_b);
            }

            let report = dedup.run()?;
            report.log_summary();
            if let Some(path) = d.report {
                info!("writing report to {:?}", path);
                report.write_json(&path)?;
            }
        }

        cli::Paradedup::Duplicates(d) => {
            list_duplicates(&d.src, &d.dst, d.strategy)?;
        }
    };
    Ok(())
}
