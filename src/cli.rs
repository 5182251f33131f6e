//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use paradedup::processing::dedup::IndexStrategy;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "paradedup",
    about = "parallel-duplicate removal for aligned bilingual corpora."
)]
/// Holds every command that is callable by the `paradedup` command.
pub enum Paradedup {
    #[structopt(about = "Remove parallel duplicates from a corpus pair")]
    Dedup(Dedup),
    #[structopt(about = "List the duplicate lines of a single corpus file")]
    Duplicates(Duplicates),
}

#[derive(Debug, StructOpt)]
/// Dedup command and parameters.
///
/// ```sh
/// USAGE:
///     paradedup dedup [OPTIONS] <src-a> <src-b>
///
/// OPTIONS:
///     -t, --threads <threads>      number of workers [default: 1]
///         --dst-a <dst-a>          destination of corpus a
///         --dst-b <dst-b>          destination of corpus b
///         --strategy <strategy>    duplicate indexing strategy (hash|sort) [default: hash]
///         --report <report>        write a json report to this path
/// ```
pub struct Dedup {
    #[structopt(parse(from_os_str), help = "corpus a (e.g. corpus.de)")]
    pub src_a: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus b, line-aligned with a (e.g. corpus.es)")]
    pub src_b: PathBuf,
    #[structopt(
        short = "t",
        long = "threads",
        default_value = "1",
        help = "number of workers"
    )]
    pub threads: usize,
    #[structopt(
        long = "dst-a",
        parse(from_os_str),
        help = "destination of corpus a. Defaults to <stem>.dupl_rem.<ext>"
    )]
    pub dst_a: Option<PathBuf>,
    #[structopt(
        long = "dst-b",
        parse(from_os_str),
        help = "destination of corpus b. Defaults to <stem>.dupl_rem.<ext>"
    )]
    pub dst_b: Option<PathBuf>,
    #[structopt(
        long = "strategy",
        default_value = "hash",
        help = "duplicate indexing strategy (hash|sort)"
    )]
    pub strategy: IndexStrategy,
    #[structopt(
        long = "report",
        parse(from_os_str),
        help = "write a json report to this path"
    )]
    pub report: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Duplicates command and parameters.
pub struct Duplicates {
    #[structopt(parse(from_os_str), help = "corpus file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "listing destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "strategy",
        default_value = "hash",
        help = "duplicate indexing strategy (hash|sort)"
    )]
    pub strategy: IndexStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_defaults() {
        let opt = Paradedup::from_iter_safe(["paradedup", "dedup", "c.de", "c.es"]).unwrap();
        match opt {
            Paradedup::Dedup(d) => {
                assert_eq!(d.src_a, PathBuf::from("c.de"));
                assert_eq!(d.threads, 1);
                assert_eq!(d.strategy, IndexStrategy::Hash);
                assert!(d.dst_a.is_none());
                assert!(d.report.is_none());
            }
            _ => panic!("expected dedup"),
        }
    }

    #[test]
    fn dedup_options() {
        let opt = Paradedup::from_iter_safe([
            "paradedup",
            "dedup",
            "c.de",
            "c.es",
            "-t",
            "8",
            "--strategy",
            "sort",
            "--dst-a",
            "out.de",
        ])
        .unwrap();
        match opt {
            Paradedup::Dedup(d) => {
                assert_eq!(d.threads, 8);
                assert_eq!(d.strategy, IndexStrategy::Sort);
                assert_eq!(d.dst_a, Some(PathBuf::from("out.de")));
                assert!(d.dst_b.is_none());
            }
            _ => panic!("expected dedup"),
        }
    }

    #[test]
    fn bad_strategy() {
        assert!(
            Paradedup::from_iter_safe(["paradedup", "duplicates", "c.de", "out", "--strategy", "uniq"])
                .is_err()
        );
    }
}
