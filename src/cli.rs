use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;

use crate::config::PipelineConfig;
use crate::constants::defaults;
use crate::pipeline;

#[derive(Debug, Parser)]
#[command(
    name = "listfeat",
    version,
    disable_help_subcommand = true,
    about = "Preprocess labeled listings into a ranked vocabulary and ARFF features",
    long_about = "Preprocess a labeled listing corpus (URL, class label, free text per line) into normalized records, rank the corpus vocabulary by frequency, and write a delimited summary plus an optional ARFF feature matrix."
)]
struct ListfeatCli {
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Labeled listings, one per line"
    )]
    input: PathBuf,
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = defaults::OUTPUT_FILE,
        help = "Destination for the vocabulary/record summary"
    )]
    output: PathBuf,
    #[arg(
        short = 'a',
        long = "arff",
        value_name = "FILE",
        help = "Optional destination for the ARFF feature matrix"
    )]
    arff: Option<PathBuf>,
    #[arg(
        short = 'n',
        long = "ngrams",
        value_name = "FILE",
        help = "Phrase dictionary, one phrase per line"
    )]
    ngrams: PathBuf,
    #[arg(
        short = 's',
        long = "stopwords",
        value_name = "FILE",
        help = "Stopword dictionary, one word per line"
    )]
    stopwords: PathBuf,
    #[arg(
        short = 'w',
        long = "vocab-limit",
        value_name = "N",
        default_value_t = defaults::VOCAB_LIMIT,
        help = "Cap on ranked terms carried into outputs"
    )]
    vocab_limit: usize,
}

impl ListfeatCli {
    fn into_config(self) -> PipelineConfig {
        let config = PipelineConfig::new(self.input, self.ngrams, self.stopwords)
            .with_output(self.output)
            .with_vocab_limit(self.vocab_limit);
        match self.arff {
            Some(path) => config.with_arff(path),
            None => config,
        }
    }
}

/// Run the CLI with explicit args (the first item is the binary name).
///
/// Initializes the `RUST_LOG`-filtered subscriber, parses flags, runs the
/// pipeline, and prints a short result summary to stdout.
pub fn run<I>(args: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<ListfeatCli, _>(args)? else {
        return Ok(());
    };

    let config = cli.into_config();
    let summary = pipeline::run(&config)?;

    println!(
        "Preprocessed {} listings from {}",
        summary.records,
        config.input.display()
    );
    println!(
        "Ranked {} distinct terms; wrote the top {} to {}",
        summary.distinct_terms,
        summary.vocabulary_written,
        config.output.display()
    );
    if let (Some(terms), Some(path)) = (summary.arff_terms, &config.arff) {
        println!(
            "Wrote the feature matrix ({} term attributes) to {}",
            terms,
            path.display()
        );
    }

    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn cli_maps_flags_onto_the_config() {
        let cli = ListfeatCli::try_parse_from([
            "listfeat",
            "-i",
            "listings.txt",
            "-n",
            "ngrams.txt",
            "-s",
            "stopwords.txt",
            "--arff",
            "features.arff",
            "--vocab-limit",
            "25",
        ])
        .expect("parse");
        let config = cli.into_config();
        assert_eq!(config.input, PathBuf::from("listings.txt"));
        assert_eq!(config.ngrams, PathBuf::from("ngrams.txt"));
        assert_eq!(config.stopwords, PathBuf::from("stopwords.txt"));
        assert_eq!(config.arff.as_deref(), Some(Path::new("features.arff")));
        assert_eq!(config.vocab_limit, 25);
    }

    #[test]
    fn cli_defaults_match_the_documented_surface() {
        let cli = ListfeatCli::try_parse_from([
            "listfeat",
            "-i",
            "listings.txt",
            "-n",
            "ngrams.txt",
            "-s",
            "stopwords.txt",
        ])
        .expect("parse");
        let config = cli.into_config();
        assert_eq!(config.output, PathBuf::from(defaults::OUTPUT_FILE));
        assert_eq!(config.vocab_limit, defaults::VOCAB_LIMIT);
        assert!(config.arff.is_none());
    }

    #[test]
    fn cli_accepts_short_flags_for_every_option() {
        let cli = ListfeatCli::try_parse_from([
            "listfeat", "-i", "l.txt", "-o", "out.txt", "-a", "f.arff", "-n", "n.txt", "-s",
            "s.txt", "-w", "10",
        ])
        .expect("parse");
        let config = cli.into_config();
        assert_eq!(config.output, PathBuf::from("out.txt"));
        assert_eq!(config.arff, Some(PathBuf::from("f.arff")));
        assert_eq!(config.vocab_limit, 10);
    }

    #[test]
    fn cli_requires_the_input_flag() {
        let err = ListfeatCli::try_parse_from(["listfeat", "-n", "n.txt", "-s", "s.txt"])
            .expect_err("missing input");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
