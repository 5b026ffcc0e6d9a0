//! Command implementation for the jargon CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use log::info;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::{DistinctFilter, Filter, LemmasFilter, SynonymFilter};
use crate::analysis::tokenizer::{HtmlTokenizer, TextTokenizer, Tokenizer};
use crate::cli::args::{FilterKind, JargonArgs};

/// Run the CLI against the files or standard streams named by `args`.
pub fn execute(args: &JargonArgs) -> Result<()> {
    let analyzer = build_analyzer(args)?;
    info!("analyzing with {analyzer:?}");

    let input: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut output: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    run(&analyzer, args, input, &mut output)?;
    output.flush().context("Failed to flush output")?;
    Ok(())
}

/// Assemble the tokenizer and filter chain requested by `args`.
pub fn build_analyzer(args: &JargonArgs) -> Result<PipelineAnalyzer> {
    let tokenizer: Arc<dyn Tokenizer> = if args.html {
        Arc::new(HtmlTokenizer::new())
    } else {
        Arc::new(TextTokenizer::new())
    };

    let chain = args.filter_chain();
    let synonyms: Option<Arc<dyn Filter>> = match &args.dictionary {
        Some(path) if chain.contains(&FilterKind::Synonyms) => Some(Arc::new(
            SynonymFilter::from_file(path, args.matcher_config())
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?,
        )),
        _ => None,
    };

    let mut analyzer = PipelineAnalyzer::new(tokenizer);
    for kind in chain {
        let filter: Arc<dyn Filter> = match kind {
            FilterKind::Synonyms => match &synonyms {
                Some(filter) => Arc::clone(filter),
                None => bail!("--filter synonyms requires --dictionary"),
            },
            FilterKind::Lemmas => Arc::new(LemmasFilter::new()),
            FilterKind::Distinct => Arc::new(DistinctFilter::new()),
        };
        analyzer = analyzer.add_filter(filter);
    }

    Ok(analyzer)
}

/// Analyze `input` and write the result to `output`.
///
/// Output written before an error is left in place.
pub fn run<'a, W: Write>(
    analyzer: &dyn Analyzer,
    args: &JargonArgs,
    input: Box<dyn BufRead + 'a>,
    output: &mut W,
) -> Result<()> {
    let tokens = analyzer.analyze_reader(input)?;

    if args.count {
        let count = tokens.token_count()?;
        writeln!(output, "{count}")?;
    } else {
        let separator = if args.lines { "\n" } else { "" };
        tokens.write_to(output, separator)?;
    }

    Ok(())
}
