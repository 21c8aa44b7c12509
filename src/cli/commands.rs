//! Command implementations for the Namesake CLI.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::NamesakeConfig;
use crate::error::{NamesakeError, Result};
use crate::spelling::*;

/// Execute a CLI command against the process's stdin and stdout.
pub fn execute_command(args: NamesakeArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_command_with_io(args, stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn execute_command_with_io<R: BufRead, W: Write>(
    args: NamesakeArgs,
    input: R,
    out: &mut W,
) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Suggest(suggest_args) => suggest(suggest_args, &config, &args, out),
        Command::Distance(distance_args) => distance(distance_args, &args, out),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args, out),
        Command::Interactive(interactive_args) => {
            interactive(interactive_args, &config, &args, input, out)
        }
    }
}

/// Load the config file named on the command line, or fall back to defaults.
fn load_config(args: &NamesakeArgs) -> Result<NamesakeConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            NamesakeConfig::load_from_file(path)
        }
        None => Ok(NamesakeConfig::default()),
    }
}

/// Merge command line overrides into the file configuration.
fn suggestion_config(
    config: &NamesakeConfig,
    corpus_args: &CorpusArgs,
    max_distance: Option<i64>,
    limit: Option<usize>,
) -> Result<SuggestionConfig> {
    let mut suggestion = config.suggestion.clone();

    if corpus_args.ignore_case {
        suggestion.normalization.lowercase = true;
    }
    if let Some(max_distance) = max_distance {
        suggestion.max_distance = max_distance;
    }
    if let Some(limit) = limit {
        if limit == 0 {
            return Err(NamesakeError::invalid_input("--limit must be at least 1"));
        }
        suggestion.max_suggestions = Some(limit);
    }

    Ok(suggestion)
}

/// Load the corpus named on the command line, in the config, or the built-in names.
fn load_corpus(config: &NamesakeConfig, corpus_args: &CorpusArgs) -> Result<(Corpus, String)> {
    match corpus_args.corpus.as_ref().or(config.corpus.as_ref()) {
        Some(path) => {
            info!("Loading corpus from: {}", path.display());
            let corpus = Corpus::load_from_file(path)?;
            Ok((corpus, path.display().to_string()))
        }
        None => {
            debug!("No corpus given, using built-in names");
            Ok((BuiltinCorpus::names(), "built-in names".to_string()))
        }
    }
}

fn build_engine(
    config: &NamesakeConfig,
    corpus_args: &CorpusArgs,
    suggestion: SuggestionConfig,
) -> Result<(SuggestionEngine, String)> {
    let (corpus, source) = load_corpus(config, corpus_args)?;
    let engine = SuggestionEngine::from_corpus(corpus, suggestion);
    info!("Indexed {} words from {}", engine.index().len(), source);
    Ok((engine, source))
}

/// Suggest words for a single query.
fn suggest<W: Write>(
    args: &SuggestArgs,
    config: &NamesakeConfig,
    cli_args: &NamesakeArgs,
    out: &mut W,
) -> Result<()> {
    let suggestion = suggestion_config(config, &args.corpus, args.max_distance, args.limit)?;
    let (engine, _) = build_engine(config, &args.corpus, suggestion)?;

    let results = SuggestResults {
        query: engine.config().normalization.apply(&args.query),
        max_distance: engine.config().max_distance,
        suggestions: engine.suggest(&args.query)?,
    };
    output_result(&results, cli_args, out)
}

/// Print the edit distance between two words.
fn distance<W: Write>(args: &DistanceArgs, cli_args: &NamesakeArgs, out: &mut W) -> Result<()> {
    let result = DistanceResult {
        a: args.a.clone(),
        b: args.b.clone(),
        distance: levenshtein_distance(&args.a, &args.b),
    };
    output_result(&result, cli_args, out)
}

/// Show statistics of the index built from a corpus.
fn show_stats<W: Write>(
    args: &StatsArgs,
    config: &NamesakeConfig,
    cli_args: &NamesakeArgs,
    out: &mut W,
) -> Result<()> {
    let suggestion = suggestion_config(config, &args.corpus, None, None)?;
    let (engine, source) = build_engine(config, &args.corpus, suggestion)?;

    let stats = IndexStats {
        corpus: source,
        distinct_words: engine.index().len(),
        tree: engine.index().stats(),
    };
    output_result(&stats, cli_args, out)
}

/// Answer one query per input line until the input ends.
fn interactive<R: BufRead, W: Write>(
    args: &InteractiveArgs,
    config: &NamesakeConfig,
    cli_args: &NamesakeArgs,
    input: R,
    out: &mut W,
) -> Result<()> {
    let suggestion = suggestion_config(config, &args.corpus, args.max_distance, args.limit)?;
    let (engine, _) = build_engine(config, &args.corpus, suggestion)?;

    for line in input.lines() {
        let line = line?;

        let query = engine.config().normalization.apply(&line);

        match engine.suggest(&line) {
            Ok(suggestions) => {
                let results = SuggestResults {
                    query,
                    max_distance: engine.config().max_distance,
                    suggestions,
                };
                output_result(&results, cli_args, out)?;
            }
            Err(NamesakeError::InvalidInput(reason)) => {
                warn!("Skipping query: {reason}");
                output_result(&QueryError { query, error: reason }, cli_args, out)?;
            }
            Err(e) => return Err(e),
        }
        out.flush()?;
    }

    Ok(())
}
