//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{NamesakeArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::bk_tree::TreeStats;
use crate::spelling::suggest::Suggestion;

/// Result structure for suggestion queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResults {
    pub query: String,
    pub max_distance: i64,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the distance command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub distance: usize,
}

/// Index statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub corpus: String,
    pub distinct_words: usize,
    #[serde(flatten)]
    pub tree: TreeStats,
}

/// A query line that was skipped, reported in place of its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryError {
    pub query: String,
    pub error: String,
}

/// Results that know how to render themselves for a terminal.
pub trait HumanOutput {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()>;
}

impl HumanOutput for SuggestResults {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.suggestions.is_empty() {
            writeln!(out, "No suggestions found for \"{}\".", self.query)?;
            return Ok(());
        }

        writeln!(
            out,
            "Suggestions for \"{}\" (max distance {}):",
            self.query, self.max_distance
        )?;
        for suggestion in &self.suggestions {
            writeln!(out, "  {} ({})", suggestion.word, suggestion.distance)?;
        }
        Ok(())
    }
}

impl HumanOutput for QueryError {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Please enter a name.")?;
        Ok(())
    }
}

impl HumanOutput for DistanceResult {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "distance(\"{}\", \"{}\") = {}", self.a, self.b, self.distance)?;
        Ok(())
    }
}

impl HumanOutput for IndexStats {
    fn write_human<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Index Statistics:")?;
        writeln!(out, "════════════════")?;
        writeln!(out, "Corpus: {}", self.corpus)?;
        writeln!(out, "Distinct words: {}", self.distinct_words)?;
        writeln!(out, "Tree depth: {}", self.tree.depth)?;
        writeln!(out, "Max fan-out: {}", self.tree.max_fanout)?;
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(result: &T, args: &NamesakeArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args.pretty, out),
    }
}

/// Output in JSON format, one document per line unless pretty-printed.
fn output_json<T: Serialize, W: Write>(result: &T, pretty: bool, out: &mut W) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
