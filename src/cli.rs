use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, Parser};

use crate::config::RunOverrides;
use crate::output;

/// Generate a Cypress test suite from a natural-language feature description.
#[derive(Debug, Parser)]
#[command(name = "cypress-test-generator", version, after_help = output::GENERATOR_EXAMPLES)]
pub struct GeneratorArgs {
    /// Feature description; all trailing words are joined with spaces
    #[arg(
        value_name = "FEATURE_DESCRIPTION",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub description: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl GeneratorArgs {
    pub fn description_text(&self) -> String {
        self.description.join(" ")
    }
}

/// Analyze a failing test and write a markdown debugging report.
#[derive(Debug, Parser)]
#[command(name = "failure-analyzer", version, after_help = output::ANALYZER_EXAMPLES)]
pub struct AnalyzerArgs {
    /// Name of the failing test
    #[arg(value_name = "TEST_NAME")]
    pub test_name: String,

    /// Error message reported by the test runner
    #[arg(value_name = "ERROR_MESSAGE", allow_hyphen_values = true)]
    pub error_message: String,

    /// Optional path to the test source, sent along as context
    #[arg(value_name = "TEST_FILE")]
    pub test_file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML file overriding the built-in configuration
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Model to request instead of the configured one
    #[arg(long)]
    pub model: Option<String>,

    /// Token budget for the reply
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Directory the artifact is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> RunOverrides {
        RunOverrides {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            output_dir: self.output_dir.clone(),
        }
    }
}

pub fn parse_args<P, I, T>(args: I) -> Result<P, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    P::try_parse_from(args)
}

/// Help and version requests succeed; every other parse failure is a usage error (1).
pub fn exit_code_for(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Prints the clap message, plus the usage examples when required arguments are missing.
pub fn report_parse_error<W: Write>(out: &mut W, err: &clap::Error, examples: &str) -> u8 {
    let _ = err.print();
    if err.kind() == ErrorKind::MissingRequiredArgument {
        let _ = writeln!(out);
        let _ = writeln!(out, "{examples}");
    }
    exit_code_for(err)
}

#[cfg(test)]
#[path = "../tests/unit/cli_tests.rs"]
mod tests;
