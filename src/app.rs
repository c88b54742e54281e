use std::collections::HashMap;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

use crate::artifact_io::read_text_file;
use crate::cli::{AnalyzerArgs, CommonArgs, GeneratorArgs};
use crate::client::{ClientConfig, TextGenerator};
use crate::config::{ApiCredential, QaConfig, resolve_config_path};
use crate::error::Result;
use crate::naming::ArtifactKind;
use crate::output;
use crate::pipeline::{
    self, FailureReport, FailureRequest, FeatureRequest, GeneratedSuite, RunContext,
};

/// Process-level inputs captured once at startup.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
    pub root: PathBuf,
    pub timestamp: NaiveDateTime,
}

impl Environment {
    pub fn from_process() -> Self {
        let vars = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self {
            vars,
            root: PathBuf::new(),
            timestamp: Local::now().naive_local(),
        }
    }

    pub fn with_vars<I, K, V>(vars: I, root: PathBuf, timestamp: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            root,
            timestamp,
        }
    }

    pub fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Credential, config and client, in that order. `connect` only runs once the
/// credential is known to be present.
fn prepare<C, G>(
    common: &CommonArgs,
    env: &Environment,
    kind: ArtifactKind,
    connect: C,
) -> Result<(QaConfig, G)>
where
    C: FnOnce(ClientConfig, ApiCredential) -> Result<G>,
{
    let credential = ApiCredential::from_lookup(|name| env.var(name))?;
    let config_path = resolve_config_path(common.config.as_deref(), |name| env.var(name));
    let mut config = QaConfig::load(config_path.as_deref())?;
    config.apply_overrides(kind, &common.overrides());
    debug!(?config_path, model = %config.api.model, "configuration loaded");

    let client_config = ClientConfig::for_tool(&config.api, config.tool(kind));
    let generator = connect(client_config, credential)?;
    Ok((config, generator))
}

pub fn run_test_generator<C, G, W>(
    args: &GeneratorArgs,
    env: &Environment,
    connect: C,
    out: &mut W,
) -> Result<GeneratedSuite>
where
    C: FnOnce(ClientConfig, ApiCredential) -> Result<G>,
    G: TextGenerator,
    W: Write,
{
    let kind = ArtifactKind::TestSuite;
    let (config, generator) = prepare(&args.common, env, kind, connect)?;
    let request = FeatureRequest {
        description: args.description_text(),
    };

    output::print_generation_started(out, &request.description)?;
    let ctx = RunContext {
        root: &env.root,
        settings: config.tool(kind),
        timestamp: env.timestamp,
    };
    let suite = pipeline::generate_test_suite(&generator, &request, &ctx)?;
    output::print_generation_summary(out, &suite.path)?;
    Ok(suite)
}

pub fn run_failure_analyzer<C, G, W>(
    args: &AnalyzerArgs,
    env: &Environment,
    connect: C,
    out: &mut W,
) -> Result<FailureReport>
where
    C: FnOnce(ClientConfig, ApiCredential) -> Result<G>,
    G: TextGenerator,
    W: Write,
{
    let kind = ArtifactKind::FailureReport;
    let (config, generator) = prepare(&args.common, env, kind, connect)?;

    let test_source = match &args.test_file {
        Some(path) => {
            output::print_reading_source(out, path)?;
            let source = read_source_context(&env.root.join(path));
            if source.is_none() {
                output::print_source_warning(out, path)?;
            }
            writeln!(out)?;
            source
        }
        None => None,
    };
    let request = FailureRequest {
        test_name: args.test_name.clone(),
        error_message: args.error_message.clone(),
        test_source,
    };

    output::print_analysis_started(out)?;
    let ctx = RunContext {
        root: &env.root,
        settings: config.tool(kind),
        timestamp: env.timestamp,
    };
    let report = pipeline::analyze_failure(&generator, &request, &ctx)?;
    output::print_analysis(out, &report.analysis)?;
    output::print_analysis_saved(out, &report.path)?;
    Ok(report)
}

/// An unreadable source file only costs the prompt its code context.
fn read_source_context(path: &Path) -> Option<String> {
    match read_text_file(path) {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "test file unreadable; continuing without it");
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/app_tests.rs"]
mod tests;
