use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::Candidates;
use crate::error::TypeaheadError;

/// Where the candidate list comes from, in order of precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    File(PathBuf),
    Stdin,
    Config(Vec<String>),
    Builtin,
}

impl CandidateSource {
    /// Pick the source: an explicit file wins, then piped stdin, then the
    /// config file's item list, then the built-in list.
    pub fn resolve(
        file: Option<PathBuf>,
        stdin_is_terminal: bool,
        config_items: Option<Vec<String>>,
    ) -> Self {
        if let Some(path) = file {
            return CandidateSource::File(path);
        }
        if !stdin_is_terminal {
            return CandidateSource::Stdin;
        }
        match config_items {
            Some(items) => CandidateSource::Config(items),
            None => CandidateSource::Builtin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CandidateSource::File(path) => path.display().to_string(),
            CandidateSource::Stdin => "stdin".to_string(),
            CandidateSource::Config(_) => "config".to_string(),
            CandidateSource::Builtin => "built-in list".to_string(),
        }
    }
}

/// Load the candidate list from the given source
pub fn load_candidates(source: &CandidateSource) -> Result<Candidates, TypeaheadError> {
    let items = match source {
        CandidateSource::File(path) => parse_candidates(&read_file(path)?)?,
        CandidateSource::Stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            parse_candidates(&buffer)?
        }
        CandidateSource::Config(items) => items.clone(),
        CandidateSource::Builtin => return Ok(Candidates::builtin()),
    };

    log::debug!("Loaded {} candidates from {}", items.len(), source.describe());
    Ok(Candidates::new(items))
}

fn read_file(path: &Path) -> Result<String, TypeaheadError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a candidate list.
///
/// Text whose first non-blank character is `[` must be a JSON array of
/// strings. Anything else is read as one candidate per non-blank line.
pub fn parse_candidates(text: &str) -> Result<Vec<String>, TypeaheadError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str::<Vec<String>>(text)
            .map_err(|e| TypeaheadError::InvalidItems(e.to_string()));
    }

    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
