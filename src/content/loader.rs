//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::LevelDef;
use super::validation::{ValidationError, validate_level, validate_stats};
use crate::movement::MovementStats;

pub const STATS_FILE: &str = "stats.ron";
pub const LEVEL_FILE: &str = "level.ron";

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error(
        "Invalid content in {file}: {}",
        .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Invalid {
        file: String,
        errors: Vec<ValidationError>,
    },
}

impl ContentLoadError {
    /// True when the file does not exist at all
    pub fn is_missing(&self) -> bool {
        matches!(self, ContentLoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;

    parse_ron(&file, &contents)
}

fn reject_invalid(file: &Path, errors: Vec<ValidationError>) -> Result<(), ContentLoadError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ContentLoadError::Invalid {
            file: file.display().to_string(),
            errors,
        })
    }
}

/// Load and validate movement stats.
pub fn load_stats(base_path: &Path) -> Result<MovementStats, ContentLoadError> {
    let path = base_path.join(STATS_FILE);
    let stats: MovementStats = load_single_file(&path)?;
    reject_invalid(&path, validate_stats(&stats))?;
    Ok(stats)
}

/// Load and validate the level definition.
pub fn load_level(base_path: &Path) -> Result<LevelDef, ContentLoadError> {
    let path = base_path.join(LEVEL_FILE);
    let level: LevelDef = load_single_file(&path)?;
    reject_invalid(&path, validate_level(&level))?;
    Ok(level)
}
