//! Fixture discovery.
//!
//! Every `*.conllu` file below the fixtures directory is a fixture. Hidden
//! entries (`.git`, editor swap files) are skipped. A fixture is named by
//! its path relative to the directory, joined with `/`, which is also how
//! `expected-failures.toml` refers to it:
//!
//! ```text
//! fixtures/
//!   possessives.conllu          -> "possessives.conllu"
//!   quotes/unclosed.conllu      -> "quotes/unclosed.conllu"
//! ```
//!
//! Header errors point at the file and line: `fixtures/x.conllu:2: unknown
//! direction "sideways"`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{parse_fixture, PersonFixture, SpecError, SpecResult};

pub const FIXTURE_EXTENSION: &str = "conllu";

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> SpecResult<PersonFixture> {
    let content = fs::read_to_string(path).map_err(|err| load_error(path, err))?;
    parse_fixture(&content).map_err(|err| match err {
        SpecError::Parse { line: 0, message } => SpecError::Load {
            path: path.display().to_string(),
            message,
        },
        SpecError::Parse { line, message } => SpecError::Fixture {
            path: path.display().to_string(),
            line,
            message,
        },
        other => other,
    })
}

/// Load every fixture below `dir`, ordered by name. A missing directory
/// holds no fixtures.
pub fn load_all_fixtures(dir: &Path) -> SpecResult<Vec<(String, PersonFixture)>> {
    let mut fixtures = Vec::new();
    let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        if !current.is_dir() {
            continue;
        }
        for entry in fs::read_dir(&current).map_err(|err| load_error(&current, err))? {
            let path = entry.map_err(|err| load_error(&current, err))?.path();
            if is_hidden(&path) {
                continue;
            }
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().map_or(false, |ext| ext == FIXTURE_EXTENSION) {
                fixtures.push((fixture_name(dir, &path), load_fixture(&path)?));
            }
        }
    }

    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn fixture_name(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map_or(false, |name| name.to_string_lossy().starts_with('.'))
}

fn load_error(path: &Path, err: std::io::Error) -> SpecError {
    SpecError::Load {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
