//! Shorthand resolver
//!
//! Parses what the user typed into the name prompt, e.g.
//! `pages/auth/{index,styles}.ts`, into the directory part and the list of
//! names to create. Only the leaf may contain a brace group:
//!
//! ```text
//! <subpath>/<leaf>
//! <leaf> := <name> | [prefix]{tok1,tok2,...}[suffix]
//! ```
//!
//! A brace item without a `.` inherits the suffix, so `{index,about}.html`
//! means `index.html, about.html`. A trailing `/` requests a directory.
//! Nothing here touches the filesystem.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors produced while parsing a shorthand
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An opening brace with no closing brace after it, or a second group
    #[error("Invalid input. Curly Braces only, please.")]
    UnbalancedBrace { input: String },

    /// The input expands to nothing that could be created
    #[error("Invalid input. Nothing to create in '{input}'.")]
    EmptyName { input: String },
}

/// One file or directory to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Name relative to the sub path; ends in `/` for directories
    pub name: String,
    pub is_directory: bool,
}

impl Entry {
    fn new(name: String) -> Self {
        let is_directory = name.ends_with('/');
        Self { name, is_directory }
    }
}

/// Result of resolving one input against one base folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTarget {
    base_folder: String,
    sub_path: Vec<String>,
    entries: Vec<Entry>,
}

impl ParsedTarget {
    /// The folder picked from the folder list (`/` for the workspace root)
    pub fn base_folder(&self) -> &str {
        &self.base_folder
    }

    /// Directory segments between the base folder and the entries
    pub fn sub_path(&self) -> &[String] {
        &self.sub_path
    }

    /// Entries in input order; never empty
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Workspace-relative path of an entry, e.g. `src/pages/index.ts`
    pub fn relative_path(&self, entry: &Entry) -> String {
        join_label(&self.base_folder, &self.sub_path, &entry.name)
    }
}

/// Join a base folder label, sub path and entry name into one relative path
pub fn join_label(base_folder: &str, sub_path: &[String], name: &str) -> String {
    base_folder
        .split('/')
        .filter(|s| !s.is_empty())
        .chain(sub_path.iter().map(String::as_str))
        .chain(std::iter::once(name))
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolve `raw_input` against `base_folder`
///
/// Blank input yields `Ok(None)`, which callers treat as "do nothing".
///
/// # Errors
/// Returns [`ParseError::UnbalancedBrace`] when a `{` is not closed or a
/// second group follows the first, and
/// [`ParseError::EmptyName`] when nothing nameable is left after expansion.
pub fn resolve(base_folder: &str, raw_input: &str) -> Result<Option<ParsedTarget>, ParseError> {
    let input = raw_input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if input.contains('{') && !input.contains('}') {
        return Err(ParseError::UnbalancedBrace {
            input: input.to_string(),
        });
    }

    let (dir, leaf) = split_leaf(input);
    let sub_path = dir
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let names = match leaf.find('{') {
        Some(open) => expand(leaf, open).ok_or_else(|| ParseError::UnbalancedBrace {
            input: input.to_string(),
        })?,
        None => vec![leaf.to_string()],
    };

    let mut seen = HashSet::new();
    let entries: Vec<Entry> = names
        .into_iter()
        .filter(|name| !name.trim().trim_end_matches('/').trim().is_empty())
        .filter(|name| seen.insert(name.clone()))
        .map(Entry::new)
        .collect();

    if entries.is_empty() {
        return Err(ParseError::EmptyName {
            input: input.to_string(),
        });
    }

    Ok(Some(ParsedTarget {
        base_folder: base_folder.to_string(),
        sub_path,
        entries,
    }))
}

/// Split the input into directory part and leaf
///
/// With a brace group, the leaf starts after the last `/` before the first
/// `{`. Without one, it is the last segment, keeping a trailing `/`.
fn split_leaf(input: &str) -> (&str, &str) {
    let searched = match input.find('{') {
        Some(open) => &input[..open],
        None => input.strip_suffix('/').unwrap_or(input),
    };

    match searched.rfind('/') {
        Some(slash) => (&input[..slash], &input[slash + 1..]),
        None => ("", input),
    }
}

/// Expand the brace group starting at `open`
///
/// `None` if the group is never closed or a second group is opened after it.
fn expand(leaf: &str, open: usize) -> Option<Vec<String>> {
    let close = open + leaf[open..].find('}')?;
    let rest = &leaf[close + 1..];
    if rest.contains('{') {
        return None;
    }

    let prefix = strip_stray(&leaf[..open]);
    let interior = strip_stray(&leaf[open + 1..close]);
    let suffix = strip_stray(rest);

    let names = interior
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.contains('.') {
                format!("{prefix}{token}")
            } else {
                format!("{prefix}{token}{suffix}")
            }
        })
        .collect();

    Some(names)
}

/// Drop leftover brace and bracket characters
fn strip_stray(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '{' | '}' | '[' | ']'))
        .collect()
}
