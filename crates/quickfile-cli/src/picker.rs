//! Interactive folder picker and name prompt
//!
//! The picker shows a numbered list. Typing text narrows the list with a
//! fuzzy match, typing a number picks that row, and an empty line or EOF
//! cancels.

use std::io::{self, BufRead, Write};

/// Rows shown at once
const PAGE_SIZE: usize = 20;

/// Ask the user to choose one of `folders`
///
/// Returns `None` when the user cancels.
pub fn pick_folder<R: BufRead, W: Write>(
    folders: &[String],
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    let mut shown: Vec<&String> = folders.iter().collect();

    loop {
        for (index, folder) in shown.iter().take(PAGE_SIZE).enumerate() {
            writeln!(output, "{:>3}  {folder}", index + 1)?;
        }
        if shown.len() > PAGE_SIZE {
            writeln!(output, "     ... {} more, type to filter", shown.len() - PAGE_SIZE)?;
        }
        write!(output, "Select a folder (number or filter, empty to cancel): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        if let Ok(number) = answer.parse::<usize>() {
            if (1..=shown.len().min(PAGE_SIZE)).contains(&number) {
                return Ok(Some(shown[number - 1].clone()));
            }
        }

        let matches = fuzzy_filter(answer, folders);
        if matches.is_empty() {
            writeln!(output, "No folder matches '{answer}'")?;
        } else {
            shown = matches;
        }
    }
}

/// Ask for the shorthand to create
///
/// Returns `None` on EOF; a blank answer is returned as is.
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "Enter the file name (e.g. newfile.txt): ")?;
    output.flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Items containing every character of `query` in order, ignoring case
///
/// Tighter matches come first, then shorter items; ties keep input order.
pub fn fuzzy_filter<'a>(query: &str, items: &'a [String]) -> Vec<&'a String> {
    let query: Vec<char> = query.to_lowercase().chars().collect();

    let mut scored: Vec<((usize, usize), &String)> = items
        .iter()
        .filter_map(|item| match_span(&query, item).map(|span| ((span, item.len()), item)))
        .collect();
    scored.sort_by_key(|(score, _)| *score);
    scored.into_iter().map(|(_, item)| item).collect()
}

/// Distance between the first and last matched character, if all match
fn match_span(query: &[char], item: &str) -> Option<usize> {
    if query.is_empty() {
        return Some(0);
    }

    let mut remaining = query.iter().peekable();
    let mut first = None;
    let mut last = 0;

    for (index, c) in item.to_lowercase().chars().enumerate() {
        if remaining.peek() == Some(&&c) {
            remaining.next();
            first.get_or_insert(index);
            last = index;
            if remaining.peek().is_none() {
                break;
            }
        }
    }

    match (remaining.peek(), first) {
        (None, Some(first)) => Some(last - first),
        _ => None,
    }
}
