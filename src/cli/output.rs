//! Output formatting for CLI commands
//!
//! Provides colored terminal output (respects NO_COLOR env var) and
//! the aligned rendering of lookup hits.

use crate::core::search::highlight::{strip_tags, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};
use crate::core::types::LookupResponse;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for the matched span of a source term
    pub fn matched(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for target terms
    pub fn target(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for the active project's glossary name
    pub fn current_glossary(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for other registered glossary names
    pub fn other_glossary(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Extra padding between the source and target columns
const COLUMN_GAP: usize = 10;

/// Render ranked lookup hits with aligned columns.
///
/// The source column is padded to the longest matched term; the
/// glossary annotation only appears when hits can come from more than
/// one glossary.
pub fn print_hits(response: &LookupResponse) {
    let column = response.max_source_width + COLUMN_GAP;

    for hit in &response.hits {
        let source = emphasize_match(&hit.entry.source_term);
        let pad = column.saturating_sub(strip_tags(&hit.entry.source_term).chars().count());

        let mut target = format!("{}", colors::target(&hit.entry.target_term));
        if !hit.entry.note.is_empty() {
            target.push_str(&format!("\t# {}", hit.entry.note));
        }
        if response.glossary_count > 1 {
            let tag = format!("({})", hit.entry.name);
            let tag = if hit.in_current_glossary {
                colors::current_glossary(&tag)
            } else {
                colors::other_glossary(&tag)
            };
            target.push_str(&format!("\t{tag}"));
        }

        println!("  {}{} {}", source, " ".repeat(pad), target);
    }
}

/// Replace the highlight tags with terminal emphasis
fn emphasize_match(source_term: &str) -> String {
    match source_term.split_once(HIGHLIGHT_OPEN) {
        Some((before, rest)) => match rest.split_once(HIGHLIGHT_CLOSE) {
            Some((matched, after)) => {
                format!("{}{}{}", before, colors::matched(matched), after)
            }
            None => source_term.to_string(),
        },
        None => source_term.to_string(),
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
