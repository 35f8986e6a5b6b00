//! Shared text formatting utilities for consistent styling

use console::style;
use std::fmt::Display;

/// Format text with key field styling (bold and cyan when colors enabled)
pub(crate) fn format_key<T: Display>(text: T, use_colors: bool) -> String {
    let text = text.to_string();

    if use_colors {
        style(text).bold().cyan().to_string()
    } else {
        text
    }
}

/// Package comments in the database may carry escape backslashes
pub(crate) fn strip_backslashes(text: &str) -> String {
    text.chars().filter(|c| *c != '\\').collect()
}
