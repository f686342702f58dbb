//! Shared utility functions for line formatting

use crate::tree::Position;

use super::config::Style;

const INDENT: &str = "    ";

/// Connector placed before an entry name in tree style.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Four spaces per level.
pub fn indent(levels: usize) -> String {
    INDENT.repeat(levels)
}

/// Everything written on an entry's line before its name.
pub fn line_prefix(style: Style, position: Position<'_>) -> String {
    match style {
        Style::Tree => format!("{}{}", position.prefix, connector(position.is_last)),
        Style::Indent => indent(position.depth),
        // The root occupies level 0
        Style::Outline => indent(position.depth + 1),
    }
}

/// Text written after an entry's name.
pub fn name_suffix(style: Style, is_dir: bool) -> &'static str {
    if style == Style::Outline && is_dir { "/" } else { "" }
}
