use std::collections::BTreeMap;

use tabstack_core::{ScriptedElement, UiElement};

struct TableFormatter {
    id_width: usize,
    kind_width: usize,
}

impl TableFormatter {
    fn new(elements: &BTreeMap<String, ScriptedElement>) -> Self {
        let id_width = elements
            .keys()
            .map(|id| id.chars().count())
            .max()
            .unwrap_or(8)
            .clamp(2, 40); // Between "Id" header min and reasonable terminal width max

        Self {
            id_width,
            kind_width: 12,
        }
    }

    fn print_table(&self, elements: &BTreeMap<String, ScriptedElement>) {
        println!(
            "┌{}┬{}┐",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.kind_width + 2),
        );
        println!(
            "│ {:<id_w$} │ {:<kind_w$} │",
            "Id",
            "Kind",
            id_w = self.id_width,
            kind_w = self.kind_width,
        );
        println!(
            "├{}┼{}┤",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.kind_width + 2),
        );
        for (id, element) in elements {
            println!(
                "│ {} │ {} │",
                truncate(id, self.id_width),
                truncate(UiElement::kind(element), self.kind_width),
            );
        }
        println!(
            "└{}┴{}┘",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.kind_width + 2),
        );
    }
}

pub fn print_elements_table(elements: &BTreeMap<String, ScriptedElement>) {
    TableFormatter::new(elements).print_table(elements);
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_pads() {
        assert_eq!(truncate("ab", 4), "ab  ");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("abcdefgh", 6), "abc...");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        // Must not panic on non-ASCII input
        let out = truncate("日本語のタブ", 4);
        assert_eq!(out.chars().count(), 4);
    }

    #[test]
    fn test_formatter_widths_from_ids() {
        let mut elements = BTreeMap::new();
        elements.insert("home".to_string(), ScriptedElement::tab());
        elements.insert("a-much-longer-id".to_string(), ScriptedElement::tab_group());

        let formatter = TableFormatter::new(&elements);
        assert_eq!(formatter.id_width, "a-much-longer-id".len());
    }

    #[test]
    fn test_print_table_does_not_panic() {
        let mut elements = BTreeMap::new();
        elements.insert("home".to_string(), ScriptedElement::tab());
        print_elements_table(&elements);
        print_elements_table(&BTreeMap::new());
    }
}
