//! Output formatting utilities.

use nanote_core::Charset;

const CHARSET_COLUMN: usize = 64;

/// Formats a catalog entry as a table row.
pub fn format_table_row(index: usize, charset: &Charset) -> String {
    format!(
        "{:<6} {:<4} {}",
        index,
        charset.len(),
        truncate(&format!("{:?}", charset.to_string()), CHARSET_COLUMN)
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<6} {:<4} {}", "INDEX", "LEN", "CHARSET");
    println!("{}", "-".repeat(CHARSET_COLUMN + 12));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_quotes_the_leading_space() {
        let row = format_table_row(0, &Charset::from(" etaoinsrhl"));
        assert_eq!(row, "0      11   \" etaoinsrhl\"");
    }

    #[test]
    fn long_charsets_are_truncated() {
        let long = "x".repeat(100);
        assert_eq!(truncate(&long, 10), "xxxxxxx...");
    }
}
