//! Result formatting for the output surface
//!
//! Renders per-review result increments: the review title as a hyperlink
//! into the source site, a colored sentiment label (green = positive,
//! red = negative), and the original body text.

use crate::domain::{ReviewRecord, SentimentLabel};
use crate::infrastructure::config::imdb;

/// Separator row between the result line and the review text
const SEPARATOR_WIDTH: usize = 30;

/// Renders one classified review as an HTML result fragment
#[must_use]
pub fn format_review_result(record: &ReviewRecord, label: SentimentLabel) -> String {
    let link = imdb::resolve_permalink(&record.permalink);
    let colored_label = format_label(label);
    let separator = "=".repeat(SEPARATOR_WIDTH);

    format!(
        "Review: <a href='{link}'>{title}</a> is {colored_label} <br> {separator} <br> Review text: <br> {body} <br><br>",
        title = record.title,
        body = record.body,
    )
}

/// Renders the result of a direct single-text analysis
#[must_use]
pub fn format_direct_result(label: SentimentLabel) -> String {
    format!("The review is {}", format_label(label))
}

fn format_label(label: SentimentLabel) -> String {
    format!("<font color=\"{}\">{label}</font>", label.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_result_links_title_into_source_site() {
        let record = ReviewRecord::new("A classic", "Loved it.", "/review/rw1111111/");
        let formatted = format_review_result(&record, SentimentLabel::Positive);

        assert!(formatted.contains("<a href='https://www.imdb.com/review/rw1111111/'>A classic</a>"));
        assert!(formatted.contains("<font color=\"green\">Positive</font>"));
        assert!(formatted.contains("Loved it."));
    }

    #[test]
    fn negative_label_renders_red() {
        let record = ReviewRecord::new("Meh", "Not great.", "/review/rw2222222/");
        let formatted = format_review_result(&record, SentimentLabel::Negative);

        assert!(formatted.contains("<font color=\"red\">Negative</font>"));
    }

    #[test]
    fn direct_result_carries_colored_label_only() {
        let formatted = format_direct_result(SentimentLabel::Positive);
        assert_eq!(
            formatted,
            "The review is <font color=\"green\">Positive</font>"
        );
    }
}
