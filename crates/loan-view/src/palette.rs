//! Color lookups for sentiment dots and status badges.
//!
//! Both lookups are total: absent and unrecognized values land on a gray
//! default.

use loan_core::enums::{LoanStatus, Sentiment};
use serde::Serialize;

/// Terminal palette used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Red,
    Blue,
    Gray,
    LightGray,
}

impl Color {
    /// SGR foreground code.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Green => "32",
            Self::Red => "31",
            Self::Blue => "34",
            Self::Gray => "90",
            Self::LightGray => "37",
        }
    }

    /// Wrap `text` in this color's escape sequence.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("\u{1b}[{}m{text}\u{1b}[0m", self.ansi_code())
    }
}

/// Color of a call's sentiment dot and badge.
#[must_use]
pub const fn sentiment_color(sentiment: Option<&Sentiment>) -> Color {
    match sentiment {
        Some(Sentiment::Positive) => Color::Green,
        Some(Sentiment::Negative) => Color::Red,
        Some(Sentiment::Neutral) => Color::Gray,
        Some(Sentiment::Unknown | Sentiment::Other(_)) | None => Color::LightGray,
    }
}

/// Badge color of a loan status.
#[must_use]
pub const fn status_badge(status: &LoanStatus) -> Color {
    match status {
        LoanStatus::Active => Color::Blue,
        LoanStatus::Resolved => Color::Green,
        LoanStatus::AtRisk => Color::Red,
        LoanStatus::Denied | LoanStatus::Other(_) => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some(Sentiment::Positive), Color::Green)]
    #[case(Some(Sentiment::Negative), Color::Red)]
    #[case(Some(Sentiment::Neutral), Color::Gray)]
    #[case(Some(Sentiment::Unknown), Color::LightGray)]
    #[case(Some(Sentiment::Other("elated".into())), Color::LightGray)]
    #[case(None, Color::LightGray)]
    fn sentiment_colors(#[case] sentiment: Option<Sentiment>, #[case] expected: Color) {
        assert_eq!(sentiment_color(sentiment.as_ref()), expected);
    }

    #[rstest]
    #[case("Active", Color::Blue)]
    #[case("Resolved", Color::Green)]
    #[case("At Risk", Color::Red)]
    #[case("Denied", Color::Gray)]
    #[case("Pending Review", Color::Gray)]
    #[case("", Color::Gray)]
    fn status_badges(#[case] raw: &str, #[case] expected: Color) {
        assert_eq!(status_badge(&LoanStatus::parse(raw)), expected);
    }

    #[rstest]
    #[case(Color::Green, "32")]
    #[case(Color::Red, "31")]
    #[case(Color::Blue, "34")]
    #[case(Color::Gray, "90")]
    #[case(Color::LightGray, "37")]
    fn sgr_codes(#[case] color: Color, #[case] expected: &str) {
        assert_eq!(color.ansi_code(), expected);
    }

    #[test]
    fn paint_wraps_in_sgr() {
        assert_eq!(Color::Red.paint("x"), "\u{1b}[31mx\u{1b}[0m");
    }
}
