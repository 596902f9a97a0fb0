//! View tree -> terminal text.

use loan_core::enums::Tab;

use crate::palette::Color;
use crate::render::{Block, Card, EventRow, MilestoneRow, View};
use crate::table::{Cell, TableOptions, render_table};

const DEFAULT_WIDTH: usize = 80;

#[derive(Clone, Copy, Debug)]
pub struct PaintOptions {
    pub color: bool,
    pub width: Option<usize>,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            color: false,
            width: Some(DEFAULT_WIDTH),
        }
    }
}

impl PaintOptions {
    fn tone(self, text: &str, tone: Option<Color>) -> String {
        match tone {
            Some(tone) if self.color => tone.paint(text),
            _ => text.to_string(),
        }
    }

    fn rule(self, ch: char) -> String {
        ch.to_string().repeat(self.width.unwrap_or(DEFAULT_WIDTH).min(DEFAULT_WIDTH))
    }
}

/// Paint `view` as plain or colored text, one block after another.
#[must_use]
pub fn paint(view: &View, options: PaintOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    for block in &view.blocks {
        paint_block(block, options, &mut lines);
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn paint_block(block: &Block, options: PaintOptions, lines: &mut Vec<String>) {
    match block {
        Block::Title(title) => {
            lines.push(title.clone());
            lines.push(options.rule('='));
        }
        Block::SearchBar {
            query,
            trigger,
            enabled,
        } => {
            let trigger = if *enabled {
                format!("[ {trigger} ]")
            } else {
                options.tone(&format!("( {trigger} )"), Some(Color::Gray))
            };
            lines.push(format!("Loan number: {query}  {trigger}"));
        }
        Block::ErrorBanner(message) => {
            lines.push(String::new());
            lines.push(options.tone(&format!("! {message}"), Some(Color::Red)));
        }
        Block::Cards(cards) => {
            lines.push(String::new());
            lines.push(paint_cards(cards, options));
        }
        Block::Tabs { active } => {
            lines.push(String::new());
            lines.push(paint_tabs(*active));
        }
        Block::Heading(text) => {
            lines.push(String::new());
            lines.push(text.clone());
            lines.push(options.rule('-'));
        }
        Block::Subheading(text) => {
            lines.push(String::new());
            lines.push(format!("{text}:"));
        }
        Block::Event(event) => lines.extend(paint_event(event, options)),
        Block::Connector => lines.push("  │".to_string()),
        Block::Milestone(milestone) => lines.push(paint_milestone(milestone)),
        Block::Bullet { mark, text, tone } => {
            lines.push(format!("  {} {text}", options.tone(mark.glyph(), *tone)));
        }
        Block::Checkbox { checked, text, .. } => {
            let box_ = if *checked { "[x]" } else { "[ ]" };
            lines.push(format!("  {box_} {text}"));
        }
        Block::Paragraph(paragraph) => {
            lines.extend(paragraph.iter().map(|line| format!("  {line}")));
        }
        Block::KeyValue { key, value } => lines.push(format!("  {key}: {value}")),
        Block::Empty(hint) => {
            lines.push(String::new());
            lines.push(options.tone(hint, Some(Color::Gray)));
        }
    }
}

fn paint_cards(cards: &[Card], options: PaintOptions) -> String {
    let headers: Vec<&str> = cards.iter().map(|card| card.label.as_str()).collect();
    let row: Vec<Cell> = cards
        .iter()
        .map(|card| match card.badge {
            Some(tone) => Cell::toned(card.value.clone(), tone),
            None => Cell::plain(card.value.clone()),
        })
        .collect();
    render_table(
        &headers,
        &[row],
        TableOptions {
            max_width: options.width,
            color: options.color,
        },
    )
}

fn paint_tabs(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint_event(event: &EventRow, options: PaintOptions) -> Vec<String> {
    let dot = options.tone("●", Some(event.color));
    let badge = options.tone(&event.sentiment, Some(event.color));
    let mut lines = vec![format!(
        "{dot} {}  {}  {}m call  [{badge}]",
        event.when, event.user, event.minutes
    )];
    if !event.summary.is_empty() {
        lines.extend(event.summary.lines().map(|line| format!("  {line}")));
    }
    lines
}

fn paint_milestone(milestone: &MilestoneRow) -> String {
    format!(
        "  • {}: {} ({})",
        milestone.kind, milestone.description, milestone.date
    )
}

#[cfg(test)]
mod tests {
    use crate::controller::ViewState;
    use crate::render::render;

    use super::*;

    #[test]
    fn idle_paint_is_plain_text() {
        let text = paint(&render(&ViewState::default()), PaintOptions::default());
        assert!(text.starts_with("Loan Timeline Analysis\n"));
        assert!(text.contains("Loan number:   [ Search ]"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn error_banner_is_red_with_color() {
        let state = ViewState {
            error: "loan not found".into(),
            ..Default::default()
        };
        let text = paint(
            &render(&state),
            PaintOptions {
                color: true,
                width: None,
            },
        );
        assert!(text.contains("\u{1b}[31m! loan not found\u{1b}[0m"));
    }

    #[test]
    fn tabs_mark_the_active_one() {
        assert_eq!(paint_tabs(Tab::Insights), " Timeline  [Insights]  Summary ");
    }
}
