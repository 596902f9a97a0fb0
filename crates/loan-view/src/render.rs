//! State -> view tree.
//!
//! [`render`] is pure: the same [`ViewState`] always yields the same
//! [`View`]. Painting to text happens separately in [`crate::paint`].

use loan_core::entities::{LoanInsights, LoanTimeline, Milestone, TimelineEvent};
use loan_core::enums::Tab;
use serde::Serialize;

use crate::controller::ViewState;
use crate::format;
use crate::palette::{Color, sentiment_color, status_badge};

pub const TITLE: &str = "Loan Timeline Analysis";
pub const EMPTY_HINT: &str = "Enter a loan number to view its call timeline.";
const UNKNOWN_USER: &str = "Unknown";
const UNKNOWN_SENTIMENT: &str = "unknown";

/// Rendered view: a flat list of blocks, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub blocks: Vec<Block>,
}

impl View {
    /// Blocks matching `pred`, for assertions and painting passes.
    pub fn blocks_where<'a>(
        &'a self,
        pred: impl Fn(&Block) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks.iter().filter(move |block| pred(block))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Title(String),
    /// Query input and its trigger. The trigger is disabled while loading.
    SearchBar {
        query: String,
        trigger: String,
        enabled: bool,
    },
    ErrorBanner(String),
    Cards(Vec<Card>),
    Tabs {
        active: Tab,
    },
    Heading(String),
    Subheading(String),
    Event(EventRow),
    /// Vertical mark joining two consecutive events.
    Connector,
    Milestone(MilestoneRow),
    Bullet {
        mark: Mark,
        text: String,
        tone: Option<Color>,
    },
    /// Action item with its session-only checkbox.
    Checkbox {
        index: usize,
        checked: bool,
        text: String,
    },
    /// Text whose line breaks must be kept.
    Paragraph(Vec<String>),
    KeyValue {
        key: String,
        value: String,
    },
    Empty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Dot,
    Warning,
    Check,
}

impl Mark {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dot => "•",
            Self::Warning => "⚠",
            Self::Check => "✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub label: String,
    pub value: String,
    pub badge: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub when: String,
    pub user: String,
    pub minutes: u64,
    pub sentiment: String,
    pub color: Color,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneRow {
    pub kind: String,
    pub description: String,
    pub date: String,
}

/// Render the whole view for `state`.
#[must_use]
pub fn render(state: &ViewState) -> View {
    let mut blocks = vec![
        Block::Title(TITLE.to_string()),
        Block::SearchBar {
            query: state.loan_number.clone(),
            trigger: if state.loading { "Loading..." } else { "Search" }.to_string(),
            enabled: !state.loading,
        },
    ];

    if !state.error.is_empty() {
        blocks.push(Block::ErrorBanner(state.error.clone()));
    }

    match state.loaded() {
        Some((timeline, insights)) => {
            blocks.push(Block::Cards(overview_cards(timeline, insights)));
            blocks.push(Block::Tabs {
                active: state.active_tab,
            });
            match state.active_tab {
                Tab::Timeline => timeline_tab(timeline, &mut blocks),
                Tab::Insights => insights_tab(insights, state, &mut blocks),
                Tab::Summary => summary_tab(timeline, &mut blocks),
            }
        }
        None if !state.loading => blocks.push(Block::Empty(EMPTY_HINT.to_string())),
        None => {}
    }

    View { blocks }
}

fn overview_cards(timeline: &LoanTimeline, insights: &LoanInsights) -> Vec<Card> {
    vec![
        Card {
            label: "Status".into(),
            value: insights.loan_status.to_string(),
            badge: Some(status_badge(&insights.loan_status)),
        },
        Card {
            label: "Total Calls".into(),
            value: timeline.total_calls.to_string(),
            badge: None,
        },
        Card {
            label: "Total Duration".into(),
            value: format!("{} min", timeline.total_duration_minutes),
            badge: None,
        },
        Card {
            label: "Primary User".into(),
            value: timeline
                .primary_user
                .clone()
                .unwrap_or_else(|| UNKNOWN_USER.to_string()),
            badge: None,
        },
    ]
}

fn timeline_tab(timeline: &LoanTimeline, blocks: &mut Vec<Block>) {
    blocks.push(Block::Heading("Call Timeline".into()));

    let last = timeline.timeline_events.len().saturating_sub(1);
    for (index, event) in timeline.timeline_events.iter().enumerate() {
        blocks.push(Block::Event(event_row(event)));
        if index < last {
            blocks.push(Block::Connector);
        }
    }

    if !timeline.key_milestones.is_empty() {
        blocks.push(Block::Subheading("Key Milestones".into()));
        blocks.extend(timeline.key_milestones.iter().map(milestone_row));
    }
}

fn event_row(event: &TimelineEvent) -> EventRow {
    EventRow {
        when: format::date_time(&event.timestamp),
        user: event
            .user_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_USER.to_string()),
        minutes: event.whole_minutes(),
        sentiment: event
            .sentiment
            .as_ref()
            .map_or_else(|| UNKNOWN_SENTIMENT.to_string(), ToString::to_string),
        color: sentiment_color(event.sentiment.as_ref()),
        summary: event.summary.clone(),
    }
}

fn milestone_row(milestone: &Milestone) -> Block {
    Block::Milestone(MilestoneRow {
        kind: milestone.kind.clone(),
        description: milestone.description.clone(),
        date: format::calendar_date(&milestone.date),
    })
}

fn insights_tab(insights: &LoanInsights, state: &ViewState, blocks: &mut Vec<Block>) {
    blocks.push(Block::Heading("AI-Powered Insights".into()));

    bullet_section(blocks, "Key Issues", &insights.key_issues, Mark::Dot, None);

    if !insights.action_items.is_empty() {
        blocks.push(Block::Subheading("Action Items".into()));
        blocks.extend(
            insights
                .action_items
                .iter()
                .enumerate()
                .map(|(index, item)| Block::Checkbox {
                    index,
                    checked: state.checked_actions.contains(&index),
                    text: item.clone(),
                }),
        );
    }

    bullet_section(
        blocks,
        "Risk Indicators",
        &insights.risk_indicators,
        Mark::Warning,
        Some(Color::Red),
    );
    bullet_section(
        blocks,
        "Compliance Notes",
        &insights.compliance_notes,
        Mark::Check,
        None,
    );
}

fn bullet_section(
    blocks: &mut Vec<Block>,
    title: &str,
    items: &[String],
    mark: Mark,
    tone: Option<Color>,
) {
    if items.is_empty() {
        return;
    }
    blocks.push(Block::Subheading(title.to_string()));
    blocks.extend(items.iter().map(|text| Block::Bullet {
        mark,
        text: text.clone(),
        tone,
    }));
}

fn summary_tab(timeline: &LoanTimeline, blocks: &mut Vec<Block>) {
    blocks.push(Block::Heading("Executive Summary".into()));
    blocks.push(Block::Paragraph(
        timeline
            .aggregated_summary
            .lines()
            .map(str::to_string)
            .collect(),
    ));

    blocks.push(Block::Subheading("Timeline Range".into()));
    blocks.push(Block::Paragraph(vec![format!(
        "{} - {}",
        format::calendar_date(&timeline.first_contact),
        format::calendar_date(&timeline.last_contact)
    )]));

    blocks.push(Block::Subheading("Sentiment Distribution".into()));
    blocks.extend(
        timeline
            .sentiment_trend
            .iter()
            .map(|(sentiment, count)| Block::KeyValue {
                key: format::capitalize(sentiment),
                value: format!("{count} calls"),
            }),
    );
}
