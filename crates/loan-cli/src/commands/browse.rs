use std::io::Write;

use loan_api::LoanBackend;
use loan_core::enums::Tab;
use loan_view::{Controller, PaintOptions, paint, render};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::root_commands::BrowseArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::progress::Progress;
use crate::ui;

const HELP: &str = "\
Commands:
  <loan>            search for a loan number
  search [<loan>]   search again, or for a new loan number
  tab <name>        switch to timeline, insights or summary
  check <n>         tick or untick action item n
  help              show this help
  quit              leave the session";

/// One line of user input in a browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Search for the given loan number, or re-run the current input.
    Search(Option<String>),
    Tab(Tab),
    /// Zero-based action item index.
    Check(usize),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`; anything that is
/// not a command word is taken as a loan number.
pub fn parse_action(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let action = match word.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Action::Quit,
        "help" | "?" => Action::Help,
        "search" if rest.is_empty() => Action::Search(None),
        "search" => Action::Search(Some(rest.to_string())),
        "tab" => Action::Tab(rest.parse::<Tab>().map_err(|error| error.to_string())?),
        "check" => {
            let index = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| format!("expected an action item number, got '{rest}'"))?;
            Action::Check(index)
        }
        _ => Action::Search(Some(line.to_string())),
    };
    Ok(Some(action))
}

/// Handle `loanline browse`.
pub async fn handle<B: LoanBackend>(
    args: &BrowseArgs,
    backend: &B,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format != OutputFormat::View {
        tracing::warn!("browse always paints the view; --format is ignored");
    }

    let mut controller = Controller::new();
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(
        stdin,
        &mut stdout,
        backend,
        &mut controller,
        args.loan.as_deref(),
        ui::paint_options(),
    )
    .await
}

/// Drive a session until `quit` or end of input. The view is repainted
/// after every action that changes state.
///
/// Each search is awaited before the next line is read, so a second
/// search can never start while one is loading.
pub async fn run_session<R, W, B>(
    input: R,
    out: &mut W,
    backend: &B,
    controller: &mut Controller,
    initial_loan: Option<&str>,
    options: PaintOptions,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    B: LoanBackend,
{
    if let Some(loan) = initial_loan {
        controller.set_loan_number(loan);
        run_search(controller, backend).await;
    }
    repaint(out, controller, options)?;
    prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_action(&line) {
            Ok(None) => {}
            Ok(Some(Action::Quit)) => break,
            Ok(Some(Action::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(action)) => {
                if let Some(message) = apply(action, controller, backend).await {
                    writeln!(out, "{message}")?;
                } else {
                    repaint(out, controller, options)?;
                }
            }
            Err(message) => writeln!(out, "{message}")?,
        }
        prompt(out)?;
    }
    Ok(())
}

/// Apply a state-changing action. Returns a message instead when the
/// action could not be applied.
async fn apply<B: LoanBackend>(
    action: Action,
    controller: &mut Controller,
    backend: &B,
) -> Option<String> {
    match action {
        Action::Search(loan) => {
            if let Some(loan) = loan {
                controller.set_loan_number(loan);
            }
            run_search(controller, backend)
                .await
                .is_none()
                .then(|| "Enter a loan number first.".to_string())
        }
        Action::Tab(tab) => {
            controller.set_active_tab(tab);
            None
        }
        Action::Check(index) => controller
            .toggle_action(index)
            .is_none()
            .then(|| format!("No action item {}.", index + 1)),
        Action::Help | Action::Quit => None,
    }
}

async fn run_search<B: LoanBackend>(
    controller: &mut Controller,
    backend: &B,
) -> Option<loan_view::Phase> {
    let spinner = Progress::spinner(&format!(
        "Loading loan {}",
        controller.state().loan_number.trim()
    ));
    let phase = controller.search(backend).await;
    spinner.finish_clear();
    phase
}

fn repaint<W: Write>(
    out: &mut W,
    controller: &Controller,
    options: PaintOptions,
) -> std::io::Result<()> {
    write!(out, "{}", paint(&render(controller.state()), options))
}

fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "\n> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use indexmap::IndexMap;
    use loan_api::FetchError;
    use loan_core::entities::{LoanInsights, LoanTimeline};
    use loan_core::enums::{LoanStatus, Tab};
    use loan_view::{Controller, PaintOptions, Phase};
    use pretty_assertions::assert_eq;

    use super::{Action, parse_action, run_session};

    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<String>>,
    }

    impl loan_api::LoanBackend for RecordingBackend {
        async fn fetch_timeline(&self, loan_number: &str) -> Result<LoanTimeline, FetchError> {
            self.calls.borrow_mut().push(format!("timeline:{loan_number}"));
            if loan_number == "404" {
                return Err(FetchError::Status {
                    status: 404,
                    detail: Some("loan not found".into()),
                });
            }
            Ok(LoanTimeline {
                loan_number: loan_number.to_string(),
                total_calls: 0,
                total_duration_minutes: 0,
                first_contact: "2024-01-01T09:00:00".into(),
                last_contact: "2024-01-01T09:00:00".into(),
                primary_user: Some("jdoe".into()),
                timeline_events: Vec::new(),
                aggregated_summary: "Quiet loan.".into(),
                key_milestones: Vec::new(),
                sentiment_trend: IndexMap::new(),
            })
        }

        async fn fetch_insights(&self, loan_number: &str) -> Result<LoanInsights, FetchError> {
            self.calls.borrow_mut().push(format!("insights:{loan_number}"));
            Ok(LoanInsights {
                loan_number: loan_number.to_string(),
                loan_status: LoanStatus::Resolved,
                key_issues: Vec::new(),
                action_items: vec!["Close file".into()],
                risk_indicators: Vec::new(),
                compliance_notes: Vec::new(),
            })
        }
    }

    async fn session(input: &str, initial: Option<&str>) -> (Controller, Vec<String>, String) {
        let backend = RecordingBackend::default();
        let mut controller = Controller::new();
        let mut out = Vec::new();
        run_session(
            input.as_bytes(),
            &mut out,
            &backend,
            &mut controller,
            initial,
            PaintOptions::default(),
        )
        .await
        .expect("session runs");
        let calls = backend.calls.borrow().clone();
        (controller, calls, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn parses_commands_and_loan_numbers() {
        assert_eq!(parse_action("   "), Ok(None));
        assert_eq!(parse_action("quit"), Ok(Some(Action::Quit)));
        assert_eq!(parse_action("HELP"), Ok(Some(Action::Help)));
        assert_eq!(parse_action("search"), Ok(Some(Action::Search(None))));
        assert_eq!(
            parse_action("search  AB-12 "),
            Ok(Some(Action::Search(Some("AB-12".into()))))
        );
        assert_eq!(
            parse_action(" 12345 "),
            Ok(Some(Action::Search(Some("12345".into()))))
        );
        assert_eq!(parse_action("tab summary"), Ok(Some(Action::Tab(Tab::Summary))));
        assert_eq!(parse_action("check 2"), Ok(Some(Action::Check(1))));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_action("tab notes").is_err());
        assert!(parse_action("check 0").is_err());
        assert!(parse_action("check two").is_err());
    }

    #[tokio::test]
    async fn searches_switches_tabs_and_quits() {
        let (controller, calls, out) = session("12345\ntab insights\ncheck 1\nquit\n999\n", None).await;

        assert_eq!(calls, vec!["timeline:12345", "insights:12345"]);
        let state = controller.state();
        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.active_tab, Tab::Insights);
        assert!(state.checked_actions.contains(&0));
        assert!(out.contains("[x] Close file"));
    }

    #[tokio::test]
    async fn initial_loan_is_searched_before_input() {
        let (controller, calls, out) = session("", Some("777")).await;
        assert_eq!(calls, vec!["timeline:777", "insights:777"]);
        assert_eq!(controller.state().loan_number, "777");
        assert!(out.contains("Resolved"));
    }

    #[tokio::test]
    async fn failed_search_shows_banner() {
        let (controller, calls, out) = session("404\n", None).await;
        assert_eq!(calls, vec!["timeline:404"]);
        assert_eq!(controller.state().phase(), Phase::Errored);
        assert!(out.contains("! loan not found"));
    }

    #[tokio::test]
    async fn empty_search_and_bad_check_only_print_messages() {
        let (controller, calls, out) = session("search\ncheck 3\n", None).await;
        assert!(calls.is_empty());
        assert_eq!(controller.state().phase(), Phase::Idle);
        assert!(out.contains("Enter a loan number first."));
        assert!(out.contains("No action item 3."));
    }
}
