use anyhow::Context;
use loan_api::{ApiClient, TimelineQuery};
use loan_core::entities::LoanSearchHit;
use loan_view::format::calendar_date;
use loan_view::table::{Cell, TableOptions, render_table};

use crate::cli::root_commands::FindArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

const HEADERS: [&str; 5] = ["loan", "calls", "first call", "last call", "minutes"];

/// Handle `loanline find`.
pub async fn handle(
    args: &FindArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = query_from_args(args)?;

    let spinner = Progress::spinner("Searching timelines");
    let hits = client
        .search_timelines(&query)
        .await
        .context("failed to search timelines")?;
    spinner.finish_clear();

    match flags.format {
        OutputFormat::View => {
            let prefs = ui::prefs();
            println!(
                "{}",
                hits_table(
                    &hits,
                    TableOptions {
                        max_width: prefs.term_width,
                        color: prefs.color,
                    },
                )
            );
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&hits, flags.format),
    }
}

fn query_from_args(args: &FindArgs) -> anyhow::Result<TimelineQuery> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        anyhow::ensure!(from <= to, "--from {from} is after --to {to}");
    }
    Ok(TimelineQuery {
        start_date: args.from,
        end_date: args.to,
        min_calls: args.min_calls,
        sentiment: args
            .sentiment
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

fn hits_table(hits: &[LoanSearchHit], options: TableOptions) -> String {
    if hits.is_empty() {
        return String::from("(no loans matched)");
    }

    let rows = hits
        .iter()
        .map(|hit| {
            vec![
                Cell::plain(hit.loan_number.clone()),
                Cell::numeric(hit.call_count.to_string()),
                Cell::plain(hit.first_call.as_deref().map_or_else(|| "-".into(), calendar_date)),
                Cell::plain(hit.last_call.as_deref().map_or_else(|| "-".into(), calendar_date)),
                Cell::numeric(whole_minutes(hit.total_duration).to_string()),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&HEADERS, &rows, options)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_minutes(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds / 60.0).floor() as u64
    } else {
        0
    }
}
