use loan_api::LoanBackend;
use loan_core::entities::LoanView;
use loan_view::{Controller, Phase, paint, render};

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

/// Handle `loanline show`.
pub async fn handle<B: LoanBackend>(
    args: &ShowArgs,
    backend: &B,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut controller = Controller::new();
    controller.set_loan_number(args.loan.as_str());
    controller.set_active_tab(args.tab);

    let spinner = Progress::spinner(&format!("Loading loan {}", args.loan.trim()));
    let phase = controller.search(backend).await;
    spinner.finish_clear();

    let Some(phase) = phase else {
        anyhow::bail!("loan number is empty");
    };

    let state = controller.state();
    match flags.format {
        OutputFormat::View => print!("{}", paint(&render(state), ui::paint_options())),
        OutputFormat::Json | OutputFormat::Raw => {
            if let Some((timeline, insights)) = state.loaded() {
                let view = LoanView {
                    timeline: timeline.clone(),
                    insights: insights.clone(),
                };
                output(&view, flags.format)?;
            }
        }
    }

    if phase == Phase::Errored {
        anyhow::bail!("{}", state.error);
    }
    Ok(())
}
