use std::io::IsTerminal;
use std::sync::OnceLock;

use loan_config::{ColorMode, UiConfig};
use loan_view::PaintOptions;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Resolve terminal preferences once. The `--color` flag wins over
/// `ui.color` from config.
pub fn init(flags: &GlobalFlags, config: &UiConfig) {
    let is_tty = std::io::stdout().is_terminal();
    let painting = flags.format == OutputFormat::View;

    let color = match flags.color.unwrap_or(config.color) {
        ColorMode::Always => painting,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty && painting && !flags.quiet && std::env::var_os("NO_COLOR").is_none()
        }
    };

    let progress = std::io::stderr().is_terminal() && !flags.quiet && painting;

    let term_width = config.width.or_else(|| {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40)
    });

    let _ = UI_PREFS.set(UiPrefs {
        color,
        progress,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        term_width: None,
    })
}

/// Paint options derived from the resolved preferences.
#[must_use]
pub fn paint_options() -> PaintOptions {
    let prefs = prefs();
    PaintOptions {
        color: prefs.color,
        width: prefs.term_width.or(PaintOptions::default().width),
    }
}
