use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

/// Narrowest `COLUMNS` value honored for table fitting.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// Terminal facts the prefs depend on.
#[derive(Clone, Copy, Debug)]
struct Terminal {
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok()),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, Terminal::detect()));
}

fn resolve(flags: &GlobalFlags, terminal: Terminal) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => terminal.stdout_tty && table && !flags.quiet && !terminal.no_color,
    };

    // Spinners draw on stderr, so JSON on stdout stays clean either way.
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => terminal.stderr_tty && !flags.quiet,
    };

    UiPrefs {
        table_color,
        progress,
        term_width: terminal.columns.filter(|width| *width >= MIN_TERM_WIDTH),
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
