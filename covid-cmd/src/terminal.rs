//! The terminal as controller shell.

use covid_state::{DismissTicket, NoticeRegion, Severity, Shell, UiState};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

/// Confirms on stdin unless `assume_yes`. Notifications stay up until the
/// process exits, so dismissal is a no-op.
pub struct TerminalShell {
    assume_yes: bool,
}

impl TerminalShell {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

/// "s"/"sim" and "y"/"yes", any case. Everything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}

fn ask(prompt: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{} [s/N] ", prompt)?;
    stdout.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}

impl Shell for TerminalShell {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match ask(prompt) {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    fn schedule_dismiss(&self, ticket: DismissTicket) {
        debug!("Ignoring dismissal of {:?} notification", ticket.region);
    }
}

/// The notice `region` ended with. Error notices become the command's error.
pub fn notice_line(ui: &UiState, region: NoticeRegion) -> anyhow::Result<Option<String>> {
    match ui.notifications.current(region) {
        Some(notice) if notice.severity == Severity::Error => {
            anyhow::bail!("{}", notice.message)
        }
        Some(notice) => Ok(Some(notice.message.clone())),
        None => Ok(None),
    }
}

/// Print the notice `region` ended with, failing on errors.
pub fn report(ui: &UiState, region: NoticeRegion) -> anyhow::Result<()> {
    if let Some(line) = notice_line(ui, region)? {
        println!("{}", line);
    }
    Ok(())
}
