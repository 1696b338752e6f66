//! Hand-off to the confirmation page after a successful registration.

use crate::app::event::AppEvent;
use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;
use tokio::sync::mpsc;

/// Emit [`AppEvent::RedirectDue`] once `delay` has elapsed.
pub fn schedule(url: String, delay: Duration, event_tx: mpsc::UnboundedSender<AppEvent>) {
    tracing::info!(%url, delay_ms = delay.as_millis() as u64, "Redirect scheduled");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = event_tx.send(AppEvent::RedirectDue { url });
    });
}

/// Ask the platform's URL opener to show `url`.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    let mut command = opener_command(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
