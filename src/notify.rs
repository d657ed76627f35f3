use anyhow::Result;

use crate::verdict::Assessment;

/// Fire-and-forget desktop notification with the verdict.
/// Failures are logged, never surfaced.
pub fn announce(assessment: &Assessment) {
    let message = assessment.message();
    let summary = format!("{} {}", message.icon, message.headline);
    let body = message.line;

    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::debug!("No runtime, skipping notification");
        return;
    };

    handle.spawn_blocking(move || {
        if let Err(e) = notify(&summary, &body) {
            tracing::warn!("Notification failed: {}", e);
        }
    });
}

fn notify(summary: &str, body: &str) -> Result<()> {
    notify_rust::Notification::new()
        .appname("golfcheck")
        .summary(summary)
        .body(body)
        .icon("applications-games")
        .show()?;
    Ok(())
}
