//! Lookup command: print the URL a search would navigate to.

use anyhow::Result;
use wikiseek_core::config::WikiseekConfig;
use wikiseek_core::trigger::{RecordingNavigator, SearchWidget};

/// Runs the query through the same activation path as the page and prints
/// the result. A blank query prints nothing, or `{"action":"no_op"}` with `json`.
pub fn run_lookup(cfg: &WikiseekConfig, query: &str, json: bool) -> Result<()> {
    match lookup_output(cfg, query, json)? {
        Some(line) => println!("{}", line),
        None => tracing::debug!("blank query, nothing printed"),
    }
    Ok(())
}

/// The line `lookup` prints, if any.
fn lookup_output(cfg: &WikiseekConfig, query: &str, json: bool) -> Result<Option<String>> {
    let mut widget =
        SearchWidget::with_redirector(cfg.redirector()?, query, RecordingNavigator::default());
    let action = widget.activate();

    if json {
        return Ok(Some(serde_json::to_string(&action)?));
    }
    Ok(widget.navigator().visited.last().cloned())
}
