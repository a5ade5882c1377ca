//! Human-readable report of a fetch and its extracted forms.

#[cfg(test)]
mod tests;

use crate::tools::fetch::FetchResult;
use crate::tools::forms::{extract_forms, FormRecord};
use std::fmt::Write;

/// Marker printed for an absent attribute.
pub const MISSING: &str = "None";

/// Report for a whole run.
///
/// A failed fetch yields only `Could not fetch page.`; extraction never runs.
pub fn render_outcome(result: &FetchResult) -> String {
    match result {
        FetchResult::Failure { .. } => "Could not fetch page.\n".to_string(),
        FetchResult::Success { body, .. } => {
            let mut out = format!("Content length: {}\n", body.chars().count());
            out.push_str(&render_report(&extract_forms(body)));
            out
        }
    }
}

/// Form count, then one block per form with its inputs.
pub fn render_report(forms: &[FormRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} forms.", forms.len());

    for (idx, form) in forms.iter().enumerate() {
        let _ = writeln!(out, "\n--- Form {} ---", idx + 1);
        let _ = writeln!(out, "Action: {}", or_missing(&form.action));
        let _ = writeln!(out, "Method: {}", or_missing(&form.method));
        let _ = writeln!(out, "Inputs ({}):", form.inputs.len());
        for input in &form.inputs {
            let _ = writeln!(
                out,
                "  - Name: {}, ID: {}, Type: {}",
                or_missing(&input.name),
                or_missing(&input.id),
                or_missing(&input.input_type)
            );
        }
    }

    out
}

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}
