//! Report rendering

use std::fmt::Write;

use pagetrail_navigation::{Command, StepOutcome, StepReport, Transition};

use crate::config::OutputFormat;
use crate::simulator::ReplayOutcome;
use crate::Result;

const STACK_FULL: &str = "Stack is full!";

pub fn render(outcome: &ReplayOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => render_json(outcome),
    }
}

pub fn render_json(outcome: &ReplayOutcome) -> Result<String> {
    let mut json = serde_json::to_string_pretty(outcome)?;
    json.push('\n');
    Ok(json)
}

/// Render the console layout, one block per command
pub fn render_text(outcome: &ReplayOutcome) -> String {
    let mut out = String::new();

    for _ in &outcome.rejected {
        let _ = writeln!(out, "{}", STACK_FULL);
    }

    for step in &outcome.steps {
        write_step(&mut out, step);
    }

    out
}

// fmt::Write for String never fails.
fn write_step(out: &mut String, step: &StepReport) {
    let _ = write!(
        out,
        "Current page:\n{}\n\nChoice {} [{}]\n",
        step.before.as_deref().unwrap_or_default(),
        step.choice,
        step.token
    );

    match &step.outcome {
        StepOutcome::Moved(t) => match t.command {
            Command::Backward => write_backward(out, t),
            Command::Forward => write_forward(out, t),
        },
        StepOutcome::Failed(e) => {
            let _ = write!(out, "{}\n\n", e);
        }
    }
}

fn write_backward(out: &mut String, t: &Transition) {
    if t.dropped.is_some() {
        let _ = writeln!(out, "{}", STACK_FULL);
    }

    write_page(out, "The current page is:", t.current.as_deref().unwrap_or_default());
    write_page(out, "The Next one is:", &t.moved);

    match t.previous.as_deref() {
        Some(previous) => write_page(out, "The Previous one is:", previous),
        None => out.push_str("No previous page available.\n\n"),
    }
}

fn write_forward(out: &mut String, t: &Transition) {
    if t.dropped.is_some() {
        let _ = writeln!(out, "{}", STACK_FULL);
    }

    write_page(out, "The current page is:", &t.moved);

    match t.next.as_deref() {
        Some(next) => write_page(out, "The Next one is:", next),
        None => out.push_str("No next page available.\n\n"),
    }

    if let Some(previous) = t.previous.as_deref() {
        write_page(out, "The Previous one is:", previous);
    }
}

fn write_page(out: &mut String, heading: &str, url: &str) {
    let _ = write!(out, "{}\n{}\n\n", heading, url);
}
