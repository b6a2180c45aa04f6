use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use rusty_forms::{FormState, FormsConfig, PredicateRegistry, Submission, ValidationReport};

use super::{load_config, read_submission};

/// Validate a submission file; returns whether the form is valid
pub fn execute(config_path: &Path, form_name: &str, data: &Path, json: bool) -> Result<bool> {
    let config = load_config(config_path)?;
    let submission = read_submission(data)?;
    let (form, report) = run(&config, form_name, &submission)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(form_name, &form, &report);
    }

    Ok(report.is_valid())
}

pub fn run(
    config: &FormsConfig,
    form_name: &str,
    submission: &Submission,
) -> Result<(FormState, ValidationReport)> {
    // Predicates are code, so declared predicate validators cannot resolve here
    let registry = PredicateRegistry::new();
    let mut form = config.form(form_name)?.build(submission, &registry)?;
    let report = form.validate()?;
    Ok((form, report))
}

fn print_summary(form_name: &str, form: &FormState, report: &ValidationReport) {
    println!("{} {}", "Form:".bold(), form_name.cyan());
    println!();

    for (name, outcome) in report.outcomes() {
        if outcome.valid {
            println!("  {} {}", "✓".green(), name);
        } else {
            println!("  {} {}", "✗".red(), name.red());
            for message in &outcome.feedback {
                println!("      {}", message.yellow());
            }
        }
    }

    // Fields declared but left out of the display order still get validated
    let hidden = form
        .fields()
        .filter(|f| !form.fields_order().iter().any(|n| n == f.name()))
        .count();
    if hidden > 0 {
        println!();
        println!("{} field(s) not in display order", hidden);
    }

    println!();
    if report.is_valid() {
        println!("{}", "Submission is valid".green().bold());
    } else {
        println!("{}", "Submission is invalid".red().bold());
    }
}
