//! Terminal output for a finished run.

use colored::Colorize;
use model::{Candidate, CleanFailure};
use resources::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    if summary.dry_run {
        println!(
            "{}",
            format!(
                "Dry run: {} {} resources would be deleted",
                summary.targets.len(),
                summary.kind
            )
            .bold()
            .yellow()
        );
    } else {
        println!(
            "{}",
            format!("Deleted {} {} resources", summary.deleted.len(), summary.kind)
                .bold()
                .green()
        );
    }
    for target in &summary.targets {
        print_target(target);
    }
}

pub fn print_failures(kind: &str, failure: &CleanFailure) {
    eprintln!(
        "{}",
        format!(
            "{} of {} {} deletes failed",
            failure.failures.len(),
            failure.failures.len() + failure.deleted.len(),
            kind
        )
        .bold()
        .red()
    );
    for deleted in &failure.deleted {
        eprintln!("  {} {}", "✓".green(), deleted);
    }
    for failed in &failure.failures {
        eprintln!("  {} {} ({}): {}", "✗".red(), failed.name, failed.id, failed.error);
    }
}

fn print_target(target: &Candidate) {
    println!(
        "  {} {} {}",
        "•".cyan(),
        target.name.bold(),
        format!(
            "id={} created={}",
            target.id,
            target.created.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .dimmed()
    );
}
