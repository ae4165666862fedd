use crate::classify::Plan;
use crate::execute::FolderStat;
use crate::labels::LabelTable;
use std::io::{self, Write};
use tracing::warn;

pub fn print_label_table(table: &LabelTable, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Folders Directory:")?;
    writeln!(out, "{:<40} {}", "Name", "ID")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for label in table.labels() {
        writeln!(out, "{:<40} {}", label.name, label.id)?;
    }
    Ok(())
}

pub fn print_stats(stats: &[FolderStat], out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Copy Statistics:")?;
    for stat in stats {
        writeln!(out, "{}: {} files copied", stat.folder, stat.files)?;
    }
    Ok(())
}

pub fn print_summary(plan: &Plan, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} mails processed, {} copies made",
        plan.processed,
        plan.copy_count()
    )?;
    writeln!(
        out,
        "{} skipped without metadata, {} with unreadable metadata, {} without known label",
        plan.missing_metadata.len(),
        plan.invalid_metadata.len(),
        plan.unlabelled
    )?;
    Ok(())
}

pub fn log_plan_warnings(plan: &Plan) {
    for path in &plan.missing_metadata {
        warn!("{} has no metadata file, skipped", path.display());
    }
    for (path, e) in &plan.invalid_metadata {
        warn!("{} skipped: {:#}", path.display(), e);
    }
    for (id, count) in &plan.unknown_labels {
        warn!("label {} of {} mails is not in the catalog", id, count);
    }
}
