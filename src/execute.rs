use crate::args::Args;
use crate::classify::Plan;
use crate::labels::LabelTable;
use crate::utils;
use crate::verify;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, PartialEq)]
pub struct FolderStat {
    pub folder: String,
    pub files: usize,
}

/// Creates a fresh sorted directory with one folder per label.
///
/// An existing sorted directory is only replaced if `overwrite` is set;
/// otherwise nothing is touched and false is returned.
pub fn prepare_sorted_dir(args: &Args, table: &LabelTable, overwrite: bool) -> Result<bool> {
    let sorted_dir = &args.sorted_dir;
    if sorted_dir.exists() {
        if !overwrite {
            return Ok(false);
        }
        debug!("removing {}", sorted_dir.display());
        fs::remove_dir_all(sorted_dir)
            .with_context(|| format!("failed to remove {}", sorted_dir.display()))?;
    }
    fs::create_dir_all(sorted_dir)
        .with_context(|| format!("failed to create {}", sorted_dir.display()))?;
    for label in table.labels() {
        let path = sorted_dir.join(label.folder_name());
        fs::create_dir(&path).with_context(|| format!("failed to create {}", path.display()))?;
    }
    Ok(true)
}

fn do_copy(args: &Args, email: &Path, folder: &Path) -> Result<()> {
    let file_name = email
        .file_name()
        .with_context(|| format!("unexpected path {}", email.display()))?;
    let dest = folder.join(file_name);
    fs::copy(email, &dest)
        .with_context(|| format!("failed to copy {} to {}", email.display(), dest.display()))?;
    if args.verify {
        verify::verify_copy(email, &dest)?;
    }
    Ok(())
}

pub fn copy_messages(args: &Args, table: &LabelTable, plan: &Plan) -> Result<()> {
    let jobs: Vec<(&Path, PathBuf)> = table
        .labels()
        .iter()
        .zip(&plan.copies)
        .flat_map(|(label, emails)| {
            let folder = args.sorted_dir.join(label.folder_name());
            emails.iter().map(move |email| (email.as_path(), folder.clone()))
        })
        .collect();

    let progress = utils::create_progress_bar(args, jobs.len());
    let result = jobs.par_iter().try_for_each(|(email, folder)| -> Result<()> {
        do_copy(args, email, folder)?;
        progress.inc(1);
        Ok(())
    });
    progress.finish_and_clear();
    result
}

pub fn folder_stats(args: &Args, table: &LabelTable) -> Result<Vec<FolderStat>> {
    let mut stats = Vec::with_capacity(table.len());
    for label in table.labels() {
        let folder = label.folder_name();
        let path = args.sorted_dir.join(&folder);
        let files = fs::read_dir(&path)
            .with_context(|| format!("failed to list {}", path.display()))?
            .count();
        stats.push(FolderStat { folder, files });
    }
    Ok(stats)
}

/// Removes the label folders which got no mail, returning their names.
pub fn prune_empty(args: &Args, stats: &[FolderStat]) -> Result<Vec<String>> {
    let mut removed = vec![];
    for stat in stats.iter().filter(|stat| stat.files == 0) {
        let path = args.sorted_dir.join(&stat.folder);
        fs::remove_dir(&path).with_context(|| format!("failed to remove {}", path.display()))?;
        removed.push(stat.folder.clone());
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_messages;
    use crate::labels::Label;
    use crate::metadata::{Message, MetadataState};
    use tempfile::TempDir;

    fn table() -> LabelTable {
        LabelTable::from_labels(
            [("0", "Inbox"), ("w", "Work"), ("t", "Trash")]
                .iter()
                .map(|&(id, name)| Label {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    fn setup() -> (TempDir, Args, Vec<Message>) {
        let dir = TempDir::new().unwrap();
        let mut messages = vec![];
        for (name, ids) in &[("a", vec!["0", "w"]), ("b", vec!["0"])] {
            let path = dir.path().join(format!("{}.eml", name));
            fs::write(&path, format!("mail {}", name)).unwrap();
            messages.push(Message {
                path,
                metadata: MetadataState::Found(ids.iter().map(|s| s.to_string()).collect()),
            });
        }
        let args = Args::for_dir(dir.path());
        (dir, args, messages)
    }

    #[test]
    fn test_copy_and_prune() {
        let (_dir, mut args, messages) = setup();
        args.verify = true;
        let table = table();
        assert!(prepare_sorted_dir(&args, &table, false).unwrap());
        let plan = classify_messages(&table, messages);
        copy_messages(&args, &table, &plan).unwrap();

        let inbox = args.sorted_dir.join("Inbox - 0");
        assert_eq!(fs::read_to_string(inbox.join("a.eml")).unwrap(), "mail a");
        assert_eq!(fs::read_to_string(inbox.join("b.eml")).unwrap(), "mail b");
        assert!(args.sorted_dir.join("Work - w").join("a.eml").is_file());

        let stats = folder_stats(&args, &table).unwrap();
        let counts: Vec<_> = stats.iter().map(|s| (s.folder.as_str(), s.files)).collect();
        assert_eq!(counts, [("Inbox - 0", 2), ("Work - w", 1), ("Trash - t", 0)]);

        assert_eq!(prune_empty(&args, &stats).unwrap(), ["Trash - t"]);
        assert!(!args.sorted_dir.join("Trash - t").exists());
        assert!(inbox.is_dir());
    }

    #[test]
    fn test_existing_sorted_dir() {
        let (_dir, args, _) = setup();
        let table = table();
        let stale = args.sorted_dir.join("stale.eml");
        fs::create_dir(&args.sorted_dir).unwrap();
        fs::write(&stale, "old").unwrap();

        assert!(!prepare_sorted_dir(&args, &table, false).unwrap());
        assert!(stale.is_file());

        assert!(prepare_sorted_dir(&args, &table, true).unwrap());
        assert!(!stale.exists());
        assert!(args.sorted_dir.join("Work - w").is_dir());
    }
}
