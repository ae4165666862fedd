mod args;
mod classify;
mod execute;
mod labels;
mod metadata;
mod prompt;
mod report;
mod utils;
mod verify;

use crate::args::Args;
use crate::labels::LabelTable;
use anyhow::{bail, Result};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse_args();
    init_tracing(&args);
    do_main(&args)
}

fn init_tracing(args: &Args) {
    let default_level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn do_main(args: &Args) -> Result<()> {
    if !args.export_dir.is_dir() {
        bail!("export directory {} does not exist", args.export_dir.display());
    }
    if !args.labels_file.is_file() {
        bail!("no labels.json in {}", args.export_dir.display());
    }

    info!("Loading label catalog...");
    let table = LabelTable::load(&args.labels_file)?;
    report::print_label_table(&table, &mut io::stdout().lock())?;

    let overwrite = !args.sorted_dir.exists()
        || prompt::confirm(
            "The 'sorted' folder already exists. Do you want to overwrite it?",
            args.yes,
        )?;
    if !execute::prepare_sorted_dir(args, &table, overwrite)? {
        println!("Exiting without making changes.");
        return Ok(());
    }

    info!("Reading metadata...");
    let messages = metadata::list_messages(args)?;

    info!("Classifying emails...");
    let plan = classify::classify_messages(&table, messages);
    report::log_plan_warnings(&plan);

    info!("Copying emails...");
    execute::copy_messages(args, &table, &plan)?;

    let stats = execute::folder_stats(args, &table)?;
    report::print_stats(&stats, &mut io::stdout().lock())?;
    report::print_summary(&plan, &mut io::stdout().lock())?;

    if stats.iter().any(|stat| stat.files == 0)
        && !args.keep_empty
        && prompt::confirm("\nDo you want to delete empty folders?", args.yes)?
    {
        for folder in execute::prune_empty(args, &stats)? {
            println!("Deleted empty folder: {}", folder);
        }
    }

    Ok(())
}
