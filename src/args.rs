use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "export-sorter")]
#[clap(author, version, about)]
pub struct Args {
    /// Path to the export directory containing the .eml files, their
    /// .metadata.json files and labels.json.
    pub export_dir: PathBuf,
    /// The label catalog, which is export_dir/labels.json.
    #[clap(skip)]
    pub labels_file: PathBuf,
    /// The directory we build the label folders in, which is
    /// export_dir/sorted.
    #[clap(skip)]
    pub sorted_dir: PathBuf,
    /// Answer yes to every question: overwrite an existing sorted
    /// directory and delete empty label folders.
    #[clap(short, long)]
    pub yes: bool,
    /// Never delete empty label folders.
    #[clap(long)]
    pub keep_empty: bool,
    /// Check every copy against its source with SHA-512.
    #[clap(long)]
    pub verify: bool,
    /// Suppress any progress output if set.
    #[clap(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        let mut result: Self = Self::parse();
        result.fill_paths();
        result
    }

    fn fill_paths(&mut self) {
        self.labels_file = self.export_dir.join("labels.json");
        self.sorted_dir = self.export_dir.join("sorted");
    }

    #[cfg(test)]
    pub fn for_dir(export_dir: &std::path::Path) -> Self {
        let mut result = Args {
            export_dir: export_dir.to_path_buf(),
            labels_file: PathBuf::new(),
            sorted_dir: PathBuf::new(),
            yes: true,
            keep_empty: false,
            verify: false,
            quiet: true,
        };
        result.fill_paths();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_derived_paths() {
        let args = Args::try_parse_from(&["export-sorter", "-y", "/tmp/export"]).unwrap();
        assert!(args.yes);
        assert!(!args.keep_empty);
        let mut args = args;
        args.fill_paths();
        assert_eq!(args.labels_file, Path::new("/tmp/export/labels.json"));
        assert_eq!(args.sorted_dir, Path::new("/tmp/export/sorted"));
    }

    #[test]
    fn test_export_dir_required() {
        assert!(Args::try_parse_from(&["export-sorter"]).is_err());
    }
}
