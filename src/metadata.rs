use crate::args::Args;
use crate::utils;
use anyhow::{Context, Error, Result};
use rayon::prelude::*;
use serde::Deserialize;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

const MESSAGE_EXTENSION: &str = "eml";
const METADATA_SUFFIX: &str = ".metadata.json";

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(rename = "Payload")]
    payload: Payload,
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(rename = "LabelIDs", default)]
    label_ids: Vec<String>,
}

#[derive(Debug)]
pub enum MetadataState {
    /// Label IDs of the message, without duplicates.
    Found(Vec<String>),
    Missing,
    Invalid(Error),
}

#[derive(Debug)]
pub struct Message {
    pub path: PathBuf,
    pub metadata: MetadataState,
}

/// `foo.eml` is described by `foo.metadata.json` next to it.
pub fn metadata_path(message: &Path) -> PathBuf {
    let mut name = message.file_stem().unwrap_or_default().to_os_string();
    name.push(METADATA_SUFFIX);
    message.with_file_name(name)
}

fn is_message(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(MESSAGE_EXTENSION)) && path.is_file()
}

fn read_label_ids(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let metadata: Metadata = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let mut ids = Vec::with_capacity(metadata.payload.label_ids.len());
    for id in metadata.payload.label_ids {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

fn get_metadata_state(message: &Path) -> MetadataState {
    let path = metadata_path(message);
    if !path.is_file() {
        return MetadataState::Missing;
    }
    match read_label_ids(&path) {
        Ok(ids) => MetadataState::Found(ids),
        Err(e) => MetadataState::Invalid(e),
    }
}

pub fn list_messages(args: &Args) -> Result<Vec<Message>> {
    let dir = &args.export_dir;
    let mut files = vec![];
    for entry in fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        if is_message(&path) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Ok(vec![]);
    }

    let progress = utils::create_progress_bar(args, files.len());
    let result = files
        .into_par_iter()
        .enumerate()
        .map(|(i, path)| {
            let metadata = get_metadata_state(&path);
            if i % 128 == 127 {
                progress.inc(128);
            }
            Message { path, metadata }
        })
        .collect();
    progress.finish_and_clear();

    Ok(result)
}
