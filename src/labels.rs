use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(rename = "Payload")]
    payload: Vec<Label>,
}

/// A label (or folder) as listed in the label catalog of the export.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Label {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl Label {
    /// Name of the directory under `sorted` holding mails with this label.
    ///
    /// The ID is part of the name so that two labels sharing a display name
    /// still get their own directory.
    pub fn folder_name(&self) -> String {
        format!("{} - {}", sanitize(&self.name), sanitize(&self.id))
    }
}

fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

/// Label ID to label lookup, in catalog order.
#[derive(Debug, Default)]
pub struct LabelTable {
    labels: Vec<Label>,
    index: HashMap<String, usize>,
}

impl LabelTable {
    pub fn from_labels(list: Vec<Label>) -> Self {
        let mut table = LabelTable::default();
        for label in list {
            match table.index.get(&label.id) {
                // A repeated ID keeps its place but takes the later name.
                Some(&i) => table.labels[i].name = label.name,
                None => {
                    table.index.insert(label.id.clone(), table.labels.len());
                    table.labels.push(label);
                }
            }
        }
        table
    }

    pub fn from_reader(reader: impl Read) -> serde_json::Result<Self> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        Ok(Self::from_labels(catalog.payload))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open label catalog {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse label catalog {}", path.display()))
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}
