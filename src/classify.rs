use crate::labels::LabelTable;
use crate::metadata::{Message, MetadataState};
use anyhow::Error;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct Plan {
    /// Mails to copy, indexed like the labels of the table.
    pub copies: Vec<Vec<PathBuf>>,
    pub missing_metadata: Vec<PathBuf>,
    pub invalid_metadata: Vec<(PathBuf, Error)>,
    /// Label IDs not in the catalog, with the number of mails carrying them.
    pub unknown_labels: BTreeMap<String, usize>,
    pub processed: usize,
    pub unlabelled: usize,
}

impl Plan {
    pub fn copy_count(&self) -> usize {
        self.copies.iter().map(Vec::len).sum()
    }
}

pub fn classify_messages(table: &LabelTable, messages: Vec<Message>) -> Plan {
    let mut plan = Plan {
        copies: vec![vec![]; table.len()],
        ..Plan::default()
    };
    for Message { path, metadata } in messages {
        let ids = match metadata {
            MetadataState::Found(ids) => ids,
            MetadataState::Missing => {
                plan.missing_metadata.push(path);
                continue;
            }
            MetadataState::Invalid(e) => {
                plan.invalid_metadata.push((path, e));
                continue;
            }
        };
        plan.processed += 1;
        let mut labelled = false;
        for id in ids {
            match table.get(&id) {
                Some(i) => {
                    plan.copies[i].push(path.clone());
                    labelled = true;
                }
                None => *plan.unknown_labels.entry(id).or_insert(0) += 1,
            }
        }
        if !labelled {
            plan.unlabelled += 1;
        }
    }
    plan
}
