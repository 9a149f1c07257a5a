//! Per-species undirected interaction graph, built from pre-filtered
//! tab-delimited pair files.

use std::fs::File;
use std::io::{BufRead, BufReader};

use indexmap::{IndexMap, IndexSet};

use crate::error::{PpinetError, Result};
use crate::types::ProteinId;

/// Adjacency by protein id. Insertion order of both the keys and each
/// neighbor set is the file order, which keeps downstream local node
/// ids stable across runs on the same input.
#[derive(Debug, Default)]
pub struct InteractionGraph {
    adjacency: IndexMap<ProteinId, IndexSet<ProteinId>>,
}

impl InteractionGraph {
    pub fn new() -> InteractionGraph {
        InteractionGraph::default()
    }

    /// Record one undirected interaction. Both directions are stored,
    /// duplicates are suppressed by the neighbor sets, self-loops are
    /// dropped entirely.
    pub fn add_pair(&mut self, id_a: &str, id_b: &str) {
        if id_a == id_b {
            return;
        }

        self.adjacency.entry(id_a.into()).or_default().insert(id_b.into());
        self.adjacency.entry(id_b.into()).or_default().insert(id_a.into());
    }

    /// Read a pair file: one interaction per line, two tab-separated
    /// protein ids. Lines starting with `!` and blank lines are
    /// comments. A non-comment line with fewer than two fields aborts
    /// the read.
    pub fn read_pairs<R: BufRead>(reader: R, source_name: &str) -> Result<InteractionGraph> {
        let mut graph = InteractionGraph::new();
        let mut line_number = 0;

        for line in reader.lines() {
            let line = line?;
            line_number += 1;

            if line.trim().is_empty() || line.starts_with('!') {
                continue;
            }

            let mut fields = line.split('\t');

            let (Some(id_a), Some(id_b)) = (fields.next(), fields.next()) else {
                return Err(PpinetError::MalformedRecord {
                    source_name: source_name.to_owned(),
                    line: line_number,
                    detail: "expected two tab-separated protein ids".to_owned(),
                });
            };

            graph.add_pair(id_a.trim_end(), id_b.trim_end());
        }

        Ok(graph)
    }

    pub fn from_file(file_name: &str) -> Result<InteractionGraph> {
        let file = File::open(file_name)?;
        InteractionGraph::read_pairs(BufReader::new(file), file_name)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn neighbors(&self, id: &str) -> Option<&IndexSet<ProteinId>> {
        self.adjacency.get(id)
    }

    pub fn protein_ids(&self) -> impl Iterator<Item = &ProteinId> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}
