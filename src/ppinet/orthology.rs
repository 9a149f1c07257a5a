//! Cross-species ortholog groups and the reverse lookup from any
//! member protein to its group.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::rc::Rc;

use crate::error::Result;
use crate::types::ProteinId;

/// A set of protein ids, spanning species, believed to be mutually
/// orthologous. Equality and hashing are by member-set value, so
/// repeated groups collapse to one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orthogroup {
    members: BTreeSet<ProteinId>,
}

impl Orthogroup {
    pub fn new(members: BTreeSet<ProteinId>) -> Orthogroup {
        Orthogroup { members }
    }

    pub fn members(&self) -> &BTreeSet<ProteinId> {
        &self.members
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The parsed group collection plus the member -> group reverse index.
#[derive(Debug, Default)]
pub struct OrthologyIndex {
    groups: Vec<Rc<Orthogroup>>,
    group_set: HashSet<Rc<Orthogroup>>,
    by_protein: HashMap<ProteinId, Rc<Orthogroup>>,
}

impl OrthologyIndex {
    pub fn new() -> OrthologyIndex {
        OrthologyIndex::default()
    }

    /// A protein appearing in two different groups keeps the mapping to
    /// the later group. The input promises disjoint groups, so this is
    /// logged but tolerated rather than treated as fatal.
    pub fn add_group(&mut self, group: Orthogroup) {
        if group.is_empty() {
            return;
        }

        let group = Rc::new(group);

        if self.group_set.insert(group.clone()) {
            self.groups.push(group.clone());
        }

        for member in group.members() {
            if let Some(previous) = self.by_protein.insert(member.clone(), group.clone()) {
                if previous != group {
                    tracing::warn!("{} is a member of more than one orthogroup, \
                                    keeping the later group", member);
                }
            }
        }
    }

    /// Read a flat orthogroup file: one group of tab-separated protein
    /// ids per row. A row whose first token starts with `!` is a
    /// directive marker: it is skipped together with the physical row
    /// after it, matching the paired-line convention of the source
    /// format.
    pub fn read_groups<R: BufRead>(reader: R) -> Result<OrthologyIndex> {
        let mut index = OrthologyIndex::new();
        let mut lines = reader.lines();

        while let Some(line) = lines.next() {
            let line = line?;

            let first_token = line.split('\t').next().unwrap_or_default();
            if first_token.starts_with('!') {
                if let Some(skipped) = lines.next() {
                    skipped?;
                }
                continue;
            }

            let members: BTreeSet<ProteinId> = line.split('\t')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| id.into())
                .collect();

            index.add_group(Orthogroup::new(members));
        }

        Ok(index)
    }

    pub fn from_file(file_name: &str) -> Result<OrthologyIndex> {
        let file = File::open(file_name)?;
        OrthologyIndex::read_groups(BufReader::new(file))
    }

    /// The full member set of the queried protein's group, the queried
    /// id included, or `None` for a protein in no group.
    pub fn find_protein(&self, id: &str) -> Option<&BTreeSet<ProteinId>> {
        self.by_protein.get(id).map(|group| group.members())
    }

    pub fn groups(&self) -> impl Iterator<Item = &Rc<Orthogroup>> {
        self.groups.iter()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
