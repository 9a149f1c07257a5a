//! Molecular-interaction (PSI-MI) vocabulary handling: a minimal parse
//! of the `id:`/`is_a:` stanza lines, the descendant closure used to
//! expand the physical/experimental root terms, and the predicate the
//! upstream interaction filtering is built from.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::Result;
use crate::types::MiTermId;

/// direct interaction
pub const PHYSICAL_INTERACTION_ROOT: &str = "MI:0407";
/// experimental interaction detection
pub const EXPERIMENTAL_DETECTION_ROOT: &str = "MI:0045";

pub type MiTree = HashMap<MiTermId, HashSet<MiTermId>>;

/// Read the vocabulary file into child -> parents edges. Only the
/// `id:` and `is_a:` lines of each stanza matter here; the `is_a:`
/// trailing `! <term name>` comment is dropped.
pub fn read_mi_tree<R: BufRead>(reader: R) -> Result<MiTree> {
    let mut mi_tree: MiTree = HashMap::new();
    let mut current_term: Option<MiTermId> = None;

    for line in reader.lines() {
        let line = line?;

        if let Some(id) = line.strip_prefix("id:") {
            current_term = Some(id.trim().into());
        } else if let Some(is_a) = line.strip_prefix("is_a:") {
            let Some(ref term) = current_term else {
                continue;
            };

            let parent = is_a.split('!').next().unwrap_or_default().trim();
            if !parent.is_empty() {
                mi_tree.entry(term.clone()).or_default().insert(parent.into());
            }
        }
    }

    Ok(mi_tree)
}

pub fn read_mi_tree_from_file(file_name: &str) -> Result<MiTree> {
    let file = File::open(file_name)?;
    read_mi_tree(BufReader::new(file))
}

/// All terms of the tree that descend from the given roots, the roots
/// included. Iterates to a fixed point so depth doesn't matter.
pub fn descendant_closure(mi_tree: &MiTree, roots: &HashSet<MiTermId>) -> HashSet<MiTermId> {
    let mut codes = roots.clone();

    loop {
        let size_before = codes.len();

        for (term, parents) in mi_tree {
            if !codes.contains(term) && parents.iter().any(|parent| codes.contains(parent)) {
                codes.insert(term.clone());
            }
        }

        if codes.len() == size_before {
            return codes;
        }
    }
}

/// The opaque predicate the upstream pair-file generation filters with:
/// an interaction is kept when its interaction type is a physical code
/// and its detection method is an experimental code.
#[derive(Debug)]
pub struct InteractionFilter {
    physical: HashSet<MiTermId>,
    experimental: HashSet<MiTermId>,
}

impl InteractionFilter {
    pub fn new(physical: HashSet<MiTermId>, experimental: HashSet<MiTermId>)
               -> InteractionFilter {
        InteractionFilter { physical, experimental }
    }

    pub fn from_mi_tree(mi_tree: &MiTree) -> InteractionFilter {
        let physical_roots = HashSet::from([PHYSICAL_INTERACTION_ROOT.into()]);
        let experimental_roots = HashSet::from([EXPERIMENTAL_DETECTION_ROOT.into()]);

        InteractionFilter {
            physical: descendant_closure(mi_tree, &physical_roots),
            experimental: descendant_closure(mi_tree, &experimental_roots),
        }
    }

    /// Load the two flat code files written by the code-set generator,
    /// one MI term id per line.
    pub fn from_code_files(physical_file_name: &str, experimental_file_name: &str)
                           -> Result<InteractionFilter> {
        Ok(InteractionFilter {
            physical: read_code_file(physical_file_name)?,
            experimental: read_code_file(experimental_file_name)?,
        })
    }

    pub fn keep(&self, interaction_type: &str, detection_method: &str) -> bool {
        self.physical.contains(interaction_type)
            && self.experimental.contains(detection_method)
    }
}

fn read_code_file(file_name: &str) -> Result<HashSet<MiTermId>> {
    let file = File::open(file_name)?;
    let mut codes = HashSet::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        let code = line.trim();
        if !code.is_empty() {
            codes.insert(code.into());
        }
    }

    Ok(codes)
}
