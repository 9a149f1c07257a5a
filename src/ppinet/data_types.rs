use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fmt::Display;

use flexstr::{SharedStr as FlexStr, shared_str as flex_str, shared_fmt as flex_fmt};

use crate::types::*;
use crate::utils::join;

pub type GeneRecordMap = HashMap<GeneStableId, GeneRecord>;

// protein id -> local node id, for edge target resolution
pub type EdgeIndexMap = HashMap<ProteinId, NodeId>;

// protein id -> species of the subnetwork node carrying it
pub type NodeSpeciesMap = HashMap<ProteinId, SpeciesNum>;

pub type NodeClassMap = HashMap<NodeId, OrthologyClass>;

pub const ID_SLOT_COUNT: usize = 7;

/// The identifier-type slots of a reconciled gene record, in the
/// order they appear in the exchange document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdSlot {
    Transcript,
    Protein,
    DisplayName,
    Ncbi,
    SwissProt,
    Trembl,
    RefSeq,
}

impl IdSlot {
    pub const ALL: [IdSlot; ID_SLOT_COUNT] =
        [IdSlot::Transcript, IdSlot::Protein, IdSlot::DisplayName, IdSlot::Ncbi,
         IdSlot::SwissProt, IdSlot::Trembl, IdSlot::RefSeq];

    pub fn index(self) -> usize {
        match self {
            IdSlot::Transcript => 0,
            IdSlot::Protein => 1,
            IdSlot::DisplayName => 2,
            IdSlot::Ncbi => 3,
            IdSlot::SwissProt => 4,
            IdSlot::Trembl => 5,
            IdSlot::RefSeq => 6,
        }
    }
}

pub type SlotValues = BTreeSet<FlexStr>;

/// One gene's reconciled identity data: the stable id that keys the
/// record plus one value set per identifier slot. Absent values are
/// empty sets. Slot sets only grow while source tables are ingested.
#[derive(Clone, Debug, Default)]
pub struct GeneRecord {
    pub gene_stable_id: GeneStableId,
    slots: [SlotValues; ID_SLOT_COUNT],
}

impl GeneRecord {
    pub fn new(gene_stable_id: GeneStableId) -> GeneRecord {
        GeneRecord {
            gene_stable_id,
            slots: Default::default(),
        }
    }

    /// Union one observed value into a slot. Empty strings are not
    /// identifiers and are ignored.
    pub fn add_value(&mut self, slot: IdSlot, value: &str) {
        if !value.is_empty() {
            self.slots[slot.index()].insert(value.into());
        }
    }

    pub fn values(&self, slot: IdSlot) -> &SlotValues {
        &self.slots[slot.index()]
    }

    pub fn display_name(&self) -> Option<&FlexStr> {
        self.slots[IdSlot::DisplayName.index()].iter().next()
    }
}

/// How a subnetwork node relates to the opposite species' subnetwork,
/// by orthogroup membership.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrthologyClass {
    /// not a node of either species' full interaction network
    #[serde(rename = "nonexistent")]
    Nonexistent,
    /// has an ortholog among the opposite species' subnetwork nodes
    #[serde(rename = "exists_in")]
    ExistsInside,
    /// has orthologs, but none of them fall inside the queried subnetworks
    #[serde(rename = "exists_out")]
    ExistsOutside,
    /// no orthogroup membership at all
    #[serde(rename = "nonortho")]
    NonOrtholog,
}

impl OrthologyClass {
    pub fn class_tag(&self) -> &'static str {
        match self {
            OrthologyClass::Nonexistent => "nonexistent",
            OrthologyClass::ExistsInside => "exists_in",
            OrthologyClass::ExistsOutside => "exists_out",
            OrthologyClass::NonOrtholog => "nonortho",
        }
    }
}

impl Display for OrthologyClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.class_tag())
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ContainerData {
    pub id: FlexStr,
    pub name: SpeciesName,
}

#[derive(Serialize, Clone, Debug)]
pub struct NodeData {
    pub id: NodeId,
    pub e_id: ProteinId,
    #[serde(skip_serializing_if="BTreeSet::is_empty")]
    pub t_id: SlotValues,
    #[serde(skip_serializing_if="BTreeSet::is_empty")]
    pub p_id: SlotValues,
    pub name: DisplayName,
    #[serde(skip_serializing_if="BTreeSet::is_empty")]
    pub ncbi: SlotValues,
    #[serde(skip_serializing_if="BTreeSet::is_empty")]
    pub swissprot: SlotValues,
    #[serde(skip_serializing_if="BTreeSet::is_empty")]
    pub trembl: SlotValues,
    #[serde(skip_serializing_if="BTreeSet::is_empty")]
    pub refseq: SlotValues,
    pub parent: FlexStr,
}

#[derive(Serialize, Clone, Debug)]
pub struct EdgeData {
    pub source: NodeId,
    pub target: NodeId,
}

/// One visualization node, created by ego-network extraction and
/// labelled exactly once by the classifier.
#[derive(Clone, Debug)]
pub struct SubnetworkNode {
    pub species: SpeciesNum,
    pub protein_id: ProteinId,
    pub data: NodeData,
    pub is_query: bool,
    pub orthology_class: Option<OrthologyClass>,
}

impl SubnetworkNode {
    pub fn node_id(&self) -> &NodeId {
        &self.data.id
    }

    /// The space-separated tag string the visualization layer styles by:
    /// species tag, role tags, then the orthology class once assigned.
    pub fn classes(&self) -> FlexStr {
        let mut tags = vec![flex_fmt!("species{}", self.species),
                            flex_str!("unaligned"), flex_str!("protein")];
        if self.is_query {
            tags.push(flex_str!("query"));
        }
        if let Some(orthology_class) = self.orthology_class {
            tags.push(orthology_class.class_tag().into());
        }
        join(&tags, " ")
    }

    pub fn to_element(&self) -> GraphElement {
        GraphElement::Node {
            data: self.data.clone(),
            classes: self.classes(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubnetworkEdge {
    pub species: SpeciesNum,
    pub data: EdgeData,
}

impl SubnetworkEdge {
    pub fn classes(&self) -> FlexStr {
        flex_fmt!("species{} edge", self.species)
    }

    pub fn to_element(&self) -> GraphElement {
        GraphElement::Edge {
            data: self.data.clone(),
            classes: self.classes(),
        }
    }
}

/// One record of the graph-exchange document.
#[derive(Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum GraphElement {
    Container { data: ContainerData, classes: FlexStr },
    Node { data: NodeData, classes: FlexStr },
    Edge { data: EdgeData, classes: FlexStr },
}

impl GraphElement {
    pub fn classes(&self) -> &FlexStr {
        match self {
            GraphElement::Container { classes, .. } => classes,
            GraphElement::Node { classes, .. } => classes,
            GraphElement::Edge { classes, .. } => classes,
        }
    }
}
