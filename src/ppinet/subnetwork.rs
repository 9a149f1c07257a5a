//! Ego-network extraction around the query proteins and assembly of
//! the final graph-exchange document.

use std::fs::File;
use std::io::{BufWriter, Write};

use flexstr::{shared_str as flex_str, shared_fmt as flex_fmt};

use crate::data_types::{ContainerData, EdgeData, EdgeIndexMap, GeneRecord, GraphElement,
                        IdSlot, NodeData, SubnetworkEdge, SubnetworkNode};
use crate::error::{PpinetError, Result};
use crate::identifiers::GeneRecordTable;
use crate::network::InteractionGraph;
use crate::types::{NodeId, ProteinId, SpeciesNum};

/// One species' half of the queried subnetwork: the query protein, its
/// direct interactors, and the star of edges between them.
#[derive(Debug)]
pub struct Subnetwork {
    pub species: SpeciesNum,
    pub query_id: ProteinId,
    pub nodes: Vec<SubnetworkNode>,
    pub edges: Vec<SubnetworkEdge>,
    pub edge_index: EdgeIndexMap,
}

/// Extract the depth-1 ego network of `query_id`. The members are the
/// query's neighbors in discovery order with the query itself appended
/// last, so the local `"<species>.<index>"` ids are reproducible for a
/// given input. Fails with `UnknownProtein` for a query the graph has
/// never seen.
pub fn extract_ego(graph: &InteractionGraph, gene_records: &GeneRecordTable,
                   query_id: &str, species: SpeciesNum) -> Result<Subnetwork> {
    let neighbors = graph.neighbors(query_id)
        .ok_or_else(|| PpinetError::UnknownProtein { protein_id: query_id.into() })?;

    // Work on an owned copy: the query is appended to the member list,
    // never to the graph's adjacency set.
    let mut members: Vec<ProteinId> = neighbors.iter().cloned().collect();
    members.push(query_id.into());

    let mut nodes = Vec::with_capacity(members.len());
    let mut edge_index = EdgeIndexMap::new();

    for (index, member) in members.iter().enumerate() {
        let node_id: NodeId = flex_fmt!("{}.{}", species, index);
        let is_query = index == members.len() - 1;

        nodes.push(SubnetworkNode {
            species,
            protein_id: member.clone(),
            data: make_node_data(node_id.clone(), member, gene_records.resolve(member)),
            is_query,
            orthology_class: None,
        });

        edge_index.insert(member.clone(), node_id);
    }

    let query_node_id = edge_index[query_id].clone();

    let edges = members[..members.len() - 1].iter()
        .map(|neighbor| SubnetworkEdge {
            species,
            data: EdgeData {
                source: query_node_id.clone(),
                target: edge_index[neighbor].clone(),
            },
        })
        .collect();

    Ok(Subnetwork {
        species,
        query_id: query_id.into(),
        nodes,
        edges,
        edge_index,
    })
}

fn make_node_data(node_id: NodeId, protein_id: &ProteinId,
                  maybe_record: Option<&GeneRecord>) -> NodeData {
    let Some(record) = maybe_record else {
        // no reconciled record for this graph id: show the id itself
        return NodeData {
            id: node_id,
            e_id: protein_id.clone(),
            t_id: Default::default(),
            p_id: Default::default(),
            name: protein_id.clone(),
            ncbi: Default::default(),
            swissprot: Default::default(),
            trembl: Default::default(),
            refseq: Default::default(),
            parent: flex_str!("unaligned"),
        };
    };

    NodeData {
        id: node_id,
        e_id: protein_id.clone(),
        t_id: record.values(IdSlot::Transcript).clone(),
        p_id: record.values(IdSlot::Protein).clone(),
        name: record.display_name().cloned().unwrap_or_else(|| protein_id.clone()),
        ncbi: record.values(IdSlot::Ncbi).clone(),
        swissprot: record.values(IdSlot::SwissProt).clone(),
        trembl: record.values(IdSlot::Trembl).clone(),
        refseq: record.values(IdSlot::RefSeq).clone(),
        parent: flex_str!("unaligned"),
    }
}

/// Concatenate the document in its fixed order: the four header
/// containers, then species-1 nodes and edges, then species-2 nodes
/// and edges. The visualization layer relies on this ordering.
pub fn assemble(species1_name: &str, species2_name: &str,
                subnet1: &Subnetwork, subnet2: &Subnetwork) -> Vec<GraphElement> {
    let mut elements = vec![
        GraphElement::Container {
            data: ContainerData {
                id: flex_str!("species1"),
                name: species1_name.into(),
            },
            classes: flex_str!("container s1"),
        },
        GraphElement::Container {
            data: ContainerData {
                id: flex_str!("species2"),
                name: species2_name.into(),
            },
            classes: flex_str!("container s2"),
        },
        GraphElement::Container {
            data: ContainerData {
                id: flex_str!("aligned non-ortho"),
                name: flex_str!("aligned non-orthology"),
            },
            classes: flex_str!("container"),
        },
        GraphElement::Container {
            data: ContainerData {
                id: flex_str!("aligned ortho"),
                name: flex_str!("aligned orthology"),
            },
            classes: flex_str!("container"),
        },
    ];

    elements.extend(subnet1.nodes.iter().map(SubnetworkNode::to_element));
    elements.extend(subnet1.edges.iter().map(SubnetworkEdge::to_element));
    elements.extend(subnet2.nodes.iter().map(SubnetworkNode::to_element));
    elements.extend(subnet2.edges.iter().map(SubnetworkEdge::to_element));

    elements
}

/// Serialize the assembled document in one write at the end of the
/// query. Nothing is written when an earlier step failed.
pub fn write_graph_json(elements: &[GraphElement], file_name: &str) -> Result<()> {
    let s = serde_json::to_string(elements)?;

    let file = File::create(file_name)?;
    let mut writer = BufWriter::new(&file);
    writer.write_all(s.as_bytes())?;
    writer.flush()?;

    Ok(())
}
