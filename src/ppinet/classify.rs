//! Labels every subnetwork node with its orthology relationship to the
//! opposite species' subnetwork.

use crate::data_types::{NodeClassMap, NodeSpeciesMap, OrthologyClass};
use crate::network::InteractionGraph;
use crate::orthology::OrthologyIndex;
use crate::subnetwork::Subnetwork;
use crate::types::SpeciesNum;

/// Map every protein id appearing as a node in either subnetwork to
/// the species it was extracted for. Doubles as the combined
/// ego-network membership set during classification.
pub fn node_species_map(subnet1: &Subnetwork, subnet2: &Subnetwork) -> NodeSpeciesMap {
    subnet1.nodes.iter()
        .chain(subnet2.nodes.iter())
        .map(|node| (node.protein_id.clone(), node.species))
        .collect()
}

/// The decision procedure for one protein. The first matching rule
/// wins:
/// 1. unknown to both species' full interaction networks -> `nonexistent`
/// 2. some orthogroup co-member is a node of the *other* species'
///    subnetwork -> `exists_in` (later co-members can't change this)
/// 3. in an orthogroup, but no co-member visible across species ->
///    `exists_out` (its orthologs are outside the queried neighborhood)
/// 4. no orthogroup membership at all -> `nonortho`
///
/// Co-members that are in no subnetwork have no species to compare
/// against; that lookup miss is an ordinary skip, not an error.
pub fn classify_protein(protein_id: &str, species: SpeciesNum,
                        node_species: &NodeSpeciesMap,
                        orthology_index: &OrthologyIndex,
                        full_graph_s1: &InteractionGraph,
                        full_graph_s2: &InteractionGraph) -> OrthologyClass {
    if !full_graph_s1.contains(protein_id) && !full_graph_s2.contains(protein_id) {
        return OrthologyClass::Nonexistent;
    }

    let Some(members) = orthology_index.find_protein(protein_id) else {
        return OrthologyClass::NonOrtholog;
    };

    for member in members {
        let Some(&member_species) = node_species.get(member.as_str()) else {
            continue;
        };

        if member_species != species {
            return OrthologyClass::ExistsInside;
        }
    }

    OrthologyClass::ExistsOutside
}

/// Classify both subnetworks against each other. Each node's class is
/// assigned exactly once; the returned map records the label per local
/// node id. Afterwards each species' node block is stably re-ordered
/// by its full class string so rendering groups nodes by orthology
/// status, with discovery order breaking ties. Edges are untouched.
pub fn classify_subnetworks(subnet1: &mut Subnetwork, subnet2: &mut Subnetwork,
                            orthology_index: &OrthologyIndex,
                            full_graph_s1: &InteractionGraph,
                            full_graph_s2: &InteractionGraph) -> NodeClassMap {
    let node_species = node_species_map(subnet1, subnet2);

    let mut class_map = NodeClassMap::new();

    for node in subnet1.nodes.iter_mut().chain(subnet2.nodes.iter_mut()) {
        let orthology_class =
            classify_protein(&node.protein_id, node.species, &node_species,
                             orthology_index, full_graph_s1, full_graph_s2);

        node.orthology_class = Some(orthology_class);
        class_map.insert(node.node_id().clone(), orthology_class);
    }

    subnet1.nodes.sort_by_key(|node| node.classes());
    subnet2.nodes.sort_by_key(|node| node.classes());

    class_map
}
