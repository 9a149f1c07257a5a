use std::collections::BTreeSet;

use ppinet::identifiers::{GeneRecordTable, SourceLayout};
use ppinet::network::InteractionGraph;
use ppinet::orthology::{Orthogroup, OrthologyIndex};

// gene, transcript, protein, name, ncbi, swissprot, trembl, refseq
#[allow(dead_code)]
pub const SPECIES_1_IDS: &str = "\
gene_stable_id\ttranscript_stable_id\tprotein_stable_id\tgene_name\tncbi_gene_id\tuniprotswissprot\tuniprotsptrembl\trefseq_peptide
G1\tT1\tA\taceA\t4351\tP11111\t\tNP_001111
G2\tT2\tB\tbigB\t4352\tP22222\t\t
G3\tT3\tC\t\t4353\t\tQ33333\t
";

#[allow(dead_code)]
pub const SPECIES_2_IDS: &str = "\
gene_stable_id\ttranscript_stable_id\tprotein_stable_id\tgene_name\tncbi_gene_id\tuniprotswissprot\tuniprotsptrembl\trefseq_peptide
H1\tU1\tX\txenX\t775\tQ00001\t\t
H2\tU2\tY\tyinY\t776\tQ00002\t\t
";

#[allow(dead_code)]
pub fn make_test_gene_records(table: &str) -> GeneRecordTable {
    let mut gene_records = GeneRecordTable::new();
    gene_records.ingest(table.as_bytes(), &SourceLayout::ensembl_full(), "test table")
        .unwrap();
    gene_records
}

#[allow(dead_code)]
pub fn make_test_graph(pairs: &[(&str, &str)]) -> InteractionGraph {
    let mut graph = InteractionGraph::new();
    for (id_a, id_b) in pairs {
        graph.add_pair(id_a, id_b);
    }
    graph
}

#[allow(dead_code)]
pub fn make_test_orthology_index(groups: &[&[&str]]) -> OrthologyIndex {
    let mut index = OrthologyIndex::new();
    for group in groups {
        let members: BTreeSet<_> = group.iter().map(|id| (*id).into()).collect();
        index.add_group(Orthogroup::new(members));
    }
    index
}
