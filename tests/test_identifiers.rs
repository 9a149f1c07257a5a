use ppinet::data_types::IdSlot;
use ppinet::error::PpinetError;
use ppinet::identifiers::{GeneRecordTable, SourceLayout};

mod util;

use util::{make_test_gene_records, SPECIES_1_IDS};

// gene, transcript, protein, name, swissprot, trembl, refseq
const SPECIES_1_XREFS: &str = "\
gene_stable_id\ttranscript_stable_id\tprotein_stable_id\tgene_name\tuniprotswissprot\tuniprotsptrembl\trefseq_peptide
G2\tT2\tB\tbigB\tP22223\tQ55555\tNP_002222
G3\tT3\tC\t\tP33333\tQ33333\t
";

fn slot_values(gene_records: &GeneRecordTable, gene_key: &str, slot: IdSlot) -> Vec<String> {
    gene_records.get(gene_key).unwrap()
        .values(slot)
        .iter()
        .map(|value| value.to_string())
        .collect()
}

#[test]
fn test_ingest_single_table() {
    let gene_records = make_test_gene_records(SPECIES_1_IDS);

    assert_eq!(gene_records.len(), 3);

    assert_eq!(slot_values(&gene_records, "G1", IdSlot::Protein), vec!["A"]);
    assert_eq!(slot_values(&gene_records, "G1", IdSlot::DisplayName), vec!["aceA"]);
    assert_eq!(slot_values(&gene_records, "G1", IdSlot::Ncbi), vec!["4351"]);
    assert_eq!(slot_values(&gene_records, "G1", IdSlot::RefSeq), vec!["NP_001111"]);

    // absent values are empty sets, not missing slots
    assert!(slot_values(&gene_records, "G1", IdSlot::Trembl).is_empty());
    assert!(slot_values(&gene_records, "G3", IdSlot::DisplayName).is_empty());

    assert!(gene_records.get("G999").is_none());
}

#[test]
fn test_ingest_is_idempotent() {
    let mut gene_records = make_test_gene_records(SPECIES_1_IDS);

    gene_records.ingest(SPECIES_1_IDS.as_bytes(), &SourceLayout::ensembl_full(),
                        "test table again")
        .unwrap();

    assert_eq!(gene_records.len(), 3);
    assert_eq!(slot_values(&gene_records, "G2", IdSlot::SwissProt), vec!["P22222"]);
    assert_eq!(slot_values(&gene_records, "G2", IdSlot::DisplayName), vec!["bigB"]);
}

#[test]
fn test_xref_table_lands_in_right_slots() {
    let mut gene_records = make_test_gene_records(SPECIES_1_IDS);

    gene_records.ingest(SPECIES_1_XREFS.as_bytes(), &SourceLayout::ensembl_xrefs(),
                        "xref table")
        .unwrap();

    // new values union with the existing slot sets
    assert_eq!(slot_values(&gene_records, "G2", IdSlot::SwissProt),
               vec!["P22222", "P22223"]);
    assert_eq!(slot_values(&gene_records, "G2", IdSlot::Trembl), vec!["Q55555"]);
    assert_eq!(slot_values(&gene_records, "G2", IdSlot::RefSeq), vec!["NP_002222"]);

    // repeated values stay deduplicated
    assert_eq!(slot_values(&gene_records, "G3", IdSlot::Trembl), vec!["Q33333"]);

    // the xref layout has no NCBI column, so the slot is untouched
    assert_eq!(slot_values(&gene_records, "G2", IdSlot::Ncbi), vec!["4352"]);
}

#[test]
fn test_short_row_is_malformed() {
    let table = "\
gene_stable_id\ttranscript_stable_id\tprotein_stable_id\tgene_name
G1\tT1\tA\taceA
G9\tT9
";

    let mut gene_records = GeneRecordTable::new();
    let result = gene_records.ingest(table.as_bytes(), &SourceLayout::ensembl_full(),
                                     "short table");

    match result {
        Err(PpinetError::MalformedRecord { source_name: source, line, .. }) => {
            assert_eq!(source, "short table");
            assert_eq!(line, 3);
        },
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_empty_gene_key_is_malformed() {
    let table = "\
gene_stable_id\ttranscript_stable_id\tprotein_stable_id
\tT1\tA
";

    let mut gene_records = GeneRecordTable::new();
    let result = gene_records.ingest(table.as_bytes(), &SourceLayout::ensembl_full(),
                                     "keyless table");

    assert!(matches!(result, Err(PpinetError::MalformedRecord { .. })));
}

#[test]
fn test_resolve_fallback_chain() {
    let gene_records = make_test_gene_records(SPECIES_1_IDS);

    // protein id, then display name, then Swiss-Prot
    assert_eq!(gene_records.resolve("A").unwrap().gene_stable_id, "G1");
    assert_eq!(gene_records.resolve("bigB").unwrap().gene_stable_id, "G2");
    assert_eq!(gene_records.resolve("P11111").unwrap().gene_stable_id, "G1");

    assert!(gene_records.resolve("no-such-id").is_none());
}

#[test]
fn test_resolve_prefers_protein_id_over_name() {
    // "ZED" is G4's protein id and G5's display name
    let table = "\
gene_stable_id\ttranscript_stable_id\tprotein_stable_id\tgene_name
G4\tT4\tZED\tzedA
G5\tT5\tP5\tZED
";

    let mut gene_records = GeneRecordTable::new();
    gene_records.ingest(table.as_bytes(), &SourceLayout::ensembl_full(), "test table")
        .unwrap();

    assert_eq!(gene_records.resolve("ZED").unwrap().gene_stable_id, "G4");
}
