//! Reconciles the per-species identifier source tables into one
//! multi-valued record per gene stable id.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};

use flexstr::SharedStr as FlexStr;

use crate::data_types::{GeneRecord, GeneRecordMap, IdSlot};
use crate::error::{PpinetError, Result};
use crate::types::{DisplayName, GeneStableId, ProteinId};

/// Column layout of one identifier source table: which slot each column
/// after the key column lands in. The same species is fed from several
/// exports with different column sets, so the layout travels with the
/// source, not with the table.
#[derive(Clone, Debug)]
pub struct SourceLayout {
    pub slots: Vec<IdSlot>,
    /// fewer fields than this (key column included) is a malformed row
    pub min_fields: usize,
}

impl SourceLayout {
    /// The main Ensembl export: gene, transcript, protein, name, NCBI,
    /// Swiss-Prot, TrEMBL, RefSeq.
    pub fn ensembl_full() -> SourceLayout {
        SourceLayout {
            slots: IdSlot::ALL.to_vec(),
            min_fields: 3,
        }
    }

    /// The cross-reference export, which carries no NCBI column:
    /// gene, transcript, protein, name, Swiss-Prot, TrEMBL, RefSeq.
    pub fn ensembl_xrefs() -> SourceLayout {
        SourceLayout {
            slots: vec![IdSlot::Transcript, IdSlot::Protein, IdSlot::DisplayName,
                        IdSlot::SwissProt, IdSlot::Trembl, IdSlot::RefSeq],
            min_fields: 3,
        }
    }
}

/// All reconciled gene records for one species, with the secondary
/// indexes used to resolve interaction-graph protein ids back to records.
#[derive(Debug, Default)]
pub struct GeneRecordTable {
    records: GeneRecordMap,
    by_protein_id: HashMap<ProteinId, GeneStableId>,
    by_display_name: HashMap<DisplayName, GeneStableId>,
    by_swissprot: HashMap<FlexStr, GeneStableId>,
}

impl GeneRecordTable {
    pub fn new() -> GeneRecordTable {
        GeneRecordTable::default()
    }

    /// Merge one source table. Repeatable: the first sighting of a gene
    /// key creates its record, later sightings union values into the
    /// existing slot sets, so re-ingesting the same rows is a no-op.
    /// A row shorter than the layout's minimum aborts the ingest with
    /// the source name and line number.
    pub fn ingest<R: Read>(&mut self, reader: R, layout: &SourceLayout,
                           source_name: &str) -> Result<()> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);

        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() < layout.min_fields {
                return Err(PpinetError::MalformedRecord {
                    source_name: source_name.to_owned(),
                    line,
                    detail: format!("expected at least {} fields, found {}",
                                    layout.min_fields, record.len()),
                });
            }

            let gene_key: GeneStableId = record.get(0).unwrap_or_default().into();
            if gene_key.is_empty() {
                return Err(PpinetError::MalformedRecord {
                    source_name: source_name.to_owned(),
                    line,
                    detail: "empty gene stable id".to_owned(),
                });
            }

            let gene_record = self.records.entry(gene_key.clone())
                .or_insert_with(|| GeneRecord::new(gene_key.clone()));

            for (slot, value) in layout.slots.iter().copied().zip(record.iter().skip(1)) {
                if value.is_empty() {
                    continue;
                }

                gene_record.add_value(slot, value);

                match slot {
                    IdSlot::Protein =>
                        { self.by_protein_id.insert(value.into(), gene_key.clone()); },
                    IdSlot::DisplayName =>
                        { self.by_display_name.insert(value.into(), gene_key.clone()); },
                    IdSlot::SwissProt =>
                        { self.by_swissprot.insert(value.into(), gene_key.clone()); },
                    _ => (),
                }
            }
        }

        Ok(())
    }

    pub fn ingest_file(&mut self, file_name: &str, layout: &SourceLayout) -> Result<()> {
        let file = File::open(file_name)?;
        self.ingest(BufReader::new(file), layout, file_name)
    }

    pub fn get(&self, gene_key: &str) -> Option<&GeneRecord> {
        self.records.get(gene_key)
    }

    /// Resolve an id as a subnetwork member sees it: try the protein id
    /// index, then the display name index, then the Swiss-Prot index,
    /// first hit wins. A miss is an ordinary `None`, the caller falls
    /// back to degraded display values.
    pub fn resolve(&self, id: &str) -> Option<&GeneRecord> {
        self.by_protein_id.get(id)
            .or_else(|| self.by_display_name.get(id))
            .or_else(|| self.by_swissprot.get(id))
            .and_then(|gene_key| self.records.get(gene_key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
