use flexstr::SharedStr as FlexStr;

pub type GeneStableId = FlexStr;
pub type TranscriptId = FlexStr;
pub type ProteinId = FlexStr;
pub type DisplayName = FlexStr;

// local node ids in the exchange document, "1.0", "1.1", "2.0", ...
pub type NodeId = FlexStr;

pub type SpeciesName = FlexStr;
pub type SpeciesNum = u8;

pub type MiTermId = FlexStr;
