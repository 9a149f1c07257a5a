#[macro_use] extern crate serde_derive;

pub mod types;
pub mod error;
pub mod data_types;
pub mod utils;
pub mod identifiers;
pub mod network;
pub mod orthology;
pub mod mi_codes;
pub mod subnetwork;
pub mod classify;
