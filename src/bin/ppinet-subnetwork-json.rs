use std::env;
use std::process;

use anyhow::Context;
use getopts::{Matches, Options};
use tracing_subscriber::EnvFilter;

use ppinet::classify::classify_subnetworks;
use ppinet::identifiers::{GeneRecordTable, SourceLayout};
use ppinet::network::InteractionGraph;
use ppinet::orthology::OrthologyIndex;
use ppinet::subnetwork::{assemble, extract_ego, write_graph_json};

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}", opts.usage(&brief));
}

fn req_opt(matches: &Matches, program: &str, opts: &Options, opt_name: &str) -> String {
    match matches.opt_str(opt_name) {
        Some(value) => value,
        None => {
            eprintln!("no --{} option", opt_name);
            print_usage(program, opts);
            process::exit(1);
        }
    }
}

fn read_gene_records(full_file_name: &str, maybe_xrefs_file_name: Option<String>)
                     -> anyhow::Result<GeneRecordTable> {
    let mut gene_records = GeneRecordTable::new();

    gene_records.ingest_file(full_file_name, &SourceLayout::ensembl_full())
        .with_context(|| format!("failed to read identifier table {}", full_file_name))?;

    if let Some(xrefs_file_name) = maybe_xrefs_file_name {
        gene_records.ingest_file(&xrefs_file_name, &SourceLayout::ensembl_xrefs())
            .with_context(|| format!("failed to read identifier table {}", xrefs_file_name))?;
    }

    Ok(gene_records)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("{} v{}", PKG_NAME, VERSION);

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();

    opts.optflag("h", "help", "print this help message");
    opts.optopt("", "network-1", "interaction pair file for species 1", "FILE");
    opts.optopt("", "network-2", "interaction pair file for species 2", "FILE");
    opts.optopt("", "ids-1", "identifier table for species 1", "FILE");
    opts.optopt("", "ids-2", "identifier table for species 2", "FILE");
    opts.optopt("", "xrefs-1", "extra cross-reference table for species 1", "FILE");
    opts.optopt("", "xrefs-2", "extra cross-reference table for species 2", "FILE");
    opts.optopt("", "orthogroups", "cross-species orthogroup file", "FILE");
    opts.optopt("", "query-1", "query protein id in species 1", "PROTEIN_ID");
    opts.optopt("", "query-2", "query protein id in species 2", "PROTEIN_ID");
    opts.optopt("", "species-1-name", "display name of species 1", "NAME");
    opts.optopt("", "species-2-name", "display name of species 2", "NAME");
    opts.optopt("o", "output", "output file name (default: subnetwork.json)", "FILE");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            eprintln!("option parsing error: {}", failure);
            print_usage(&program, &opts);
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        print_usage(&program, &opts);
        process::exit(0);
    }

    let network_1_file_name = req_opt(&matches, &program, &opts, "network-1");
    let network_2_file_name = req_opt(&matches, &program, &opts, "network-2");
    let ids_1_file_name = req_opt(&matches, &program, &opts, "ids-1");
    let ids_2_file_name = req_opt(&matches, &program, &opts, "ids-2");
    let orthogroups_file_name = req_opt(&matches, &program, &opts, "orthogroups");
    let query_1 = req_opt(&matches, &program, &opts, "query-1");
    let query_2 = req_opt(&matches, &program, &opts, "query-2");
    let species_1_name = req_opt(&matches, &program, &opts, "species-1-name");
    let species_2_name = req_opt(&matches, &program, &opts, "species-2-name");
    let output_file_name = matches.opt_str("output")
        .unwrap_or_else(|| "subnetwork.json".to_owned());

    let gene_records_1 = read_gene_records(&ids_1_file_name, matches.opt_str("xrefs-1"))?;
    let gene_records_2 = read_gene_records(&ids_2_file_name, matches.opt_str("xrefs-2"))?;

    let graph_1 = InteractionGraph::from_file(&network_1_file_name)
        .with_context(|| format!("failed to read network {}", network_1_file_name))?;
    let graph_2 = InteractionGraph::from_file(&network_2_file_name)
        .with_context(|| format!("failed to read network {}", network_2_file_name))?;

    tracing::info!("species 1: {} proteins, species 2: {} proteins",
                   graph_1.node_count(), graph_2.node_count());

    let orthology_index = OrthologyIndex::from_file(&orthogroups_file_name)
        .with_context(|| format!("failed to read orthogroups {}", orthogroups_file_name))?;

    tracing::info!("{} orthogroups", orthology_index.group_count());

    let mut subnet_1 = extract_ego(&graph_1, &gene_records_1, &query_1, 1)?;
    let mut subnet_2 = extract_ego(&graph_2, &gene_records_2, &query_2, 2)?;

    classify_subnetworks(&mut subnet_1, &mut subnet_2,
                         &orthology_index, &graph_1, &graph_2);

    let elements = assemble(&species_1_name, &species_2_name, &subnet_1, &subnet_2);

    write_graph_json(&elements, &output_file_name)
        .with_context(|| format!("failed to write {}", output_file_name))?;

    tracing::info!("wrote {} elements ({} + {} nodes) to {}",
                   elements.len(), subnet_1.nodes.len(), subnet_2.nodes.len(),
                   output_file_name);

    Ok(())
}
