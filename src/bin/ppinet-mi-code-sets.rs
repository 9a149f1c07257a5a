//! Expands the physical-interaction and experimental-detection roots of
//! the PSI-MI vocabulary into the flat code files the upstream pair-file
//! filtering reads.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;

use anyhow::Context;
use getopts::Options;
use tracing_subscriber::EnvFilter;

use ppinet::mi_codes::{descendant_closure, read_mi_tree_from_file,
                       EXPERIMENTAL_DETECTION_ROOT, PHYSICAL_INTERACTION_ROOT};
use ppinet::types::MiTermId;

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options] <mi_obo_file>", program);
    print!("{}", opts.usage(&brief));
}

fn write_code_file(codes: &std::collections::HashSet<MiTermId>, file_name: &str)
                   -> anyhow::Result<()> {
    let file = File::create(file_name)
        .with_context(|| format!("failed to create {}", file_name))?;
    let mut writer = BufWriter::new(&file);

    let mut sorted_codes: Vec<_> = codes.iter().collect();
    sorted_codes.sort();

    for code in sorted_codes {
        writeln!(writer, "{}", code)?;
    }

    writer.flush()?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();

    opts.optflag("h", "help", "print this help message");
    opts.optopt("", "physical-output",
                "output file for physical interaction codes \
                 (default: physical_interaction_codes.txt)", "FILE");
    opts.optopt("", "experimental-output",
                "output file for experimental detection codes \
                 (default: experimental_detected_codes.txt)", "FILE");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            eprintln!("option parsing error: {}", failure);
            print_usage(&program, &opts);
            process::exit(1);
        }
    };

    if matches.opt_present("help") || matches.free.is_empty() {
        print_usage(&program, &opts);
        process::exit(if matches.opt_present("help") { 0 } else { 1 });
    }

    let mi_file_name = &matches.free[0];
    let physical_file_name = matches.opt_str("physical-output")
        .unwrap_or_else(|| "physical_interaction_codes.txt".to_owned());
    let experimental_file_name = matches.opt_str("experimental-output")
        .unwrap_or_else(|| "experimental_detected_codes.txt".to_owned());

    let mi_tree = read_mi_tree_from_file(mi_file_name)
        .with_context(|| format!("failed to read MI vocabulary {}", mi_file_name))?;

    let physical_roots = std::collections::HashSet::from([PHYSICAL_INTERACTION_ROOT.into()]);
    let experimental_roots = std::collections::HashSet::from([EXPERIMENTAL_DETECTION_ROOT.into()]);

    let physical_codes = descendant_closure(&mi_tree, &physical_roots);
    let experimental_codes = descendant_closure(&mi_tree, &experimental_roots);

    tracing::info!("{} physical codes, {} experimental codes",
                   physical_codes.len(), experimental_codes.len());

    write_code_file(&physical_codes, &physical_file_name)?;
    write_code_file(&experimental_codes, &experimental_file_name)?;

    Ok(())
}
