use graphlet::prelude::*;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                output = Some(PathBuf::from(v));
                i += 2;
            }
            "-h" | "--help" => usage_and_exit(0),
            arg if arg.starts_with('-') => usage_and_exit(2),
            arg => {
                if input.is_some() {
                    usage_and_exit(2);
                }
                input = Some(PathBuf::from(arg));
                i += 1;
            }
        }
    }
    let Some(input) = input else { usage_and_exit(2) };
    let output = output.unwrap_or_else(|| default_output_path(&input));

    println!("reading {}", input.display());
    let graph = match Graph::load(&input) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}: {e}", input.display());
            process::exit(1);
        }
    };
    println!(
        "counting orbits: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let started = Instant::now();
    let orbits = match count_orbits(graph) {
        Ok(orbits) => orbits,
        Err(e) => {
            eprintln!("internal error: {e}");
            process::exit(1);
        }
    };
    println!("counted in {:.2?}", started.elapsed());

    if let Err(e) = orbits.save_to_file(&output) {
        eprintln!("error: cannot write {}: {e}", output.display());
        process::exit(1);
    }
    println!("wrote {}", output.display());
}

/// Replaces the input's final `.ext` with `_gdvs.out`; appends when the file
/// name has no extension.
fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name.as_str(),
    };
    input.with_file_name(format!("{stem}_gdvs.out"))
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  graphlet [-o OUTPUT] INPUT\n\nArguments:\n  INPUT                 \
         input graph: a header \"n m\", then m edge lines \"a b\"\n\nOptions:\n  \
         -o, --output PATH     output file (default: INPUT with its extension replaced by _gdvs.out)\n  \
         -h, --help            show this message\n"
    );
    process::exit(code)
}
