// Copyright (c) 2016-2021 Fabian Schuiki

//! Draws the module hierarchy of a SystemVerilog file as a Graphviz graph.

extern crate clap;
extern crate svgraph;
#[macro_use]
extern crate log;

use clap::{App, Arg, ArgMatches};
use svgraph::errors::*;
use svgraph::*;

fn main() {
    let matches = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Draws the module hierarchy of a SystemVerilog file as a Graphviz graph.")
        .arg(
            Arg::with_name("INPUT")
                .help("The SystemVerilog source file to scan")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("NAME")
                .help("Name of the output .dot file (without extension)")
                .takes_value(true)
                .default_value("sv_graph"),
        )
        .get_matches();

    // Configure the logger. Verbosity is controlled through `RUST_LOG`.
    pretty_env_logger::init();

    // Problems are reported as diagnostics only. The exit status carries no
    // meaning beyond clap's own usage errors.
    let sess = Session::new();
    graph(&sess, &matches);
}

fn graph(sess: &Session, matches: &ArgMatches) {
    let input = matches.value_of("INPUT").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or("sv_graph");

    // Scan the input file. A file that cannot be read has already been
    // reported at this point, and nothing is rendered.
    info!("scanning `{}`", input);
    let hierarchy = svlog::scan_file(input, sess);
    if sess.failed() {
        return;
    }
    if hierarchy.is_empty() {
        sess.emit(
            DiagBuilder::warning(format!("no module hierarchy found in `{}`", input))
                .add_note("nothing to render"),
        );
        return;
    }

    // Emit the graph.
    match dot::render(&hierarchy, output) {
        Ok(path) => println!("Successfully generated DOT graph: {}", path.display()),
        Err(diag) => sess.emit(diag),
    }
}
