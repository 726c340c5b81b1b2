use std::env;
use std::process;
use std::time::Instant;

use prim_mst::{minimum_spanning_tree_random_start, Graph};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: prim_mst <graph-file>");
            process::exit(1);
        }
    };

    let started = Instant::now();
    let graph = match Graph::from_file(&path) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("ERR. {err}");
            process::exit(1);
        }
    };
    let read_time = started.elapsed();

    let started = Instant::now();
    let mst = match minimum_spanning_tree_random_start(&graph) {
        Ok(mst) => mst,
        Err(err) => {
            eprintln!("ERR. {err}");
            process::exit(1);
        }
    };
    let algo_time = started.elapsed();

    println!(
        "Overall cost of minimum spanning tree is: {}",
        mst.total_weight
    );
    println!("Elapsed: {read_time:?} reading the graph.");
    println!("Elapsed: {algo_time:?} computing the spanning tree.");
}
