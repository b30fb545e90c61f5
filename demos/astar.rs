use std::path::PathBuf;

use clap::Parser;
use wpath::{path_cost, AStarSearcher, Graph};

mod graphfile;

#[derive(Parser)]
struct Options {
    /// Graph file to search instead of the built-in six node example.
    #[arg(long)]
    graph: Option<PathBuf>,
    #[arg(long, default_value_t = 0)]
    start: usize,
    #[arg(long, default_value_t = 5)]
    target: usize,
}

fn six_node_problem() -> graphfile::Problem {
    let graph = Graph::from_undirected_edges(
        6,
        [
            (0, 1, 2.0),
            (0, 3, 6.0),
            (1, 2, 5.0),
            (2, 3, 7.0),
            (2, 4, 6.0),
            (2, 5, 9.0),
            (3, 4, 10.0),
            (4, 5, 6.0),
        ],
    )
    .unwrap();
    graphfile::Problem {
        graph,
        heuristic: vec![20.0, 16.0, 6.0, 10.0, 4.0, 0.0],
    }
}

fn main() {
    env_logger::init();
    let opt = Options::parse();

    let problem = match &opt.graph {
        Some(path) => graphfile::read_problem(path).unwrap(),
        None => six_node_problem(),
    };

    let searcher = match AStarSearcher::new(&problem.graph, &problem.heuristic) {
        Ok(searcher) => searcher,
        Err(e) => {
            eprintln!("invalid problem: {e}");
            std::process::exit(1);
        }
    };
    if !wpath::heuristic_is_consistent(searcher.graph(), &problem.heuristic) {
        log::warn!("heuristic is not consistent; nodes may be expanded more than once");
    }

    let path = match searcher.search(opt.start, opt.target) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("invalid query: {e}");
            std::process::exit(1);
        }
    };

    if path.is_empty() {
        println!("failed to find path");
        return;
    }

    println!("The shortest path");
    println!("order, nodeId, f-value");
    for (order, step) in path.iter().enumerate() {
        println!("{} {} {}", order + 1, step.id, step.f);
    }
    println!("cost {}", path_cost(&path));
}
