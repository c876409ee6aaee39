// Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

use time::OffsetDateTime;

use rustop::opts;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rs_transit::classes;
use rs_transit::shortestpath::{LinePenalty, Result, ShortestPaths};
use rs_transit::{AdjacencyGraph, BellmanFord, Dijkstra, Graph, Solver};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "rs_transit=debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn reference() -> AdjacencyGraph {
    AdjacencyGraph::new_with(|g| {
        g.add_arc("A", "B", 12.0);
        g.add_arc("A", "D", 87.0);
        g.add_arc("B", "E", 11.0);
        g.add_arc("C", "A", 19.0);
        g.add_arc("D", "B", 23.0);
        g.add_arc("D", "C", 10.0);
        g.add_arc("E", "D", 43.0);
    })
}

/// A sparse graph with pseudo-random costs and lines.
///
/// Node `i` is connected to `i + 1`, `i + 7` and `i + 31` (modulo `n`).
fn sparse(n: usize) -> AdjacencyGraph {
    let mut g = AdjacencyGraph::with_capacity(n);
    for i in 0..n {
        g.add_node(&i.to_string());
    }
    for i in 0..n {
        for &step in &[1, 7, 31] {
            let j = (i + step) % n;
            let cost = ((i * 17 + j * 5) % 23 + 1) as f64;
            g.add_line_arc(&i.to_string(), &j.to_string(), cost, &format!("L{}", step));
        }
    }
    g
}

/// Run `f` `niter` times and return the last result and the time per run.
fn timed<F>(niter: usize, f: F) -> Result<(ShortestPaths, f64)>
where
    F: Fn() -> Result<ShortestPaths>,
{
    let tstart = OffsetDateTime::now_utc();
    let mut res = f()?;
    for _ in 1..niter {
        res = f()?;
    }
    let tend = OffsetDateTime::now_utc();
    Ok((res, (tend - tstart).as_seconds_f64() / niter.max(1) as f64))
}

fn run<S: Solver>(
    solver: S,
    g: &AdjacencyGraph,
    src: &str,
    penalty: Option<LinePenalty>,
    niter: usize,
) -> Result<(ShortestPaths, f64)> {
    match penalty {
        None => timed(niter, || solver.solve(g, src)),
        Some(p) => timed(niter, || solver.solve_with_line_penalty(g, src, p)),
    }
}

/// Return the nodes whose distances differ.
fn differences(g: &AdjacencyGraph, a: &ShortestPaths, b: &ShortestPaths) -> Vec<String> {
    g.list_nodes()
        .into_iter()
        .filter(|u| a.distance(u) != b.distance(u))
        .collect()
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (args, _) = opts! {
        synopsis "Compare the shortest path algorithms on some sample graphs.";
        opt num:usize=1, desc:"Number of times each algorithm is repeated.";
        opt size:usize=30, desc:"Size of the generated graphs.";
        opt penalty:f64=10.0, desc:"Line-change penalty.";
        opt verbose:bool, desc:"Log the progress of the algorithms.";
    }
    .parse_or_exit();

    init_tracing(args.verbose);

    let n = args.size.max(2);
    let graphs = vec![
        ("reference", reference()),
        ("path", classes::path(&(0..n).map(|i| (i % 5 + 1) as f64).collect::<Vec<_>>())),
        ("star", classes::star(&(0..n).map(|i| (i % 9 + 1) as f64).collect::<Vec<_>>())),
        ("complete", classes::complete(n, |i, j| ((i * 7 + j * 3) % 11 + 1) as f64)),
        ("grid", classes::grid(n, n, 1.0)),
        ("sparse", sparse(n * n)),
    ];

    println!(
        "{:<10} {:>7} {:>7} {:>8} {:>12} {:>12} {:>6}",
        "graph", "nodes", "arcs", "penalty", "BF (s)", "Dijkstra (s)", "diff"
    );
    println!("{}", "=".repeat(69));

    let mut ndefects = 0;
    for (name, g) in &graphs {
        let src = g.list_nodes()[0].clone();
        for &penalty in &[None, Some(LinePenalty::new(args.penalty))] {
            let (bf, tbf) = run(BellmanFord, g, &src, penalty, args.num)?;
            let (dj, tdj) = run(Dijkstra, g, &src, penalty, args.num)?;
            let diff = differences(g, &bf, &dj);

            println!(
                "{:<10} {:>7} {:>7} {:>8} {:>12.6} {:>12.6} {:>6}",
                name,
                g.num_nodes(),
                g.num_arcs(),
                if penalty.is_some() { "yes" } else { "no" },
                tbf,
                tdj,
                diff.len()
            );

            if !diff.is_empty() {
                if penalty.is_none() {
                    ndefects += 1;
                }
                for u in diff.iter().take(3) {
                    println!(
                        "    {}: Bellman-Ford {} ({:?}), Dijkstra {} ({:?})",
                        u,
                        bf.distance(u)?,
                        bf.reconstruct_path(u)?,
                        dj.distance(u)?,
                        dj.reconstruct_path(u)?
                    );
                }
            }
        }
    }

    if ndefects > 0 {
        return Err(format!("the algorithms disagree on {} plain instances", ndefects).into());
    }

    Ok(())
}
