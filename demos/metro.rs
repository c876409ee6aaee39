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

use rs_transit::network::{self, Network};
use rs_transit::shortestpath::{line_changes, LinePenalty, ShortestPaths};
use rs_transit::{BellmanFord, Dijkstra, Graph, Solver};

use std::error::Error;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "rs_transit=debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn show_trip(net: &Network, res: &ShortestPaths, dest: &str) -> Result<(), Box<dyn Error>> {
    let path = res.reconstruct_path(dest)?;
    if path.is_empty() {
        println!("    no path");
        return Ok(());
    }
    let names: Vec<_> = path.iter().map(|u| net.station_name(u)).collect();
    println!("    path         : {}", names.join(" - "));
    println!("    time         : {}", res.distance(dest)?);
    println!("    line changes : {}", line_changes(&net.graph, &path));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compare routes in a metro network with and without line-change penalty.";
        param file:String, desc:"Network file name";
        opt from:Option<String>, desc:"Id of the departure station (default: the first station).";
        opt to:Option<String>, desc:"Id of the arrival station (default: all stations).";
        opt penalty:f64=10.0, desc:"Line-change penalty.";
        opt verbose:bool, desc:"Log the progress of the algorithms.";
    }
    .parse_or_exit();

    init_tracing(args.verbose);

    let tstart = OffsetDateTime::now_utc();
    let net = network::read(&args.file)?;
    let tend = OffsetDateTime::now_utc();
    let g = &net.graph;

    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of stations: {}", g.num_nodes());
    println!("  number of arcs: {}", g.num_arcs());

    let nodes = g.list_nodes();
    let src = match args.from {
        Some(src) => src,
        None => nodes.first().cloned().ok_or("empty network")?,
    };
    let dests = match args.to {
        Some(dest) => vec![dest],
        None => nodes.into_iter().filter(|u| *u != src).collect(),
    };
    let penalty = LinePenalty::new(args.penalty);

    let mut results = vec![];
    for &with_penalty in &[false, true] {
        let tstart = OffsetDateTime::now_utc();
        let bf = if with_penalty {
            BellmanFord.solve_with_line_penalty(g, &src, penalty)?
        } else {
            BellmanFord.solve(g, &src)?
        };
        let tmid = OffsetDateTime::now_utc();
        let dj = if with_penalty {
            Dijkstra.solve_with_line_penalty(g, &src, penalty)?
        } else {
            Dijkstra.solve(g, &src)?
        };
        let tend = OffsetDateTime::now_utc();
        println!(
            "{} penalty: Bellman-Ford {:.6} s, Dijkstra {:.6} s",
            if with_penalty { "With" } else { "Without" },
            (tmid - tstart).as_seconds_f64(),
            (tend - tmid).as_seconds_f64()
        );
        results.push((bf, dj));
    }

    for dest in &dests {
        println!();
        println!("--- {} -> {} ---", net.station_name(&src), net.station_name(dest));
        for (i, (bf, dj)) in results.iter().enumerate() {
            if i == 0 {
                println!("  without penalty:");
            } else {
                println!("  with penalty ({} per change):", args.penalty);
            }
            show_trip(&net, dj, dest)?;
            if bf.distance(dest)? != dj.distance(dest)? {
                println!(
                    "    Bellman-Ford differs: time {}, path {:?}",
                    bf.distance(dest)?,
                    bf.reconstruct_path(dest)?
                );
            }
        }
    }

    Ok(())
}
