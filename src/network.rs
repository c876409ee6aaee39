// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Reading transit networks from text files.
//!
//! Two formats are supported.
//!
//! # Network format
//!
//! The file consists of two sections. Lines starting with `%` are comments.
//! A comment containing the word `stations` starts the station section, a
//! comment containing `connexions` (or `connections`) starts the
//! connection section. Lines before the first section are ignored.
//!
//! Each station line has the form `id:name[:x:y[:lines]]` where `lines` is
//! a comma separated list of line names. Each connection line has the form
//! `from:to:time:line`. A connection can be travelled in both directions,
//! so it is added as two opposite arcs.
//!
//! ```text
//! % stations
//! 1:Nation:2.39:48.84:1,2,6,9
//! 2:Bastille:2.36:48.85:1,5,8
//! % connexions
//! 1:2:4:1
//! ```
//!
//! # Arc list format
//!
//! One arc per line, `from<TAB>to<TAB>cost`. Empty lines are ignored.

use crate::traits::Graph;
use crate::AdjacencyGraph;

use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

/// Error when reading a network file.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A station of a transit network.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    /// The name of the station.
    pub name: String,
    /// The coordinates of the station, if given.
    pub position: Option<(f64, f64)>,
    /// The lines serving this station, if given.
    pub lines: Vec<String>,
}

/// A transit network.
///
/// The nodes of the graph are the station ids, the arcs are the
/// connections between stations.
#[derive(Clone, Debug, Default)]
pub struct Network {
    pub graph: AdjacencyGraph<f64>,
    pub stations: HashMap<String, Station>,
}

impl Network {
    /// Return the name of the station with the given id.
    ///
    /// If the station is unknown, the id itself is returned.
    pub fn station_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.stations.get(id).map(|s| s.name.as_str()).unwrap_or(id)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Stations,
    Connections,
}

/// Call `f` for each non-empty line of `fin`.
///
/// The callback receives the line number and the trimmed line.
fn read_lines<R, F>(fin: &mut R, f: &mut F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    let mut nline = 0;
    let mut line = String::new();

    while {
        line.clear();
        fin.read_line(&mut line)
    }? > 0
    {
        nline += 1;
        let l = line.trim();
        if !l.is_empty() {
            f(nline, l)?;
        }
    }

    Ok(())
}

fn parse<T>(line: usize, tok: &str, what: &str) -> Result<T>
where
    T: FromStr,
{
    tok.trim().parse().map_err(|_| Error::Format {
        line,
        msg: format!("invalid {}: '{}'", what, tok.trim()),
    })
}

/// Parse a non-negative, finite cost.
fn parse_cost(line: usize, tok: &str, what: &str) -> Result<f64> {
    let c: f64 = parse(line, tok, what)?;
    if !c.is_finite() || c < 0.0 {
        return Err(Error::Format {
            line,
            msg: format!("{} must be finite and non-negative, got {}", what, c),
        });
    }
    Ok(c)
}

/// Read a network file.
pub fn read(fname: &str) -> Result<Network> {
    read_from_buf(&mut BufReader::new(fs::File::open(fname)?))
}

/// Read a network file.
///
/// This is the same as [`read`].
pub fn read_from_file(fname: &str) -> Result<Network> {
    read(fname)
}

/// Read a network from a buffered reader.
///
/// # Example
///
/// ```
/// use rs_transit::network;
/// use rs_transit::Graph;
///
/// let net = network::read_from_buf(&mut "% stations
/// 1:Nation
/// 2:Bastille
/// % connexions
/// 1:2:4:1
/// ".as_bytes()).unwrap();
///
/// assert_eq!(net.graph.list_nodes(), vec!["1", "2"]);
/// assert_eq!(net.graph.num_arcs(), 2);
/// assert_eq!(net.station_name("2"), "Bastille");
/// ```
pub fn read_from_buf<R>(buf: &mut R) -> Result<Network>
where
    R: BufRead,
{
    let mut net = Network::default();
    let mut section = Section::None;

    read_lines(buf, &mut |nline, line| {
        if line.starts_with('%') {
            let comment = line.to_lowercase();
            if comment.contains("stations") {
                section = Section::Stations;
            } else if comment.contains("connexions") || comment.contains("connections") {
                section = Section::Connections;
            }
            return Ok(());
        }

        let toks: Vec<_> = line.split(':').map(str::trim).collect();
        match section {
            Section::None => Ok(()),
            Section::Stations => {
                if toks.len() < 2 || toks[0].is_empty() {
                    return Err(Error::Format {
                        line: nline,
                        msg: format!("expected station 'id:name[:x:y[:lines]]', got '{}'", line),
                    });
                }
                let position: Option<(f64, f64)> = if toks.len() >= 4 {
                    Some((parse(nline, toks[2], "x coordinate")?, parse(nline, toks[3], "y coordinate")?))
                } else {
                    None
                };
                let lines: Vec<String> = toks
                    .get(4)
                    .map(|l| {
                        l.split(',')
                            .map(str::trim)
                            .filter(|l| !l.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default();

                net.graph.add_node(toks[0]);
                net.stations.insert(
                    toks[0].to_string(),
                    Station {
                        name: toks[1].to_string(),
                        position,
                        lines,
                    },
                );
                Ok(())
            }
            Section::Connections => {
                if toks.len() < 4 {
                    return Err(Error::Format {
                        line: nline,
                        msg: format!("expected connection 'from:to:time:line', got '{}'", line),
                    });
                }
                let (u, v) = (toks[0], toks[1]);
                let time = parse_cost(nline, toks[2], "travel time")?;
                for w in &[u, v] {
                    if !net.stations.contains_key(*w) {
                        warn!(line = nline, station = *w, "connection to undeclared station");
                    }
                }
                net.graph.add_line_arc(u, v, time, toks[3]);
                net.graph.add_line_arc(v, u, time, toks[3]);
                Ok(())
            }
        }
    })?;

    debug!(
        stations = net.stations.len(),
        nodes = net.graph.num_nodes(),
        arcs = net.graph.num_arcs(),
        "network loaded"
    );

    Ok(net)
}

/// Read a list of arcs from a file.
pub fn read_arcs_from_file(fname: &str) -> Result<AdjacencyGraph<f64>> {
    read_arcs_from_buf(&mut BufReader::new(fs::File::open(fname)?))
}

/// Read a list of arcs from a buffered reader.
///
/// # Example
///
/// ```
/// use rs_transit::network;
/// use rs_transit::Graph;
///
/// let g = network::read_arcs_from_buf(&mut "A\tB\t12\nB\tE\t11\n\nA\tD\t87\n".as_bytes()).unwrap();
///
/// assert_eq!(g.list_nodes(), vec!["A", "B", "E", "D"]);
/// assert_eq!(g.successors("A")[1].cost(), 87.0);
/// ```
pub fn read_arcs_from_buf<R>(buf: &mut R) -> Result<AdjacencyGraph<f64>>
where
    R: BufRead,
{
    let mut g = AdjacencyGraph::new();

    read_lines(buf, &mut |nline, line| {
        let toks: Vec<_> = line.split('\t').map(str::trim).collect();
        if toks.len() < 3 {
            return Err(Error::Format {
                line: nline,
                msg: format!("expected arc 'from<TAB>to<TAB>cost', got '{}'", line),
            });
        }
        let cost = parse_cost(nline, toks[2], "cost")?;
        g.add_arc(toks[0], toks[1], cost);
        Ok(())
    })?;

    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::{read_arcs_from_buf, read_from_buf, Error, Station};
    use crate::traits::Graph;

    const METRO: &str = "% a small part of the metro
% stations
1:Nation:2.3959:48.8483:1,2,6,9
2:Bastille:2.3690:48.8531:1,5,8
3:Gare de Lyon
 4 : Reuilly-Diderot : 2.3873 : 48.8472

% connexions
1:4:2:1
4:3:2:1
3:2:2:1
1:2:5:5
";

    #[test]
    fn test_read_network() {
        let net = read_from_buf(&mut METRO.as_bytes()).unwrap();
        let g = &net.graph;

        assert_eq!(g.list_nodes(), vec!["1", "2", "3", "4"]);
        assert_eq!(g.num_arcs(), 8);
        assert_eq!(net.stations.len(), 4);

        assert_eq!(
            net.stations["1"],
            Station {
                name: "Nation".to_string(),
                position: Some((2.3959, 48.8483)),
                lines: vec!["1".to_string(), "2".to_string(), "6".to_string(), "9".to_string()],
            }
        );
        assert_eq!(net.stations["3"].position, None);
        assert!(net.stations["4"].lines.is_empty());
        assert_eq!(net.station_name("4"), "Reuilly-Diderot");
        assert_eq!(net.station_name("99"), "99");
    }

    #[test]
    fn test_bidirectional() {
        let net = read_from_buf(&mut METRO.as_bytes()).unwrap();
        let g = &net.graph;

        let succ: Vec<_> = g.successors("1").iter().map(|a| (a.dest(), a.cost(), a.line())).collect();
        assert_eq!(succ, vec![("4", 2.0, Some("1")), ("2", 5.0, Some("5"))]);
        let succ: Vec<_> = g.successors("2").iter().map(|a| (a.dest(), a.cost(), a.line())).collect();
        assert_eq!(succ, vec![("3", 2.0, Some("1")), ("1", 5.0, Some("5"))]);
    }

    #[test]
    fn test_connections_section() {
        let net = read_from_buf(&mut "% Connections\na:b:1:A\n".as_bytes()).unwrap();
        assert_eq!(net.graph.num_arcs(), 2);
        assert!(net.stations.is_empty());
        assert_eq!(net.station_name("a"), "a");
    }

    #[test]
    fn test_format_errors() {
        match read_from_buf(&mut "% stations\n1:A\n% connexions\n1:2:x:1\n".as_bytes()) {
            Err(Error::Format { line: 4, .. }) => (),
            r => panic!("unexpected result: {:?}", r.map(|_| ())),
        }
        match read_from_buf(&mut "% stations\n1:A\n% connexions\n\n1:2:3\n".as_bytes()) {
            Err(Error::Format { line: 5, .. }) => (),
            r => panic!("unexpected result: {:?}", r.map(|_| ())),
        }
        match read_from_buf(&mut "% stations\n1\n".as_bytes()) {
            Err(Error::Format { line: 2, .. }) => (),
            r => panic!("unexpected result: {:?}", r.map(|_| ())),
        }
        match read_from_buf(&mut "% stations\n1:A:north:2\n".as_bytes()) {
            Err(Error::Format { line: 2, .. }) => (),
            r => panic!("unexpected result: {:?}", r.map(|_| ())),
        }
    }

    #[test]
    fn test_invalid_costs() {
        for time in &["-1", "NaN", "inf", "-inf"] {
            let input = format!("% connexions\na:b:2:A\na:c:{}:A\n", time);
            match read_from_buf(&mut input.as_bytes()) {
                Err(Error::Format { line: 3, .. }) => (),
                r => panic!("travel time {}: unexpected result: {:?}", time, r.map(|_| ())),
            }

            let input = format!("a\tb\t{}\n", time);
            match read_arcs_from_buf(&mut input.as_bytes()) {
                Err(Error::Format { line: 1, .. }) => (),
                r => panic!("cost {}: unexpected result: {:?}", time, r.map(|_| ())),
            }
        }
    }

    #[test]
    fn test_read_arcs() {
        let g = read_arcs_from_buf(&mut "X\tY\t5\n\nY\tZ\t3.5\n".as_bytes()).unwrap();
        assert_eq!(g.list_nodes(), vec!["X", "Y", "Z"]);
        assert_eq!(g.num_arcs(), 2);
        assert_eq!(g.successors("Y")[0].cost(), 3.5);
        assert_eq!(g.successors("Y")[0].line(), None);

        match read_arcs_from_buf(&mut "X\tY\t5\nX Y 3\n".as_bytes()) {
            Err(Error::Format { line: 2, .. }) => (),
            r => panic!("unexpected result: {:?}", r.map(|_| ())),
        }
        match read_arcs_from_buf(&mut "X\tY\t-1\n".as_bytes()) {
            Err(Error::Format { line: 1, .. }) => (),
            r => panic!("unexpected result: {:?}", r.map(|_| ())),
        }
    }
}
