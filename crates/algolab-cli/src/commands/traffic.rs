//! Ambulance routing command.
//!
//! Runs a fixed scenario on a nine-junction road network: route from the
//! depot to the nearest hospital, jam the road between junctions 3 and 4,
//! route again, clear the jam, route a third time.

use std::path::Path;

use algolab_adapters::export::export_dot;
use algolab_common::VertexId;
use algolab_core::algorithms::{dijkstra_with_epsilon, find_nearest, reconstruct_path};
use algolab_core::{Config, Edge, Graph};
use anyhow::{Context, Result};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

const JUNCTIONS: usize = 9;
const DEPOT: u32 = 0;
const HOSPITALS: [u32; 2] = [6, 8];
const JAM: (u32, u32) = (3, 4);
const NORMAL_MINUTES: f64 = 2.0;
const JAMMED_MINUTES: f64 = 40.0;

/// Two-way roads with travel times in minutes.
const ROADS: [(u32, u32, f64); 13] = [
    (0, 1, 4.0),
    (0, 2, 2.0),
    (1, 2, 1.0),
    (1, 3, 5.0),
    (2, 3, 8.0),
    (2, 4, 10.0),
    (3, 4, NORMAL_MINUTES),
    (3, 5, 6.0),
    (4, 6, 3.0),
    (5, 6, 1.0),
    (5, 7, 2.0),
    (6, 8, 7.0),
    (7, 8, 3.0),
];

#[derive(Serialize)]
struct PhaseOutput {
    phase: &'static str,
    hospital: Option<VertexId>,
    minutes: Option<f64>,
    route: Vec<VertexId>,
    roads_from_jam: Vec<Edge>,
    dot_file: Option<String>,
}

/// Builds the road network.
pub fn city() -> Result<Graph> {
    let roads = ROADS
        .iter()
        .map(|&(u, v, w)| (VertexId::new(u), VertexId::new(v), w));
    Ok(Graph::from_undirected(JUNCTIONS, roads)?)
}

fn set_jam(graph: &mut Graph, minutes: f64) -> Result<()> {
    let (a, b) = (VertexId::new(JAM.0), VertexId::new(JAM.1));
    let forward = graph.update_edge(a, b, minutes)?;
    let reverse = graph.update_edge(b, a, minutes)?;
    if !(forward && reverse) {
        tracing::warn!(forward, reverse, "road {a}-{b} not found in both directions");
    }
    Ok(())
}

fn route(
    graph: &Graph,
    phase: &'static str,
    dot_dir: Option<&Path>,
    config: &Config,
) -> Result<PhaseOutput> {
    let depot = VertexId::new(DEPOT);
    let hospitals = HOSPITALS.map(VertexId::new);

    let res = dijkstra_with_epsilon(graph, depot, config.relaxation_epsilon)?;
    let hospital = find_nearest(&res, &hospitals);
    let route = hospital
        .map(|h| reconstruct_path(&res, depot, h))
        .unwrap_or_default();
    let minutes = hospital.and_then(|h| res.distance(h));

    let roads_from_jam = graph.edges_from(VertexId::new(JAM.0))?.to_vec();
    tracing::debug!(phase, edges = ?roads_from_jam, "roads leaving junction {}", JAM.0);

    let dot_file = match dot_dir {
        Some(dir) => {
            let file = dir.join(format!("smart_traffic_{phase}.dot"));
            export_dot(&file, graph, &route)
                .with_context(|| format!("writing {}", file.display()))?;
            Some(file.display().to_string())
        }
        None => None,
    };

    Ok(PhaseOutput {
        phase,
        hospital,
        minutes,
        route,
        roads_from_jam,
        dot_file,
    })
}

/// Run the traffic command.
pub fn run(dot_dir: Option<&Path>, config: &Config, format: OutputFormat, quiet: bool) -> Result<()> {
    if let Some(dir) = dot_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let mut graph = city()?;
    let mut phases = Vec::with_capacity(3);

    phases.push(route(&graph, "initial", dot_dir, config)?);
    set_jam(&mut graph, JAMMED_MINUTES)?;
    phases.push(route(&graph, "after_update", dot_dir, config)?);
    set_jam(&mut graph, NORMAL_MINUTES)?;
    phases.push(route(&graph, "after_clear", dot_dir, config)?);

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&phases, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Phase", "Hospital", "Minutes", "Route"]);
            for phase in &phases {
                let route = phase
                    .route
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                table.add_row(vec![
                    phase.phase.replace('_', " "),
                    phase.hospital.map_or_else(|| "none".to_string(), |h| h.to_string()),
                    phase.minutes.map_or_else(|| "-".to_string(), |m| format!("{m:.2}")),
                    if route.is_empty() { "unreachable".to_string() } else { route },
                ]);
            }
            output::print_table(&table, quiet);
            for file in phases.iter().filter_map(|p| p.dot_file.as_deref()) {
                output::success(&format!("Wrote {file}"), quiet);
            }
        }
    }

    Ok(())
}
