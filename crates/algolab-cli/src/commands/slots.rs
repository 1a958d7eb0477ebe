//! Exam slot scheduling command (greedy coloring).

use algolab_core::ConflictGraph;
use algolab_core::algorithms::{Coloring, greedy_coloring};
use anyhow::{Result, bail};
use serde::Serialize;

use crate::OutputFormat;
use crate::input::ConflictArg;
use crate::output::{self, Format};

const DEFAULT_COURSES: usize = 6;

/// Course pairs sharing students, used when no `--conflict` is given.
const DEFAULT_CONFLICTS: [(u32, u32); 6] = [(0, 1), (1, 2), (2, 3), (3, 4), (3, 5), (0, 5)];

#[derive(Serialize)]
struct SlotsOutput<'a> {
    courses: usize,
    conflicts: usize,
    #[serde(flatten)]
    coloring: &'a Coloring,
}

/// Run the slots command.
pub fn run(
    courses: Option<usize>,
    conflicts: &[ConflictArg],
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = build(courses, conflicts)?;
    let coloring = greedy_coloring(&graph);
    debug_assert!(coloring.is_proper(&graph));
    tracing::info!(courses = graph.vertex_count(), slots = coloring.slots, "exam slots assigned");

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &SlotsOutput {
                courses: graph.vertex_count(),
                conflicts: graph.conflicts().count(),
                coloring: &coloring,
            },
            quiet,
        )?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Course", "Slot"]);
            for (course, slot) in coloring.assignment.iter().enumerate() {
                table.add_row(vec![course.to_string(), slot.to_string()]);
            }
            output::print_table(&table, quiet);
            output::status(&format!("Total slots used: {}", coloring.slots), quiet);
        }
    }
    Ok(())
}

fn build(courses: Option<usize>, conflicts: &[ConflictArg]) -> Result<ConflictGraph> {
    let pairs: Vec<ConflictArg> = if conflicts.is_empty() {
        if courses.is_some_and(|n| n != DEFAULT_COURSES) {
            bail!("--courses without --conflict only applies to the {DEFAULT_COURSES}-course example");
        }
        DEFAULT_CONFLICTS
            .iter()
            .map(|&(u, v)| ConflictArg(u.into(), v.into()))
            .collect()
    } else {
        conflicts.to_vec()
    };

    // Without --courses, size the graph to the highest course mentioned.
    let count = courses.unwrap_or_else(|| {
        pairs
            .iter()
            .map(|ConflictArg(u, v)| u.index().max(v.index()) + 1)
            .max()
            .unwrap_or(0)
    });
    Ok(ConflictGraph::from_conflicts(
        count,
        pairs.into_iter().map(|ConflictArg(u, v)| (u, v)),
    )?)
}
