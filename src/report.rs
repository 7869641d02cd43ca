use std::fmt;

use log::{info, warn};
use serde::Serialize;

use crate::bipartite::{two_colour, Bipartition, Conflict};
use crate::edge::VertexId;
use crate::graph::Graph;
use crate::select::{dedupe, select_candidates};

/**
 * Outcome of one run over a graph: the bipartite check from `origin`, and
 * (only when that passes) the two sides of its component and the
 * deduplicated candidate list.
 *
 * Note: `adjacency_entries` counts stored directed entries, so an undirected
 *   input edge counts twice.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub vertices: usize,
    pub adjacency_entries: usize,
    pub directed: bool,
    pub has_negative_weight: bool,
    pub origin: VertexId,
    pub bipartite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<Bipartition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<Conflict>,
    pub candidates: Vec<VertexId>,
}

impl Report {
    pub fn analyse(graph: &Graph, origin: VertexId) -> Self {
        if !graph.contains_vertex(origin) {
            warn!("Origin {} is not a vertex of the graph", origin);
        }

        let (partition, conflict, candidates) = match two_colour(graph, origin)
        {
            Ok(partition) => {
                info!(
                    "Pairs form a bipartite graph (component of {}: {} vertices)",
                    origin,
                    partition.len()
                );
                (Some(partition), None, dedupe(select_candidates(graph)))
            }
            Err(conflict) => {
                warn!(
                    "Pairs are not bipartite: {} -> {} joins same-side vertices",
                    conflict.from, conflict.to
                );
                (None, Some(conflict), Vec::new())
            }
        };

        Self {
            vertices: graph.vertex_count(),
            adjacency_entries: graph.edge_count(),
            directed: graph.is_directed(),
            has_negative_weight: graph.has_negative_weight(),
            origin,
            bipartite: partition.is_some(),
            partition,
            conflict,
            candidates,
        }
    }

    pub fn to_yaml(&self) -> crate::error::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Graph: {} vertices, {} adjacency entries ({})",
            self.vertices,
            self.adjacency_entries,
            if self.directed { "directed" } else { "undirected" }
        )?;
        if self.has_negative_weight {
            writeln!(f, "Graph has negative edge weights")?;
        }

        match (&self.partition, self.conflict) {
            (Some(p), _) => {
                writeln!(f, "Pairs are bipartite from vertex {}. Ok!", self.origin)?;
                writeln!(f, "    A: {:?}", p.a_nodes)?;
                writeln!(f, "    B: {:?}", p.b_nodes)?
            }
            (None, Some(c)) => writeln!(
                f,
                "Pairs are not correct (edge {} -> {} is not bipartite).",
                c.from, c.to
            )?,
            (None, None) => writeln!(f, "Pairs are not correct.")?,
        }

        writeln!(f)?;
        writeln!(f, "::::::::::::: Vacation candidates :::::::::::::")?;
        writeln!(f, "{:?}", self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    #[test]
    fn odd_cycle_yields_no_candidates() {
        let edges = vec![
            Edge::new(1, 2, 0.0),
            Edge::new(2, 3, 0.0),
            Edge::new(3, 1, 0.0),
        ];
        let g = Graph::build(&edges, false);
        let report = Report::analyse(&g, 1);

        assert_eq!(report.vertices, 3);
        assert_eq!(report.adjacency_entries, 6);
        assert!(!report.bipartite);
        assert!(report.partition.is_none());
        assert!(report.conflict.is_some());
        assert!(report.candidates.is_empty());
        let text = report.to_string();
        assert!(text.contains("not correct"));
        assert!(text.contains("3 vertices, 6 adjacency entries (undirected)"));
    }

    #[test]
    fn bipartite_graph_yields_deduplicated_candidates() {
        let edges: Vec<Edge> = [(0u64, 1u64), (0, 2), (0, 3)]
            .iter()
            .map(|&e| Edge::from(e))
            .collect();
        let g = Graph::build(&edges, false);
        let report = Report::analyse(&g, 0);

        assert!(report.bipartite);
        assert_eq!(report.conflict, None);
        assert_eq!(report.candidates, vec![0]);

        let partition = report.partition.as_ref().unwrap();
        assert_eq!(partition.a_nodes, vec![0]);
        assert_eq!(partition.b_nodes, vec![1, 2, 3]);

        let text = report.to_string();
        assert!(text.contains("Ok!"));
        assert!(text.contains("B: [1, 2, 3]"));
    }

    #[test]
    fn yaml_output_lists_candidates() {
        let edges = vec![Edge::new(0, 1, -1.0)];
        let g = Graph::build(&edges, true);
        let yaml = Report::analyse(&g, 0).to_yaml().unwrap();

        assert!(yaml.contains("bipartite: true"));
        assert!(yaml.contains("has_negative_weight: true"));
        assert!(yaml.contains("adjacency_entries: 1"));
        assert!(yaml.contains("a_nodes:"));
        assert!(yaml.contains("b_nodes:"));
        assert!(yaml.contains("candidates:"));
        assert!(!yaml.contains("conflict"));
    }
}
