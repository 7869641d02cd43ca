use std::collections::{BTreeMap, VecDeque};

use log::{debug, trace};
use serde::Serialize;

use crate::edge::VertexId;
use crate::graph::Graph;

/**
 * Two-colouring of the component reachable from an origin vertex. The origin
 * is always an A-node; B-nodes are those at odd BFS depth.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bipartition {
    pub origin: VertexId,
    pub a_nodes: Vec<VertexId>,
    pub b_nodes: Vec<VertexId>,
}

/// An edge whose endpoints received the same colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub from: VertexId,
    pub to: VertexId,
}

impl Bipartition {
    pub fn contains_a_node(&self, node: VertexId) -> bool {
        self.a_nodes.contains(&node)
    }

    pub fn contains_b_node(&self, node: VertexId) -> bool {
        self.b_nodes.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.a_nodes.len() + self.b_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a_nodes.is_empty() && self.b_nodes.is_empty()
    }
}

/**
 *  BFS two-colouring, starting from `origin`, of the component reachable from
 *  it. Returns the first same-coloured edge found, if any.
 *
 *  Note: vertices not reachable from `origin` are never visited, so they are
 *    neither coloured nor checked. An `origin` without outgoing edges (or not
 *    in the graph at all) yields the trivial partition `{origin} | {}`.
 */
pub fn two_colour(
    graph: &Graph,
    origin: VertexId,
) -> Result<Bipartition, Conflict> {
    let mut colours: BTreeMap<VertexId, bool> = BTreeMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let mut partition = Bipartition {
        origin,
        ..Default::default()
    };

    colours.insert(origin, false);
    queue.push_back(origin);
    partition.a_nodes.push(origin);

    while let Some(current) = queue.pop_front() {
        let colour = colours[&current];

        for v in graph.neighbours(current) {
            match colours.get(&v) {
                None => {
                    colours.insert(v, !colour);
                    queue.push_back(v);
                    if colour {
                        partition.a_nodes.push(v);
                    } else {
                        partition.b_nodes.push(v);
                    }
                }
                Some(&c) if c == colour => {
                    debug!("Same-colour edge: {} -> {}", current, v);
                    return Err(Conflict {
                        from: current,
                        to: v,
                    });
                }
                Some(_) => {}
            }
        }
    }

    trace!(
        "Two-colouring from {}: A = {:?}, B = {:?}",
        origin,
        partition.a_nodes,
        partition.b_nodes
    );
    Ok(partition)
}

/// Whether the component reachable from `origin` is two-colourable.
pub fn is_bipartite(graph: &Graph, origin: VertexId) -> bool {
    two_colour(graph, origin).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    fn undirected(list: &[(VertexId, VertexId)]) -> Graph {
        let edges: Vec<Edge> = list.iter().map(|&e| Edge::from(e)).collect();
        Graph::build(&edges, false)
    }

    #[test]
    fn path_is_bipartite() {
        let g = undirected(&[(0, 1), (1, 2), (2, 3)]);
        assert!(is_bipartite(&g, 0));

        let p = two_colour(&g, 0).unwrap();
        assert_eq!(p.a_nodes, vec![0, 2]);
        assert_eq!(p.b_nodes, vec![1, 3]);
        assert!(p.contains_a_node(2));
        assert!(p.contains_b_node(3));
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn triangle_is_not_bipartite() {
        let g = undirected(&[(0, 1), (1, 2), (2, 0)]);
        assert!(!is_bipartite(&g, 0));
        assert_eq!(two_colour(&g, 0), Err(Conflict { from: 1, to: 2 }));
    }

    #[test]
    fn even_cycle_is_bipartite() {
        let g = undirected(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(is_bipartite(&g, 0));
    }

    #[test]
    fn self_loop_is_a_conflict() {
        let g = undirected(&[(0, 0)]);
        assert_eq!(two_colour(&g, 0), Err(Conflict { from: 0, to: 0 }));
    }

    #[test]
    fn isolated_origin_is_trivially_bipartite() {
        let g = undirected(&[(1, 2), (2, 3), (3, 1)]);
        assert!(!g.contains_vertex(0));
        assert!(is_bipartite(&g, 0));

        let p = two_colour(&g, 0).unwrap();
        assert_eq!(p.a_nodes, vec![0]);
        assert!(p.b_nodes.is_empty());
    }

    #[test]
    fn only_origin_component_is_checked() {
        // Path from 0, plus an unreachable triangle.
        let g = undirected(&[(0, 1), (5, 6), (6, 7), (7, 5)]);
        assert!(is_bipartite(&g, 0));
        assert!(!is_bipartite(&g, 5));
    }

    #[test]
    fn directed_edges_are_followed_forward_only() {
        let edges: Vec<Edge> = [(0u64, 1u64), (1, 2), (2, 0)]
            .iter()
            .map(|&e| Edge::from(e))
            .collect();
        let g = Graph::build(&edges, true);
        // 0:A 1:B 2:A, then 2 -> 0 joins two A-nodes.
        assert_eq!(two_colour(&g, 0), Err(Conflict { from: 2, to: 0 }));
    }
}
