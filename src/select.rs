use std::hash::Hash;

use indexmap::IndexSet;
use log::{debug, trace};

use crate::edge::VertexId;
use crate::graph::Graph;

/**
 *  For each vertex `u` with outgoing edges, picks the neighbour with the
 *  greatest in-degree, provided it is strictly greater than the out-degree of
 *  `u`; otherwise `u` picks itself. One candidate per vertex, in ascending
 *  vertex order.
 *
 *  Ties: vertices and neighbours are scanned in ascending id order, and only a
 *  strictly greater in-degree replaces the current candidate, so among equal
 *  scores the smallest id wins.
 *
 *  Note: in-degrees are read off the reversed graph, which is built once and
 *    shared by every vertex.
 */
pub fn select_candidates(graph: &Graph) -> Vec<VertexId> {
    let reversed = graph.reverse();
    let mut candidates = Vec::with_capacity(graph.adjacency().len());

    for (&u, neighbours) in graph.adjacency().iter() {
        let mut candidate = u;
        let mut max_count = neighbours.len();

        for &v in neighbours.keys() {
            let in_degree = reversed.out_degree(v);
            trace!("partner: {} (in-degree: {})", v, in_degree);
            if in_degree > max_count {
                max_count = in_degree;
                candidate = v;
            }
        }

        trace!("vertex: {} -> candidate: {}", u, candidate);
        candidates.push(candidate);
    }

    debug!("Selected {} candidates", candidates.len());
    candidates
}

/// Removes repeats, keeping the first occurrence of each item in order.
pub fn dedupe<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<IndexSet<T>>().into_iter().collect()
}
