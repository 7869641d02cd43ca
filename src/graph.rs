use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::edge::{Edge, VertexId};

pub type Neighbours = BTreeMap<VertexId, f64>;

/**
 * Adjacency-map representation of the edge list.
 *
 * Both the vertex set and the adjacency maps are ordered, so every traversal
 * visits vertices, and the neighbours of each vertex, in ascending id order.
 * The vertex set is shared (read-only) with any graph derived from this one,
 * see `Graph::reverse`.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertices: Arc<BTreeSet<VertexId>>,
    adjacency: BTreeMap<VertexId, Neighbours>,
    directed: bool,
    has_negative_weight: bool,
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Graph {{")?;
        writeln!(f, "    directed: {}", self.directed)?;
        writeln!(f, "    has_negative_weight: {}", self.has_negative_weight)?;
        writeln!(f, "    num_vertices: {}", self.vertex_count())?;
        writeln!(f, "    num_edges: {}", self.edge_count())?;

        writeln!(f, "    adjacency {{")?;
        for (u, neighbours) in self.adjacency.iter() {
            let vs: Vec<&VertexId> = neighbours.keys().collect();
            writeln!(f, "        {} -> {:?}", u, vs)?;
        }
        writeln!(f, "    }}")?;

        writeln!(f, "}}")
    }
}

impl Graph {
    /**
     *  Builds the graph from an ordered edge list. A repeated `(from, to)`
     *  pair overwrites the earlier weight, and undirected graphs store every
     *  edge in both directions.
     */
    pub fn build<'a, I>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut vertices = BTreeSet::new();
        let mut adjacency: BTreeMap<VertexId, Neighbours> = BTreeMap::new();
        let mut has_negative_weight = false;

        for edge in edges {
            if edge.weight < 0.0 {
                has_negative_weight = true;
            }
            vertices.insert(edge.from);
            vertices.insert(edge.to);

            adjacency
                .entry(edge.from)
                .or_default()
                .insert(edge.to, edge.weight);
            if !directed {
                adjacency
                    .entry(edge.to)
                    .or_default()
                    .insert(edge.from, edge.weight);
            }
        }

        let graph = Self {
            vertices: Arc::new(vertices),
            adjacency,
            directed,
            has_negative_weight,
        };
        debug!(
            "Graph built: {} vertices, {} edges (directed: {})",
            graph.vertex_count(),
            graph.edge_count(),
            directed
        );

        graph
    }

    /**
     *  Returns a new graph with every stored edge `u -> v` flipped to
     *  `v -> u`, keeping its weight. The result shares this graph's vertex set
     *  and is always directed, since undirected edges were already expanded
     *  into both directions when this graph was built.
     */
    pub fn reverse(&self) -> Self {
        let mut adjacency: BTreeMap<VertexId, Neighbours> = BTreeMap::new();

        for (&u, neighbours) in self.adjacency.iter() {
            for (&v, &w) in neighbours.iter() {
                adjacency.entry(v).or_default().insert(u, w);
            }
        }

        Self {
            vertices: Arc::clone(&self.vertices),
            adjacency,
            directed: true,
            has_negative_weight: self.has_negative_weight,
        }
    }

    // -- PUBLIC QUERY FUNCTIONS -- //

    pub fn vertices(&self) -> &BTreeSet<VertexId> {
        &self.vertices
    }

    pub fn adjacency(&self) -> &BTreeMap<VertexId, Neighbours> {
        &self.adjacency
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Outgoing neighbours of `vertex`, in ascending id order.
    pub fn neighbours(
        &self,
        vertex: VertexId,
    ) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|n| n.keys().copied())
    }

    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.adjacency.get(&from)?.get(&to).copied()
    }

    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(&vertex).map_or(0, |n| n.len())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored (directed) adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn has_negative_weight(&self) -> bool {
        self.has_negative_weight
    }

    pub fn shares_vertices_with(&self, other: &Graph) -> bool {
        Arc::ptr_eq(&self.vertices, &other.vertices)
    }
}
