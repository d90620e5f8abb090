use serde::{Deserialize, Serialize};

use super::matrix::Units;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Resource → process, one per allocated unit
    Allocation,
    /// Process → resource, one per unit of unmet need
    Request,
}

/// Nodes `[0, P)` are processes, `[P, P + R)` are resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEdge {
    pub from: usize,
    pub to: usize,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Process(usize),
    Resource(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGraph {
    pub process_count: usize,
    pub resource_count: usize,
    pub edges: Vec<ResourceEdge>,
    pub has_cycle: bool,
    /// First cycle found, starting at the node the search re-entered.
    pub cycle: Vec<usize>,
}

impl ResourceGraph {
    pub fn node(&self, index: usize) -> Node {
        if index < self.process_count {
            Node::Process(index)
        } else {
            Node::Resource(index - self.process_count)
        }
    }

    /// "P0", "R1", ... for display.
    pub fn label(&self, index: usize) -> String {
        match self.node(index) {
            Node::Process(p) => format!("P{p}"),
            Node::Resource(r) => format!("R{r}"),
        }
    }

    pub fn request_edges(&self) -> impl Iterator<Item = &ResourceEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Request)
    }

    pub fn allocation_edges(&self) -> impl Iterator<Item = &ResourceEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Allocation)
    }
}

/// Build the multi-instance allocation graph and look for a cycle. With more
/// than one unit per resource type a cycle means deadlock is possible, not certain.
pub fn build_resource_graph(max: &[Vec<Units>], allocation: &[Vec<Units>]) -> ResourceGraph {
    let process_count = max.len();
    let resource_count = max.first().map_or(0, Vec::len);
    let mut edges = Vec::new();

    for (process, row) in allocation.iter().enumerate() {
        for (resource, &units) in row.iter().enumerate() {
            edges.extend((0..units).map(|_| ResourceEdge {
                from: process_count + resource,
                to: process,
                kind: EdgeKind::Allocation,
            }));
        }
    }

    for (process, (max_row, alloc_row)) in max.iter().zip(allocation).enumerate() {
        for (resource, (&max, &held)) in max_row.iter().zip(alloc_row).enumerate() {
            edges.extend((0..max.saturating_sub(held)).map(|_| ResourceEdge {
                from: process,
                to: process_count + resource,
                kind: EdgeKind::Request,
            }));
        }
    }

    let mut adjacency = vec![Vec::new(); process_count + resource_count];
    for edge in &edges {
        adjacency[edge.from].push(edge.to);
    }
    // Parallel edges add nothing to reachability
    for targets in &mut adjacency {
        targets.dedup();
    }

    let cycle = find_cycle(&adjacency, process_count).unwrap_or_default();
    ResourceGraph {
        process_count,
        resource_count,
        edges,
        has_cycle: !cycle.is_empty(),
        cycle,
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

struct CycleSearch<'a> {
    adjacency: &'a [Vec<usize>],
    marks: Vec<Mark>,
    path: Vec<usize>,
}

impl CycleSearch<'_> {
    fn visit(&mut self, node: usize) -> Option<Vec<usize>> {
        self.marks[node] = Mark::OnStack;
        self.path.push(node);

        for &next in &self.adjacency[node] {
            match self.marks[next] {
                Mark::Unvisited => {
                    if let Some(cycle) = self.visit(next) {
                        return Some(cycle);
                    }
                }
                Mark::OnStack => {
                    let start = self.path.iter().rposition(|&n| n == next)?;
                    return Some(self.path[start..].to_vec());
                }
                Mark::Done => {}
            }
        }

        self.path.pop();
        self.marks[node] = Mark::Done;
        None
    }
}

/// DFS from every unvisited process node; the first back edge closes the cycle.
fn find_cycle(adjacency: &[Vec<usize>], process_count: usize) -> Option<Vec<usize>> {
    let mut search = CycleSearch {
        adjacency,
        marks: vec![Mark::Unvisited; adjacency.len()],
        path: Vec::new(),
    };

    (0..process_count).find_map(|process| {
        if search.marks[process] == Mark::Unvisited {
            search.visit(process)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_edge_per_unit() {
        let graph = build_resource_graph(&[vec![2, 3]], &[vec![2, 1]]);
        assert_eq!(graph.allocation_edges().count(), 3);
        assert_eq!(graph.request_edges().count(), 2);
        assert_eq!(graph.allocation_edges().filter(|e| e.from == 1 && e.to == 0).count(), 2);
        assert!(graph.request_edges().all(|e| e.from == 0 && e.to == 2));
    }

    #[test]
    fn holding_and_wanting_one_type_is_a_cycle() {
        // P0 holds a unit of R0 and waits for another one
        let graph = build_resource_graph(&[vec![2, 1]], &[vec![1, 1]]);
        assert!(graph.has_cycle);
        assert_eq!(graph.cycle, vec![0, 1]);

        let graph = build_resource_graph(&[vec![2, 1]], &[vec![2, 0]]);
        assert!(!graph.has_cycle);
        assert!(graph.cycle.is_empty());
    }

    #[test]
    fn two_process_circular_wait() {
        // P0 holds R0 and wants R1; P1 holds R1 and wants R0
        let graph = build_resource_graph(&[vec![1, 1], vec![1, 1]], &[vec![1, 0], vec![0, 1]]);
        assert!(graph.has_cycle);
        assert_eq!(graph.cycle, vec![0, 3, 1, 2]);
        let labels: Vec<_> = graph.cycle.iter().map(|&n| graph.label(n)).collect();
        assert_eq!(labels, vec!["P0", "R1", "P1", "R0"]);
    }

    #[test]
    fn cycle_starts_at_the_re_entered_node() {
        // P0 -> R0 -> P1 -> R1 -> P2 -> R0: the cycle does not include P0
        let graph = build_resource_graph(
            &[vec![1, 0], vec![1, 1], vec![1, 1]],
            &[vec![0, 0], vec![1, 0], vec![0, 1]],
        );
        assert!(graph.has_cycle);
        assert_eq!(graph.cycle.first(), Some(&3));
        assert!(!graph.cycle.contains(&0));
        assert_eq!(graph.node(4), Node::Resource(1));
    }

    #[test]
    fn empty_graph() {
        let graph = build_resource_graph(&[], &[]);
        assert_eq!(graph, ResourceGraph::default());
    }
}
