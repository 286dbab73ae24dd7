//! Frontier containers.
//!
//! Both hold `SearchNode`s waiting to be expanded and differ only in the
//! order they hand them back:
//! - `FifoFrontier`: insertion order
//! - `CostFrontier`: lowest cost first, ties in insertion order

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::config::SearchStrategy;
use super::node::SearchNode;

/// A queue of nodes waiting to be expanded.
pub trait Frontier {
    fn push(&mut self, node: SearchNode);

    fn pop(&mut self) -> Option<SearchNode>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Create the frontier for a strategy.
pub fn for_strategy(strategy: SearchStrategy) -> Box<dyn Frontier> {
    match strategy {
        SearchStrategy::CostOrdered => Box::new(CostFrontier::new()),
        SearchStrategy::BreadthFirst => Box::new(FifoFrontier::new()),
    }
}

/// First in, first out.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<SearchNode>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: SearchNode) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Heap entry ordered so `BinaryHeap` (a max-heap) pops the cheapest,
/// oldest node first.
#[derive(Debug)]
struct CostEntry {
    cost: i32,
    seq: u64,
    node: SearchNode,
}

impl PartialEq for CostEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for CostEntry {}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cheapest first.
#[derive(Debug, Default)]
pub struct CostFrontier {
    heap: BinaryHeap<CostEntry>,
    next_seq: u64,
}

impl CostFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for CostFrontier {
    fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(CostEntry {
            cost: node.cost(),
            seq,
            node,
        });
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
