use aurora_common::TriggerInterval;
use std::fmt;

/// One root of the readout plan. The tree is owned top down: a merged block
/// owns its throughput triggers, each throughput trigger owns the original
/// fired trigger it was created for.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerNode {
    Leaf(TriggerInterval),
    Throughput(TriggerInterval, Box<TriggerNode>),
    Merged(TriggerInterval, Vec<TriggerNode>),
}

impl TriggerNode {
    pub fn interval(&self) -> &TriggerInterval {
        match self {
            TriggerNode::Leaf(interval) => interval,
            TriggerNode::Throughput(interval, _) => interval,
            TriggerNode::Merged(interval, _) => interval,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            TriggerNode::Leaf(_) => 1,
            TriggerNode::Throughput(_, child) => 1 + child.node_count(),
            TriggerNode::Merged(_, children) => {
                1 + children.iter().map(TriggerNode::node_count).sum::<usize>()
            }
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let interval = self.interval();
        writeln!(
            f,
            "{:indent$}{} [{}, {}]",
            "",
            interval.key,
            interval.start,
            interval.stop(),
            indent = 2 * depth
        )?;
        match self {
            TriggerNode::Leaf(_) => Ok(()),
            TriggerNode::Throughput(_, child) => child.fmt_indented(f, depth + 1),
            TriggerNode::Merged(_, children) => children
                .iter()
                .try_for_each(|child| child.fmt_indented(f, depth + 1)),
        }
    }
}

impl fmt::Display for TriggerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

pub fn forest_node_count(forest: &[TriggerNode]) -> usize {
    forest.iter().map(TriggerNode::node_count).sum()
}
