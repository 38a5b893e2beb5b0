#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use itertools::Itertools;

use crate::{routine, ArrayIndex, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ListGroup {
    pub(crate) shape: Vec<usize>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum AxisEntry {
    Single { axis: usize, index: ArrayIndex },
    Group(ListGroup),
}

impl AxisEntry {
    pub(crate) fn n_axes(&self) -> usize {
        match self {
            Self::Single {
                index: ArrayIndex::NewAxis,
                ..
            } => 0,
            Self::Single { .. } => 1,
            Self::Group(group) => group.end - group.start + 1,
        }
    }
}

enum Provisional {
    Single { axis: usize, index: ArrayIndex },
    Group { start: usize, shape: Vec<usize> },
}

impl Provisional {
    fn axis(&self) -> usize {
        match self {
            Self::Single { axis, .. } => *axis,
            Self::Group { start, .. } => *start,
        }
    }
}

pub(crate) fn collapse_list_runs(items: &[ArrayIndex]) -> Result<Vec<AxisEntry>> {
    let mut provisional = Vec::new();
    for (is_list, run) in &items
        .iter()
        .enumerate()
        .group_by(|(_, index)| index.is_list())
    {
        if is_list {
            let contents = run.collect::<Vec<_>>();
            let (start, _) = contents[0];
            let mut shape = Vec::new();
            for (_, index) in &contents {
                match index {
                    ArrayIndex::List(values) => {
                        shape = routine::broadcast_shape(&shape, &[values.len()])?;
                    }
                    _ => unreachable!(),
                }
            }
            provisional.push(Provisional::Group { start, shape });
        } else {
            for (axis, index) in run {
                provisional.push(Provisional::Single {
                    axis,
                    index: index.clone(),
                });
            }
        }
    }

    // each group learns its extent from the axis of the entry that follows it
    let successor_axes = provisional
        .iter()
        .skip(1)
        .map(Provisional::axis)
        .chain(core::iter::once(items.len()))
        .collect::<Vec<_>>();
    let entries = provisional
        .into_iter()
        .zip(successor_axes)
        .map(|(entry, successor)| match entry {
            Provisional::Single { axis, index } => AxisEntry::Single { axis, index },
            Provisional::Group { start, shape } => AxisEntry::Group(ListGroup {
                shape,
                start,
                end: successor - 1,
            }),
        })
        .collect();

    Ok(entries)
}
