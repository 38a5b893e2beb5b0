#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    list_group::{collapse_list_runs, AxisEntry},
    ArrayIndex, Error, IndexExpr, Result, ShapeError,
};

pub fn shape_after_index<E>(shape: &[usize], expr: E) -> Result<Vec<usize>>
where
    E: Into<IndexExpr>,
{
    let expr = expr.into();
    let entries = collapse_list_runs(expr.items())?;

    let n_indexed = entries.iter().map(AxisEntry::n_axes).sum::<usize>();
    if n_indexed > shape.len() {
        return Err(ShapeError::IncompatibleDimension(format!(
            "too many indices for array: array is {}-dimensional, but {} were indexed",
            shape.len(),
            n_indexed,
        ))
        .into());
    }

    let groups = entries
        .iter()
        .filter_map(|entry| match entry {
            AxisEntry::Group(group) => Some(group),
            _ => None,
        })
        .collect::<Vec<_>>();
    let many_groups = groups.len() > 1;

    let mut result = Vec::new();
    if many_groups {
        // more than one group pins the combined selection to the front
        result.extend_from_slice(&groups[0].shape);
    }

    let mut cursor = 0_usize;
    for entry in &entries {
        match entry {
            AxisEntry::Single {
                index: ArrayIndex::Index(_),
                ..
            } => cursor += 1,
            AxisEntry::Single {
                index: ArrayIndex::Slice(slice),
                ..
            } => {
                let dim = shape.get(cursor).copied().ok_or_else(|| {
                    ShapeError::IncompatibleAxis(format!(
                        "axis {} is out of bounds for array of dimension {}",
                        cursor,
                        shape.len(),
                    ))
                })?;
                result.push(slice.out_len(dim));
                cursor += 1;
            }
            AxisEntry::Single {
                index: ArrayIndex::NewAxis,
                ..
            } => result.push(1),
            AxisEntry::Single {
                index: index @ ArrayIndex::Mask(_),
                ..
            } => return Err(Error::UnsupportedIndex(index.clone())),
            AxisEntry::Single {
                index: ArrayIndex::List(_),
                ..
            } => unreachable!(),
            AxisEntry::Group(group) => {
                if !many_groups {
                    result.extend_from_slice(&group.shape);
                }
                cursor = group.end + 1;
            }
        }
    }
    result.extend(shape.iter().skip(cursor).copied());

    Ok(result)
}
