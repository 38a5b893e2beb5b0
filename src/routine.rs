#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{Result, ShapeError};

pub(crate) fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>> {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let diff = long.len() - short.len();

    let mut ret = Vec::with_capacity(long.len());
    ret.extend_from_slice(&long[..diff]);
    for (&l, &s) in long[diff..].iter().zip(short) {
        if l == s || s == 1 {
            ret.push(l);
        } else if l == 1 {
            ret.push(s);
        } else {
            return Err(ShapeError::IncompatibleShape(
                "operands cannot be broadcast to a single shape".into(),
            )
            .into());
        }
    }

    Ok(ret)
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::vec;

    use crate::Result;

    #[test]
    #[should_panic]
    fn broadcast_incompatible_shapes() {
        super::broadcast_shape(&[1, 2], &[3, 4, 5]).unwrap();
    }

    #[test]
    fn broadcast_shapes() -> Result<()> {
        let s0 = super::broadcast_shape(&[1, 5], &[3, 4, 1])?;
        let s1 = super::broadcast_shape(&[3, 4, 1], &[1, 5])?;

        assert_eq!(s0, vec![3, 4, 5]);
        assert_eq!(s0, s1);

        Ok(())
    }

    #[test]
    fn broadcast_with_scalar() -> Result<()> {
        assert_eq!(super::broadcast_shape(&[], &[2])?, vec![2]);
        assert_eq!(super::broadcast_shape(&[2], &[])?, vec![2]);

        Ok(())
    }
}
