#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::ArrayIndex;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct IndexExpr {
    items: Vec<ArrayIndex>,
}

impl IndexExpr {
    pub fn items(&self) -> &[ArrayIndex] {
        &self.items
    }
}

impl AsRef<[ArrayIndex]> for IndexExpr {
    fn as_ref(&self) -> &[ArrayIndex] {
        &self.items
    }
}

impl From<ArrayIndex> for IndexExpr {
    fn from(index: ArrayIndex) -> Self {
        Self { items: vec![index] }
    }
}

impl From<Vec<ArrayIndex>> for IndexExpr {
    fn from(items: Vec<ArrayIndex>) -> Self {
        Self { items }
    }
}

impl From<&[ArrayIndex]> for IndexExpr {
    fn from(items: &[ArrayIndex]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<const N: usize> From<[ArrayIndex; N]> for IndexExpr {
    fn from(items: [ArrayIndex; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

#[macro_export]
macro_rules! ix {
    () => {
        $crate::IndexExpr::default()
    };
    (@fold [$( $idx:tt )*] $r:expr;$s:expr) => {
        $crate::IndexExpr::from([$( $idx )* $crate::ArrayIndex::from(
            $crate::Slice::from($r).step_by(
                core::num::NonZeroIsize::new($s).expect("slice step cannot be zero")
            )
        )])
    };
    (@fold [$( $idx:tt )*] $r:expr) => {
        $crate::IndexExpr::from([$( $idx )* $crate::ArrayIndex::from($r)])
    };
    (@fold [$( $idx:tt )*] $r:expr;$s:expr, $( $t:tt )*) => {
        $crate::ix!(@fold
            [$( $idx )* $crate::ArrayIndex::from($crate::Slice::from($r).step_by(
                core::num::NonZeroIsize::new($s).expect("slice step cannot be zero")
            )),]
            $( $t )*
        )
    };
    (@fold [$( $idx:tt )*] $r:expr, $( $t:tt )*) => {
        $crate::ix!(@fold [$( $idx )* $crate::ArrayIndex::from($r),] $( $t )*)
    };
    ($( $t:tt )*) => {
        $crate::ix!(@fold [] $( $t )*)
    };
}
