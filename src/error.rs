#[cfg(not(feature = "std"))]
use alloc::string::String;
use core::{fmt, num::TryFromIntError};

use crate::ArrayIndex;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
    Shape(ShapeError),
    UnsupportedIndex(ArrayIndex),
    TryFromInt(TryFromIntError),
}

impl From<ShapeError> for Error {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

impl From<TryFromIntError> for Error {
    fn from(e: TryFromIntError) -> Self {
        Self::TryFromInt(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => fmt::Display::fmt(e, f),
            Self::UnsupportedIndex(index) => write!(f, "unsupported index kind: {:?}", index),
            Self::TryFromInt(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[derive(Clone, Debug)]
pub enum ShapeError {
    IncompatibleAxis(String),
    IncompatibleDimension(String),
    IncompatibleShape(String),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleAxis(msg)
            | Self::IncompatibleDimension(msg)
            | Self::IncompatibleShape(msg) => f.write_str(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}
