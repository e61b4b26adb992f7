//! Field address within a row.

use std::fmt::Display;

use crate::{row::Row, Error};

/// Field position or field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    Position(usize),
    Name(String),
}

impl Locator {
    /// Resolve to a position. Names go through the row's ordinal lookup.
    pub fn resolve<R: Row + ?Sized>(&self, row: &R) -> Result<usize, Error> {
        match self {
            Locator::Position(position) => Ok(*position),
            Locator::Name(name) => row.ordinal(name),
        }
    }
}

impl From<usize> for Locator {
    fn from(position: usize) -> Self {
        Locator::Position(position)
    }
}

impl From<&str> for Locator {
    fn from(name: &str) -> Self {
        Locator::Name(name.to_string())
    }
}

impl From<String> for Locator {
    fn from(name: String) -> Self {
        Locator::Name(name)
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Position(position) => write!(f, "#{}", position),
            Locator::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}
