// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use strum_macros::{EnumIter, IntoStaticStr};

/// The order operations whose latencies are compared. Iteration order is the
/// order files are read in and the left-to-right order of the panels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Market,
    Modify,
    Delete,
}

impl Category {
    /// Fixed name of the input file holding this category's samples.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Market => "market_times.txt",
            Self::Modify => "modify_times.txt",
            Self::Delete => "delete_times.txt",
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fixed_order() {
        let all: Vec<Category> = Category::iter().collect();
        assert_eq!(all, vec![Category::Market, Category::Modify, Category::Delete]);
    }

    #[test]
    fn filenames() {
        assert_eq!(Category::Market.filename(), "market_times.txt");
        assert_eq!(Category::Modify.filename(), "modify_times.txt");
        assert_eq!(Category::Delete.filename(), "delete_times.txt");
    }

    #[test]
    fn names() {
        assert_eq!(Category::Market.name(), "market");
        assert_eq!(Category::Delete.to_string(), "delete");
    }
}
