//! Read-only symbol table of every prefix, unit and constant.
//!
//! The table is built once, on first access, from the compile-time
//! constants of [`crate::units`] and [`crate::constants`], and is never
//! mutated afterwards.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{constants, units};

static TABLE: Lazy<UnitTable> = Lazy::new(UnitTable::build);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Prefix,
    Unit,
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entry {
    pub name: &'static str,
    pub value: f64,
    pub category: Category,
}

#[derive(Debug)]
pub struct UnitTable {
    entries: BTreeMap<&'static str, Entry>,
}

impl UnitTable {
    /// The process-wide table.
    pub fn global() -> &'static UnitTable {
        &TABLE
    }

    fn build() -> Self {
        let sources = [
            (Category::Prefix, units::prefixes::PREFIX_ENTRIES),
            (Category::Unit, units::values::UNIT_ENTRIES),
            (Category::Constant, constants::CONSTANT_ENTRIES),
        ];

        let mut entries = BTreeMap::new();
        for (category, list) in sources {
            for &(name, value) in list {
                let previous = entries.insert(name, Entry { name, value, category });
                debug_assert!(previous.is_none(), "duplicate symbol {name}");
            }
        }

        tracing::trace!(entries = entries.len(), "unit table built");
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).map(|entry| entry.value)
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All defined names, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn names_in(&self, category: Category) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .values()
            .filter(move |entry| entry.category == category)
            .map(|entry| entry.name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
