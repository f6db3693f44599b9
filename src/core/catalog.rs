//! # Catalog
//!
//! The fixed set of animals the app knows about. Compiled-in, read-only,
//! and shared by everything else in the crate.
//!
//! ```text
//! slug        id  name      icon  tint
//! ladybug      1  Ladybug   🐞    Red
//! lizard       2  Lizard    🦎    Green
//! bird         3  Bird      🐦    Purple
//! cat          4  Cat       🐈    Orange
//! ant          5  Ant       🐜    Black
//! fish         6  Fish      🐟    Blue
//! dog          7  Dog       🐕    Brown
//! tortoise     8  Tortoise  🐢    Green
//! hare         9  Hare      🐇    Gray
//! ```

use std::fmt;

/// UI-independent color identifier. The TUI maps these to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Red,
    Green,
    Purple,
    Orange,
    Black,
    Blue,
    Brown,
    Gray,
}

/// A single animal. Identity is `id`; nothing here changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimalRecord {
    pub id: u32,
    pub name: &'static str,
    /// Terminal glyph shown next to the name.
    pub icon: &'static str,
    /// Symbol name the icon stands in for.
    pub symbol: &'static str,
    pub tint: Tint,
}

impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

const fn animal(
    id: u32,
    name: &'static str,
    icon: &'static str,
    symbol: &'static str,
    tint: Tint,
) -> AnimalRecord {
    AnimalRecord {
        id,
        name,
        icon,
        symbol,
        tint,
    }
}

static SLUGS: [&str; 9] = [
    "ladybug", "lizard", "bird", "cat", "ant", "fish", "dog", "tortoise", "hare",
];

static RECORDS: [AnimalRecord; 9] = [
    animal(1, "Ladybug", "🐞", "ladybug.fill", Tint::Red),
    animal(2, "Lizard", "🦎", "lizard.fill", Tint::Green),
    animal(3, "Bird", "🐦", "bird.fill", Tint::Purple),
    animal(4, "Cat", "🐈", "cat.fill", Tint::Orange),
    animal(5, "Ant", "🐜", "ant.fill", Tint::Black),
    animal(6, "Fish", "🐟", "fish.fill", Tint::Blue),
    animal(7, "Dog", "🐕", "dog.fill", Tint::Brown),
    animal(8, "Tortoise", "🐢", "tortoise.fill", Tint::Green),
    animal(9, "Hare", "🐇", "hare.fill", Tint::Gray),
];

static BUILTIN: Catalog = Catalog { records: &RECORDS };

/// Read-only, ordered set of every animal.
#[derive(Debug)]
pub struct Catalog {
    records: &'static [AnimalRecord],
}

impl Catalog {
    /// The process-wide catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Every record, in table order. The order never changes.
    pub fn all(&self) -> &'static [AnimalRecord] {
        self.records
    }

    pub fn get(&self, id: u32) -> Option<AnimalRecord> {
        self.records.iter().find(|a| a.id == id).copied()
    }

    pub fn by_slug(&self, slug: &str) -> Option<AnimalRecord> {
        SLUGS
            .iter()
            .zip(self.records)
            .find(|(s, _)| s.eq_ignore_ascii_case(slug))
            .map(|(_, a)| *a)
    }

    /// Records whose name contains `query`, ignoring case, in catalog order.
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<AnimalRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .copied()
            .collect()
    }
}
