use std::collections::BTreeMap;

/// Oracle mapping an enemy and the hero's home world to a raw affinity value.
///
/// The table itself belongs to the content layer; the encounter only consumes
/// the resulting integer when deriving its starting disposition.
pub trait AffinityOracle: Send + Sync {
    /// Raw affinity of `enemy_id` towards a hero from `hero_world`.
    ///
    /// Negative values lean towards destruction, positive towards subjugation.
    fn affinity(&self, enemy_id: &str, hero_world: &str) -> i32;
}

/// In-memory affinity table.
///
/// Unknown pairs fall back to `default_affinity`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticAffinityTable {
    entries: BTreeMap<(String, String), i32>,
    default_affinity: i32,
}

impl StaticAffinityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(default_affinity: i32) -> Self {
        Self {
            entries: BTreeMap::new(),
            default_affinity,
        }
    }

    /// Adds or replaces an entry (builder pattern).
    #[must_use]
    pub fn with_entry(
        mut self,
        enemy_id: impl Into<String>,
        hero_world: impl Into<String>,
        affinity: i32,
    ) -> Self {
        self.insert(enemy_id, hero_world, affinity);
        self
    }

    pub fn insert(
        &mut self,
        enemy_id: impl Into<String>,
        hero_world: impl Into<String>,
        affinity: i32,
    ) {
        self.entries
            .insert((enemy_id.into(), hero_world.into()), affinity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AffinityOracle for StaticAffinityTable {
    fn affinity(&self, enemy_id: &str, hero_world: &str) -> i32 {
        self.entries
            .get(&(enemy_id.to_owned(), hero_world.to_owned()))
            .copied()
            .unwrap_or(self.default_affinity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_default() {
        let table = StaticAffinityTable::with_default(-5)
            .with_entry("wolf", "vale", -30)
            .with_entry("wolf", "ember", 10);

        assert_eq!(table.affinity("wolf", "vale"), -30);
        assert_eq!(table.affinity("wolf", "ember"), 10);
        assert_eq!(table.affinity("wolf", "frost"), -5);
        assert_eq!(table.affinity("wisp", "vale"), -5);
        assert_eq!(table.len(), 2);
    }
}
