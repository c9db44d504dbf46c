use std::collections::HashMap;

use heroapi_types::errors::{ApplicationError, Result};
use heroapi_types::hero::HeroPowerStat;

use super::HeroStore;

/// In-process hero store. The roster is fixed at construction time, so the
/// store is freely shareable between requests without locking.
pub struct MemoryHeroStore {
    names: HashMap<String, String>,
    power_stats: Vec<HeroPowerStat>,
}

impl MemoryHeroStore {
    pub fn new(names: HashMap<String, String>, power_stats: Vec<HeroPowerStat>) -> Self {
        Self { names, power_stats }
    }

    /// A small built-in roster so the server binary answers something useful
    /// out of the box.
    pub fn with_sample_roster() -> Self {
        let names = HashMap::from([
            ("1".to_string(), "A-Bomb".to_string()),
            ("60".to_string(), "Bane".to_string()),
            ("70".to_string(), "Batman".to_string()),
            ("100".to_string(), "Black Flash".to_string()),
            ("247".to_string(), "Evil Deadpool".to_string()),
            ("517".to_string(), "Phoenix".to_string()),
            ("666".to_string(), "Tiger Shark".to_string()),
        ]);

        let power_stats = vec![
            HeroPowerStat {
                id: 60,
                name: "Bane".to_string(),
                intelligence: 88,
                strength: 38,
                speed: 23,
                durability: 56,
                power: 51,
                combat: 95,
            },
            HeroPowerStat {
                id: 70,
                name: "Batman".to_string(),
                intelligence: 100,
                strength: 26,
                speed: 27,
                durability: 50,
                power: 47,
                combat: 100,
            },
            HeroPowerStat {
                id: 666,
                name: "Tiger Shark".to_string(),
                intelligence: 38,
                strength: 72,
                speed: 46,
                durability: 70,
                power: 51,
                combat: 28,
            },
        ];

        Self::new(names, power_stats)
    }
}

#[async_trait::async_trait]
impl HeroStore for MemoryHeroStore {
    async fn hero_name(&self, id: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self.names.get(id).cloned())
    }

    async fn power_stats(&self) -> Result<Vec<HeroPowerStat>, ApplicationError> {
        Ok(self.power_stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_known_names() {
        let store = MemoryHeroStore::with_sample_roster();

        let name = store.hero_name("247").await.unwrap();
        assert_eq!(name.as_deref(), Some("Evil Deadpool"));
    }

    #[tokio::test]
    async fn unknown_id_resolves_to_none() {
        let store = MemoryHeroStore::with_sample_roster();

        let name = store.hero_name("1000").await.unwrap();
        assert_eq!(name, None);
    }

    #[tokio::test]
    async fn lists_the_whole_roster() {
        let store = MemoryHeroStore::with_sample_roster();

        let stats = store.power_stats().await.unwrap();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].name, "Bane");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryHeroStore::new(HashMap::new(), Vec::new());

        assert_eq!(store.hero_name("1").await.unwrap(), None);
        assert!(store.power_stats().await.unwrap().is_empty());
    }
}
