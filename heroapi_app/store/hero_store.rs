use heroapi_types::errors::{ApplicationError, Result};
use heroapi_types::hero::HeroPowerStat;

/// Capability interface for the hero data backing the service. Implementations
/// are injected by the embedder and must tolerate concurrent calls from
/// in-flight requests.
#[async_trait::async_trait]
pub trait HeroStore: Send + Sync {
    /// Resolves a hero's name by its identifier. `None` means no such hero.
    async fn hero_name(&self, id: &str) -> Result<Option<String>, ApplicationError>;

    /// Lists the power statistics of every known hero.
    async fn power_stats(&self) -> Result<Vec<HeroPowerStat>, ApplicationError>;
}
