mod hero_store;
mod memory;

pub use hero_store::HeroStore;
pub use memory::MemoryHeroStore;
