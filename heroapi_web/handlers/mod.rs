mod hero_handler;

pub use hero_handler::hero_lookup;
