pub mod client;
pub mod nutrition_lookup;
