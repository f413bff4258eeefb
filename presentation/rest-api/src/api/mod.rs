pub mod error;
pub mod food_log;
pub mod health;
pub mod suggestion;
pub mod tags;
#[cfg(test)]
mod test_support;
