pub mod db;
pub mod food_log {
    pub mod entity;
    pub mod repository;
}
