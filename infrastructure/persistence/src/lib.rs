pub mod db;
pub mod menu {
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
