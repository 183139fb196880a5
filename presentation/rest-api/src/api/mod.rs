pub mod error;
pub mod security;
pub mod tags;

pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod checkout {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod location {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod menu {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod order {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
