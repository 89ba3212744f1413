pub mod openapi;
pub mod routes;
