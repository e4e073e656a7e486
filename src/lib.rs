pub mod aggregate;
pub mod country_codes;
pub mod dataset;
pub mod render;
pub mod server;
