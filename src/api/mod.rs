pub mod envelope;
pub mod events;
pub mod fighters;
pub mod fights;
pub mod health;
pub mod params;
pub mod routes;
pub mod stats;
