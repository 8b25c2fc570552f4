pub mod client;
pub mod controller;
pub mod model;
pub mod router;

pub use client::MotivationClient;
pub use model::*;
pub use router::init_motivation_router;
