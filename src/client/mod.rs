pub mod app;
pub mod chart;
pub mod components;
pub mod gallery;
pub mod router;
pub mod routes;
pub mod store;
pub mod util;

pub use app::App;
