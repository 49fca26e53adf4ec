pub mod home;
pub mod health;
pub mod cloud;

pub use home::home_handler;
pub use health::health_handler;
pub use cloud::cloud_handler;
