pub mod build;
pub mod home;
pub mod not_found;

pub use build::Build;
pub use home::Home;
pub use not_found::NotFound;
