mod home;
mod saved;

pub use home::HomePage;
pub use saved::SavedPage;
