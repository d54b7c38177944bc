pub mod cafes;
pub mod home;
pub mod not_found;
pub mod notes;

pub use cafes::{Cafes, NewCafe};
pub use home::Home;
pub use not_found::NotFound;
pub use notes::{EditNote, NewNote};
