//! Service layer.
//!
//! Services wrap one REST resource each and translate between DTOs and the
//! client's error type. They hold no state; components apply their results
//! to the stores once a request completes.

pub mod catalog;
pub mod note;
pub mod session;

pub use catalog::CatalogService;
pub use note::NoteService;
pub use session::SessionService;
