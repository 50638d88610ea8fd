pub mod book;
pub mod library;
pub mod patron;
pub mod slots;

pub use book::Book;
pub use library::Library;
pub use patron::Patron;
pub use slots::Identity;
