pub mod aggregate;

pub use aggregate::{CreateLibraryRequest, Library, LibraryId, LibraryListResponse};
