//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&Catalog` as the first argument. Lookups that can miss
//! return `Option`; the HTTP layer turns `None` into a 404.

pub mod director_repo;
pub mod movie_repo;

pub use director_repo::DirectorRepo;
pub use movie_repo::MovieRepo;
