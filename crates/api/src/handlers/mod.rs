pub mod director;
pub mod movies;
