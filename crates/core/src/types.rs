/// Catalog identifiers are positive, monotonically assigned integers.
pub type DbId = i64;
