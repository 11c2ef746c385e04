// Camera collaborator boundary: frame acquisition behind a trait.

pub mod backend;
pub mod dummy;
pub mod error;
pub mod types;
