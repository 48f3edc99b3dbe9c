pub mod scroll;
pub mod workspace;
