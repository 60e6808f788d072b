pub mod classify;
pub mod terms;
