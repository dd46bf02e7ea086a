pub mod access;
pub mod declarations;
pub mod roles;
pub mod students;
