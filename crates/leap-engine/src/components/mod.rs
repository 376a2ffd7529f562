pub mod entity;
pub mod structure;
pub mod visual;
