pub mod entities;
pub mod payloads;
