// Domain layer module exports
// Domain is independent of the HTTP surface and of any concrete store

pub mod category;
pub mod errors;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod repositories;
