// Infrastructure layer module
// Contains database adapters behind the domain repository traits

pub mod repositories;
