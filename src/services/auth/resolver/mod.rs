mod memory;
mod postgres;
pub mod store;

pub use memory::InMemoryPrincipalResolver;
pub use postgres::PgPrincipalResolver;
pub use store::PrincipalResolver;
