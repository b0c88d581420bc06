pub mod access_jwt;
pub mod factory;
pub mod principal;
pub mod resolver;
pub mod token;

pub use access_jwt::TokenVerifier;
pub use factory::{build_resolver, build_verifier};
pub use principal::{Principal, Role};
pub use resolver::PrincipalResolver;
pub use token::extract_token;
