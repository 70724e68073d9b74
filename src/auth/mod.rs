mod claims;
pub(crate) mod extractors;
pub mod session;

pub use extractors::AuthUser;
