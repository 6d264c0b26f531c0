pub mod envelope;
pub mod error;
pub mod session;

// Point-of-sale domain modules
pub mod billing;
pub mod catalog;
pub mod customer;
pub mod staff;

pub use envelope::*;
pub use error::*;
pub use session::*;

pub use billing::*;
pub use catalog::*;
pub use customer::*;
pub use staff::*;
