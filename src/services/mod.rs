//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the repository trait rather
//! than a concrete database client.

mod registrar;

pub use registrar::{AccountService, Registrar};
