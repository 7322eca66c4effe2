//! Simulated external services.
//!
//! # Services
//!
//! - `auth` - OTP send/verify and the two-step login flow
//! - `contract` - Digital contract signing
//!
//! Each service is a trait with a `Simulated*` implementation that waits a
//! configurable delay and then succeeds. Tests swap in their own
//! implementations.

pub mod auth;
pub mod contract;

pub use auth::{AuthError, AuthService, LoginFlow, LoginStep, SimulatedAuthService};
pub use contract::{
    ContractError, ContractForm, ContractReceipt, ContractService, SignedContract,
    SimulatedContractService,
};
