//! Client for the remote identity service the Etalase storefront signs
//! users up against.
//!
//! The provider exposes a REST surface: credential endpoints
//! (`accounts:signUp`, `accounts:signInWithPassword`) keyed by an API key
//! query parameter, and a JSON database where the storefront persists a
//! profile record under `users/{accountId}`. Registration is a two-step
//! flow: create the account, then write the profile.
//!
//! All HTTP goes through an [`etalase_data::Transport`], so the crate
//! itself never touches the network.

mod client;
mod config;
mod error;
mod user;

pub use client::AuthClient;
pub use config::AuthConfig;
pub use error::AuthError;
pub use user::{AuthSession, NewProfile, Profile};
