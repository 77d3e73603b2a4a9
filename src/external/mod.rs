//! Outbound HTTP plumbing shared by the crate.

pub mod client;

pub use client::HTTP_CLIENT;
