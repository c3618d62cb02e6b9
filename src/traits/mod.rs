//! Core traits for constructor metadata and lookup.

pub mod injectable;
pub mod resolver;

pub use injectable::{Arguments, Injectable};
pub use resolver::{Resolver, ResolverCore};
