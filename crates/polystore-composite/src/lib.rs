//! Composite store: one virtual namespace over many named child stores.
//!
//! The composite owns no data. It routes every request by the first
//! segment of the requested path to the child store of that name, forwards
//! the remainder, and re-prefixes the paths of any objects in the result
//! so they stay addressable through the composite. Its root listing is
//! synthesized: one directory entry per configured child.
//!
//! Children are `Box<dyn Store>`, so a composite can itself be a child of
//! another composite.

pub mod object;
pub mod store;

pub use object::PrefixedObject;
pub use store::CompositeStore;
