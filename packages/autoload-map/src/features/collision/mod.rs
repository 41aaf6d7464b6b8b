//! Class-name collision resolution

mod resolver;

pub use resolver::{ClassCandidate, CollisionPolicy, CollisionResolver, Decision};
