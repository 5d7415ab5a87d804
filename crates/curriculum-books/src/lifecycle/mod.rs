//! # Build Lifecycle
//!
//! Wires the bundled catalog to a resolver and runs the per-book build tasks.
//!
//! ## The Build Pattern
//!
//! 1. **Catalog** - [`CurriculumSystem::bundled`] validates the static data once
//! 2. **Resolver** - one [`ConceptResolver`](curriculum_core::ConceptResolver)
//!    over an `Arc<Catalog>`, cloned into every task
//! 3. **Fan-out** - [`CurriculumSystem::build`] spawns one task per book
//! 4. **Join** - handles are awaited in selection order, so output order never
//!    depends on scheduling
//!
//! Nothing is persisted between runs; every build recomputes from the same
//! static tables.

pub mod config;
pub mod curriculum_system;

pub use config::*;
pub use curriculum_system::*;
