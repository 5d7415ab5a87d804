//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Call it once, from the binary.
//!
//! ## What Gets Traced
//!
//! - **Resolver** (`debug`): every resolution with its `unit_order`, `slot`,
//!   draft `source` and concept `id`; skipped units; rejected arguments at `warn`.
//! - **Catalog** (`debug`): book and curated-table counts when a catalog is built.
//! - **Builder** (`info`): one line per book with unit and concept counts.
//!
//! ## Usage
//!
//! ```bash
//! # Book-level progress
//! RUST_LOG=info cargo run -p curriculum-books
//!
//! # Every resolution decision
//! RUST_LOG=curriculum_core=debug cargo run -p curriculum-books
//! ```
//!
//! With `RUST_LOG=debug` a resolution looks like:
//!
//! ```text
//! DEBUG Resolved unit_order=2 slot=5 source=ReusedFirst id=concept-2-5
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
