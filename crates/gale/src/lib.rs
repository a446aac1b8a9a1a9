//! Gale: a stable-fluids atmosphere simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Gale sub-crates. For most users, adding `gale` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gale::prelude::*;
//!
//! let config = SimConfig {
//!     n: 32,
//!     begin_pgf_tick: 1,
//!     ..SimConfig::default()
//! };
//! let mut engine = TickEngine::new(config).unwrap();
//! engine.apply_preset(Preset::A);
//! engine.start();
//! engine.run(3).unwrap();
//!
//! let snapshot = engine.snapshot();
//! assert!(snapshot.u.max_abs_interior() > 0.0);
//!
//! let store = MemoryStore::new();
//! assert!(engine.save(&store).is_ok());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gale-core` | tick and field identifiers, boundary kinds, step errors |
//! | [`grid`] | `gale-grid` | halo grids, boundary rule, double buffers |
//! | [`solver`] | `gale-solver` | diffusion, advection, projection, forcing, Coriolis |
//! | [`engine`] | `gale-engine` | configuration, evolvers, tick engine, observers |
//! | [`store`] | `gale-store` | field codec and persistence backends |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`gale-core`).
pub use gale_core as types;

/// Grid storage (`gale-grid`).
///
/// [`grid::GridField`] is the `(N+2)²` halo grid every operator works on.
pub use gale_grid as grid;

/// Numerical operators (`gale-solver`).
pub use gale_solver as solver;

/// Simulation engine (`gale-engine`).
///
/// [`engine::TickEngine`] drives the wind and pressure evolvers one tick
/// at a time.
pub use gale_engine as engine;

/// Field persistence (`gale-store`).
///
/// [`store::DirectoryStore`] for files on disk, [`store::MemoryStore`] for
/// tests and tools.
pub use gale_store as store;

/// Common imports for typical Gale usage.
///
/// ```rust
/// use gale::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gale_core::{BoundaryKind, FieldName, TickId};

    // Errors
    pub use gale_core::{EvolveError, StepError};
    pub use gale_engine::ConfigError;
    pub use gale_store::StorageError;

    // Grid
    pub use gale_grid::GridField;

    // Engine
    pub use gale_engine::{
        ClearScope, DiscSource, Evolver, FieldSnapshot, FieldStore, LogObserver, Preset, RunState,
        SimConfig, SourceTarget, TickContext, TickEngine, TickObserver, TickReport,
    };

    // Persistence
    pub use gale_store::{DirectoryStore, FieldPersistence, MemoryStore};
}
