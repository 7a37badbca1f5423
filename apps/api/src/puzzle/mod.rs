// Crossword puzzle core: grid model, placement engine, and the thin
// presentation/sanitation layers around it. The engine is pure and
// synchronous; everything request-shaped lives in handlers.rs.

pub mod engine;
pub mod handlers;
pub mod model;
pub mod numbering;
pub mod validation;

// Re-export the public API consumed by other modules (handlers, tests).
pub use engine::{PlacementEngine, DEFAULT_GRID_SIZE};
pub use model::{CrosswordResult, Direction, Grid, WordPlacement};
