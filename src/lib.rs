// Reusable library API — visible to both CLI and WASM builds
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod puzzle;
pub mod searcher;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::Direction;
pub use errors::{PuzzleError, SearchError};
pub use grid::{Coordinate, Grid};
pub use puzzle::Puzzle;
pub use searcher::{search, SearchResults, Searcher, WordLocation};
