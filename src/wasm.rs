use crate::errors::{PuzzleError, SearchError};
use crate::grid::Grid;
use crate::log::init_logger;
use crate::puzzle::Puzzle;
use crate::searcher::search;
use wasm_bindgen::prelude::*;

use serde::Serialize;
use serde_wasm_bindgen::Serializer;

/// Structured error information for JavaScript consumers
#[derive(Serialize)]
struct WasmError {
    /// Error code (e.g., "W001", "P002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SearchError> for WasmError {
    fn from(e: SearchError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        // surface the underlying grid error rather than the wrapper
        match e {
            PuzzleError::InvalidGrid(se) => se.into(),
            other => WasmError {
                code: other.code().to_string(),
                message: other.to_string(),
                description: other.description().to_string(),
                details: other.details().to_string(),
                help: other.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

// plain objects and `null` rather than JS `Map`s and `undefined`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::json_compatible())
}

fn serialization_error(code: &str, what: &str, e: serde_wasm_bindgen::Error) -> WasmError {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize wordfind logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: (grid_rows: string[], words: string[])
/// returns `{ [word]: { start: {x, y}, end: {x, y} } | null }`
#[wasm_bindgen]
pub fn search_wasm(grid_rows: JsValue, words: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<String> = serde_wasm_bindgen::from_value(grid_rows).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("grid_rows must be string[]: {e}"),
        description: "Invalid grid format".to_string(),
        details: "The grid_rows parameter must be a JavaScript array of strings, one per grid row.".to_string(),
        help: Some("Example: ['xcoffeezlp', 'abcdefghij']".to_string()),
    })?;
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM002".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Example: ['coffee', 'tea']".to_string()),
    })?;

    let grid = Grid::from_rows(&rows).map_err(WasmError::from)?;
    let results = search(&words, &grid).map_err(WasmError::from)?;

    to_js(&results).map_err(|e| serialization_error("WASM003", "search results", e).into())
}

#[derive(Serialize)]
struct WasmPuzzle {
    grid: Vec<String>,
    words: Vec<String>,
}

/// Parse puzzle text into `{ grid: string[], words: string[] }`.
///
/// # Errors
/// Returns a `JsValue` error if the text is not a valid puzzle.
#[wasm_bindgen]
pub fn parse_puzzle(text: &str) -> Result<JsValue, JsValue> {
    let puzzle = Puzzle::parse_from_str(text).map_err(WasmError::from)?;
    let wasm_puzzle = WasmPuzzle {
        grid: puzzle.grid.rows().map(|row| row.iter().collect()).collect(),
        words: puzzle.words,
    };
    to_js(&wasm_puzzle).map_err(|e| serialization_error("WASM004", "puzzle", e).into())
}
