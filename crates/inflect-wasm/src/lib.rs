// WASM bindings for English singular/plural conversion.
//
// Exposes the engine's two directions as plain functions. Results are
// serialized to JavaScript values with serde-wasm-bindgen: a certain result
// is a string, an ambiguous one an array of candidates in rule order.
//
// Usage from JavaScript:
//
//   singularize("mice");            // => "mouse"
//   singularize("leaves");          // => ["leaf", "leave", "leaff"]
//   pluralizeAll("child");          // => ["children"]
//   pluralizeBatch(["ox", "roof"]); // => [{ word: "ox", candidates: ["oxen"], ambiguous: false }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use inflect_core::Inflection;
use inflect_en::{InflectionEngine, Inflector};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// One word of a batch call.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsInflection {
    word: String,
    candidates: Vec<String>,
    ambiguous: bool,
}

impl JsInflection {
    fn new(word: String, inflection: Inflection<String>) -> Self {
        let ambiguous = inflection.is_ambiguous();
        JsInflection {
            word,
            candidates: inflection.into_vec(),
            ambiguous,
        }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Direction {
    Singular,
    Plural,
}

impl Direction {
    fn apply(self, word: &str) -> Inflection<String> {
        let engine = InflectionEngine::english();
        match self {
            Direction::Singular => engine.singularize(word),
            Direction::Plural => engine.pluralize(word),
        }
    }
}

fn batch(words: Vec<String>, direction: Direction) -> Vec<JsInflection> {
    words
        .into_iter()
        .map(|w| {
            let inflection = direction.apply(&w);
            JsInflection::new(w, inflection)
        })
        .collect()
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// Exports
// ============================================================================

/// Singular form of a word: a string, or an array when ambiguous.
#[wasm_bindgen]
pub fn singularize(word: &str) -> Result<JsValue, JsError> {
    to_js(&Direction::Singular.apply(word))
}

/// Plural form of a word: a string, or an array when ambiguous.
#[wasm_bindgen]
pub fn pluralize(word: &str) -> Result<JsValue, JsError> {
    to_js(&Direction::Plural.apply(word))
}

/// Singular candidates of a word, always as an array.
#[wasm_bindgen(js_name = "singularizeAll")]
pub fn singularize_all(word: &str) -> Vec<String> {
    Direction::Singular.apply(word).into_vec()
}

/// Plural candidates of a word, always as an array.
#[wasm_bindgen(js_name = "pluralizeAll")]
pub fn pluralize_all(word: &str) -> Vec<String> {
    Direction::Plural.apply(word).into_vec()
}

/// Singularize a list of words.
///
/// Returns an array of objects with fields `word`, `candidates`, `ambiguous`.
#[wasm_bindgen(js_name = "singularizeBatch")]
pub fn singularize_batch(words: Vec<String>) -> Result<JsValue, JsError> {
    to_js(&batch(words, Direction::Singular))
}

/// Pluralize a list of words. Same shape as `singularizeBatch`.
#[wasm_bindgen(js_name = "pluralizeBatch")]
pub fn pluralize_batch(words: Vec<String>) -> Result<JsValue, JsError> {
    to_js(&batch(words, Direction::Plural))
}

/// Get the library version string.
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
