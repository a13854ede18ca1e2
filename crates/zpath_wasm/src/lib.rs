use wasm_bindgen::prelude::*;

/// Run a JSONPath query over a JSON document and return the display
/// rendering of the match set. Errors come back as their display text for
/// the host UI to show inline.
#[wasm_bindgen]
pub fn query(json: &str, path: &str) -> Result<String, String> {
    let results = zpath_core::query(json, path).map_err(|e| e.to_string())?;
    Ok(zpath_core::format_results(&results))
}
