//! WebAssembly bindings for sobgen
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { generateDeclarations } from 'sobgen';
//!
//! await init();
//!
//! const result = generateDeclarations(
//!   JSON.stringify({ sObjects: ['Account', 'Contact'] }),
//!   JSON.stringify([accountDescribe, contactDescribe]),
//! );
//!
//! if (result.success) {
//!   console.log(result.output);
//! } else {
//!   console.error(result.error);
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GeneratorConfig;
use crate::emit::RUNTIME_INTERFACE;
use crate::generate::generate_typescript;
use crate::schema::{SObjectDescribe, SalesforceSchema};
use crate::standard_objects::create_standard_schema;

/// Serialize as plain JS objects (not Maps)
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer)
}

/// `{ success: false, error }`, or the bare message if even that cannot be built
fn failure(message: impl std::fmt::Display) -> JsValue {
    let message = message.to_string();
    to_js_value(&GenerateResponse::failed(message.clone()))
        .unwrap_or_else(|_| JsValue::from_str(&message))
}

fn success(output: String) -> JsValue {
    to_js_value(&GenerateResponse::generated(output))
        .unwrap_or_else(|e| failure(format!("Cannot return output: {}", e)))
}

#[derive(Serialize)]
struct GenerateResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl GenerateResponse {
    fn generated(output: String) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error),
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Generate declarations from a config document and an array of describe results
///
/// Returns `{ success, output }` or `{ success: false, error }`. An empty
/// describe array falls back to the built-in standard objects.
#[wasm_bindgen(js_name = generateDeclarations)]
pub fn generate_declarations(config_json: &str, describes_json: &str) -> JsValue {
    let config = match GeneratorConfig::from_json(config_json) {
        Ok(config) => config,
        Err(e) => return failure(e),
    };

    let describes: Vec<SObjectDescribe> = match serde_json::from_str(describes_json) {
        Ok(describes) => describes,
        Err(e) => return failure(format!("Invalid describe JSON: {}", e)),
    };
    let schema = if describes.is_empty() {
        create_standard_schema()
    } else {
        SalesforceSchema::from_describes(describes)
    };

    // The in-memory schema never suspends, so blocking here cannot park the thread
    let result = futures::executor::block_on(generate_typescript(
        config.sobjects,
        &schema,
        config.emit,
    ));

    match result {
        Ok(output) => success(output),
        Err(e) => failure(e),
    }
}

/// TypeScript surface the generated classes expect from the runtime
#[wasm_bindgen(js_name = getRuntimeInterface)]
pub fn get_runtime_interface() -> String {
    RUNTIME_INTERFACE.to_string()
}
