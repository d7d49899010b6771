use bm2md_core::config::{Config, Options};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

/// Convert a bookmark export to Markdown.
///
/// `options` may be omitted or be an object with any of `favicons`,
/// `rootTitle` and `maxHeadingLevel`.
#[wasm_bindgen]
pub fn convert(html: &str, options: JsValue) -> Result<String, JsError> {
    let config = parse_options(options).map_err(|e| JsError::new(&e))?;
    Ok(bm2md_core::convert(html, &config))
}

/// Like [`convert`], but returns `{ markdown, folders, links }`.
#[wasm_bindgen]
pub fn translate(html: &str, options: JsValue) -> Result<JsValue, JsError> {
    let config = parse_options(options).map_err(|e| JsError::new(&e))?;
    let translation = bm2md_core::translate(html, &config);

    let result = Object::new();
    set(&result, "markdown", JsValue::from_str(&translation.markdown));
    set(&result, "folders", JsValue::from_f64(translation.folders as f64));
    set(&result, "links", JsValue::from_f64(translation.links as f64));
    Ok(result.into())
}

fn parse_options(options: JsValue) -> Result<Config, String> {
    if options.is_undefined() || options.is_null() {
        return Ok(Config::default());
    }
    let options: Options = serde_wasm_bindgen::from_value(options).map_err(|e| e.to_string())?;
    Ok(Config { options })
}

fn set(obj: &Object, key: &str, value: JsValue) {
    Reflect::set(obj, &JsValue::from_str(key), &value).ok();
}
