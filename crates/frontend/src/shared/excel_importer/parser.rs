use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// JS binding for parsing Excel files with SheetJS (see index.html)
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    pub fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Reads a picked file as UTF-8 text (CSV, JSON)
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| "File content is not text".to_string())
}

/// Reads the first sheet of a spreadsheet as rows of cell strings
pub async fn read_excel_rows(file: web_sys::File) -> Result<Vec<Vec<String>>, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    let result =
        parse_excel_file(&bytes).map_err(|e| format!("Failed to parse spreadsheet: {:?}", e))?;
    js_rows_to_vec(result)
}

/// JS array of arrays -> rows; non-array rows are skipped, empty cells become ""
fn js_rows_to_vec(js_value: JsValue) -> Result<Vec<Vec<String>>, String> {
    if !js_value.is_array() {
        return Err("Spreadsheet parser did not return rows".to_string());
    }

    let array = js_sys::Array::from(&js_value);
    let mut rows = Vec::with_capacity(array.length() as usize);

    for i in 0..array.length() {
        let row_value = array.get(i);
        if !row_value.is_array() {
            continue;
        }

        let row = js_sys::Array::from(&row_value)
            .iter()
            .map(|cell| {
                if cell.is_null() || cell.is_undefined() {
                    String::new()
                } else if let Some(text) = cell.as_string() {
                    text
                } else if let Some(number) = cell.as_f64() {
                    number.to_string()
                } else {
                    // Fall back to the string form
                    format!("{:?}", cell).trim_matches('"').to_string()
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
