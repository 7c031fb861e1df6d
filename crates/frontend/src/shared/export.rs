//! Export delivery in the browser: file download or print window

use chrono::NaiveDate;
use contracts::domain::a001_asset::exchange::{
    render_export, ExchangeFormat, ExportDocument, ExportError, ExportSink,
};
use contracts::domain::a001_asset::Asset;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Export sink backed by the browser: a Blob download, or a print window for PDF
#[derive(Debug, Default)]
pub struct BrowserDownload;

impl ExportSink for BrowserDownload {
    fn deliver(
        &mut self,
        format: ExchangeFormat,
        assets: &[Asset],
        today: NaiveDate,
    ) -> Result<(), ExportError> {
        let document = render_export(format, assets, today)?;
        let result = match format {
            ExchangeFormat::Pdf => open_print_window(&document),
            _ => download_document(&document),
        };
        result.map_err(ExportError::Delivery)
    }
}

/// Blob holding the document content
fn create_blob(document: &ExportDocument) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(&document.content));

    let properties = BlobPropertyBag::new();
    properties.set_type(document.mime_type);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Starts the download through a temporary link
fn download_document(export: &ExportDocument) -> Result<(), String> {
    let blob = create_blob(export)?;
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(&export.file_name);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    log::info!("Downloaded {}", export.file_name);
    Ok(())
}

/// Opens the printable report in a new window; the page prints itself on load
fn open_print_window(export: &ExportDocument) -> Result<(), String> {
    let blob = create_blob(export)?;
    let window = web_sys::window().ok_or("No window object")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("Pop-up blocked: allow pop-ups to print the report".to_string()),
        Err(e) => Err(format!("Failed to open print window: {:?}", e)),
    }
}
