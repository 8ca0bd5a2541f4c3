use crate::error::AppError;

/// Serializes a header row plus data rows as CSV text.
pub fn build_csv<R, C>(headers: &[&str], rows: R) -> Result<String, AppError>
where
    R: IntoIterator<Item = C>,
    C: IntoIterator<Item = String>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(headers)
        .map_err(|err| AppError::Storage(format!("CSV header: {}", err)))?;
    for row in rows {
        let cells: Vec<String> = row.into_iter().collect();
        writer
            .write_record(&cells)
            .map_err(|err| AppError::Storage(format!("CSV row: {}", err)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| AppError::Storage(format!("CSV flush: {}", err)))?;
    String::from_utf8(bytes).map_err(|err| AppError::Storage(format!("CSV encoding: {}", err)))
}

#[cfg(target_arch = "wasm32")]
pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), AppError> {
    use wasm_bindgen::JsCast;

    let fail = |msg: &str| AppError::Storage(msg.to_string());
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(csv_data));
    let blob = web_sys::Blob::new_with_str_sequence(&array)
        .map_err(|_| fail("Failed to create blob"))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| fail("Failed to create object URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| fail("No document"))?;
    let element = document
        .create_element("a")
        .map_err(|_| fail("Failed to create link"))?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| fail("Failed to cast anchor"))?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or_else(|| fail("No body"))?
        .append_child(&a)
        .map_err(|_| fail("Append failed"))?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    log::info!("Downloaded {}", filename);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_csv_download(filename: &str, _csv_data: &str) -> Result<(), AppError> {
    Err(AppError::Storage(format!(
        "Cannot download {} outside a browser",
        filename
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_cells_with_commas() {
        let csv = build_csv(
            &["Employee", "Net Pay"],
            vec![vec!["Davis, Mike".to_string(), "5767".to_string()]],
        )
        .unwrap();
        assert_eq!(csv, "Employee,Net Pay\n\"Davis, Mike\",5767\n");
    }

    #[test]
    fn csv_with_no_rows_is_header_only() {
        let csv = build_csv(&["A"], Vec::<Vec<String>>::new()).unwrap();
        assert_eq!(csv, "A\n");
    }
}
