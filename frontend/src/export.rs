//! "Save charts as PDF": rasterize the chart container with html2canvas and
//! place it on a landscape jsPDF page. Both libraries load from index.html.

use anomview_core::export::{fit_image, pdf_filename};
use anomview_core::AlgorithmChoice;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas)]
    fn html2canvas(element: &HtmlElement) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_namespace = jspdf, js_class = "jsPDF")]
    fn new(orientation: &str, unit: &str, format: &str) -> JsPdf;

    #[wasm_bindgen(method, js_class = "jsPDF", js_name = addImage)]
    fn add_image(this: &JsPdf, data_url: &str, format: &str, x: f64, y: f64, w: f64, h: f64);

    #[wasm_bindgen(method, js_class = "jsPDF")]
    fn save(this: &JsPdf, filename: &str);
}

pub async fn save_as_pdf(container: HtmlElement, algorithm: AlgorithmChoice) -> Result<(), JsValue> {
    let canvas: HtmlCanvasElement = JsFuture::from(html2canvas(&container)).await?.dyn_into()?;
    let data_url = canvas.to_data_url_with_type("image/png")?;
    let place = fit_image(canvas.width(), canvas.height());

    let pdf = JsPdf::new("landscape", "mm", "a4");
    pdf.add_image(&data_url, "PNG", place.x, place.y, place.width, place.height);
    pdf.save(&pdf_filename(algorithm));
    log::info!("saved {}", pdf_filename(algorithm));
    Ok(())
}
