//! Page geometry and naming for the "save charts as PDF" snapshot.

use crate::models::AlgorithmChoice;

/// Landscape A4, millimetres.
pub const PAGE_WIDTH_MM: f64 = 297.0;
pub const PAGE_HEIGHT_MM: f64 = 210.0;
pub const PAGE_MARGIN_MM: f64 = 10.0;

pub fn pdf_filename(algorithm: AlgorithmChoice) -> String {
    format!("{}_Results.pdf", algorithm.export_stem())
}

/// Placement of the captured image on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fit a `width` x `height` pixel capture inside the margins, keeping its
/// aspect ratio and anchoring it to the top-left margin.
pub fn fit_image(width: u32, height: u32) -> ImageBox {
    let max_w = PAGE_WIDTH_MM - 2.0 * PAGE_MARGIN_MM;
    let max_h = PAGE_HEIGHT_MM - 2.0 * PAGE_MARGIN_MM;
    if width == 0 || height == 0 {
        return ImageBox {
            x: PAGE_MARGIN_MM,
            y: PAGE_MARGIN_MM,
            width: max_w,
            height: max_h,
        };
    }
    let scale = (max_w / width as f64).min(max_h / height as f64);
    ImageBox {
        x: PAGE_MARGIN_MM,
        y: PAGE_MARGIN_MM,
        width: width as f64 * scale,
        height: height as f64 * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames() {
        assert_eq!(pdf_filename(AlgorithmChoice::KMeans), "KMeans_Results.pdf");
        assert_eq!(
            pdf_filename(AlgorithmChoice::IsolationForest),
            "IsolationForest_Results.pdf"
        );
        assert_eq!(pdf_filename(AlgorithmChoice::OneClassSvm), "OneClassSVM_Results.pdf");
    }

    #[test]
    fn test_wide_capture_is_width_bound() {
        let b = fit_image(2770, 500);
        assert!((b.width - 277.0).abs() < 1e-9);
        assert!((b.height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_tall_capture_is_height_bound() {
        let b = fit_image(400, 1900);
        assert!((b.height - 190.0).abs() < 1e-9);
        assert!((b.width - 40.0).abs() < 1e-9);
        assert_eq!((b.x, b.y), (10.0, 10.0));
    }

    #[test]
    fn test_empty_capture_fills_page() {
        let b = fit_image(0, 10);
        assert_eq!(b.width, 277.0);
    }
}
