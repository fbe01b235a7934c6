//! Source mosaics
//!
//! Each [`ImageSource`] reduces its collection to a single image before any
//! clipping happens:
//!
//! - `naip`: date-filtered tiles composited with `mosaic`
//! - `ls8`: per-pixel median, then HSV pan-sharpening. Hue and saturation come
//!   from the 30 m B4/B3/B2 composite and value from the 15 m B8 band.

use crate::adapters::earthengine::expression::{Image, ImageCollection};
use crate::domain::ImageSource;

const LS8_RGB_BANDS: [&str; 3] = ["B4_median", "B3_median", "B2_median"];
const LS8_PAN_BAND: &str = "B8_median";

/// Builds the full-coverage image for `source`
pub fn build_mosaic(source: ImageSource) -> Image {
    let (start, end) = source.date_window();
    let collection = ImageCollection::load(source.collection_id()).filter_date(start, end);

    match source {
        ImageSource::Naip => collection.mosaic(),
        ImageSource::Ls8 => pan_sharpen(collection.reduce_median()),
    }
}

fn pan_sharpen(median: Image) -> Image {
    let rgb = median.clone().select(&LS8_RGB_BANDS);
    let gray = median.select(&[LS8_PAN_BAND]);
    let huesat = rgb.rgb_to_hsv().select(&["hue", "saturation"]);

    Image::add_bands(huesat, gray).hsv_to_rgb()
}
