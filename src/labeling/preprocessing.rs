use image::{DynamicImage, RgbImage, imageops::FilterType};
use rten_tensor::NdTensor;

/// ImageNet channel statistics
const MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Resize to the square model input
pub fn resize_to_input(img: &DynamicImage, size: u32) -> RgbImage {
    img.resize_exact(size, size, FilterType::Triangle).to_rgb8()
}

/// Normalize an RGB image into planar (CHW) floats
pub fn normalize_chw(rgb: &RgbImage) -> Vec<f32> {
    let plane = (rgb.width() * rgb.height()) as usize;
    let mut data = vec![0.0f32; 3 * plane];

    for (i, pixel) in rgb.pixels().enumerate() {
        for c in 0..3 {
            let value = pixel[c] as f32 / 255.0;
            data[c * plane + i] = (value - MEAN[c]) / STD[c];
        }
    }

    data
}

/// Build the `[1, 3, size, size]` input tensor for a model
pub fn to_input_tensor(img: &DynamicImage, size: u32) -> NdTensor<f32, 4> {
    let rgb = resize_to_input(img, size);
    let data = normalize_chw(&rgb);
    NdTensor::from_data([1, 3, size as usize, size as usize], data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn resize_produces_square_input() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 32, Rgb([10, 20, 30])));
        let resized = resize_to_input(&img, 16);
        assert_eq!(resized.dimensions(), (16, 16));
    }

    #[test]
    fn normalize_lays_out_channels_as_planes() {
        let rgb = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([255, 0, 0]) } else { Rgb([0, 255, 0]) }
        });
        let data = normalize_chw(&rgb);

        assert_eq!(data.len(), 6);
        // red plane
        assert!((data[0] - (1.0 - MEAN[0]) / STD[0]).abs() < 1e-5);
        assert!((data[1] - (0.0 - MEAN[0]) / STD[0]).abs() < 1e-5);
        // green plane
        assert!((data[2] - (0.0 - MEAN[1]) / STD[1]).abs() < 1e-5);
        assert!((data[3] - (1.0 - MEAN[1]) / STD[1]).abs() < 1e-5);
    }
}
