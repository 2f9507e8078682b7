use image::{DynamicImage, GenericImageView};

/// A decoded image, always RGBA8.
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decodes the image file at `path` into RGBA8 pixels.
pub fn load(path: &str) -> Result<ImageAsset, String> {
    let img = image::open(path).map_err(|e| format!("could not load image {}: {}", path, e))?;

    let (width, height) = img.dimensions();

    let img = match img {
        DynamicImage::ImageRgba8(img) => img,
        img => img.to_rgba(),
    };

    Ok(ImageAsset {
        width,
        height,
        data: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let result = load("definitely/not/a/real/image.png");
        assert!(result.is_err());
    }
}
