use super::*;

#[test]
fn rejects_zero_dimensions_and_bad_lengths() {
    assert!(matches!(
        Photo::from_rgba8(0, 10, Vec::new()),
        Err(FrameboothError::Validation(_))
    ));
    assert!(Photo::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(Photo::from_image(image::RgbaImage::new(3, 0)).is_err());
}

#[test]
fn reports_dimensions() {
    let p = Photo::from_rgba8(3, 2, vec![9; 3 * 2 * 4]).unwrap();
    assert_eq!((p.width(), p.height()), (3, 2));
}

#[test]
fn decodes_encoded_png() {
    let img = image::RgbaImage::from_pixel(5, 4, image::Rgba([1, 2, 3, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let p = Photo::from_encoded(&buf).unwrap();
    assert_eq!((p.width(), p.height()), (5, 4));
    assert_eq!(p.as_image().get_pixel(4, 3).0, [1, 2, 3, 255]);
}
