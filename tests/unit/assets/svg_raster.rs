use super::*;

#[test]
fn raster_size_rounds_up_and_rejects_invalid() {
    assert_eq!(svg_raster_size(10.2, 3.0).unwrap(), (11, 3));
    assert_eq!(svg_raster_size(0.1, 0.1).unwrap(), (1, 1));
    assert!(svg_raster_size(0.0, 5.0).is_err());
    assert!(svg_raster_size(f64::NAN, 5.0).is_err());
    assert!(svg_raster_size(20_000.0, 5.0).is_err());
}

#[test]
fn rasterizes_filled_rect_to_requested_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2">
        <rect x="0" y="0" width="2" height="2" fill="#ff0000"/></svg>"##;
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default()).unwrap();
    let px = rasterize_svg_to_premul_rgba8(&tree, 8, 4).unwrap();
    assert_eq!(px.len(), 8 * 4 * 4);
    let center = ((2 * 8 + 4) * 4) as usize;
    assert_eq!(&px[center..center + 4], &[255, 0, 0, 255]);
}
