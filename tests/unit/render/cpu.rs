use super::*;
use crate::{
    assets::store::PreparedTemplateAssets,
    compile::plan::PhotoPlacement,
    foundation::core::{Canvas, Vec2},
    shapes::star::star_path,
};

fn plan(width: u32, height: u32, background: Rgba8) -> CompositePlan {
    CompositePlan {
        canvas: Canvas { width, height },
        background,
        photos: Vec::new(),
        ops: Vec::new(),
        overlay_scale: None,
        skipped: Vec::new(),
    }
}

fn render(plan: &CompositePlan, photos: &[PreparedImage]) -> FrameRGBA {
    let assets = PreparedTemplateAssets::default();
    CpuBackend::new()
        .render_plan(
            plan,
            RenderInputs {
                photos,
                assets: &assets,
            },
        )
        .unwrap()
}

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PreparedImage {
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba.repeat((width * height) as usize)),
    }
}

#[test]
fn background_fills_every_pixel() {
    let f = render(&plan(8, 6, Rgba8::rgb(0x87, 0xCE, 0xEB)), &[]);
    assert_eq!((f.width, f.height), (8, 6));
    assert!(f.premultiplied);
    for y in 0..6 {
        for x in 0..8 {
            assert_eq!(f.pixel(x, y), Some([0x87, 0xCE, 0xEB, 255]));
        }
    }
}

#[test]
fn photo_is_drawn_into_its_slot() {
    let mut p = plan(20, 20, Rgba8::WHITE);
    p.photos.push(PhotoPlacement {
        index: 0,
        dest: Rect::new(5.0, 5.0, 15.0, 15.0),
    });
    let f = render(&p, &[solid(4, 4, [255, 0, 0, 255])]);
    assert_eq!(f.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(1, 1), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(18, 18), Some([255, 255, 255, 255]));
}

#[test]
fn missing_photo_input_is_a_render_error() {
    let mut p = plan(4, 4, Rgba8::WHITE);
    p.photos.push(PhotoPlacement {
        index: 2,
        dest: Rect::new(0.0, 0.0, 4.0, 4.0),
    });
    let assets = PreparedTemplateAssets::default();
    let err = CpuBackend::new()
        .render_plan(
            &p,
            RenderInputs {
                photos: &[],
                assets: &assets,
            },
        )
        .unwrap_err();
    assert!(matches!(err, FrameboothError::Render(_)));
}

#[test]
fn star_fills_its_center_and_leaves_corners() {
    let mut p = plan(40, 40, Rgba8::BLACK);
    p.ops.push(DrawOp::Star {
        element_id: "s".to_string(),
        path: star_path(Point::ORIGIN, 15.0, 5).unwrap(),
        transform: Affine::translate(Vec2::new(20.0, 20.0)),
        color: Rgba8::rgb(255, 215, 0),
        opacity: 1.0,
        bounds: Rect::new(5.0, 5.0, 35.0, 35.0),
    });
    let f = render(&p, &[]);
    assert_eq!(f.pixel(20, 20), Some([255, 215, 0, 255]));
    assert_eq!(f.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(38, 38), Some([0, 0, 0, 255]));
}

#[test]
fn half_opacity_blends_with_background() {
    let mut p = plan(10, 10, Rgba8::BLACK);
    p.ops.push(DrawOp::Star {
        element_id: "s".to_string(),
        path: star_path(Point::ORIGIN, 5.0, 4).unwrap(),
        transform: Affine::translate(Vec2::new(5.0, 5.0)),
        color: Rgba8::WHITE,
        opacity: 0.5,
        bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
    });
    let f = render(&p, &[]);
    let [r, g, b, a] = f.pixel(5, 5).unwrap();
    assert_eq!(a, 255);
    for c in [r, g, b] {
        assert!((120..=135).contains(&c), "channel {c}");
    }
}

#[test]
fn oversized_canvas_is_rejected() {
    let p = plan(70_000, 10, Rgba8::WHITE);
    let assets = PreparedTemplateAssets::default();
    let res = CpuBackend::new().render_plan(
        &p,
        RenderInputs {
            photos: &[],
            assets: &assets,
        },
    );
    assert!(matches!(res, Err(FrameboothError::Render(_))));
}
