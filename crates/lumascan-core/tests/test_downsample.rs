mod common;

use common::solid_frame;
use lumascan_core::downsample::downsample;
use lumascan_core::error::LumascanError;
use lumascan_core::frame::RawFrame;
use lumascan_core::pipeline::config::GridSize;

#[test]
fn test_grid_is_always_320x180() {
    for (w, h) in [(1, 1), (2, 3), (320, 180), (1920, 1080), (3840, 2160)] {
        let frame = solid_frame(w, h, [10, 20, 30]);
        let grid = downsample(&frame, GridSize::default()).unwrap();
        assert_eq!(grid.width(), 320, "width for {w}x{h} input");
        assert_eq!(grid.height(), 180, "height for {w}x{h} input");
        assert_eq!(grid.cell_count(), 320 * 180);
    }
}

#[test]
fn test_uniform_color_survives_resampling() {
    let frame = solid_frame(640, 480, [90, 140, 200]);
    let grid = downsample(&frame, GridSize::default()).unwrap();
    for cell in grid.cells() {
        assert_eq!(cell, &[90, 140, 200]);
    }
}

#[test]
fn test_single_pixel_input_fills_grid() {
    let frame = solid_frame(1, 1, [255, 0, 128]);
    let grid = downsample(&frame, GridSize::default()).unwrap();
    assert_eq!(grid.cell_count(), 320 * 180);
    for cell in grid.cells() {
        assert_eq!(cell, &[255, 0, 128]);
    }
}

#[test]
fn test_deterministic() {
    // Horizontal gradient, so interpolation actually has work to do.
    let w = 100u32;
    let h = 50u32;
    let mut data = Vec::with_capacity((w * h * 3) as usize);
    for _row in 0..h {
        for col in 0..w {
            let v = (col * 255 / (w - 1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    let frame = RawFrame::new(w, h, data);

    let a = downsample(&frame, GridSize::default()).unwrap();
    let b = downsample(&frame, GridSize::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_custom_grid_size() {
    let frame = solid_frame(16, 16, [7, 7, 7]);
    let grid = downsample(
        &frame,
        GridSize {
            width: 4,
            height: 2,
        },
    )
    .unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.cell_count(), 8);
}

#[test]
fn test_buffer_length_mismatch_is_rejected() {
    let frame = RawFrame::new(4, 4, vec![0u8; 10]);
    let err = downsample(&frame, GridSize::default()).unwrap_err();
    match err {
        LumascanError::InvalidFrame {
            width,
            height,
            expected,
            actual,
        } => {
            assert_eq!(width, 4);
            assert_eq!(height, 4);
            assert_eq!(expected, 48);
            assert_eq!(actual, 10);
        }
        other => panic!("expected InvalidFrame, got {other:?}"),
    }
}

#[test]
fn test_zero_dimension_is_rejected() {
    let frame = RawFrame::new(0, 4, vec![]);
    assert!(matches!(
        downsample(&frame, GridSize::default()),
        Err(LumascanError::InvalidFrame { .. })
    ));
}
