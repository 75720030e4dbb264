//! End-to-end editing sessions against the public engine API.

use retouch_core::{PixelBuffer, Shape};
use retouch_ops::{dispatch, EngineOptions, FlipAxis, Operation, OpsError, TransformEngine};

fn gradient(shape: Shape) -> PixelBuffer {
    let mut buf = PixelBuffer::new(shape);
    for row in 0..shape.height {
        for col in 0..shape.width {
            for ch in 0..shape.channels {
                buf[(row, col, ch)] = ((row * 40 + col * 15 + ch * 70) % 256) as u8;
            }
        }
    }
    buf
}

#[test]
fn contrast_then_brightness_on_uniform_image() {
    let mut engine = TransformEngine::new(PixelBuffer::filled(Shape::new(3, 3, 3), 100));

    engine.contrast(2.0);
    assert!(engine.target().as_slice().iter().all(|&v| v == 72));

    engine.brightness(50);
    assert!(engine.target().as_slice().iter().all(|&v| v == 122));

    engine.reset();
    assert!(engine.target().as_slice().iter().all(|&v| v == 100));
}

#[test]
fn saturating_adjustments_clamp() {
    let mut engine = TransformEngine::new(gradient(Shape::new(5, 5, 3)));
    engine.brightness(300);
    assert!(engine.target().as_slice().iter().all(|&v| v == 255));

    engine.reset();
    engine.brightness(-300);
    assert!(engine.target().as_slice().iter().all(|&v| v == 0));
}

#[test]
fn flips_are_involutions() {
    let src = gradient(Shape::new(7, 4, 3));
    for axis in [FlipAxis::LeftRight, FlipAxis::UpDown] {
        let mut engine = TransformEngine::new(src.clone());
        engine.flip_axis(axis);
        assert_ne!(engine.target(), &src);
        engine.flip_axis(axis);
        assert_eq!(engine.target(), &src);
    }
}

#[test]
fn left_right_flip_moves_columns() {
    let src = gradient(Shape::new(2, 3, 3));
    let mut engine = TransformEngine::new(src.clone());
    engine.flip(true);
    for row in 0..2 {
        assert_eq!(engine.target().pixel(row, 0), src.pixel(row, 2));
        assert_eq!(engine.target().pixel(row, 1), src.pixel(row, 1));
    }
}

#[test]
fn blur_keeps_border_of_uniform_frame() {
    let mut buf = PixelBuffer::filled(Shape::new(5, 5, 3), 200);
    for row in 1..4 {
        for col in 1..4 {
            buf.pixel_mut(row, col).fill(20);
        }
    }
    let mut engine = TransformEngine::new(buf.clone());
    engine.blur();

    let out = engine.target();
    for i in 0..5 {
        assert_eq!(out.pixel(0, i), buf.pixel(0, i));
        assert_eq!(out.pixel(4, i), buf.pixel(4, i));
        assert_eq!(out.pixel(i, 0), buf.pixel(i, 0));
        assert_eq!(out.pixel(i, 4), buf.pixel(i, 4));
    }
    // Centre sees only the inner block.
    assert_eq!(out.pixel(2, 2), &[20, 20, 20]);
    // Corner of the inner block sees 4 inner and 5 frame samples: (80 + 1000) / 9.
    assert_eq!(out.pixel(1, 1), &[120, 120, 120]);
}

#[test]
fn stack_mismatch_is_recoverable() {
    let src = gradient(Shape::new(4, 4, 3));
    let mut engine = TransformEngine::new(src.clone());

    let err = engine.stack(&PixelBuffer::new(Shape::new(4, 5, 3))).unwrap_err();
    assert!(matches!(err, OpsError::ShapeMismatch { .. }));
    assert_eq!(engine.target(), &src);

    engine.stack(&PixelBuffer::filled(src.shape(), 0)).unwrap();
    for px in engine.target().pixels() {
        assert!(px[0] <= 128);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }
}

#[test]
fn scripted_session_then_reset() {
    let src = gradient(Shape::new(6, 9, 3));
    let mut engine = TransformEngine::with_options(src.clone(), EngineOptions::sequential());
    let script = vec![
        Operation::Brightness { delta: 25 },
        Operation::Contrast { level: 80.0 },
        Operation::Grayscale,
        Operation::Flip(FlipAxis::UpDown),
        Operation::Blur,
        Operation::Stack(PixelBuffer::filled(src.shape(), 90)),
    ];
    for op in script {
        dispatch(&mut engine, op).unwrap();
    }
    assert_eq!(engine.origin(), &src);
    assert_ne!(engine.target(), &src);

    dispatch(&mut engine, Operation::Reset).unwrap();
    assert_eq!(engine.target(), &src);
}
