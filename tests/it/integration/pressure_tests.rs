//! Pressure-aware drawing: per-segment width, fallbacks, quantization.

use crate::helpers::canvas;
use pensketch::{Point, PointerButton, PointerEvent, PointerSample};

#[test]
fn test_pen_with_pressure_builds_segments() {
    let mut canvas = canvas();
    canvas.pointer_down(&PointerEvent::pen(1, PointerButton::Primary, 0.0, 0.0, 0.5));
    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 1.0, 0.0, 0.5));
    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 2.0, 0.0, 0.5));
    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 3.0, 0.0, 0.5));
    canvas.pointer_up(&PointerEvent::pen(1, PointerButton::Primary, 3.0, 0.0, 0.5));

    // One independent 2-point stroke per move
    assert_eq!(canvas.stroke_count(), 3);
    for id in canvas.stroke_ids() {
        assert_eq!(canvas.stroke_points(id).unwrap().len(), 2);
    }
    assert_eq!(canvas.surface().live_count(), 3);
}

#[test]
fn test_segment_width_follows_pressure() {
    let mut canvas = canvas();
    canvas.pointer_down(&PointerEvent::pen(1, PointerButton::Primary, 0.0, 0.0, 0.0));

    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 1.0, 0.0, 0.0));
    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 2.0, 0.0, 1.0));
    canvas.pointer_up(&PointerEvent::pen(1, PointerButton::Primary, 2.0, 0.0, 1.0));

    // min_width 0.5 at zero pressure, max_width 2.0 at full pressure
    let mut widths: Vec<String> = canvas
        .stroke_ids()
        .iter()
        .map(|&id| {
            let element = canvas.stroke_element(id).unwrap();
            canvas
                .surface()
                .style_of(element)
                .unwrap()
                .get("stroke-width")
                .cloned()
                .unwrap()
        })
        .collect();
    widths.sort();
    assert_eq!(widths, vec!["0.500px".to_string(), "2.000px".to_string()]);
}

#[test]
fn test_missing_sample_pressure_falls_back_to_half() {
    let mut canvas = canvas();
    canvas.pointer_down(&PointerEvent::pen(1, PointerButton::Primary, 0.0, 0.0, 0.9));

    // A coalesced sample without a pressure reading: width derives from the
    // 0.5 fallback, giving 0.5 + (2.0 - 0.5) * 0.5
    let batch = PointerEvent::pen(1, PointerButton::Primary, 1.0, 0.0, 0.9).with_coalesced(vec![
        PointerSample { position: Point::new(1.0, 0.0), pressure: None },
    ]);
    canvas.pointer_move(&batch);
    canvas.pointer_up(&PointerEvent::pen(1, PointerButton::Primary, 1.0, 0.0, 0.9));

    let id = canvas.stroke_ids()[0];
    let element = canvas.stroke_element(id).unwrap();
    let style = canvas.surface().style_of(element).unwrap();
    assert_eq!(style.get("stroke-width").map(String::as_str), Some("1.250px"));
}

#[test]
fn test_pressure_quantized_to_three_digits() {
    let mut canvas = canvas();
    canvas.pointer_down(&PointerEvent::pen(1, PointerButton::Primary, 0.0, 0.0, 0.2004));
    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 1.0, 0.0, 0.2004));
    canvas.pointer_up(&PointerEvent::pen(1, PointerButton::Primary, 1.0, 0.0, 0.2004));

    // 0.2004 quantizes to 0.2, so width = 0.5 + 1.5 * 0.2
    let id = canvas.stroke_ids()[0];
    let element = canvas.stroke_element(id).unwrap();
    let style = canvas.surface().style_of(element).unwrap();
    assert_eq!(style.get("stroke-width").map(String::as_str), Some("0.800px"));
}

#[test]
fn test_pressure_tap_without_move_persists_nothing() {
    let mut canvas = canvas();
    canvas.pointer_down(&PointerEvent::pen(1, PointerButton::Primary, 5.0, 5.0, 0.6));
    canvas.pointer_up(&PointerEvent::pen(1, PointerButton::Primary, 5.0, 5.0, 0.6));

    assert_eq!(canvas.stroke_count(), 0);
    assert_eq!(canvas.surface().live_count(), 0);
}

#[test]
fn test_pressure_cancel_discards_all_segments() {
    let mut canvas = canvas();
    canvas.pointer_down(&PointerEvent::pen(1, PointerButton::Primary, 0.0, 0.0, 0.5));
    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 1.0, 0.0, 0.5));
    canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, 2.0, 0.0, 0.5));
    assert_eq!(canvas.stroke_count(), 2);

    canvas.pointer_cancel(&PointerEvent::pen(1, PointerButton::Primary, 2.0, 0.0, 0.5));
    assert_eq!(canvas.stroke_count(), 0);
    assert_eq!(canvas.surface().live_count(), 0);
}

#[test]
fn test_pressure_segments_are_individually_erasable() {
    let mut canvas = canvas();
    canvas.pointer_down(&PointerEvent::pen(1, PointerButton::Primary, 0.0, 0.0, 0.5));
    for x in 1..=4 {
        canvas.pointer_move(&PointerEvent::pen(1, PointerButton::Primary, x as f64 * 10.0, 0.0, 0.5));
    }
    canvas.pointer_up(&PointerEvent::pen(1, PointerButton::Primary, 40.0, 0.0, 0.5));
    assert_eq!(canvas.stroke_count(), 4);

    // Erase around the trailing endpoint, which only the last segment
    // samples; its neighbors survive
    let removed = canvas.remove_strokes_in_range(40.0, 0.0, 4.0);
    assert_eq!(removed.len(), 1);
    assert_eq!(canvas.stroke_count(), 3);
}
