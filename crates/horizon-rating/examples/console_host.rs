//! A minimal host driving the rating control from the console.
//!
//! Real hosts forward platform input and draw the visuals with their own
//! graphics stack; this example fakes a drag gesture and prints the
//! resulting per-item fill state as text.

use horizon_rating::{Icon, ItemVisual, PointerEvent, Precision, RatingControl, Size};

fn draw(visuals: &[ItemVisual]) -> String {
    visuals
        .iter()
        .map(|item| {
            if item.fill_fraction >= 1.0 {
                '*'
            } else if item.filled_visible {
                '+'
            } else {
                '.'
            }
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut stars = RatingControl::new()
        .with_precision(Precision::Half)
        .with_icons(Icon::new(24.0, 24.0), Icon::new(24.0, 24.0));

    stars.rating_changing.connect(|&value| {
        println!("dragging: {value:.1}");
    });
    stars.rating_changed.connect(|&value| {
        println!("committed: {value:.1}");
    });

    stars.resize(Size::new(200.0, 40.0));

    // Drag from the second item out to the fourth, then release
    stars.pointer_event(&PointerEvent::started((60.0, 20.0).into()));
    stars.pointer_event(&PointerEvent::moved((100.0, 20.0).into()));
    stars.pointer_event(&PointerEvent::moved((150.0, 20.0).into()));
    stars.pointer_event(&PointerEvent::ended());

    println!("row: {}", draw(stars.visuals()));
}
