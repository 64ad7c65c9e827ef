//! Standalone demo: walks a thumb across a radial pad and prints the colors.
//!
//! Run with `RUST_LOG=debug` to see clamping diagnostics.

use spectrum_picker::{PadPosition, PickerConfig, RadialPicker};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut picker = RadialPicker::radial(200.0, &PickerConfig::default());
    picker
        .state_mut()
        .set_listener(|color| println!("listener: {color}"));

    let pointers = [
        PadPosition::new(200.0, 100.0),
        PadPosition::new(100.0, 0.0),
        PadPosition::new(30.0, 60.0),
        PadPosition::new(102.0, 98.0),
        PadPosition::new(-40.0, 250.0),
    ];
    for pointer in pointers {
        picker.move_thumb(pointer);
        let ratios = picker.ratios();
        println!(
            "pointer ({:>6.1}, {:>6.1}) -> thumb ({:>6.1}, {:>6.1})  color {:.3}  tint {:.3}",
            pointer.x,
            pointer.y,
            picker.thumb().x,
            picker.thumb().y,
            ratios.color(),
            ratios.tint(),
        );
    }

    picker.on_slider_progress(picker.slider().max() / 4);
    println!("after shading: {}", picker.current_color());
}
