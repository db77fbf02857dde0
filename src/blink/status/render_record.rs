use crate::blink::ToggleEvent;

/// Fixed field order; external tooling parses this layout
pub fn render_record(event: &ToggleEvent) -> String {
    format!(
        " Blink LED: {} \n Blink Frequency: {}\n Blink Brightness: {}\n LED State: {}\n LED Colour: {}\n",
        event.pin,
        event.frequency_hz,
        event.brightness_pct,
        event.led_state.as_digit(),
        event.target.label(),
    )
}
