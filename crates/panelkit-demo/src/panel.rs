//! The object-properties panel shown by the demo.

use panelkit_core::{ScrubConfig, SurfaceHandle};
use panelkit_widgets::{
    Break, Button, Checkbox, Color, HorizontalRule, Integer, Modal, Number, Panel, Row, Text,
    Widget,
};

/// Width of the label column.
const LABEL_WIDTH: &str = "90px";
const FIELD_WIDTH: &str = "50px";

/// Handles to the controls of an object-properties panel.
#[derive(Debug, Clone)]
pub struct ObjectPanel {
    pub root: Panel,
    pub position: [Number; 3],
    pub segments: Integer,
    pub visible: Checkbox,
    pub color: Color,
    pub info: Button,
    pub modal: Modal,
}

fn label(surface: &SurfaceHandle, text: &str) -> Text {
    let label = Text::new(surface, Some(text));
    label.set_width(LABEL_WIDTH);
    label
}

fn position_field(surface: &SurfaceHandle, config: ScrubConfig) -> Number {
    let number = Number::new(surface, Some(0.0));
    number.set_precision(2).set_unit("m").set_step(0.5);
    number.field().set_scrub_config(config).refresh();
    number.set_width(FIELD_WIDTH);
    number
}

/// Build the panel on `surface`. The modal is a sibling of the panel root and
/// must be attached by the caller next to it.
pub fn build_object_panel(surface: &SurfaceHandle, config: ScrubConfig) -> ObjectPanel {
    let root = Panel::new(surface);
    root.set_id("object");

    let position = [
        position_field(surface, config),
        position_field(surface, config),
        position_field(surface, config),
    ];
    let position_row = Row::new(surface);
    position_row.add(&label(surface, "Position"));
    for field in &position {
        position_row.add(field);
    }

    let segments = Integer::new(surface, Some(8));
    segments.set_range(3.0, 64.0).set_step(1.0);
    segments.field().set_scrub_config(config);
    let segments_row = Row::new(surface);
    segments_row
        .add(&label(surface, "Segments"))
        .add(&segments);

    let visible = Checkbox::new(surface, Some(true));
    let visible_row = Row::new(surface);
    visible_row.add(&label(surface, "Visible")).add(&visible);

    let color = Color::new(surface);
    color.set_hex_value(0x3b82f6);
    let color_row = Row::new(surface);
    color_row.add(&label(surface, "Color")).add(&color);

    let modal = Modal::new(surface);
    let info = Button::new(surface, "Info");
    {
        let modal = modal.clone();
        let message = Text::new(surface, Some("Drag a field to scrub it. Click to type."));
        info.on_click(move |_| {
            modal.show(&message);
        });
    }

    root.add_all(&[
        &position_row,
        &HorizontalRule::new(surface),
        &segments_row,
        &visible_row,
        &color_row,
        &Break::new(surface),
        &info,
    ]);

    ObjectPanel {
        root,
        position,
        segments,
        visible,
        color,
        info,
        modal,
    }
}
