//! Inline SVG rendering of a [`Drawing`].

use log::trace;
use svg::{Document, node::element::Path};

use lnnzhyz_core::{apply_stroke, draw::StrokeDefinition};

use crate::draw::Drawing;

/// Build the `<svg>` element for `drawing`.
///
/// The image is sized in ems so that it scales with the surrounding text,
/// and shifted down so that the bottom line sits on the baseline.
pub(crate) fn render(drawing: &Drawing, stroke: &StrokeDefinition) -> Document {
    let mut stroke = stroke.clone();
    stroke.set_width(drawing.stroke_width());

    let path = apply_stroke!(Path::new().set("fill", "none"), &stroke).set("d", drawing.d());

    trace!(width = drawing.width(), stroke:? = stroke; "Rendering SVG");
    Document::new()
        .set("height", format!("{}em", drawing.height_ems()))
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                drawing.left(),
                drawing.top(),
                drawing.width(),
                drawing.height()
            ),
        )
        .set(
            "style",
            format!("vertical-align:{}em", drawing.vertical_align_ems()),
        )
        .add(path)
}
