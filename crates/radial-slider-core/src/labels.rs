//! Companion label panel listing each slider's name, color and value.

use crate::tree::Element;
use crate::widget::{NodeChange, Slider};
use serde::{Deserialize, Serialize};

/// Fields of a slider's label block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    Name,
    Angle,
    Value,
    Color,
}

impl LabelField {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelField::Name => "name",
            LabelField::Angle => "angle",
            LabelField::Value => "value",
            LabelField::Color => "color",
        }
    }

    /// Key of this field's node for the slider at `index`.
    pub fn key(self, index: usize) -> String {
        format!("label-{index}-{}", self.as_str())
    }
}

/// Formatting of label values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Prefix written before every value.
    pub currency: String,
    /// Digits after the decimal point.
    pub decimals: usize,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            decimals: 2,
        }
    }
}

/// A label panel bound to a container.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPanel {
    container_id: String,
    options: LabelOptions,
}

impl LabelPanel {
    pub fn new(container_id: impl Into<String>, options: LabelOptions) -> Self {
        Self {
            container_id: container_id.into(),
            options,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn options(&self) -> &LabelOptions {
        &self.options
    }

    /// Class of a slider's whole label block: `{container}-{slider}`.
    pub fn block_class(&self, slider_class: &str) -> String {
        format!("{}-{}", self.container_id, slider_class)
    }

    /// Class of one field: `{container}-{slider}-{field}`.
    pub fn field_class(&self, slider_class: &str, field: LabelField) -> String {
        format!("{}-{}-{}", self.container_id, slider_class, field.as_str())
    }

    pub fn format_value(&self, value: f64) -> String {
        format!(
            "{}{:.*}",
            self.options.currency, self.options.decimals, value
        )
    }

    pub fn format_angle(&self, angle: f64) -> String {
        format!("{angle:.2}°")
    }

    /// Describe the label blocks for `sliders`, in paint order.
    pub fn scene(&self, sliders: &[Slider]) -> Element {
        sliders
            .iter()
            .enumerate()
            .fold(
                Element::new("div").attr("class", "radial-slider-labels"),
                |panel, (index, slider)| panel.child(self.block(index, slider)),
            )
    }

    fn block(&self, index: usize, slider: &Slider) -> Element {
        let class = slider.class();
        let field = |field: LabelField| {
            Element::new("span")
                .attr("class", self.field_class(class, field))
                .keyed(field.key(index))
        };
        let swatch = field(LabelField::Color).attr(
            "style",
            format!(
                "display: inline-block; width: 1em; height: 1em; background-color: {}",
                slider.config().color.to_css()
            ),
        );

        Element::new("div")
            .attr("class", self.block_class(class))
            .child(swatch)
            .child(field(LabelField::Name).text(slider.name()))
            .child(field(LabelField::Angle).text(self.format_angle(slider.angle())))
            .child(field(LabelField::Value).text(self.format_value(slider.value())))
    }

    /// Text updates for the slider at `index` after it moved.
    pub fn changes(&self, index: usize, angle: f64, value: f64) -> Vec<NodeChange> {
        vec![
            NodeChange::Text {
                key: LabelField::Angle.key(index),
                text: self.format_angle(angle),
            },
            NodeChange::Text {
                key: LabelField::Value.key(index),
                text: self.format_value(value),
            },
        ]
    }
}
