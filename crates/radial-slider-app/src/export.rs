//! Static export: render a widget's current state as SVG or a standalone page.

use crate::error::{AppError, AppResult};
use radial_slider_core::config::from_json;
use radial_slider_core::{Element, LabelOptions, RadialSliderWidget, SliderConfig, SliderPatch};
use std::path::Path;

/// Id of the container holding the drawing in exported pages.
pub const SLIDER_CONTAINER_ID: &str = "radial-slider";

/// What to write besides the drawing.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Wrap the output in a complete HTML page.
    pub html: bool,
    /// Container id of a label panel to include.
    pub labels: Option<String>,
    pub label_options: LabelOptions,
}

/// Read a JSON array of slider configs from `path`.
pub fn load_configs(path: &Path) -> AppResult<Vec<SliderConfig>> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let configs = from_json(&json)?;
    log::info!("Loaded {} slider config(s) from {}", configs.len(), path.display());
    Ok(configs)
}

/// Apply a `SLIDER=VALUE` assignment, where `SLIDER` is an index or a name.
pub fn apply_assignment(
    widget: &mut RadialSliderWidget,
    assignment: &str,
) -> AppResult<SliderPatch> {
    let invalid = || AppError::InvalidAssignment(assignment.to_string());
    let (slider, value) = assignment.split_once('=').ok_or_else(invalid)?;
    let slider = slider.trim();
    let value: f64 = value.trim().parse().map_err(|_| invalid())?;

    let index = match slider.parse::<usize>() {
        Ok(index) => index,
        Err(_) => widget
            .index_of(slider)
            .ok_or_else(|| AppError::UnknownName(slider.to_string()))?,
    };
    Ok(widget.set_value(index, value)?)
}

/// Render the widget, and its label panel if requested.
pub fn render(widget: &mut RadialSliderWidget, options: &ExportOptions) -> String {
    let drawing = widget.scene();
    let panel = options
        .labels
        .as_deref()
        .map(|id| widget.attach_labels(id, options.label_options.clone()));

    if !options.html {
        let mut out = drawing.to_markup();
        if let Some(panel) = panel {
            out.push('\n');
            out.push_str(&panel.to_markup());
        }
        out.push('\n');
        return out;
    }

    let mut body = Element::new("body").child(
        Element::new("div")
            .attr("id", SLIDER_CONTAINER_ID)
            .child(drawing),
    );
    if let (Some(id), Some(panel)) = (options.labels.as_deref(), panel) {
        body = body.child(Element::new("div").attr("id", id).child(panel));
    }
    let page = Element::new("html")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(Element::new("title").text("Radial slider")),
        )
        .child(body);
    format!("<!DOCTYPE html>\n{}\n", page.to_markup())
}

/// Load `config_path`, apply every assignment and render the result.
pub fn export_file(
    config_path: &Path,
    assignments: &[String],
    options: &ExportOptions,
) -> AppResult<String> {
    let mut widget = RadialSliderWidget::new(load_configs(config_path)?)?;
    for assignment in assignments {
        let patch = apply_assignment(&mut widget, assignment)?;
        log::debug!("Slider {} set to {:.2}", patch.index, patch.value);
    }
    Ok(render(&mut widget, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONFIG: &str = r##"[
        {"name": "Food", "size": 60, "min_value": 0, "max_value": 100, "step": 10},
        {"name": "Rent", "size": 120, "min_value": 0, "max_value": 2000, "step": 100}
    ]"##;

    fn config_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_export_svg() {
        let file = config_file();
        let out = export_file(file.path(), &[], &ExportOptions::default()).unwrap();
        assert!(out.starts_with("<svg "));
        assert!(out.contains("viewBox=\"0 0 120 120\""));
        let rent = out.find("radial-slider rent").unwrap();
        let food = out.find("radial-slider food").unwrap();
        assert!(rent < food);
    }

    #[test]
    fn test_export_html_with_labels() {
        let file = config_file();
        let options = ExportOptions {
            html: true,
            labels: Some("info".to_string()),
            label_options: LabelOptions::default(),
        };
        let assignments = vec!["Food=42".to_string(), "0=1000".to_string()];
        let out = export_file(file.path(), &assignments, &options).unwrap();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<div id=\"radial-slider\">"));
        assert!(out.contains("<span class=\"info-food-value\">$40.00</span>"));
        assert!(out.contains("<span class=\"info-rent-value\">$1000.00</span>"));
    }

    #[test]
    fn test_assignment_errors() {
        let mut widget = RadialSliderWidget::new(vec![SliderConfig::new("a")]).unwrap();
        assert!(matches!(
            apply_assignment(&mut widget, "nonsense"),
            Err(AppError::InvalidAssignment(_))
        ));
        assert!(matches!(
            apply_assignment(&mut widget, "b=3"),
            Err(AppError::UnknownName(_))
        ));
        assert!(matches!(
            apply_assignment(&mut widget, "4=3"),
            Err(AppError::Widget(_))
        ));
        let patch = apply_assignment(&mut widget, "a = 150").unwrap();
        assert!((patch.value - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file() {
        let err = load_configs(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
