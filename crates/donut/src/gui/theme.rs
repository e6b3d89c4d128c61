use gtk::gdk;
use gtk4 as gtk;
use palette::Srgba;
use wedge::ChartOptions;

pub struct ChartColors {
    pub canvas: Srgba<f64>,
    pub stroke: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ChartColors {
    pub fn from_options(options: &ChartOptions) -> Self {
        Self {
            canvas: options.canvas_color.to_srgba(),
            stroke: options.stroke_color.to_srgba(),
            text: options.text_color.to_srgba(),
        }
    }
}

fn stylesheet(options: &ChartOptions) -> String {
    format!(
        "
.donut-window, .donut-legend {{
    background-color: {canvas};
}}
.donut-legend {{
    padding: 6px;
}}
.donut-legend-item {{
    padding: 2px 8px;
}}
.donut-legend-item label {{
    color: {text};
}}
.donut-popup {{
    background-color: alpha(black, 0.75);
    color: {text};
    padding: 4px 10px;
    border-radius: 6px;
}}
",
        canvas = options.canvas_color,
        text = options.text_color,
    )
}

pub fn load_css(options: &ChartOptions) {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(&stylesheet(options));

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_chart_colors() {
        let css = stylesheet(&ChartOptions::default());
        assert!(css.contains("background-color: #1e1e1e;"));
        assert!(css.contains("color: #ffffff;"));
    }
}
