use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use wedge::Slices;

/// Edge length of a legend swatch, in pointer units.
pub const SWATCH_SIZE: i32 = 14;

/// What one legend row shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: Srgba<f64>,
}

/// One entry per slice, filler included, in slice order.
pub fn entries(slices: &Slices) -> Vec<LegendEntry> {
    slices
        .iter()
        .map(|slice| LegendEntry {
            name: slice.name.as_str().to_string(),
            color: slice.color.to_srgba(),
        })
        .collect()
}

fn swatch(color: Srgba<f64>) -> gtk::DrawingArea {
    let area = gtk::DrawingArea::new();
    area.set_content_width(SWATCH_SIZE);
    area.set_content_height(SWATCH_SIZE);
    area.set_valign(gtk::Align::Center);

    area.set_draw_func(move |_, cr, width, height| {
        let (r, g, b, a) = color.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.rectangle(0.0, 0.0, width as f64, height as f64);
        if let Err(e) = cr.fill() {
            log::error!("Drawing error: {}", e);
        }
    });
    area
}

fn legend_row(entry: &LegendEntry) -> gtk::Box {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    row.add_css_class("donut-legend-item");
    row.append(&swatch(entry.color));
    row.append(&gtk::Label::new(Some(&entry.name)));
    row
}

pub fn populate(container: &gtk::FlowBox, slices: &Slices) {
    for entry in entries(slices) {
        container.insert(&legend_row(&entry), -1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wedge::{ChartOptions, ColorSpec, Slice};

    #[test]
    fn test_partial_data_gets_a_filler_row() {
        let options = ChartOptions::default();
        let slices = Slices::new(
            vec![
                Slice::new(20.0, ColorSpec::rgb(0x92, 0x55, 0xd9), "Fight club"),
                Slice::new(30.0, ColorSpec::rgb(0x49, 0x94, 0x5a), "Revolver"),
                Slice::new(20.0, ColorSpec::rgb(0xe5, 0x9d, 0x59), "Forrest Gump"),
            ],
            &options,
        )
        .unwrap();

        let rows = entries(&slices);
        let names: Vec<&str> = rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Fight club", "Revolver", "Forrest Gump", "Other"]);
        assert_eq!(rows[3].color, options.empty_slice_color.to_srgba());
    }

    #[test]
    fn test_complete_data_has_no_filler_row() {
        let slices = Slices::new(
            vec![Slice::new(100.0, ColorSpec::rgb(255, 0, 0), "Rent")],
            &ChartOptions::default(),
        )
        .unwrap();
        assert_eq!(entries(&slices).len(), 1);
    }
}
