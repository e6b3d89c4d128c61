use super::chart::{self, State};
use super::theme::ChartColors;
use std::path::Path;
use thiserror::Error;
use wedge::{Chart, SURFACE_SIZE};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG error: {0}")]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renders the fully drawn chart onto a new surface-sized image.
pub fn render(chart: Chart) -> Result<cairo::ImageSurface, SnapshotError> {
    let size = SURFACE_SIZE as i32;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size)?;
    let colors = ChartColors::from_options(chart.options());
    {
        let cr = cairo::Context::new(&surface)?;
        chart::draw(&cr, &State::settled(chart), &colors)?;
    }
    surface.flush();
    Ok(surface)
}

pub fn write_png(chart: Chart, path: &Path) -> Result<(), SnapshotError> {
    let surface = render(chart)?;
    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote snapshot to {}", path.display());
    Ok(())
}
