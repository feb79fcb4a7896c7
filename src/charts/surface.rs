//! The charting seam. How a surface turns a series into pixels is not this
//! crate's concern; the pipeline hands over ordered points and gets back a
//! refreshable handle.

use crate::readings::series::SeriesPoint;

/// An opaque handle to one rendered chart.
pub trait ChartHandle {
    /// Redraws the chart in place, e.g. after the page theme changed.
    fn refresh(&mut self);
}

/// Renders one metric's series. Called once per metric per pipeline run.
///
/// A `None` value in `points` is a gap in the data; surfaces must not
/// interpolate across it or substitute zero.
pub trait ChartSurface {
    type Handle: ChartHandle;

    fn render(&mut self, label: &str, points: &[SeriesPoint], color: &str) -> Self::Handle;
}

/// The handles produced by one pipeline run, owned explicitly by the caller.
///
/// Anything that later needs to refresh the charts (the theme toggle, for
/// one) takes this registry by reference instead of consulting hidden
/// module-level state.
#[derive(Debug)]
pub struct ChartRegistry<H: ChartHandle> {
    handles: Vec<H>,
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn register(&mut self, handle: H) {
        self.handles.push(handle);
    }

    pub fn refresh_all(&mut self) {
        for handle in &mut self.handles {
            handle.refresh();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &H> {
        self.handles.iter()
    }
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
