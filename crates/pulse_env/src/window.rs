//! winit adapter for viewport queries

use crate::viewport::ViewportSource;
use winit::window::Window;

impl ViewportSource for Window {
    fn inner_size(&self) -> Option<(u32, u32)> {
        // Some platforms report 0x0 before the first configure event;
        // treat that as unavailable so the fallback branch runs.
        let size = Window::inner_size(self);
        (size.width > 0 && size.height > 0).then_some((size.width, size.height))
    }

    fn client_size(&self) -> Option<(u32, u32)> {
        let monitor = self.current_monitor().or_else(|| self.primary_monitor())?;
        let size = monitor.size();
        (size.width > 0 && size.height > 0).then_some((size.width, size.height))
    }
}
