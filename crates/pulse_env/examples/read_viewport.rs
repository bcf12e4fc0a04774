use pulse_env::Viewport;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

/// Opens a window, queries its viewport once, and exits.
struct ViewportProbe {
    window: Option<Window>,
}

impl ApplicationHandler for ViewportProbe {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = event_loop
                .create_window(Window::default_attributes().with_title("pulse viewport probe"))
                .expect("Failed to create window");

            let viewport = Viewport::query(&window);
            println!("Viewport: {}x{} px", viewport.width, viewport.height);
            println!("  1vw = {} px", viewport.vw);
            println!("  1vh = {} px", viewport.vh);

            self.window = Some(window);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        _event: WindowEvent,
    ) {
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = ViewportProbe { window: None };
    event_loop
        .run_app(&mut app)
        .expect("Event loop terminated abnormally");
}
