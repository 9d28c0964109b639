#![warn(clippy::pedantic)]
use config::DemoConfig;
use error::AppError;
use frame::Application;
use logging::LoggingConfig;
use winit::{
    event::{DeviceEvent, Event, WindowEvent},
    window::{CursorGrabMode, Window},
};

mod buffer;
mod camera;
mod config;
mod error;
mod frame;
mod geometry;
mod input;
mod light;
mod logging;
mod mesh;
mod normals;
mod scene;
mod shader;
mod texture;

fn main() {
    logging::init_logging(&LoggingConfig::default());

    if let Err(err) = run(DemoConfig::default()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: DemoConfig) -> Result<(), AppError> {
    let event_loop = winit::event_loop::EventLoopBuilder::new().build()?;
    let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(config.width, config.height)
        .build(&event_loop);
    grab_cursor(&window);

    let mut app = Application::new(&display, config)?;
    let mut failure = None;

    // rendering loop
    event_loop.run(|event, window_target| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => window_target.exit(),

                WindowEvent::RedrawRequested => {
                    if let Err(err) = app.draw_frame(&display) {
                        failure = Some(err);
                        window_target.exit();
                    }
                }
                WindowEvent::Resized(window_size) => {
                    display.resize(window_size.into());
                    app.resize(window_size.into());
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    app.input.process_input(&event);
                    if app.input.exit_requested() {
                        window_target.exit();
                    }
                }
                _ => (),
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta: (dx, dy) },
                ..
            } => app.input.process_mouse_motion(dx, dy),
            // ensures continuous rendering
            Event::AboutToWait => window.request_redraw(),
            _ => (),
        };
    })?;

    drop(app);
    log::info!("shut down");
    failure.map_or(Ok(()), Err)
}

/// Hides the cursor and keeps it inside the window so mouse motion only turns the camera.
fn grab_cursor(window: &Window) {
    if let Err(err) = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
    {
        log::warn!("could not grab the cursor: {err}");
    }
    window.set_cursor_visible(false);
}
