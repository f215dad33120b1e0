// File: crates/series-explorer/src/window.rs
// Summary: winit event loop with a softbuffer CPU blit; the tick scheduler drives recomputation.

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use series_chart::FrameRenderer;
use series_core::TickScheduler;

use crate::app::{App, EXPANSION_SLIDER, ORDER_SLIDER};
use crate::config::WindowConfig;

/// Open the window and run until it is closed. Only returns on setup failure.
pub fn run(mut app: App, config: &WindowConfig) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(config.width.max(1) as u32, config.height.max(1) as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    app.resize(size.width as i32, size.height as i32);

    let renderer = FrameRenderer::new();
    let mut scheduler = TickScheduler::new(app.tick_period(), Instant::now());
    info!(period_ms = scheduler.period().as_millis() as u64, "event loop started");

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_wait_until(scheduler.next_deadline());
        match event {
            Event::NewEvents(_) => {
                if scheduler.poll(Instant::now()) && app.tick() {
                    window.request_redraw();
                }
                control_flow.set_wait_until(scheduler.next_deadline());
            }
            Event::WindowEvent { event, .. } => {
                if handle_window_event(&mut app, &event) {
                    window.request_redraw();
                }
                match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input: KeyboardInput { virtual_keycode: Some(VirtualKeyCode::Escape), state: ElementState::Pressed, .. },
                        ..
                    } => {
                        info!(ticks = scheduler.fired(), dropped = scheduler.dropped(), "closing");
                        control_flow.set_exit();
                    }
                    _ => {}
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut app, &renderer, &window, &mut surface) {
                    error!(error = %e, "frame presentation failed");
                    control_flow.set_exit();
                }
            }
            _ => {}
        }
    })
}

/// Route one window event to the app. Returns true when a redraw is due.
fn handle_window_event(app: &mut App, event: &WindowEvent<'_>) -> bool {
    match event {
        WindowEvent::Resized(size) => {
            app.resize(size.width as i32, size.height as i32);
            true
        }
        WindowEvent::CursorMoved { position, .. } => app.pointer_moved(position.x, position.y),
        WindowEvent::CursorLeft { .. } => app.pointer_left(),
        WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
            ElementState::Pressed => app.pointer_down(),
            ElementState::Released => {
                app.pointer_up();
                true
            }
        },
        WindowEvent::MouseWheel { delta, .. } => {
            let amount = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y as f64 * 0.1,
                MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
            };
            app.scroll(amount)
        }
        WindowEvent::KeyboardInput {
            input: KeyboardInput { virtual_keycode: Some(key), state: ElementState::Pressed, .. },
            ..
        } => handle_key(app, *key),
        _ => false,
    }
}

fn handle_key(app: &mut App, key: VirtualKeyCode) -> bool {
    match key {
        VirtualKeyCode::Up => app.nudge(ORDER_SLIDER, 1),
        VirtualKeyCode::Down => app.nudge(ORDER_SLIDER, -1),
        VirtualKeyCode::Right => app.nudge(EXPANSION_SLIDER, 1),
        VirtualKeyCode::Left => app.nudge(EXPANSION_SLIDER, -1),
        VirtualKeyCode::R => {
            app.reset_view();
            true
        }
        VirtualKeyCode::T => {
            app.cycle_theme();
            true
        }
        VirtualKeyCode::S => {
            if let Err(e) = app.save_png() {
                warn!(error = %e, "save failed");
            }
            false
        }
        _ => false,
    }
}

fn present(
    app: &mut App,
    renderer: &FrameRenderer,
    window: &Window,
    surface: &mut softbuffer::Surface,
) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // Minimised.
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

    let (rgba, fw, fh, stride) = app.render(renderer)?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("map frame: {e}"))?;
    let (cols, rows) = ((fw as u32).min(w.get()) as usize, (fh as u32).min(h.get()) as usize);
    let dst_stride = w.get() as usize;
    for y in 0..rows {
        let src = &rgba[y * stride..y * stride + cols * 4];
        let dst = &mut frame[y * dst_stride..y * dst_stride + cols];
        for (out, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            // softbuffer wants 0RGB.
            *out = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    debug!(width = fw, height = fh, "frame presented");
    Ok(())
}
