use anyhow::{Context, Result};
use inkboard_core::canvas::{CanvasConfig, StrokeRenderer};
use inkboard_core::coords::Rect;
use inkboard_core::input::{TouchPhase, TouchSample};
use inkboard_core::logging::{LoggingConfig, init_logging};
use inkboard_core::paint::Color;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

const INITIAL_WIDTH: usize = 900;
const INITIAL_HEIGHT: usize = 600;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut window = Window::new(
        "Inkboard",
        INITIAL_WIDTH,
        INITIAL_HEIGHT,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .context("failed to create window")?;
    window.set_target_fps(60);

    let mut renderer = StrokeRenderer::new(
        CanvasConfig::default(),
        INITIAL_WIDTH as u32,
        INITIAL_HEIGHT as u32,
    )?;

    let mut present = vec![0u32; INITIAL_WIDTH * INITIAL_HEIGHT];
    let mut pointer_down = false;

    composite(&renderer, &mut present);
    log::info!("inkboard studio ready — draw with the left mouse button, Esc quits");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (w, h) = window.get_size();
        if w == 0 || h == 0 {
            // Minimized; keep pumping events without presenting.
            window.update();
            continue;
        }

        let surface_size = {
            let view = renderer.composite_frame();
            (view.surface.width() as usize, view.surface.height() as usize)
        };
        if surface_size != (w, h) {
            renderer.on_resize(w as u32, h as u32)?;
            present.resize(w * h, 0);
        }

        // Map the left mouse button onto the single-pointer touch phases.
        let down = window.get_mouse_down(MouseButton::Left);
        if let Some((x, y)) = window.get_mouse_pos(MouseMode::Clamp) {
            match (pointer_down, down) {
                (false, true) => renderer.on_touch(TouchSample::new(x, y, TouchPhase::Start)),
                (true, true) => renderer.on_touch(TouchSample::new(x, y, TouchPhase::Move)),
                (true, false) => renderer.on_touch(TouchSample::new(x, y, TouchPhase::End)),
                (false, false) => {}
            }
        }
        pointer_down = down;

        if renderer.take_redraw_request() {
            composite(&renderer, &mut present);
        }

        window
            .update_with_buffer(&present, w, h)
            .context("failed to present frame")?;
    }

    Ok(())
}

/// The display step: copy the cached raster into the 0RGB present buffer and
/// draw the decorative frame on top.
fn composite(renderer: &StrokeRenderer, present: &mut [u32]) {
    let view = renderer.composite_frame();
    for (dst, px) in present.iter_mut().zip(view.surface.pixels()) {
        *dst = (px.r as u32) << 16 | (px.g as u32) << 8 | px.b as u32;
    }

    let config = renderer.config();
    draw_frame_outline(
        present,
        view.surface.width() as usize,
        view.surface.height() as usize,
        view.frame,
        config.stroke_width,
        pack_0rgb(config.stroke),
    );
}

fn pack_0rgb(color: Color) -> u32 {
    let [r, g, b, _] = color.to_rgba8();
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Strokes the frame rectangle as four bars centered on its edges.
fn draw_frame_outline(
    buf: &mut [u32],
    w: usize,
    h: usize,
    frame: Rect,
    thickness: f32,
    color: u32,
) {
    if frame.is_empty() {
        return;
    }

    let half = thickness / 2.0;
    let (l, t) = (frame.min().x, frame.min().y);
    let (r, b) = (frame.max().x, frame.max().y);

    fill_bar(buf, w, h, l - half, t - half, r + half, t + half, color);
    fill_bar(buf, w, h, l - half, b - half, r + half, b + half, color);
    fill_bar(buf, w, h, l - half, t - half, l + half, b + half, color);
    fill_bar(buf, w, h, r - half, t - half, r + half, b + half, color);
}

fn fill_bar(buf: &mut [u32], w: usize, h: usize, x0: f32, y0: f32, x1: f32, y1: f32, color: u32) {
    let xa = (x0.floor() as i64).clamp(0, w as i64) as usize;
    let xb = (x1.ceil() as i64).clamp(0, w as i64) as usize;
    let ya = (y0.floor() as i64).clamp(0, h as i64) as usize;
    let yb = (y1.ceil() as i64).clamp(0, h as i64) as usize;

    for y in ya..yb {
        let row = y * w;
        buf[row + xa..row + xb].fill(color);
    }
}
