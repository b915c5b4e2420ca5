use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::Rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const PARTICLE_COUNT: usize = 150;
const SPREAD_DEGREES: f64 = 100.0;
const ORIGIN_Y: f64 = 0.7;
const GRAVITY: f64 = 0.22;
const DRAG: f64 = 0.992;
const MAX_FRAMES: u32 = 300;

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    width: f64,
    height: f64,
    rotation: f64,
    spin: f64,
    color: String,
}

/// Fires a one-shot confetti burst over the page, colored from `colors`.
/// Fire-and-forget: any browser call that fails silently aborts the effect,
/// and nothing here is ever awaited by the caller. Honors
/// `prefers-reduced-motion`.
pub fn burst(colors: &[String]) {
    let _ = try_burst(colors);
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn try_burst(colors: &[String]) -> Option<()> {
    if colors.is_empty() || prefers_reduced_motion() {
        return None;
    }
    let window = web_sys::window()?;
    let document = window.document()?;
    let body = document.body()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas
        .set_attribute(
            "style",
            "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
             pointer-events: none; z-index: 999;",
        )
        .ok()?;
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    body.append_child(&canvas).ok()?;

    let mut rng = rand::thread_rng();
    let mut particles: Vec<Particle> = (0..PARTICLE_COUNT)
        .map(|_| {
            // Launch cone centered straight up, SPREAD_DEGREES wide.
            let half_spread = SPREAD_DEGREES / 2.0;
            let angle = (90.0 + rng.gen_range(-half_spread..half_spread)).to_radians();
            let speed = rng.gen_range(7.0..16.0);
            Particle {
                x: width * 0.5 + rng.gen_range(-20.0..20.0),
                y: height * ORIGIN_Y,
                vx: speed * angle.cos(),
                vy: -speed * angle.sin(),
                width: rng.gen_range(6.0..12.0),
                height: rng.gen_range(4.0..8.0),
                rotation: rng.gen_range(0.0..std::f64::consts::TAU),
                spin: rng.gen_range(-0.2..0.2),
                color: colors[rng.gen_range(0..colors.len())].clone(),
            }
        })
        .collect();

    let raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_handle = raf.clone();
    let canvas_in = canvas.clone();
    let mut frame: u32 = 0;

    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame += 1;
        let w = canvas_in.width() as f64;
        let h = canvas_in.height() as f64;
        ctx.clear_rect(0.0, 0.0, w, h);

        let fade = (1.0 - frame as f64 / MAX_FRAMES as f64).max(0.0);
        let mut alive = false;
        for p in particles.iter_mut() {
            p.vy += GRAVITY;
            p.vx *= DRAG;
            p.vy *= DRAG;
            p.x += p.vx;
            p.y += p.vy;
            p.rotation += p.spin;
            if p.y < h + 40.0 {
                alive = true;
            }
            ctx.save();
            let _ = ctx.translate(p.x, p.y);
            let _ = ctx.rotate(p.rotation);
            ctx.set_global_alpha(fade);
            ctx.set_fill_style_str(&p.color);
            ctx.fill_rect(-p.width / 2.0, -p.height / 2.0, p.width, p.height);
            ctx.restore();
        }

        if !alive || frame >= MAX_FRAMES {
            canvas_in.remove();
            // The closure cannot drop itself mid-call; hand the drop to a
            // zero-delay timeout.
            let slot = raf_handle.clone();
            Timeout::new(0, move || {
                slot.borrow_mut().take();
            })
            .forget();
            return;
        }
        if let Some(win) = web_sys::window() {
            if let Some(cb) = raf_handle.borrow().as_ref() {
                let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    let scheduled = {
        let slot = raf.borrow();
        match slot.as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_ok(),
            None => false,
        }
    };
    if !scheduled {
        canvas.remove();
        raf.borrow_mut().take();
    }
    Some(())
}
