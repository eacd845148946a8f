use crate::camera::Camera;
use crate::constants::*;
use crate::core::{ease_camera, heart_pose, plane_offset_y, HeartSeed, Palette, SceneLayout};
use crate::input::SceneInput;
use crate::render::{self, HeartInstance};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub input: Rc<RefCell<SceneInput>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::SceneRenderer<'a>,
    pub camera: Camera,
    pub hearts: Vec<HeartSeed>,
    pub heart_instances: Vec<HeartInstance>,

    pub started: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        input: Rc<RefCell<SceneInput>>,
        canvas: web::HtmlCanvasElement,
        gpu: render::SceneRenderer<'a>,
        hearts: Vec<HeartSeed>,
    ) -> Self {
        let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
        let camera = Camera::new(CAMERA_FOV_DEG, aspect, CAMERA_NEAR, CAMERA_FAR, CAMERA_Z);
        let now = Instant::now();
        Self {
            input,
            canvas,
            gpu,
            camera,
            heart_instances: Vec::with_capacity(hearts.len()),
            hearts,
            started: now,
            last_instant: now,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f32();

        // Snapshot the trackers once; handlers may write again before the next frame.
        let input = *self.input.borrow();

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        self.camera.set_viewport(w, h);
        self.camera
            .set_xy(ease_camera(self.camera.xy(), input.pointer, dt_sec));

        self.heart_instances.clear();
        self.heart_instances.extend(
            self.hearts
                .iter()
                .map(|seed| HeartInstance::new(seed, &heart_pose(seed, elapsed))),
        );

        let scene = render::SceneFrame {
            time: elapsed,
            camera: &self.camera,
            plane_offset_y: plane_offset_y(input.scroll_y),
            hearts: &self.heart_instances,
        };
        match self.gpu.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            // Busy host: skip this frame and try again on the next one.
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    layout: &SceneLayout,
    palette: Palette,
) -> Option<render::SceneRenderer<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::SceneRenderer::new(leaked_canvas, layout, palette).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("[scene] WebGPU unavailable, background disabled: {:?}", e);
            None
        }
    }
}

/// Drive `frame()` from `requestAnimationFrame` for the life of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

pub(crate) fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
