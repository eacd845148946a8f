#![cfg(target_arch = "wasm32")]
use crate::constants::{HEART_COUNT, PARTICLE_COUNT};
use crate::core::{Palette, SceneLayout};
use crate::input::SceneInput;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod anchors;
mod camera;
mod cards;
mod carousel;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod render;
mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shelter-backdrop starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };

    // Each component is independent; a missing element only disables its own behavior.
    nav::init(&document);
    anchors::init(&document);
    reveal::init(&document);
    carousel::init(&document);
    cards::init_filter(&document);
    cards::init_donations(&document);

    spawn_local(async move {
        if let Err(e) = init_scene(document).await {
            log::error!("scene init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount the animated 3D background into `#canvas-container`.
async fn init_scene(document: web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id("canvas-container") else {
        log::warn!("[scene] no #canvas-container, background disabled");
        return Ok(());
    };

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Backing size must be right before the surface is configured.
    events::wire_canvas_resize(&canvas);

    let palette = body_palette(&document);
    let layout = SceneLayout::generate(&mut StdRng::from_entropy(), PARTICLE_COUNT, HEART_COUNT);

    let Some(gpu) = frame::init_gpu(&canvas, &layout, palette).await else {
        canvas.remove();
        return Ok(());
    };

    let scene_input = Rc::new(RefCell::new(SceneInput::default()));
    events::wire_pointer_tracking(&document, scene_input.clone());
    events::wire_scroll_tracking(scene_input.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene_input,
        canvas,
        gpu,
        layout.hearts,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn body_palette(document: &web::Document) -> Palette {
    let Some(body) = document.body() else {
        return Palette::default();
    };
    let list = body.class_list();
    let classes: Vec<String> = (0..list.length()).filter_map(|i| list.item(i)).collect();
    Palette::for_body_classes(classes.iter().map(String::as_str))
}
