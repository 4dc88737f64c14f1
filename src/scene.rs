//! Decorative hero scene rendered through the optional 3D library.

use crate::constants::{HERO_CANVAS_ID, SCENE_GLOBAL};
use crate::dom;
use crate::frame::FrameLoop;
use crate::js;
use serde::Serialize;
use site_core::scene::{
    aspect_ratio, pod_parts, scene_lights, CameraSpec, Geometry, LightKind, Material, PodMotion,
    Shading,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Handle to the 3D library namespace.
pub struct SceneLib {
    three: JsValue,
}

impl SceneLib {
    pub fn detect() -> Option<Self> {
        js::global(SCENE_GLOBAL).map(|three| Self { three })
    }

    fn new_object(&self, class: &str, args: &[JsValue]) -> anyhow::Result<JsValue> {
        js::construct(&self.three, class, args)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaterialParams {
    color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    shininess: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    specular: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    transparent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f32>,
}

impl From<&Material> for MaterialParams {
    fn from(m: &Material) -> Self {
        Self {
            color: m.color,
            shininess: m.shininess,
            specular: m.specular,
            transparent: m.opacity.is_some(),
            opacity: m.opacity,
        }
    }
}

#[inline]
fn num(v: f64) -> JsValue {
    JsValue::from_f64(v)
}

fn container_size(container: &web::HtmlElement) -> (f64, f64) {
    (
        container.offset_width() as f64,
        container.offset_height() as f64,
    )
}

struct Stage {
    scene: JsValue,
    camera: JsValue,
    renderer: JsValue,
}

impl Stage {
    fn render(&self) -> anyhow::Result<()> {
        js::call(
            &self.renderer,
            "render",
            &[self.scene.clone(), self.camera.clone()],
        )?;
        Ok(())
    }

    /// Keep the projection and drawing buffer in step with the container.
    fn fit(&self, container: &web::HtmlElement) -> anyhow::Result<()> {
        let (w, h) = container_size(container);
        js::set(&self.camera, "aspect", &num(aspect_ratio(w, h) as f64))?;
        js::call(&self.camera, "updateProjectionMatrix", &[])?;
        js::call(&self.renderer, "setSize", &[num(w), num(h)])?;
        Ok(())
    }
}

fn build_pod(lib: &SceneLib) -> anyhow::Result<JsValue> {
    let group = lib.new_object("Group", &[])?;
    for part in pod_parts() {
        let geometry = match part.geometry {
            Geometry::Box {
                width,
                height,
                depth,
            } => lib.new_object(
                "BoxGeometry",
                &[num(width as f64), num(height as f64), num(depth as f64)],
            )?,
            Geometry::Sphere {
                radius,
                width_segments,
                height_segments,
            } => lib.new_object(
                "SphereGeometry",
                &[
                    num(radius as f64),
                    num(width_segments as f64),
                    num(height_segments as f64),
                ],
            )?,
        };
        let class = match part.material.shading {
            Shading::Phong => "MeshPhongMaterial",
            Shading::Basic => "MeshBasicMaterial",
        };
        let material = lib.new_object(
            class,
            &[js::to_js(&MaterialParams::from(&part.material))?],
        )?;
        let mesh = lib.new_object("Mesh", &[geometry, material])?;
        js::set_xyz(&mesh, "position", part.position)?;
        js::call(&group, "add", &[mesh])?;
    }
    Ok(group)
}

fn build_stage(lib: &SceneLib, container: &web::HtmlElement) -> anyhow::Result<(Stage, JsValue)> {
    let (w, h) = container_size(container);
    let cam = CameraSpec::default();

    let scene = lib.new_object("Scene", &[])?;
    let camera = lib.new_object(
        "PerspectiveCamera",
        &[
            num(cam.fovy_degrees as f64),
            num(aspect_ratio(w, h) as f64),
            num(cam.znear as f64),
            num(cam.zfar as f64),
        ],
    )?;
    let renderer = lib.new_object(
        "WebGLRenderer",
        &[js::to_js(&serde_json::json!({ "antialias": true, "alpha": true }))?],
    )?;
    js::call(&renderer, "setSize", &[num(w), num(h)])?;
    let canvas = js::get(&renderer, "domElement")?;
    js::call(container, "appendChild", &[canvas])?;

    for light in scene_lights() {
        let class = match light.kind {
            LightKind::Ambient => "AmbientLight",
            LightKind::Directional => "DirectionalLight",
        };
        let obj = lib.new_object(
            class,
            &[num(light.color as f64), num(light.intensity as f64)],
        )?;
        if let Some(p) = light.position {
            js::set_xyz(&obj, "position", p)?;
        }
        js::call(&scene, "add", &[obj])?;
    }

    let pod = build_pod(lib)?;
    js::call(&scene, "add", &[pod.clone()])?;

    js::set_xyz(&camera, "position", cam.eye)?;
    js::call(
        &camera,
        "lookAt",
        &[
            num(cam.target.x as f64),
            num(cam.target.y as f64),
            num(cam.target.z as f64),
        ],
    )?;

    Ok((
        Stage {
            scene,
            camera,
            renderer,
        },
        pod,
    ))
}

fn apply_pose(pod: &JsValue, motion: &mut PodMotion) -> anyhow::Result<()> {
    let pose = motion.step(js_sys::Date::now());
    js::set(&js::get(pod, "rotation")?, "y", &num(pose.rotation_y as f64))?;
    js::set(&js::get(pod, "position")?, "y", &num(pose.y as f64))?;
    Ok(())
}

/// Build the scene into `#hero-canvas` and start its animation loop. The loop
/// stops by itself once the container leaves the document.
pub fn setup(lib: &SceneLib, document: &web::Document) -> anyhow::Result<Option<FrameLoop>> {
    let Some(container) = dom::html_by_id(document, HERO_CANVAS_ID) else {
        log::debug!("[scene] no #{HERO_CANVAS_ID}");
        return Ok(None);
    };
    let (stage, pod) = build_stage(lib, &container)?;
    let stage = Rc::new(stage);

    {
        let stage = stage.clone();
        let container = container.clone();
        if let Some(window) = web::window() {
            dom::listen(&window, "resize", move |_: web::Event| {
                if !container.is_connected() {
                    return;
                }
                if let Err(e) = stage.fit(&container) {
                    log::warn!("[scene] resize failed: {e}");
                }
            });
        }
    }

    let mut motion = PodMotion::default();
    let frames = FrameLoop::start(move || {
        if !container.is_connected() {
            log::info!("[scene] container removed; stopping");
            return false;
        }
        let result = apply_pose(&pod, &mut motion).and_then(|_| stage.render());
        match result {
            Ok(()) => true,
            Err(e) => {
                log::error!("[scene] frame failed: {e}");
                false
            }
        }
    });
    log::info!("[scene] hero scene running");
    Ok(Some(frames))
}
