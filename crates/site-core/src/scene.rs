//! Description of the decorative 3D hero scene.
//!
//! These types avoid any reference to the rendering library; the web bridge
//! turns them into library objects. Motion is computed here so it can be
//! checked on the host.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POSITION, POD_BOB_AMPLITUDE,
    POD_BOB_RATE_PER_MS, POD_SPIN_PER_FRAME,
};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    Phong,
    Basic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub shading: Shading,
    pub color: u32,
    pub shininess: Option<f32>,
    pub specular: Option<u32>,
    /// Set for transparent materials.
    pub opacity: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
}

/// Chassis, tinted window band and a LiDAR sensor, in group-local space.
pub fn pod_parts() -> [Part; 3] {
    [
        Part {
            name: "chassis",
            geometry: Geometry::Box {
                width: 3.0,
                height: 1.2,
                depth: 2.0,
            },
            material: Material {
                shading: Shading::Phong,
                color: 0xf0f0f0,
                shininess: Some(100.0),
                specular: Some(0x0066ff),
                opacity: None,
            },
            position: Vec3::new(0.0, 0.5, 0.0),
        },
        Part {
            name: "window",
            geometry: Geometry::Box {
                width: 2.8,
                height: 0.6,
                depth: 1.8,
            },
            material: Material {
                shading: Shading::Phong,
                color: 0x333333,
                shininess: None,
                specular: None,
                opacity: Some(0.8),
            },
            position: Vec3::new(0.0, 0.8, 0.0),
        },
        Part {
            name: "lidar",
            geometry: Geometry::Sphere {
                radius: 0.12,
                width_segments: 16,
                height_segments: 16,
            },
            material: Material {
                shading: Shading::Basic,
                color: 0x0066ff,
                shininess: None,
                specular: None,
                opacity: None,
            },
            position: Vec3::new(1.4, 1.1, 0.0),
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: u32,
    pub intensity: f32,
    pub position: Option<Vec3>,
}

pub fn scene_lights() -> [Light; 2] {
    [
        Light {
            kind: LightKind::Ambient,
            color: 0xffffff,
            intensity: 1.0,
            position: None,
        },
        Light {
            kind: LightKind::Directional,
            color: 0xffffff,
            intensity: 1.2,
            position: Some(Vec3::new(5.0, 10.0, 7.0)),
        },
    ]
}

/// Perspective camera looking at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraSpec {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            fovy_degrees: CAMERA_FOV_DEG,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            eye: Vec3::from_array(CAMERA_POSITION),
            target: Vec3::ZERO,
        }
    }
}

/// Aspect ratio of the container; collapsed or hidden containers fall back to 1.
#[inline]
pub fn aspect_ratio(width: f64, height: f64) -> f32 {
    if width > 0.0 && height > 0.0 {
        (width / height) as f32
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PodPose {
    pub rotation_y: f32,
    pub y: f32,
}

/// Continuous slow spin plus a vertical bob keyed to wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PodMotion {
    rotation_y: f32,
}

impl PodMotion {
    pub fn step(&mut self, now_ms: f64) -> PodPose {
        self.rotation_y += POD_SPIN_PER_FRAME;
        PodPose {
            rotation_y: self.rotation_y,
            y: bob_height(now_ms),
        }
    }
}

#[inline]
pub fn bob_height(now_ms: f64) -> f32 {
    ((now_ms * POD_BOB_RATE_PER_MS).sin() as f32) * POD_BOB_AMPLITUDE
}
