// Host-side tests for effect descriptors, scene description and the form seam.

use site_core::effects::*;
use site_core::scene::*;
use site_core::*;

#[test]
fn counter_text_floors_and_appends_suffix() {
    let stat2 = IMPACT_COUNTERS[1];
    assert_eq!(stat2.text(0.0), "0+");
    assert_eq!(stat2.text(49.99), "49+");
    assert_eq!(stat2.text(50.0), "50+");
    let stat3 = IMPACT_COUNTERS[2];
    assert_eq!(stat3.id, "stat3");
    assert_eq!(stat3.text(1.7), "1M+");
}

#[test]
fn counter_tween_is_gated_on_impact_section() {
    let json = serde_json::to_value(IMPACT_COUNTERS[3].tween()).unwrap();
    assert_eq!(json["val"], 15.0);
    assert_eq!(json["duration"], 2.5);
    assert_eq!(json["scrollTrigger"]["trigger"], "#impact");
    assert_eq!(json["scrollTrigger"]["start"], "top 80%");
    assert!(json.get("ease").is_none());
}

#[test]
fn hero_entrance_uses_library_field_names() {
    let json = serde_json::to_value(hero_entrance()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "y": 30.0,
            "opacity": 0.0,
            "stagger": 0.2,
            "duration": 1.0,
            "ease": "power3.out"
        })
    );
}

#[test]
fn shutter_replays_in_reverse_and_leaves_trigger_to_bridge() {
    let tween = shutter_clip();
    let from = serde_json::to_value(&tween.from).unwrap();
    let to = serde_json::to_value(&tween.to).unwrap();
    assert_eq!(from["clipPath"], "inset(100% 0% 0% 0%)");
    assert_eq!(to["clipPath"], "inset(0% 0% 0% 0%)");
    assert_eq!(to["scrollTrigger"]["toggleActions"], "play none none reverse");
    assert_eq!(to["scrollTrigger"]["end"], "bottom 20%");
    assert!(to["scrollTrigger"].get("trigger").is_none());

    let img = shutter_image();
    assert_eq!(img.from.scale, Some(1.4));
    assert_eq!(img.to.scale, Some(1.0));
    assert_eq!(img.to.scroll_trigger, tween.to.scroll_trigger);
}

#[test]
fn hero_timeline_steps() {
    assert_eq!(hero_shutter_open().clip_path, Some("inset(0% 50% 0% 50%)"));
    assert_eq!(hero_image_settle().scale, Some(1.4));
    assert_eq!(HERO_IMAGE_POSITION, "-=1.5");
}

#[test]
fn aspect_ratio_guards_collapsed_containers() {
    assert_eq!(aspect_ratio(1600.0, 800.0), 2.0);
    assert_eq!(aspect_ratio(800.0, 0.0), 1.0);
    assert_eq!(aspect_ratio(0.0, 0.0), 1.0);
}

#[test]
fn pod_spins_each_frame_and_bobs_within_amplitude() {
    let mut m = PodMotion::default();
    let first = m.step(0.0);
    let second = m.step(16.0);
    assert!((first.rotation_y - 0.003).abs() < 1e-6);
    assert!((second.rotation_y - 0.006).abs() < 1e-6);
    assert_eq!(first.y, 0.0);
    for t in [250.0, 1570.8, 4712.4, 123_456.0] {
        assert!(bob_height(t).abs() <= 0.1 + 1e-6);
    }
    assert!((bob_height(1570.796) - 0.1).abs() < 1e-4);
}

#[test]
fn pod_has_chassis_window_and_sensor() {
    let parts = pod_parts();
    let names: Vec<&str> = parts.iter().map(|p| p.name).collect();
    assert_eq!(names, ["chassis", "window", "lidar"]);
    assert_eq!(parts[1].material.opacity, Some(0.8));
    assert_eq!(parts[2].material.shading, Shading::Basic);
    assert_eq!(parts[2].position, glam::Vec3::new(1.4, 1.1, 0.0));
}

#[test]
fn lights_and_camera_defaults() {
    let lights = scene_lights();
    assert_eq!(lights[0].kind, LightKind::Ambient);
    assert!(lights[0].position.is_none());
    assert_eq!(lights[1].intensity, 1.2);
    let cam = CameraSpec::default();
    assert_eq!(cam.eye, glam::Vec3::new(6.0, 4.0, 8.0));
    assert_eq!(cam.target, glam::Vec3::ZERO);
    assert_eq!(cam.fovy_degrees, 45.0);
}

struct Refusing;

impl SubmissionSink for Refusing {
    fn submit(&self, _fields: &[(String, String)]) -> SiteResult<()> {
        Err(SiteError::Submission("offline".into()))
    }
}

#[test]
fn acknowledge_only_confirms_and_clears() {
    let fields = vec![("name".to_string(), "Ada".to_string())];
    let result = AcknowledgeOnly.submit(&fields);
    assert_eq!(
        outcome_notice(&result),
        ("Thank you! Your message has been received.", true)
    );
}

#[test]
fn failed_submission_keeps_the_form() {
    let result = Refusing.submit(&[]);
    let (notice, clear) = outcome_notice(&result);
    assert_eq!(notice, CONTACT_FAILURE);
    assert!(!clear);
}
