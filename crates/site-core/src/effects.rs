//! Declarative descriptors for the animation-timeline library.
//!
//! Each function returns plain data that serializes to the vars object the
//! library expects (`clipPath`, `scrollTrigger`, `toggleActions`, ...). The
//! web bridge converts them to JS objects and attaches element triggers where
//! a selector is not enough.

use crate::constants::{
    COUNTER_DURATION_SEC, COUNTER_TRIGGER, COUNTER_TRIGGER_START, SHUTTER_DURATION_SEC,
    SHUTTER_IMAGE_SCALE, SHUTTER_TOGGLE_ACTIONS, SHUTTER_TRIGGER_END, SHUTTER_TRIGGER_START,
};
use serde::Serialize;

pub const HERO_TEXT_SELECTOR: &str = ".hero-text > *";
pub const HERO_IMAGE_POSITION: &str = "-=1.5";

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerSpec {
    /// Selector for the trigger element; `None` means the bridge supplies the element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<&'static str>,
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_actions: Option<&'static str>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub val: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTriggerSpec>,
}

/// A `fromTo` pair sharing one scroll trigger on the `to` side.
#[derive(Clone, Debug, PartialEq)]
pub struct FromTo {
    pub from: TweenVars,
    pub to: TweenVars,
}

pub fn hero_entrance() -> TweenVars {
    TweenVars {
        y: Some(30.0),
        opacity: Some(0.0),
        stagger: Some(0.2),
        duration: Some(1.0),
        ease: Some("power3.out"),
        ..Default::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    pub id: &'static str,
    pub target: f64,
}

pub const IMPACT_COUNTERS: [Counter; 4] = [
    Counter { id: "stat1", target: 0.0 },
    Counter { id: "stat2", target: 50.0 },
    Counter { id: "stat3", target: 2.0 },
    Counter { id: "stat4", target: 15.0 },
];

impl Counter {
    pub fn suffix(&self) -> &'static str {
        if self.id == "stat3" {
            "M+"
        } else {
            "+"
        }
    }

    /// Text written into the counter element for an in-flight tween value.
    pub fn text(&self, value: f64) -> String {
        format!("{}{}", value.floor() as i64, self.suffix())
    }

    pub fn tween(&self) -> TweenVars {
        TweenVars {
            val: Some(self.target),
            duration: Some(COUNTER_DURATION_SEC),
            scroll_trigger: Some(ScrollTriggerSpec {
                trigger: Some(COUNTER_TRIGGER),
                start: COUNTER_TRIGGER_START,
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// First step of the hero timeline: the shutter opens from a center slit.
pub fn hero_shutter_open() -> TweenVars {
    TweenVars {
        clip_path: Some("inset(0% 50% 0% 50%)"),
        duration: Some(1.8),
        ease: Some("expo.inOut"),
        ..Default::default()
    }
}

/// Second step, overlapping the first by [`HERO_IMAGE_POSITION`].
pub fn hero_image_settle() -> TweenVars {
    TweenVars {
        scale: Some(1.4),
        duration: Some(2.0),
        ease: Some("expo.out"),
        ..Default::default()
    }
}

fn shutter_trigger() -> ScrollTriggerSpec {
    ScrollTriggerSpec {
        trigger: None,
        start: SHUTTER_TRIGGER_START,
        end: Some(SHUTTER_TRIGGER_END),
        toggle_actions: Some(SHUTTER_TOGGLE_ACTIONS),
    }
}

pub fn shutter_clip() -> FromTo {
    FromTo {
        from: TweenVars {
            clip_path: Some("inset(100% 0% 0% 0%)"),
            ..Default::default()
        },
        to: TweenVars {
            clip_path: Some("inset(0% 0% 0% 0%)"),
            duration: Some(SHUTTER_DURATION_SEC),
            ease: Some("power4.inOut"),
            scroll_trigger: Some(shutter_trigger()),
            ..Default::default()
        },
    }
}

pub fn shutter_image() -> FromTo {
    FromTo {
        from: TweenVars {
            scale: Some(SHUTTER_IMAGE_SCALE),
            ..Default::default()
        },
        to: TweenVars {
            scale: Some(1.0),
            duration: Some(SHUTTER_DURATION_SEC),
            ease: Some("power4.inOut"),
            scroll_trigger: Some(shutter_trigger()),
            ..Default::default()
        },
    }
}
