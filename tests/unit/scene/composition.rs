use super::*;
use crate::animation::ease::Ease;
use crate::foundation::core::Fps;
use crate::resolve::elements::Layer;
use crate::timing::scheduler::Placement;

const TWO_SCENES: &str = r#"{
  "scenes": [
    { "timing": "0-2", "script": "a" },
    { "timing": "1-4", "script": "b",
      "visual_elements": [ { "type": "logo" }, { "type": "code", "content": "x", "overlays": [ { "type": "text" } ] } ] }
  ]
}"#;

#[test]
fn builds_timeline_and_render_order() {
    let c = Composition::from_json_str(TWO_SCENES, RenderOpts::default()).unwrap();
    assert_eq!(c.duration_frames(), 120);
    assert_eq!(c.timeline().windows.len(), 2);
    assert_eq!(c.render_items(0).unwrap().len(), 0);
    let layers: Vec<Layer> = c.render_items(1).unwrap().iter().map(|i| i.layer).collect();
    assert_eq!(layers, vec![Layer::Primary, Layer::Primary, Layer::Overlay]);
    assert!(c.render_items(2).is_none());
}

#[test]
fn opts_flow_into_the_timeline() {
    let opts = RenderOpts {
        fps: Fps::new(60, 1).unwrap(),
        placement: Placement::Series,
        ..RenderOpts::default()
    };
    let c = Composition::from_json_str(TWO_SCENES, opts).unwrap();
    assert_eq!(c.timeline().fps.num, 60);
    assert_eq!(c.duration_frames(), 120 + 180);
}

#[test]
fn malformed_timing_fails_at_build() {
    let doc = r#"{ "scenes": [ { "timing": "5" } ] }"#;
    let err = Composition::from_json_str(doc, RenderOpts::default()).unwrap_err();
    assert!(matches!(err, ReelError::MalformedTimingSpec { .. }));
}

#[test]
fn reversed_timing_fails_at_build() {
    let doc = r#"{ "scenes": [ { "timing": "5-3" } ] }"#;
    let err = Composition::from_json_str(doc, RenderOpts::default()).unwrap_err();
    assert!(matches!(err, ReelError::InvalidSceneDuration { scene_index: 0, .. }));
}

#[test]
fn empty_document_is_rejected() {
    let err = Composition::from_json_str(r#"{ "scenes": [] }"#, RenderOpts::default()).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = Composition::from_json_str("{ nope", RenderOpts::default()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn invalid_opts_are_rejected() {
    let opts = RenderOpts {
        fps: Fps { num: 30, den: 0 },
        ..RenderOpts::default()
    };
    assert!(Composition::from_json_str(TWO_SCENES, opts).is_err());

    let opts = RenderOpts {
        canvas: crate::foundation::core::Canvas {
            width: 0,
            height: 10,
        },
        ..RenderOpts::default()
    };
    assert!(Composition::from_json_str(TWO_SCENES, opts).is_err());
}

#[test]
fn opts_json_fills_defaults() {
    let opts: RenderOpts = serde_json::from_str(r#"{ "fade_frames": 5 }"#).unwrap();
    assert_eq!(opts.fade_frames, 5);
    assert_eq!(opts.fps, Fps::default());
    assert_eq!(opts.entrance_frames, 30);
    assert_eq!(opts.fade_ease, Ease::Linear);
    assert_eq!(opts.entrance_ease, Ease::EaseOut);

    let opts: RenderOpts = serde_json::from_str(r#"{ "entrance_ease": "ease_in_out" }"#).unwrap();
    assert_eq!(opts.entrance_ease, Ease::EaseInOut);
}
