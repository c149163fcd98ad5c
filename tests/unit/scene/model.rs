use super::*;

#[test]
fn scene_optional_fields_default() {
    let scene: Scene = serde_json::from_str(r#"{ "timing": "0-5" }"#).unwrap();
    assert_eq!(scene.timing, "0-5");
    assert!(scene.script.is_empty());
    assert!(scene.script_audio.is_none());
    assert!(scene.visual_elements.is_empty());
}

#[test]
fn elements_dispatch_on_type_tag() {
    let json = r#"[
        { "type": "code", "language": "rust", "content": "fn main() {}", "animation": "typing",
          "highlight_lines": [1] },
        { "type": "logo", "name": "rust", "position": { "x": "right", "y": "bottom" }, "size": "large" },
        { "type": "image", "image_url": "scene1.png", "prompt": "a crab" },
        { "type": "hologram", "content": "?" }
    ]"#;
    let els: Vec<VisualElement> = serde_json::from_str(json).unwrap();
    assert!(matches!(&els[0], VisualElement::Code(c) if c.language.as_deref() == Some("rust")));
    match &els[1] {
        VisualElement::Logo(l) => {
            assert_eq!(
                l.position,
                Some(Position {
                    x: HAlign::Right,
                    y: VAlign::Bottom
                })
            );
            assert_eq!(l.size, Some(Size::Large));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(&els[2], VisualElement::Image(i) if i.image_url.as_deref() == Some("scene1.png")));
    assert!(matches!(els[3], VisualElement::Unknown));
}

#[test]
fn overlays_parse_with_unknown_fallback() {
    let json = r#"{
        "type": "code",
        "content": "x",
        "overlays": [
            { "type": "text", "content": "Hi",
              "style": { "position": { "x": "left", "y": "middle" }, "font_size": "large", "emphasis": "bold" } },
            { "type": "logo", "name": "python" },
            { "type": "sparkles" }
        ]
    }"#;
    let el: VisualElement = serde_json::from_str(json).unwrap();
    let overlays = el.overlays();
    assert_eq!(overlays.len(), 3);
    match &overlays[0] {
        Overlay::Text(t) => {
            assert_eq!(t.content, "Hi");
            assert_eq!(t.style.font_size, FontSize::Large);
            assert_eq!(t.style.emphasis, Emphasis::Bold);
            assert_eq!(t.style.position.y, VAlign::Middle);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(&overlays[1], Overlay::Logo(l) if l.name.as_deref() == Some("python")));
    assert!(matches!(overlays[2], Overlay::Unknown));
}

#[test]
fn partial_position_fills_missing_axis() {
    let p: Position = serde_json::from_str(r#"{ "y": "bottom" }"#).unwrap();
    assert_eq!(p.x, HAlign::Left);
    assert_eq!(p.y, VAlign::Bottom);
}

#[test]
fn size_classes_map_to_pixels() {
    assert_eq!(Size::default(), Size::Medium);
    assert!(Size::Small.px() < Size::Medium.px());
    assert!(Size::Medium.px() < Size::Large.px());
    assert_eq!(FontSize::default().px(), 24.0);
}
