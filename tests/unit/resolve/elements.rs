use super::*;
use crate::scene::model::{
    CodeElement, HAlign, ImageElement, LogoElement, LogoOverlay, TextOverlay, VAlign,
};

fn kinds(items: &[RenderItem]) -> Vec<(&'static str, Layer, usize)> {
    items
        .iter()
        .map(|i| {
            let k = match i.kind {
                RenderKind::Code { .. } => "code",
                RenderKind::Logo { .. } => "logo",
                RenderKind::Image { .. } => "image",
                RenderKind::Caption { .. } => "caption",
                RenderKind::Text { .. } => "text",
            };
            (k, i.layer, i.owner)
        })
        .collect()
}

#[test]
fn overlays_follow_all_primary_elements() {
    let elements = vec![
        VisualElement::Logo(LogoElement::default()),
        VisualElement::Code(CodeElement {
            content: "let x = 1;".to_string(),
            overlays: vec![
                Overlay::Text(TextOverlay {
                    content: "note".to_string(),
                    style: TextStyle::default(),
                }),
                Overlay::Logo(LogoOverlay {
                    name: Some("rust".to_string()),
                    ..LogoOverlay::default()
                }),
            ],
            ..CodeElement::default()
        }),
    ];

    let items = resolve_render_order(&elements);
    assert_eq!(
        kinds(&items),
        vec![
            ("logo", Layer::Primary, 0),
            ("code", Layer::Primary, 1),
            ("text", Layer::Overlay, 1),
            ("logo", Layer::Overlay, 1),
        ]
    );
}

#[test]
fn overlays_of_earlier_elements_still_draw_after_later_primaries() {
    let elements = vec![
        VisualElement::Image(ImageElement {
            image_url: Some("a.png".to_string()),
            prompt: None,
            overlays: vec![Overlay::Text(TextOverlay::default())],
        }),
        VisualElement::Logo(LogoElement::default()),
    ];
    let items = resolve_render_order(&elements);
    assert_eq!(
        kinds(&items),
        vec![
            ("image", Layer::Primary, 0),
            ("logo", Layer::Primary, 1),
            ("text", Layer::Overlay, 0),
        ]
    );
}

#[test]
fn logo_defaults_apply() {
    let items = resolve_render_order(&[VisualElement::Logo(LogoElement::default())]);
    assert_eq!(
        items[0].kind,
        RenderKind::Logo {
            name: "defaultName".to_string(),
            position: Position {
                x: HAlign::Left,
                y: VAlign::Top,
            },
            size: Size::Medium,
        }
    );
}

#[test]
fn overlay_logo_gets_same_defaults() {
    let el = VisualElement::Code(CodeElement {
        overlays: vec![Overlay::Logo(LogoOverlay::default())],
        ..CodeElement::default()
    });
    let items = resolve_render_order(&[el]);
    assert!(matches!(
        &items[1].kind,
        RenderKind::Logo { name, size: Size::Medium, .. } if name == DEFAULT_LOGO_NAME
    ));
}

#[test]
fn code_defaults_and_typing_flag() {
    let plain = VisualElement::Code(CodeElement {
        content: "print(1)".to_string(),
        ..CodeElement::default()
    });
    let typed = VisualElement::Code(CodeElement {
        content: "print(2)".to_string(),
        language: Some("python".to_string()),
        animation: Some("typing".to_string()),
        highlight_lines: vec![1],
        ..CodeElement::default()
    });
    let items = resolve_render_order(&[plain, typed]);
    assert_eq!(
        items[0].kind,
        RenderKind::Code {
            content: "print(1)".to_string(),
            language: "javascript".to_string(),
            typing: false,
            highlight_lines: vec![],
        }
    );
    assert!(matches!(
        &items[1].kind,
        RenderKind::Code { language, typing: true, .. } if language == "python"
    ));
}

#[test]
fn image_without_url_degrades_to_caption() {
    let missing = VisualElement::Image(ImageElement {
        prompt: Some("a lighthouse at dusk".to_string()),
        ..ImageElement::default()
    });
    let empty = VisualElement::Image(ImageElement {
        image_url: Some(String::new()),
        ..ImageElement::default()
    });
    let items = resolve_render_order(&[missing, empty]);
    assert_eq!(
        items[0].kind,
        RenderKind::Caption {
            prompt: "a lighthouse at dusk".to_string()
        }
    );
    assert_eq!(
        items[1].kind,
        RenderKind::Caption {
            prompt: String::new()
        }
    );
}

#[test]
fn unknown_kinds_are_dropped() {
    let elements = vec![
        VisualElement::Unknown,
        VisualElement::Code(CodeElement {
            overlays: vec![Overlay::Unknown, Overlay::Text(TextOverlay::default())],
            ..CodeElement::default()
        }),
    ];
    let items = resolve_render_order(&elements);
    assert_eq!(
        kinds(&items),
        vec![("code", Layer::Primary, 1), ("text", Layer::Overlay, 1)]
    );
}

#[test]
fn unsupported_type_from_json_yields_nothing() {
    let elements: Vec<VisualElement> =
        serde_json::from_str(r#"[{ "type": "unsupported", "content": "x" }]"#).unwrap();
    assert!(resolve_render_order(&elements).is_empty());
}
