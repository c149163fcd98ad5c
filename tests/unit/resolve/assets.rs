use super::*;

fn resolver() -> AssetResolver {
    AssetResolver::new(
        "http://localhost:9000/assets/",
        "https://abrudz.github.io/logos/",
    )
}

#[test]
fn asset_paths_are_prefixed() {
    assert_eq!(
        resolver().asset_url("scene_1.mp3"),
        "http://localhost:9000/assets/scene_1.mp3"
    );
    assert_eq!(
        resolver().asset_url("/img/a.png"),
        "http://localhost:9000/assets/img/a.png"
    );
}

#[test]
fn empty_path_stays_empty() {
    assert_eq!(resolver().asset_url(""), "");
}

#[test]
fn base_without_trailing_slash_still_joins() {
    let r = AssetResolver::new("http://cdn.example/a", "http://cdn.example/logos");
    assert_eq!(r.asset_url("x.png"), "http://cdn.example/a/x.png");
    assert_eq!(r.logo_url("rust"), "http://cdn.example/logos/rust.svg");
}

#[test]
fn logo_urls_point_at_svg() {
    assert_eq!(
        resolver().logo_url("python"),
        "https://abrudz.github.io/logos/python.svg"
    );
}
