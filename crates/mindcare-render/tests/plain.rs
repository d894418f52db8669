use mindcare_render::plain::to_plain_text;
use mindcare_render::render;

#[test]
fn plain_text_layout() {
    let blocks = render("Try this:\n- **breathe**\n- walk\n\n3. rest\n4. repeat");
    assert_eq!(
        to_plain_text(&blocks, "*", "*"),
        "Try this:\n\n\u{2022} *breathe*\n\u{2022} walk\n\n1. rest\n2. repeat"
    );
}

#[test]
fn emphasis_can_be_dropped() {
    let blocks = render("**Hi** there");
    assert_eq!(to_plain_text(&blocks, "", ""), "Hi there");
}
