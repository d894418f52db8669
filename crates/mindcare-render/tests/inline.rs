use mindcare_render::InlineRun;
use mindcare_render::inline::parse_inline;

#[test]
fn no_markers_is_one_plain_run() {
    assert_eq!(parse_inline("just text"), vec![InlineRun::plain("just text")]);
}

#[test]
fn empty_text_has_no_runs() {
    assert!(parse_inline("").is_empty());
}

#[test]
fn several_bold_spans() {
    assert_eq!(
        parse_inline("**a** and **b**!"),
        vec![
            InlineRun::bold("a"),
            InlineRun::plain(" and "),
            InlineRun::bold("b"),
            InlineRun::plain("!"),
        ]
    );
}

#[test]
fn unterminated_marker_is_literal() {
    assert_eq!(
        parse_inline("keep **going"),
        vec![InlineRun::plain("keep **going")]
    );
}

#[test]
fn unpaired_marker_after_a_pair_is_literal() {
    assert_eq!(
        parse_inline("**done** then **open"),
        vec![InlineRun::bold("done"), InlineRun::plain(" then **open")]
    );
}

#[test]
fn empty_pair_stays_literal() {
    assert_eq!(parse_inline("****"), vec![InlineRun::plain("****")]);
    assert_eq!(
        parse_inline("****x**"),
        vec![InlineRun::plain("**"), InlineRun::bold("x")]
    );
}

#[test]
fn single_asterisk_inside_bold_is_kept() {
    assert_eq!(parse_inline("**a*b**"), vec![InlineRun::bold("a*b")]);
}
