use crate::document::*;
use crate::*;

const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
  <path d="M12 2 L22 12 L12 22 L2 12 Z"/>
  <path stroke-linecap="round" d='M8 12 h8'/>
</svg>"#;

#[test]
fn detects_document_input() {
    assert!(is_document("  \n<svg></svg>"));
    assert!(!is_document("M0 0 L1 1"));
    assert!(!is_document(""));
}

#[test]
fn extracts_path_data_in_order_with_either_quote() {
    assert_eq!(
        path_data(ICON),
        vec!["M12 2 L22 12 L12 22 L2 12 Z".to_string(), "M8 12 h8".to_string()]
    );
}

#[test]
fn path_without_whitespace_before_d_is_skipped() {
    assert!(path_data(r#"<path d="M0 0"/>"#).len() == 1);
    assert!(path_data(r#"<pathd="M0 0"/>"#).is_empty());
    assert!(path_data(r#"<path data-d="M0 0"/>"#).is_empty());
}

#[test]
fn view_box_wins_over_width_and_height() {
    assert_eq!(
        intrinsic_size(ICON),
        Some(IntrinsicSize {
            width: 24.0,
            height: 24.0
        })
    );
}

#[test]
fn view_box_accepts_commas_and_padding() {
    assert_eq!(
        intrinsic_size(r#"<svg viewBox=" 0,0, 32 16 ">"#),
        Some(IntrinsicSize {
            width: 32.0,
            height: 16.0
        })
    );
}

#[test]
fn unparseable_view_box_falls_back_to_width_and_height() {
    let doc = r#"<svg viewBox="0 0 auto" width="10.5" height="20">"#;
    assert_eq!(
        intrinsic_size(doc),
        Some(IntrinsicSize {
            width: 10.5,
            height: 20.0
        })
    );
}

#[test]
fn stroke_width_is_not_mistaken_for_width() {
    let doc = r#"<svg stroke-width="3" height="20"><path d="M0 0"/></svg>"#;
    assert_eq!(intrinsic_size(doc), None);
}

#[test]
fn size_needs_both_dimensions() {
    assert_eq!(intrinsic_size(r#"<svg width="10">"#), None);
    assert_eq!(intrinsic_size(r#"<svg width="10px" height="10px">"#), None);
}

#[test]
fn style_classification() {
    let cases = [
        (r#"<svg><path d="M0 0"/></svg>"#, PaintStyle::Fill),
        (r#"<svg fill="red"><path d="M0 0"/></svg>"#, PaintStyle::Fill),
        (r#"<svg stroke="none" fill="red">"#, PaintStyle::Fill),
        (r#"<svg fill="none" stroke="black">"#, PaintStyle::Stroke),
        (r#"<svg stroke="black">"#, PaintStyle::Both),
        (r#"<svg fill="none" stroke="black"><path fill="red"/>"#, PaintStyle::Both),
        (r#"<svg FILL='NONE' STROKE='#000'>"#, PaintStyle::Stroke),
    ];
    for (doc, expected) in cases {
        assert_eq!(detect_style(doc), expected, "{doc}");
    }
}

#[test]
fn stroke_width_reads_leading_number() {
    assert_eq!(stroke_width(ICON), Some(2.0));
    assert_eq!(stroke_width(r#"<svg stroke-width="1.25px">"#), Some(1.25));
    assert_eq!(stroke_width(r#"<svg stroke-width=".5">"#), Some(0.5));
    assert_eq!(stroke_width(r#"<svg stroke-width="thin">"#), None);
    assert_eq!(stroke_width("<svg>"), None);
}

#[test]
fn raw_path_input_is_a_single_stroked_path() {
    let source = SvgSource::from_input("M0 0 L10 10");
    assert_eq!(source.paths, vec!["M0 0 L10 10".to_string()]);
    assert_eq!(source.style, PaintStyle::Stroke);
    assert_eq!(source.intrinsic_size, None);
    assert_eq!(source.size_or_default(), IntrinsicSize::DEFAULT);
}

#[test]
fn document_input_is_scanned() {
    let source = SvgSource::from_input(ICON);
    assert_eq!(source.paths.len(), 2);
    assert_eq!(source.style, PaintStyle::Stroke);
    assert_eq!(source.stroke_width, Some(2.0));
}
