use crate::document::{end, new_page, preamble, style_sheet};
use crate::style::{Color, Dash, MarkShape, Pen, TextSize};

#[test]
fn preamble_is_the_ipe_7_1_4_header() {
    let text = preamble();
    assert_eq!(text.len(), 224);
    assert!(text.starts_with("<?xml version=\"1.0\"?>\n    <!DOCTYPE ipe SYSTEM \"ipe.dtd\">\n"));
    assert!(text.contains(r#"<ipe version="70005" creator="Ipe 7.1.4">"#));
    assert!(text.contains(r#"<info created="D:20131106154934" modified="D:20131106160041"/>"#));
    assert!(text.ends_with("    <preamble>\\usepackage[english]{babel}</preamble>\n"));
}

#[test]
fn style_sheet_is_byte_stable() {
    let text = style_sheet();
    assert_eq!(text.len(), 6602);
    assert_eq!(text.lines().count(), 231);
    assert!(text.starts_with("    <ipestyle name=\"basic\">\n"));
    assert!(text.ends_with(
        "    </ipestyle>\n    <page>\n    <layer name=\"alpha\"/>\n    <view layers=\"alpha\" active=\"alpha\"/>\n"
    ));
    assert_eq!(text.matches("<symbol ").count(), 15);
}

#[test]
fn style_sheet_defines_every_named_token() {
    let text = style_sheet();
    for color in Color::ALL.iter().filter(|c| **c != Color::Black) {
        assert!(
            text.contains(&format!(r#"<color name="{color}" "#)),
            "missing color {color}"
        );
    }
    for pen in Pen::ALL.iter().filter(|p| **p != Pen::Normal) {
        assert!(text.contains(&format!(r#"<pen name="{pen}" "#)), "missing pen {pen}");
    }
    for dash in Dash::ALL.iter().filter(|d| **d != Dash::Normal) {
        assert!(
            text.contains(&format!(r#"<dashstyle name="{dash}" "#)),
            "missing dash {dash}"
        );
    }
    for size in TextSize::ALL.iter().filter(|s| **s != TextSize::Normal) {
        assert!(
            text.contains(&format!(r#"<textsize name="{size}" "#)),
            "missing text size {size}"
        );
    }
    for shape in MarkShape::ALL {
        assert!(
            text.contains(&format!(r#"<symbol name="mark/{shape}("#)),
            "missing mark {shape}"
        );
    }
}

#[test]
fn page_break_reopens_the_alpha_layer() {
    assert_eq!(
        new_page(),
        "</page>\n<page>\n<layer name=\"alpha\"/>\n<view layers=\"alpha\" active=\"alpha\"/>\n"
    );
    assert_eq!(end(), "</page>\n</ipe>\n");
}
