use ipedraw_core::shapes::escape_text;
use ipedraw_core::{
    Color, DocumentBuilder, IpeDocument, MarkShape, MarkStyle, Pen, PointSequence, StrokeStyle,
    TextLabel, TextSize, point,
};

fn parse(doc: &IpeDocument) -> roxmltree::Document<'_> {
    let mut opts = roxmltree::ParsingOptions::default();
    opts.allow_dtd = true;
    roxmltree::Document::parse_with_options(doc.as_str(), opts).expect("well-formed ipe xml")
}

fn sample_document() -> IpeDocument {
    let points = PointSequence::from_coords(&[0, 50, 100], &[0, 80, 0]).expect("points");
    let style = StrokeStyle::new().with_color(Color::Navy).with_pen(Pen::Fat);

    let mut doc = DocumentBuilder::start();
    doc.rectangle(point(10, 10), point(90, 60), &style)
        .path(&points, &StrokeStyle::default())
        .edge(point(0, 0), point(100, 100), &style)
        .mark(point(50, 50), &MarkStyle::new().with_shape(MarkShape::Square));
    doc.circle(point(200, 200), 12.5, &style).expect("circle");
    doc.new_page();
    doc.circular_arc(point(0, 0), point(30, 40), point(-40, 30), &style)
        .semicircle(point(0, 0), point(64, 0), &style)
        .spline(&points, &style)
        .splinegon(&points, &style)
        .label(
            &TextLabel::new(escape_text("a < b & c").into_owned(), point(5, 5))
                .with_color(Color::DarkRed)
                .with_size(TextSize::Huge2),
        )
        .label(&TextLabel::new("small print", point(5, 20)).with_size(TextSize::Huge));
    doc.close()
}

#[test]
fn minimal_document_is_well_formed_with_one_page() {
    let doc = DocumentBuilder::start().close();
    let xml = parse(&doc);
    let root = xml.root_element();
    assert_eq!(root.tag_name().name(), "ipe");
    assert_eq!(root.attribute("version"), Some("70005"));

    let pages: Vec<_> = root.children().filter(|n| n.has_tag_name("page")).collect();
    assert_eq!(pages.len(), 1);
    assert!(pages[0].children().any(|n| n.has_tag_name("layer")));
}

#[test]
fn every_page_gets_the_alpha_layer_and_view() {
    let mut doc = DocumentBuilder::start();
    doc.new_page().new_page();
    let doc = doc.close();
    let xml = parse(&doc);

    let pages: Vec<_> = xml
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("page"))
        .collect();
    assert_eq!(pages.len(), 3);
    for page in pages {
        let layer = page
            .children()
            .find(|n| n.has_tag_name("layer"))
            .expect("layer");
        assert_eq!(layer.attribute("name"), Some("alpha"));
        let view = page.children().find(|n| n.has_tag_name("view")).expect("view");
        assert_eq!(view.attribute("layers"), Some("alpha"));
        assert_eq!(view.attribute("active"), Some("alpha"));
    }
}

#[test]
fn shapes_land_on_the_page_they_were_added_to() {
    let doc = sample_document();
    assert_eq!(doc.page_count(), 2);
    let xml = parse(&doc);

    let pages: Vec<_> = xml
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("page"))
        .collect();
    let count = |page: &roxmltree::Node<'_, '_>, tag: &str| {
        page.children().filter(|n| n.has_tag_name(tag)).count()
    };
    assert_eq!(count(&pages[0], "path"), 4);
    assert_eq!(count(&pages[0], "use"), 1);
    assert_eq!(count(&pages[1], "path"), 4);
    assert_eq!(count(&pages[1], "text"), 2);

    let labels: Vec<_> = pages[1]
        .children()
        .filter(|n| n.has_tag_name("text"))
        .collect();
    assert_eq!(labels[0].text(), Some("a < b & c"));
    assert_eq!(labels[0].attribute("stroke"), Some("darkred"));
    assert_eq!(labels[0].attribute("size"), Some("Huge"));
    assert_eq!(labels[1].text(), Some("small print"));
    assert_eq!(labels[1].attribute("size"), Some("huge"));
}

#[test]
fn path_data_survives_parsing() {
    let doc = sample_document();
    let xml = parse(&doc);
    let circle = xml
        .descendants()
        .filter(|n| n.has_tag_name("page"))
        .flat_map(|page| page.children())
        .filter(|n| n.has_tag_name("path"))
        .find(|n| n.text().is_some_and(|t| t.trim_end().ends_with(" e")))
        .expect("circle path");
    assert_eq!(circle.text(), Some("\n 12.500 0 0 12.500 200 200 e\n"));
    assert_eq!(circle.attribute("stroke"), Some("navy"));
    assert_eq!(circle.attribute("pen"), Some("fat"));
    assert_eq!(circle.attribute("dash"), Some("normal"));
}
