use furiganify::{
    ConvertOptions, DocumentKind, EditableBlock, Error, Grammar, MemoryBlock, MemoryDocument,
    RubyParagraph, Scanner, convert_document,
    render::{AozoraRenderer, HtmlRenderer, render_document},
};

fn paragraph(text: &str) -> MemoryBlock {
    MemoryBlock::Paragraph(RubyParagraph::new(text))
}

fn paragraph_texts(document: &MemoryDocument) -> Vec<String> {
    document.paragraphs().map(|p| p.text()).collect()
}

#[test]
fn converts_every_paragraph() {
    let mut document = MemoryDocument::from_text(
        "彼（かれ）は学校（がっこう）に行く\n\
         今日は晴れ\n\
         日本(にほん)の首都（しゅと）",
    );

    let report = convert_document(&mut document, &ConvertOptions::default()).unwrap();

    assert_eq!(
        paragraph_texts(&document),
        vec!["彼は学校に行く", "今日は晴れ", "日本の首都"]
    );
    assert_eq!(report.blocks_visited, 3);
    assert_eq!(report.matches_converted, 4);
    assert_eq!(report.matches_skipped, 0);
    assert!(document.is_focused());
}

#[test]
fn each_match_leaves_one_ruby_region_and_no_brackets() {
    let text = "一（いち）、二（に）、三（さん）";
    let mut document = MemoryDocument::from_text(text);

    convert_document(&mut document, &ConvertOptions::default()).unwrap();

    let converted = document.paragraphs().next().unwrap();
    assert_eq!(converted.text(), "一、二、三");
    assert_eq!(converted.ruby().len(), 3);
    assert!(Scanner::default().scan(&converted.text()).is_empty());
}

#[test]
fn text_around_matches_is_unchanged() {
    let mut document = MemoryDocument::from_text("「彼（かれ）」は学校（がっこう）に行く。");

    convert_document(&mut document, &ConvertOptions::default()).unwrap();

    let converted = document.paragraphs().next().unwrap();
    let ruby = converted.ruby();

    assert_eq!(converted.text(), "「彼」は学校に行く。");
    assert_eq!(ruby.len(), 2);
    assert_eq!((ruby[0].range.clone(), ruby[0].text.as_str()), (1..2, "かれ"));
    assert_eq!((ruby[1].range.clone(), ruby[1].text.as_str()), (4..6, "がっこう"));
}

#[test]
fn second_pass_is_a_no_op() {
    let mut document = MemoryDocument::from_text("東京（とうきょう）へ行（い）く");

    convert_document(&mut document, &ConvertOptions::default()).unwrap();
    let once = document.clone();
    let report = convert_document(&mut document, &ConvertOptions::default()).unwrap();

    assert_eq!(report.matches_converted, 0);
    assert_eq!(document, once);
}

#[test]
fn non_text_document_is_rejected_before_any_edit() {
    let mut document = MemoryDocument::new(
        DocumentKind::Spreadsheet,
        vec![paragraph("漢字（かんじ）")],
    );

    let err = convert_document(&mut document, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedDocument {
            kind: DocumentKind::Spreadsheet
        }
    ));
    assert_eq!(paragraph_texts(&document), vec!["漢字（かんじ）"]);
    assert!(!document.is_focused());
}

#[test]
fn tables_are_skipped() {
    let mut document = MemoryDocument::new(
        DocumentKind::Text,
        vec![
            MemoryBlock::Table(vec!["表（ひょう）".to_string()]),
            paragraph("字（じ）"),
        ],
    );

    let report = convert_document(&mut document, &ConvertOptions::default()).unwrap();

    assert_eq!(report.blocks_skipped, 1);
    assert_eq!(report.blocks_visited, 1);
    assert_eq!(
        document.blocks()[0],
        MemoryBlock::Table(vec!["表（ひょう）".to_string()])
    );
    assert_eq!(paragraph_texts(&document), vec!["字"]);
}

#[test]
fn read_only_block_stops_the_run_but_keeps_earlier_edits() {
    let mut document = MemoryDocument::new(
        DocumentKind::Text,
        vec![
            paragraph("前（まえ）"),
            MemoryBlock::ReadOnly("中（なか）".to_string()),
            paragraph("後（あと）"),
        ],
    );

    let err = convert_document(&mut document, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, Error::CapabilityMissing { index: 1, .. }));
    assert_eq!(paragraph_texts(&document), vec!["前", "後（あと）"]);
}

#[test]
fn strict_grammar_reaches_every_kanji_run() {
    let mut document = MemoryDocument::from_text("お取り扱い（おとりあつかい）");
    let options = ConvertOptions {
        grammar: Grammar::Strict,
        ..ConvertOptions::default()
    };

    convert_document(&mut document, &options).unwrap();

    let converted = document.paragraphs().next().unwrap();
    assert_eq!(converted.text(), "お取り扱い");

    let joined: String = converted.ruby().iter().map(|r| r.text.as_str()).collect();
    assert!("おとりあつかい".starts_with(&joined));
    assert_eq!(converted.ruby()[0].range, 1..2);
}

#[test]
fn renders_converted_document() {
    let mut document = MemoryDocument::from_text("学校（がっこう）に行く");

    convert_document(&mut document, &ConvertOptions::default()).unwrap();

    assert_eq!(
        render_document(&document, &AozoraRenderer),
        "｜学校《がっこう》に行く\n"
    );
    assert_eq!(
        render_document(&document, &HtmlRenderer),
        "<p><ruby>学校<rp>（</rp><rt>がっこう</rt><rp>）</rp></ruby>に行く</p>\n"
    );
}
