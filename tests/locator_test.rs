use rs_readermode::{dom, Extractor, LocateStage, Options};

fn extractor() -> Extractor {
    Extractor::new(Options::default()).expect("default options")
}

/// `len` characters of plain text.
fn text(len: usize) -> String {
    "x".repeat(len)
}

#[test]
fn selector_priority_follows_list_order_not_document_order() {
    let doc = dom::parse(&format!(
        r#"<body><div class="entry-content">{}</div><main>{}</main><article>{}</article></body>"#,
        text(300),
        text(300),
        text(300)
    ));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::Selector);
    assert_eq!(candidate.tag_name(), "article");
}

#[test]
fn link_heavy_selector_match_is_skipped() {
    let links: String = (0..10).map(|i| format!("<a href=\"/{i}\">{}</a>", text(20))).collect();
    let doc = dom::parse(&format!(
        "<body><article>{links}</article><main><p>{}</p></main></body>",
        text(200)
    ));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::Selector);
    assert_eq!(candidate.tag_name(), "main");
}

#[test]
fn link_ratio_at_limit_is_accepted() {
    // 100 characters of link text out of 200
    let doc = dom::parse(&format!(
        "<body><article><p>{}<a href=\"/x\">{}</a></p></article></body>",
        text(100),
        text(100)
    ));
    let candidate = extractor().locate(&doc).expect("candidate");
    assert_eq!(candidate.tag_name(), "article");
}

#[test]
fn second_match_of_same_selector_is_considered() {
    let doc = dom::parse(&format!(
        r#"<body><article id="teaser">short</article><article id="full">{}</article></body>"#,
        text(150)
    ));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.attribute("id").as_deref(), Some("full"));
}

#[test]
fn density_stage_picks_densest_container() {
    let doc = dom::parse(&format!(
        r#"<body><div id="wrapper"><div id="story"><p>{}</p></div><div id="links"><span>a</span><span>b</span></div></div></body>"#,
        text(400)
    ));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::Density);
    assert_eq!(candidate.attribute("id").as_deref(), Some("story"));
}

#[test]
fn density_ties_go_to_the_first_container() {
    let doc = dom::parse(&format!(
        r#"<body><div id="a"><p>{0}</p></div><div id="b"><p>{0}</p></div></body>"#,
        text(120)
    ));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::Density);
    assert_eq!(candidate.attribute("id").as_deref(), Some("a"));
}

#[test]
fn density_stage_skips_validity_filter() {
    // Short but dense: density 60 with only 60 characters of text.
    let doc = dom::parse(&format!(r#"<body><section><p>{}</p></section></body>"#, text(60)));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::Density);
    assert_eq!(candidate.tag_name(), "section");
}

#[test]
fn density_at_threshold_is_not_enough() {
    // 25 characters in a div with no descendants scores exactly 25.
    let doc = dom::parse(&format!("<body><div>{}</div></body>", text(25)));
    assert!(extractor().locate(&doc).is_none());
}

#[test]
fn largest_block_is_the_fallback() {
    // Spread over many spans: density 10 per descendant. The menu keeps the
    // body as a whole over the link ratio.
    let menu: String = (0..40).map(|i| format!("<a href=\"/{i}\">{}</a>", text(10))).collect();
    let spans: String = (0..20).map(|_| format!("<span>{}</span>", text(10))).collect();
    let doc = dom::parse(&format!("<body><nav>{menu}</nav><div>{spans}</div><p>{}</p></body>", text(120)));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::LargestBlock);
    assert_eq!(candidate.tag_name(), "div");
    assert_eq!(candidate.text_length(), 200);
}

#[test]
fn largest_block_must_be_valid() {
    let links: String = (0..20).map(|i| format!("<a href=\"/{i}\">{}</a>", text(10))).collect();
    let doc = dom::parse(&format!("<body><ul>{links}</ul><p>{}</p></body>", text(110)));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::LargestBlock);
    assert_eq!(candidate.tag_name(), "p");
}

#[test]
fn prose_directly_under_body_is_found() {
    let doc = dom::parse(&format!("<body>{}<span>x</span></body>", text(200)));
    let extractor = extractor();
    let candidate = extractor.locate(&doc).expect("candidate");

    assert_eq!(candidate.stage(), LocateStage::LargestBlock);
    assert_eq!(candidate.tag_name(), "body");

    let fragment = extractor.sanitize(Some(&candidate)).expect("fragment");
    assert_eq!(fragment.tag_name(), "div");
    assert_eq!(fragment.text_length(), 201);
}

#[test]
fn no_candidate_when_nothing_qualifies() {
    let doc = dom::parse("<body><p>Too short to read.</p><ul><li><a href=\"/\">Home</a></li></ul></body>");
    assert!(extractor().locate(&doc).is_none());
}

#[test]
fn locate_leaves_document_unchanged() {
    let html = format!(
        r#"<html><head></head><body><nav class="menu">Menu</nav><article style="x"><p>{}</p><script>s()</script></article></body></html>"#,
        text(150)
    );
    let doc = dom::parse(&html);
    let before = doc.html().to_string();

    let extractor = extractor();
    let candidate = extractor.locate(&doc);
    let fragment = extractor.sanitize(candidate.as_ref()).expect("fragment");

    assert_eq!(fragment.count("script"), 0);
    assert_eq!(doc.html().to_string(), before);
}

#[test]
fn candidate_exposes_read_only_views() {
    let doc = dom::parse(&format!(
        r#"<body><article class="post"><h1>Headline</h1><p>{}</p></article></body>"#,
        text(150)
    ));
    let candidate = extractor().locate(&doc).expect("candidate");

    assert_eq!(candidate.attribute("class").as_deref(), Some("post"));
    assert_eq!(candidate.heading().as_deref(), Some("Headline"));
    assert!(candidate.html().starts_with("<article class=\"post\">"));
    assert_eq!(candidate.text_length(), 158);
}
