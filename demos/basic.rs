//! Basic usage example for rs-readermode.
//!
//! Run with: `cargo run --example basic`

use rs_readermode::{dom, extract, Extractor, Options, ReaderEvent, ReadingSession};

fn main() -> Result<(), rs_readermode::Error> {
    let html = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Example Article - My Blog</title>
        </head>
        <body>
            <nav>
                <a href="/">Home</a>
                <a href="/about">About</a>
                <a href="/contact">Contact</a>
            </nav>

            <article class="post" onclick="track()">
                <h1>Example Article Title</h1>

                <p style="font-size: 18px">This is the first paragraph of the article. It
                contains meaningful content that shows how the reading view keeps the
                article text while leaving navigation and sidebars behind.</p>

                <div class="share-buttons"><a href="https://social.example/share">Share</a></div>

                <p>The second paragraph continues with more content. Notice how inline
                styles and event handlers disappear from the sanitized copy.</p>

                <img data-src="/images/chart.png">

                <p>A third paragraph links to <a href="/more" class="inline">more reading</a>.</p>
            </article>

            <aside>
                <h3>Related Posts</h3>
                <ul>
                    <li>Another article</li>
                    <li>Yet another article</li>
                </ul>
            </aside>

            <footer>
                <p>© 2024 My Blog. All rights reserved.</p>
            </footer>
        </body>
        </html>
    "#;

    // Simple extraction with defaults
    println!("=== Simple Extraction ===\n");
    let result = extract(html)?;
    println!("Stage: {}", result.stage);
    println!("Title: {:?}", result.title);
    println!("Words: {} (~{} min)", result.word_count, result.reading_minutes);
    println!("\n{}\n", result.fragment.html());

    // Reusable extractor with a base URL for links and images
    println!("=== With Base URL ===\n");
    let extractor = Extractor::new(Options {
        base_url: Some("https://blog.example/posts/example".to_string()),
        ..Options::default()
    })?;
    let result = extractor.extract_html(html)?;
    for attrs in result.fragment.attributes_of("a, img") {
        println!("{attrs:?}");
    }

    // Reading session with an observer
    println!("\n=== Reading Session ===\n");
    let mut session = ReadingSession::new(extractor);
    session.subscribe(|event: &ReaderEvent| println!("event: {event:?}"));

    let doc = dom::parse(html);
    session.toggle(&doc)?;
    session.toggle(&doc)?;

    Ok(())
}
