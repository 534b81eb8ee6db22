//! The shipped talk: concurrency design in Rust.

mod theme;

use std::rc::Rc;

use cotalk_deck::source::source_file;
use cotalk_deck::tags::{a, br, code, h1, h2, li, p, pre, span, ul};
use cotalk_deck::{
    AssetSource, Deck, DocLookup, ExampleSeries, ExampleSource, Node, RenderError, SlideNav, wrap,
};

/// Letters served by the example server, one per request.
const LETTERS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

const ALGORITHM: &str = "type Algorithm = fn(work: &[Request]) -> Vec<Response>;";

/// Build the talk deck with its slide count finalized.
pub(crate) fn presentation(
    assets: Rc<dyn AssetSource>,
    docs: &Rc<DocLookup>,
) -> Result<Deck, RenderError> {
    let mut deck = Deck::new("Concurrency design in Rust").with_call_validation();
    deck.add_stylesheet(theme::oldstyle());
    deck.add_stylesheet(theme::code_colors());

    let nav = Rc::new(SlideNav);
    let alg = Rc::new(ExampleSeries::new(ExampleSource::new(
        Rc::clone(&assets),
        "alg.rs",
    )));

    deck.slide([
        h1("Concurrency design in Rust").into(),
        span("Examples and discussion").into(),
        p("Discussion and examples of using concepts related to concurrent design.").into(),
        ul()
            .class("group")
            .child(li("threads"))
            .child(li("channels"))
            .into(),
        ul()
            .class("group")
            .child(li("std::sync"))
            .child(li("crossbeam-channel"))
            .child(li("rayon"))
            .into(),
        ul()
            .class("group")
            .child(li("cargo bench"))
            .child(li("examples and training"))
            .into(),
        br().attr("clear", "all").into(),
        Node::widget(&nav),
    ]);

    deck.slide([
        h2("Background and history").into(),
        a("http://www.usingcsp.com/cspbook.pdf")
            .child("Communicating Sequential Processes")
            .into(),
        " C. A. R. Hoare, 1985".into(),
        br().attr("clear", "all").into(),
        Node::widget(&nav),
    ]);

    deck.slide([
        h2("Threads").into(),
        a("https://doc.rust-lang.org/book/ch16-01-threads.html")
            .attr("target", "_blank")
            .child("Using threads to run code simultaneously")
            .into(),
        Node::widget(&nav),
    ]);

    deck.slide([
        h2("Channels").into(),
        a("https://doc.rust-lang.org/book/ch16-02-message-passing.html")
            .attr("target", "_blank")
            .child("Using message passing to transfer data between threads")
            .into(),
        Node::widget(&nav),
    ]);

    // packages
    for package in ["crossbeam-channel", "rayon"] {
        let doc = docs.package(package);
        deck.slide([
            h2(format!("crate {package}")).into(),
            Node::widget(&doc),
            Node::widget(&nav),
        ]);
    }

    deck.slide([
        h2("cargo bench").into(),
        source_file(assets.as_ref(), "bench.rs")?,
        Node::widget(&nav),
    ]);

    // problem definition
    deck.slide([
        h2("Problem").into(),
        p(wrap([
            Node::text("A set of letters "),
            code(LETTERS).into(),
            Node::text(
                " are available on a server; the problem is to fetch them and assemble them \
                 in the correct order. Each letter is found on /L, ie. a request for /3 \
                 returns '3'.",
            ),
        ]))
        .into(),
        p("To simplify the examples we define the algorithm that does the work as").into(),
        pre().child(code(ALGORITHM)).into(),
        Node::widget(&nav),
    ]);

    let algorithms: [(&str, &str); 7] = [
        ("Sequential", "Simple implementation though very low performance"),
        (
            "Concurrent",
            "One thread per request, pushing into a shared Arc<Mutex<Vec<_>>>. \
             It compiles; however the result is wrong.",
        ),
        (
            "Concurrent",
            "Bug: threads finish in any order. Write each response to its own index.",
        ),
        (
            "Concurrent",
            "std::thread::scope lets threads borrow the work slice; no Arc needed.",
        ),
        ("Concurrent", "Using channels"),
        ("Concurrent", "Using channels with correct order"),
        (
            "Data parallelism",
            "rayon splits the work over a thread pool and keeps the order.",
        ),
    ];
    for (title, note) in algorithms {
        deck.slide([
            h2(title).into(),
            p(note).into(),
            Node::widget(&alg),
            Node::widget(&nav),
        ]);
    }

    deck.finalize_slide_count();
    tracing::debug!(slides = deck.len(), "Talk built");
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use cotalk_deck::{DirAssets, MemoryAssets};
    use pretty_assertions::assert_eq;

    use super::*;

    const SLIDES: usize = 15;

    fn talk_assets() -> Rc<dyn AssetSource> {
        Rc::new(DirAssets::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../talk"
        )))
    }

    fn offline_docs() -> Rc<DocLookup> {
        Rc::new(DocLookup::new(vec!["cotalk-missing-doc-command".to_owned()]))
    }

    #[test]
    fn test_presentation_is_finalized() {
        let deck = presentation(talk_assets(), &offline_docs()).unwrap();

        assert_eq!(deck.len(), SLIDES);
        assert!(deck.is_finalized());
        assert_eq!(deck.stylesheets().len(), 2);
    }

    #[test]
    fn test_every_slide_marks_itself_current() {
        let deck = presentation(talk_assets(), &offline_docs()).unwrap();
        let html = deck.assemble().unwrap().html;

        let marker = r##"<li class="current"><a href="#"##;
        let current: Vec<&str> = html
            .match_indices(marker)
            .map(|(i, _)| {
                let rest = &html[i + marker.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect();
        let expected: Vec<String> = (1..=SLIDES).map(|i| i.to_string()).collect();

        assert_eq!(current, expected);
    }

    #[test]
    fn test_algorithms_render_in_order() {
        let deck = presentation(talk_assets(), &offline_docs()).unwrap();
        let html = deck.assemble().unwrap().html;

        let positions: Vec<usize> = (1..=7)
            .map(|n| {
                html.find(&format!("cargo bench --bench algorithms -- alg{n}<br>"))
                    .unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!html.contains("alg8"));
    }

    #[test]
    fn test_failed_doc_lookup_renders_link() {
        let deck = presentation(talk_assets(), &offline_docs()).unwrap();
        let html = deck.assemble().unwrap().html;

        assert!(html.contains(
            r#"<a href="https://docs.rs/rayon" target="_blank">docs.rs/rayon</a>"#
        ));
    }

    #[test]
    fn test_bench_command_matches_talk_manifest() {
        let assets = talk_assets();
        let manifest = cotalk_deck::load_str(assets.as_ref(), "Cargo.toml").unwrap();
        let harness = cotalk_deck::load_str(assets.as_ref(), "bench.rs").unwrap();

        assert!(manifest.contains("name = \"algorithms\"\npath = \"bench.rs\""));
        assert!(manifest.contains("name = \"cotalk-talk\""));
        assert!(harness.contains("use cotalk_talk::*;"));
    }

    #[test]
    fn test_missing_bench_harness_is_error() {
        let assets: Rc<dyn AssetSource> = Rc::new(MemoryAssets::new());

        let err = presentation(assets, &offline_docs()).unwrap_err();

        assert!(matches!(err, RenderError::MissingAsset { ref path } if path == "bench.rs"));
    }
}
