//! Benchmarks for deck assembly.

use std::cell::RefCell;
use std::rc::Rc;

use cotalk_deck::tags::{h2, li, p, ul};
use cotalk_deck::{Deck, Navbar, Node, SlideNav, Stylesheet};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn base_theme() -> Stylesheet {
    let mut css = Stylesheet::new();
    css.style("html, body", ["margin: 0 0", "padding: 0 0"]);
    css.style(".slide", ["padding: 10px 20%", "text-align: center"]);
    css.style("nav ul li.current", ["text-decoration: underline"]);
    css
}

fn slide_content(i: usize, nav: Node) -> Vec<Node> {
    vec![
        h2(format!("Slide {i}")).into(),
        p("Some paragraph text with a <tag> that needs escaping.").into(),
        ul().child(li("first")).child(li("second")).into(),
        nav,
    ]
}

fn positional_deck(slides: usize) -> Deck {
    let nav = Rc::new(SlideNav);
    let mut deck = Deck::new("Bench");
    deck.add_stylesheet(base_theme());
    for i in 1..=slides {
        deck.slide(slide_content(i, Node::widget(&nav)));
    }
    deck.finalize_slide_count();
    deck
}

fn bench_assemble_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_positional");
    for slides in [10, 50, 200] {
        let deck = positional_deck(slides);
        group.throughput(Throughput::Elements(slides as u64));
        group.bench_with_input(BenchmarkId::from_parameter(slides), &deck, |b, deck| {
            b.iter(|| deck.assemble().unwrap());
        });
    }
    group.finish();
}

fn bench_assemble_stateful(c: &mut Criterion) {
    c.bench_function("assemble_stateful_50", |b| {
        b.iter(|| {
            // Stateful widgets advance per assembly, so each run builds a fresh deck.
            let nav = Rc::new(RefCell::new(Navbar::new()));
            let mut deck = Deck::new("Bench");
            deck.add_stylesheet(base_theme());
            for i in 1..=50 {
                deck.slide(slide_content(i, Node::stateful(&nav)));
            }
            deck.finalize_slide_count();
            deck.assemble().unwrap()
        });
    });
}

criterion_group!(benches, bench_assemble_positional, bench_assemble_stateful);
criterion_main!(benches);
