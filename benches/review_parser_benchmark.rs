//! Review listing parser benchmark
//!
//! Measures extraction throughput over a synthetic listing page sized
//! like one real review page (25 reviews per page).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use review_scope_lib::infrastructure::ReviewListParser;

fn listing_page(reviews: usize) -> String {
    let mut page = String::from("<html><body><div class=\"lister-list\">");
    for i in 0..reviews {
        page.push_str(&format!(
            r#"<div class="review-container">
                <a class="title" href="/review/rw{i:07}/">Review number {i}</a>
                <div class="content"><div class="text show-more__control">
                    This film kept me engaged from the opening scene to the credits,
                    with performances that carry even the slower middle act.
                </div></div>
            </div>"#
        ));
    }
    page.push_str("</div></body></html>");
    page
}

fn benchmark_parse_listing(c: &mut Criterion) {
    let parser = ReviewListParser::new().unwrap();
    let page = listing_page(25);

    c.bench_function("parse_listing_25_reviews", |b| {
        b.iter(|| parser.parse_listing(black_box(&page)));
    });
}

fn benchmark_parse_empty_page(c: &mut Criterion) {
    let parser = ReviewListParser::new().unwrap();
    let page = "<html><body><p>No reviews yet.</p></body></html>";

    c.bench_function("parse_listing_empty_page", |b| {
        b.iter(|| parser.parse_listing(black_box(page)));
    });
}

criterion_group!(benches, benchmark_parse_listing, benchmark_parse_empty_page);
criterion_main!(benches);
