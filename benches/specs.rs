// benches/specs.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;
use url::Url;

use pydoc_scrape::specs::{download, latest_versions, whats_new};

fn sidebar_page(versions: usize) -> String {
    let mut items = String::new();
    for minor in 0..versions {
        items.push_str(&format!(
            r#"<li><a href="https://docs.python.org/3.{minor}/">Python 3.{minor} (security-fixes)</a></li>"#
        ));
    }
    format!(
        r#"<html><body><div class="sphinxsidebarwrapper">
             <ul><li><a href="genindex.html">Index</a></li></ul>
             <ul>{items}<li><a href="https://www.python.org/doc/versions/">All versions</a></li></ul>
           </div></body></html>"#
    )
}

fn index_page(entries: usize) -> String {
    let mut items = String::new();
    for n in 0..entries {
        items.push_str(&format!(r#"<li class="toctree-l1"><a href="3.{n}.html">3.{n}</a></li>"#));
    }
    format!(
        r#"<html><body><section id="what-s-new-in-python">
             <div class="toctree-wrapper compound"><ul>{items}</ul></div>
           </section></body></html>"#
    )
}

const DOWNLOADS: &str = r#"<html><body><div role="main"><table class="docutils">
    <tr><td><a href="archives/python-docs-pdf-letter.zip">letter</a></td>
        <td><a href="archives/python-docs-pdf-a4.zip">a4</a></td></tr>
  </table></div></body></html>"#;

fn bench_specs(c: &mut Criterion) {
    let base = Url::parse("https://docs.python.org/3/").unwrap();
    let index_url = whats_new::index_url(&base).unwrap();
    let downloads_url = download::downloads_url(&base).unwrap();

    let sidebar = Html::parse_document(&sidebar_page(40));
    let index = Html::parse_document(&index_page(60));
    let downloads = Html::parse_document(DOWNLOADS);

    c.bench_function("latest_versions_parse", |b| {
        b.iter(|| {
            let rows = latest_versions::parse(black_box(&sidebar), &base).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("whats_new_entry_links", |b| {
        b.iter(|| {
            let links = whats_new::entry_links(black_box(&index), &index_url).unwrap();
            black_box(links.len())
        })
    });

    c.bench_function("download_archive_link", |b| {
        b.iter(|| black_box(download::archive_link(black_box(&downloads), &downloads_url).unwrap()))
    });

    c.bench_function("parse_document_sidebar", |b| {
        let text = sidebar_page(40);
        b.iter(|| black_box(Html::parse_document(black_box(&text))))
    });
}

criterion_group!(benches, bench_specs);
criterion_main!(benches);
