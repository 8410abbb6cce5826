// Criterion benchmarks for inflect-en.
//
// Words come from the table-driven test file, so every rule family and both
// fallbacks are represented.
//
// Run:
//   cargo bench -p inflect-en

use criterion::{Criterion, criterion_group, criterion_main};

use inflect_en::{InflectionEngine, Word, pluralize, singularize};

// ---------------------------------------------------------------------------
// Word list
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
struct Cases {
    singularize: Vec<(String, serde_json::Value)>,
    pluralize: Vec<(String, serde_json::Value)>,
}

fn load_cases() -> Cases {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/inflections.json");
    let contents = std::fs::read_to_string(&path).expect("failed to read inflections.json");
    serde_json::from_str(&contents).expect("failed to parse inflections.json")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_singularize(c: &mut Criterion) {
    let words: Vec<String> = load_cases().singularize.into_iter().map(|(w, _)| w).collect();

    c.bench_function("singularize_case_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(singularize(word));
            }
        });
    });
}

fn bench_pluralize(c: &mut Criterion) {
    let words: Vec<String> = load_cases().pluralize.into_iter().map(|(w, _)| w).collect();

    c.bench_function("pluralize_case_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(pluralize(word));
            }
        });
    });
}

/// Same words, with the reversed lower-case form computed once up front.
fn bench_precomputed_words(c: &mut Criterion) {
    let engine = InflectionEngine::english();
    let words: Vec<Word> = load_cases()
        .pluralize
        .into_iter()
        .map(|(w, _)| Word::new(w))
        .collect();

    c.bench_function("pluralize_precomputed_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(engine.pluralize_word(word));
            }
        });
    });
}

/// Words no rule matches walk the whole table before the fallback.
fn bench_fallback(c: &mut Criterion) {
    let words = ["car", "dog", "user", "bird", "pen", "key", "table", "apple"];

    c.bench_function("pluralize_fallback", |b| {
        b.iter(|| {
            for word in words {
                std::hint::black_box(pluralize(std::hint::black_box(word)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_singularize,
    bench_pluralize,
    bench_precomputed_words,
    bench_fallback,
);
criterion_main!(benches);
