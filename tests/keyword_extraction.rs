//! Public API behaviour of keyword extraction

use textrank_keyword::{
    extract_keywords, rank_all, rank_top, CsrGraph, GraphBuilder, KeywordConfig,
    KeywordExtractor, PosTag, TaggedTerm, TextRankError,
};

const ARTICLE: &str = "Rust is a systems programming language focused on safety, speed, and \
    concurrency. Rust achieves memory safety without garbage collection. The borrow checker \
    enforces ownership rules at compile time, and ownership makes concurrency safer. Systems \
    programmers use Rust for operating systems, browsers, and embedded devices.";

fn noun_terms(words: &[&str]) -> Vec<TaggedTerm> {
    words.iter().map(|w| TaggedTerm::new(*w, PosTag::Noun)).collect()
}

fn all_nouns(_: &TaggedTerm) -> bool {
    true
}

#[test]
fn empty_document_yields_no_keywords() {
    assert!(extract_keywords("", 5).unwrap().is_empty());
    assert!(rank_all("").unwrap().is_empty());
    assert!(rank_top("", 3).unwrap().is_empty());
}

#[test]
fn top_k_is_the_k_largest_of_rank_all() {
    let all = rank_all(ARTICLE).unwrap();
    assert!(all.len() > 5);

    let top = rank_top(ARTICLE, 5).unwrap();
    assert_eq!(top.len(), 5);

    let mut expected: Vec<(&String, &f64)> = all.iter().collect();
    expected.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for ((word, score), (exp_word, exp_score)) in top.iter().zip(expected) {
        assert_eq!(word, exp_word);
        assert_eq!(score, exp_score);
    }
}

#[test]
fn oversized_count_returns_everything_sorted() {
    let all = rank_all(ARTICLE).unwrap();
    let top = rank_top(ARTICLE, all.len() * 2).unwrap();

    assert_eq!(top.len(), all.len());
    assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn keywords_are_deterministic() {
    let first = extract_keywords(ARTICLE, 6).unwrap();
    for _ in 0..5 {
        assert_eq!(extract_keywords(ARTICLE, 6).unwrap(), first);
    }
}

#[test]
fn scores_are_positive_and_finite() {
    for (_, score) in rank_all(ARTICLE).unwrap() {
        assert!(score.is_finite());
        assert!(score > 0.0);
    }
}

#[test]
fn built_graphs_are_symmetric_without_self_loops() {
    let words = [
        "rust", "safety", "speed", "rust", "memory", "safety", "garbage", "collection", "rust",
        "ownership", "rules", "ownership",
    ];
    for window in 2..=6 {
        let graph = CsrGraph::from_builder(&GraphBuilder::from_words(words, window));
        for node in 0..graph.num_nodes as u32 {
            for &n in graph.neighbors(node) {
                assert_ne!(n, node);
                assert!(graph.neighbors(n).contains(&node));
            }
        }
    }
}

#[test]
fn window_of_five_reaches_four_back() {
    let graph = GraphBuilder::from_words(["a", "b", "c", "d", "e", "f"], 5);

    assert_eq!(graph.neighbors_of("f"), vec!["b", "c", "d", "e"]);
    assert!(!graph.neighbors_of("a").contains(&"f"));
}

#[test]
fn natural_language_processing_scenario() {
    let extractor = KeywordExtractor::new().with_filter(all_nouns);
    let terms = noun_terms(&["natural", "language", "processing", "natural", "language"]);
    let ranking = extractor.rank_terms_with_info(&terms);

    assert_eq!(ranking.len(), 3);
    assert!(ranking.converged());
    assert!(ranking.iterations() <= 200);

    // reference: symmetric triangle, every vertex follows s' = 0.15 + 0.85 s
    let mut s = 1.0 / (1.0 + (-2.0f64).exp());
    loop {
        let next = 0.15 + 0.85 * s;
        let diff = (next - s).abs();
        s = next;
        if diff <= 0.001 {
            break;
        }
    }
    for word in ["natural", "language", "processing"] {
        assert!((ranking.score(word).unwrap() - s).abs() < 1e-4);
    }
}

#[test]
fn tags_are_dropped_after_filtering() {
    let extractor = KeywordExtractor::new().with_filter(all_nouns);
    let terms = vec![
        TaggedTerm::new("record", PosTag::Noun),
        TaggedTerm::new("record", PosTag::Verb),
        TaggedTerm::new("label", PosTag::Noun),
    ];
    let scores = extractor.score_from_terms(&terms);

    assert_eq!(scores.len(), 2);
}

#[test]
fn config_from_json_drives_extraction() {
    let config = KeywordConfig::from_json(r#"{ "window_size": 2, "top_n": 2 }"#).unwrap();
    let extractor = KeywordExtractor::with_config(config).unwrap();

    assert_eq!(extractor.keywords(ARTICLE).unwrap().len(), 2);
}

#[test]
fn errors_surface_to_the_caller() {
    let extractor =
        KeywordExtractor::with_config(KeywordConfig::default().with_max_tokens(5)).unwrap();
    assert!(matches!(
        extractor.rank_all(ARTICLE),
        Err(TextRankError::Tokenization(_))
    ));

    assert!(matches!(
        KeywordExtractor::new().rank_document(None),
        Err(TextRankError::InvalidArgument(_))
    ));
}
