use simcheck::{Analyzer, CheckConfig, ComparisonCache, Document, Ranker, Submission};

fn main() {
    let corpus = vec![
        Document::new("1", "Welcome to Jimbocho, the town of books and curry!"),
        Document::new("2", "Welcome to Jimbocho, the city of books and curry!"),
        Document::new("3", "We welcome you to Jimbocho, the town of books and curry."),
        Document::new("4", "Welcome to the town of books and curry, Jimbocho!"),
    ];

    // Compares word bigrams; every score goes through the shared cache.
    let config = CheckConfig {
        ngram_size: 2,
        ..Default::default()
    };
    let cache = ComparisonCache::new(config.cache_capacity).unwrap();

    // Ranks document 1 against the rest of the corpus.
    let submission = Submission::from(&corpus[0]);
    let ranking = Ranker::new(&cache, &config)
        .rank(&submission, &corpus)
        .unwrap();
    let ids: Vec<_> = ranking.matches.iter().map(|m| m.document_id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "4"]);

    // Chains documents by walking to the most similar unvisited one.
    let analyzer = Analyzer::from_config(&cache, &config).unwrap();
    let chain = analyzer.longest_chain(&corpus).unwrap();
    assert_eq!(chain.len(), 4);

    println!("score={} chain={chain:?}", ranking.score);
    println!("{:?}", cache.stats());
}
