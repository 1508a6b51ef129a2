//! End-to-end pipeline tests against mocked APIs.
//!
//! Both sources point at one wiremock server; artifacts land in a tempdir.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paper_harvest::config::Config;
use paper_harvest::models::{Paper, Source};
use paper_harvest::pipeline;

/// Three Graph API papers; the last one matches no relevance keyword.
fn scholar_page() -> serde_json::Value {
    json!({
        "total": 3,
        "offset": 0,
        "data": [
            {
                "title": "Blockchain Oracles",
                "abstract": "Bridging on-chain and off-chain data.",
                "year": 2023,
                "url": "https://www.semanticscholar.org/paper/a",
                "venue": "SOSP",
                "authors": [{"name": "Leslie Lamport"}]
            },
            {
                "title": "Shared Ledger Consensus",
                "abstract": "Consensus for blockchain networks.",
                "year": 2022,
                "url": "https://www.semanticscholar.org/paper/b",
                "venue": "PODC",
                "authors": [{"name": "Barbara Liskov"}]
            },
            {
                "title": "Pruning Methods",
                "abstract": "A study of tree pruning.",
                "year": 2021,
                "url": "https://www.semanticscholar.org/paper/c",
                "venue": "ICML",
                "authors": [{"name": "Donald Knuth"}]
            }
        ]
    })
}

/// Three arXiv entries; the first duplicates a Semantic Scholar title and the
/// last matches no relevance keyword.
const ARXIV_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query</title>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <published>2024-01-02T00:00:00Z</published>
    <title>Shared Ledger Consensus</title>
    <summary>Consensus revisited for distributed ledgers.</summary>
    <author><name>Niklaus Wirth</name></author>
    <link href="http://arxiv.org/abs/2401.00001v1" rel="alternate" type="text/html"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2311.00002v1</id>
    <published>2023-11-20T00:00:00Z</published>
    <title>Autonomous Systems on Chain</title>
    <summary>Coordination of autonomous systems via smart contracts.</summary>
    <author><name>Frances Allen</name></author>
    <link href="http://arxiv.org/abs/2311.00002v1" rel="alternate" type="text/html"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2005.00003v1</id>
    <published>2020-05-01T00:00:00Z</published>
    <title>Gardening Tips</title>
    <summary>Water often.</summary>
    <author><name>John Backus</name></author>
    <link href="http://arxiv.org/abs/2005.00003v1" rel="alternate" type="text/html"/>
  </entry>
</feed>"#;

const EMPTY_FEED: &str =
    r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>empty</title></feed>"#;

/// Fifteen Graph API papers, every title keyword-bearing.
fn scholar_short_page() -> serde_json::Value {
    let papers: Vec<_> = (0..15)
        .map(|i| {
            json!({
                "title": format!("Blockchain Topic {i}"),
                "abstract": format!("Study {i} of blockchain systems."),
                "year": 2015 + i,
                "url": format!("https://www.semanticscholar.org/paper/{i}"),
                "venue": "CCS",
                "authors": [{"name": "Test Author"}]
            })
        })
        .collect();
    json!({"total": 15, "offset": 0, "data": papers})
}

/// Five arXiv entries, one of which duplicates a Semantic Scholar title.
fn arxiv_five_entry_feed() -> String {
    let entries: String = (0..5)
        .map(|i| {
            let title = if i == 2 {
                "Blockchain Topic 3".to_string()
            } else {
                format!("Blockchain Preprint {i}")
            };
            format!(
                "<entry>\
                 <id>http://arxiv.org/abs/2402.0000{i}v1</id>\
                 <published>2024-02-0{p}T00:00:00Z</published>\
                 <title>{title}</title>\
                 <summary>Preprint about blockchain systems.</summary>\
                 <author><name>Author {i}</name></author>\
                 <link href=\"http://arxiv.org/abs/2402.0000{i}v1\" rel=\"alternate\" type=\"text/html\"/>\
                 </entry>",
                p = i + 1,
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><feed xmlns="http://www.w3.org/2005/Atom"><title>q</title>{entries}</feed>"#
    )
}

#[tokio::test]
async fn test_full_pipeline_merges_dedups_filters_and_exports() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scholar_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARXIV_FEED))
        .expect(1)
        .mount(&mock_server)
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let mut config = Config::for_testing(&mock_server.uri());
    config.output_dir = out_dir.path().join("papers");
    config.base_filename = "harvest_test".to_string();

    let report = pipeline::run(&config).await.unwrap();

    assert_eq!(report.fetched, vec![(Source::SemanticScholar, 3), (Source::Arxiv, 3)]);
    assert!(report.failures.is_empty());
    assert_eq!(report.total, 6);
    assert_eq!(report.unique, 5);
    assert_eq!(report.relevant, 3);

    let artifacts = report.artifacts.unwrap();
    assert!(artifacts.csv.is_file());
    assert!(artifacts.xlsx.is_file());
    assert!(artifacts.json.is_file());
    assert!(artifacts.summary.is_file());

    // The exported JSON holds exactly the retained records; the duplicate
    // title survives through its first occurrence, the Semantic Scholar one.
    let exported = std::fs::read_to_string(&artifacts.json).unwrap();
    let papers: Vec<Paper> = serde_json::from_str(&exported).unwrap();
    assert_eq!(papers.len(), 3);
    let survivor = papers.iter().find(|p| p.title == "Shared Ledger Consensus").unwrap();
    assert_eq!(survivor.source, Source::SemanticScholar);
    assert!(!papers.iter().any(|p| p.title == "Gardening Tips"));

    let summary = std::fs::read_to_string(&artifacts.summary).unwrap();
    assert!(summary.contains("Total papers found: 3"));
    assert!(summary.contains("- Semantic Scholar: 2"));
    assert!(summary.contains("- arXiv: 1"));
    assert!(summary.contains("Years covered: 2022 to 2023"));

    // Reserved per-source folders exist even though artifacts land at the root.
    assert!(config.output_dir.join("semantic_scholar").is_dir());
    assert!(config.output_dir.join("arxiv").is_dir());
}

#[tokio::test]
async fn test_short_page_plus_duplicate_yields_nineteen_unique() {
    let mock_server = MockServer::start().await;

    // Fifteen records fit in one page, so pagination must stop after a
    // single request.
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scholar_short_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(arxiv_five_entry_feed()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let mut config = Config::for_testing(&mock_server.uri());
    config.output_dir = out_dir.path().join("papers");

    let report = pipeline::run(&config).await.unwrap();

    assert_eq!(report.fetched, vec![(Source::SemanticScholar, 15), (Source::Arxiv, 5)]);
    assert_eq!(report.total, 20);
    assert_eq!(report.unique, 19);
    assert_eq!(report.relevant, 19);

    let artifacts = report.artifacts.unwrap();
    let summary = std::fs::read_to_string(&artifacts.summary).unwrap();
    assert!(summary.contains("- Semantic Scholar: 15"));
    assert!(summary.contains("- arXiv: 4"));
}

#[tokio::test]
async fn test_pipeline_zero_results_skips_export() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "data": []})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_FEED))
        .mount(&mock_server)
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let mut config = Config::for_testing(&mock_server.uri());
    config.output_dir = out_dir.path().join("papers");

    let report = pipeline::run(&config).await.unwrap();

    assert_eq!(report.total, 0);
    assert_eq!(report.unique, 0);
    assert_eq!(report.relevant, 0);
    assert!(report.artifacts.is_none());

    // The folder skeleton is still created up front.
    assert!(config.output_dir.join("semantic_scholar").is_dir());
    assert!(config.output_dir.join("arxiv").is_dir());
}

#[tokio::test]
async fn test_pipeline_survives_a_failing_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ARXIV_FEED))
        .mount(&mock_server)
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let mut config = Config::for_testing(&mock_server.uri());
    config.output_dir = out_dir.path().join("papers");

    let report = pipeline::run(&config).await.unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, Source::SemanticScholar);
    assert_eq!(report.fetched, vec![(Source::SemanticScholar, 0), (Source::Arxiv, 3)]);
    assert_eq!(report.total, 3);
    assert_eq!(report.unique, 3);

    // Only the autonomous-systems entry carries a relevance keyword once the
    // Semantic Scholar table is gone.
    assert_eq!(report.relevant, 1);
    assert!(report.artifacts.is_some());
}
