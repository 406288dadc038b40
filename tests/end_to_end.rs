use std::fs;
use std::path::Path;

use prepstats::{
    CorpusMetricsBuilder, DatasetLoader, DownloadArtifact, ReportConfig, ReportError,
    SnapshotCache, TermFrequency,
};
use tempfile::tempdir;

const HEADER: &str = "original_title,original_selftext,processed_text,tokens_stemmed\n";

fn write_dataset(dir: &Path, rows: &str) -> std::path::PathBuf {
    let path = dir.join("anxiety_preprocessed.csv");
    fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path
}

#[test]
fn two_row_scenario_from_file() {
    let temp = tempdir().unwrap();
    let path = write_dataset(
        temp.path(),
        "A,I don't know,i do not know,know\nB,I have 3 cats,i have num cat,cat\n",
    );

    let (records, metrics) = CorpusMetricsBuilder::with_default_triggers()
        .unwrap()
        .build(&DatasetLoader::new(&path))
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(metrics.post_count, 2);
    assert_eq!(metrics.avg_processed_tokens, 1.0);
    assert_eq!(metrics.trigger_rate("contractions"), Some(50.0));
    assert_eq!(metrics.trigger_rate("numbers"), Some(50.0));
    assert_eq!(
        metrics.top_terms,
        vec![TermFrequency::new("cat", 1), TermFrequency::new("know", 1)]
    );
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let temp = tempdir().unwrap();
    let path = write_dataset(temp.path(), "");
    let (records, metrics) = CorpusMetricsBuilder::with_default_triggers()
        .unwrap()
        .build(&DatasetLoader::new(&path))
        .unwrap();
    assert!(records.is_empty());
    assert_eq!(metrics.avg_original_tokens, 0.0);
    assert!(metrics.top_terms.is_empty());
}

#[test]
fn blank_original_text_counts_as_zero_tokens() {
    let temp = tempdir().unwrap();
    let path = write_dataset(temp.path(), "Only title,,feel,feel\n");
    let (_, metrics) = CorpusMetricsBuilder::with_default_triggers()
        .unwrap()
        .build(&DatasetLoader::new(&path))
        .unwrap();
    assert_eq!(metrics.token_counts[0].original, 0);
    assert_eq!(metrics.token_counts[0].processed, 1);
}

#[test]
fn load_failures_produce_no_metrics() {
    let temp = tempdir().unwrap();
    let builder = CorpusMetricsBuilder::with_default_triggers().unwrap();

    let missing = builder.build(&DatasetLoader::new(temp.path().join("nope.csv")));
    assert!(matches!(missing, Err(ReportError::DataUnavailable { .. })));

    let ragged = write_dataset(temp.path(), "a,b,c,d\ne,f\n");
    let ragged = builder.build(&DatasetLoader::new(&ragged));
    assert!(matches!(ragged, Err(ReportError::DataUnavailable { .. })));

    let no_stems = temp.path().join("no_stems.csv");
    fs::write(&no_stems, "original_selftext,processed_text\nx,y\n").unwrap();
    let malformed = builder.build(&DatasetLoader::new(&no_stems));
    assert!(matches!(malformed, Err(ReportError::DataMalformed { .. })));
}

#[test]
fn configured_pipeline_with_snapshot_and_download() {
    let temp = tempdir().unwrap();
    let data = temp.path().join("posts.tsv");
    let body = "body\tclean\tstems\n\
                Help!!! I can't sleep\thelp sleep\thelp sleep\n\
                Slept 8 hours\tslept num hour\tslept num hour\n\
                see www.example.com\tsee url\tsee url\n";
    fs::write(&data, body).unwrap();

    let config_path = temp.path().join("report.json");
    fs::write(
        &config_path,
        format!(
            r#"{{
                "dataset_path": {path},
                "delimiter": "\t",
                "columns": {{"original_text": "body", "processed_text": "clean", "stemmed_tokens": "stems", "title": null}},
                "top_n": 2
            }}"#,
            path = serde_json::to_string(&data).unwrap()
        ),
    )
    .unwrap();

    let config = ReportConfig::from_json_file(&config_path).unwrap();
    let cache = SnapshotCache::new(
        config.loader().unwrap(),
        CorpusMetricsBuilder::from_config(&config).unwrap(),
    );
    let snapshot = cache.get().unwrap();
    let metrics = snapshot.metrics();

    assert_eq!(metrics.post_count, 3);
    assert_eq!(metrics.trigger_rate("contractions"), Some(33.3));
    assert_eq!(metrics.trigger_rate("numbers"), Some(33.3));
    assert_eq!(metrics.trigger_rate("punctuation"), Some(33.3));
    assert_eq!(metrics.trigger_rate("urls"), Some(33.3));
    assert_eq!(metrics.top_terms.len(), 2);
    assert_eq!(metrics.vocabulary_size, 7);
    assert_eq!(snapshot.records()[2].processed_text, "see url");

    let artifact =
        DownloadArtifact::dataset_named(&config.dataset_path, &config.download_file_name)
            .unwrap();
    assert_eq!(artifact.file_name, "anxiety_preprocessed.csv");
    assert_eq!(artifact.bytes, body.as_bytes());
}
