// tests/adapters_fixtures.rs
use chrono::{Duration, Utc};
use job_radar::adapters::cryptojobslist::CryptoJobsListAdapter;
use job_radar::adapters::jobstash::JobStashAdapter;
use job_radar::model::SourceAdapter;
use job_radar::{ingest, RadarConfig};

const CJL_FIXTURE: &str = include_str!("fixtures/cryptojobslist.json");
const JOBSTASH_FIXTURE: &str = include_str!("fixtures/jobstash.json");

#[tokio::test]
async fn cryptojobslist_fixture_maps_fields() {
    let adapter = CryptoJobsListAdapter::from_fixture_str(CJL_FIXTURE);
    let out = adapter.fetch().await.unwrap();

    // the untitled entry is skipped at parse time
    assert_eq!(out.len(), 4);

    let growth = &out[0];
    assert_eq!(growth.title, "Head of Growth");
    assert_eq!(growth.company.as_deref(), Some("Lumen Protocol"));
    assert_eq!(growth.location.as_deref(), Some("Remote (EU)"));
    assert_eq!(growth.posted_hint.as_deref(), Some("2 days ago"));
    assert_eq!(growth.salary.as_deref(), Some("$120k - $160k"));
    // description is scrubbed of markup and entities
    assert_eq!(
        growth.description.as_deref(),
        Some("Own the full growth funnel for our L2 ecosystem. Work with BD and community teams.")
    );

    // slug fallback builds the url
    assert_eq!(
        out[1].url.as_deref(),
        Some("https://cryptojobslist.com/jobs/senior-solidity-engineer-lumen")
    );
    // company may be a plain string
    assert_eq!(out[2].company.as_deref(), Some("Nightowl Labs"));
    // "name" stands in for "title"
    assert_eq!(out[3].title, "Partnerships Lead");
}

#[tokio::test]
async fn jobstash_fixture_maps_fields() {
    let adapter = JobStashAdapter::from_fixture_str(JOBSTASH_FIXTURE);
    let out = adapter.fetch().await.unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(out[0].title, "Ecosystem BD Manager");
    assert_eq!(out[0].posted_hint.as_deref(), Some("yesterday"));
    assert_eq!(out[1].posted_hint.as_deref(), Some("5 hours ago"));
    assert_eq!(
        out[1].url.as_deref(),
        Some("https://jobstash.xyz/jobs/gma-412")
    );
    assert_eq!(
        out[1].description.as_deref(),
        Some("Run paid and organic growth experiments.")
    );
}

#[tokio::test]
async fn fixtures_through_the_aggregator_keep_only_profile_matches() {
    let cfg = RadarConfig {
        adapter_delay_ms: 0,
        ..Default::default()
    };
    let adapters: Vec<Box<dyn SourceAdapter>> = vec![
        Box::new(CryptoJobsListAdapter::from_fixture_str(CJL_FIXTURE)),
        Box::new(JobStashAdapter::from_fixture_str(JOBSTASH_FIXTURE)),
    ];
    let now = Utc::now();
    let out = ingest::run_once(&adapters, &cfg, now).await;

    let titles: Vec<&str> = out.postings.iter().map(|p| p.title.as_str()).collect();
    // solidity engineer and backend developer fail relevance; the
    // partnerships lead from 2020 fails recency
    assert_eq!(
        titles,
        vec![
            "Head of Growth",
            "Community Manager",
            "Ecosystem BD Manager",
            "Growth Marketing Associate",
        ]
    );

    // relative dates were normalized against `now`
    let growth = &out.postings[0];
    assert_eq!(growth.posted_at, Some(now - Duration::days(2)));
    assert_eq!(growth.source, "cryptojobslist.com");
    // missing company defaults never leak in here, but missing location does
    assert_eq!(out.postings[1].location, "Remote");
}
