use chrono::{Duration, Utc};
use guidance_engine::catalog;
use guidance_engine::models::scholarship::ScholarshipStatus;
use guidance_engine::services::scholarship_service::{
    days_remaining, ScholarshipService, StatusFilter,
};

fn service() -> ScholarshipService {
    ScholarshipService::new(catalog::scholarships())
}

fn ids(records: &[&guidance_engine::models::scholarship::ScholarshipRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn identity_filter_returns_whole_catalog() {
    let service = service();
    let results = service.filter(StatusFilter::All, "");
    assert_eq!(results.len(), service.list().len());
    assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn filter_preserves_catalog_order() {
    let service = service();
    // Three providers contain "ministry"; they must come back in catalog order.
    let results = service.filter(StatusFilter::All, "ministry");
    assert_eq!(ids(&results), vec!["1", "2", "4"]);
}

#[test]
fn search_is_case_insensitive() {
    let service = service();
    let lower = service.filter(StatusFilter::All, "aicte");
    let upper = service.filter(StatusFilter::All, "AICTE");
    assert_eq!(ids(&lower), ids(&upper));
    assert_eq!(ids(&lower), vec!["5"]);
}

#[test]
fn search_matches_name_or_provider() {
    let service = service();
    // "ncert" appears only in a provider, "post matric" only in a name.
    assert_eq!(ids(&service.filter(StatusFilter::All, "ncert")), vec!["3"]);
    assert_eq!(
        ids(&service.filter(StatusFilter::All, "post matric")),
        vec!["1"]
    );
}

#[test]
fn status_filter_is_exact() {
    let service = service();
    let open = service.filter(StatusFilter::Only(ScholarshipStatus::Open), "");
    assert_eq!(ids(&open), vec!["3", "4"]);
    assert!(open.iter().all(|r| r.status == ScholarshipStatus::Open));
    assert_eq!(
        open.len(),
        service.count_with_status(ScholarshipStatus::Open)
    );
}

#[test]
fn status_and_search_are_conjunctive() {
    let service = service();
    let results = service.filter(StatusFilter::Only(ScholarshipStatus::Open), "minority");
    assert_eq!(ids(&results), vec!["4"]);
}

#[test]
fn no_match_returns_empty() {
    let service = service();
    assert!(service
        .filter(StatusFilter::All, "does-not-exist-anywhere")
        .is_empty());
    assert!(service
        .filter(StatusFilter::Only(ScholarshipStatus::Closed), "ncert")
        .is_empty());
}

#[test]
fn filter_is_idempotent() {
    let service = service();
    let first = ids(&service.filter(StatusFilter::Only(ScholarshipStatus::Open), "scholarship"));
    let second = ids(&service.filter(StatusFilter::Only(ScholarshipStatus::Open), "scholarship"));
    assert_eq!(first, second);
}

#[test]
fn status_filter_parsing() {
    assert_eq!(StatusFilter::parse("all"), Some(StatusFilter::All));
    assert_eq!(StatusFilter::parse("All"), Some(StatusFilter::All));
    assert_eq!(
        StatusFilter::parse("closing-soon"),
        Some(StatusFilter::Only(ScholarshipStatus::ClosingSoon))
    );
    assert_eq!(StatusFilter::parse("bogus"), None);
}

#[test]
fn days_remaining_counts_forward() {
    let now = Utc::now();
    assert_eq!(days_remaining(now + Duration::days(10), now), 10);
}

#[test]
fn days_remaining_is_negative_for_past_deadlines() {
    let now = Utc::now();
    assert_eq!(days_remaining(now - Duration::days(2), now), -2);
    assert!(days_remaining(now - Duration::days(3) - Duration::hours(1), now) < 0);
}

#[test]
fn status_is_not_derived_from_deadline() {
    // The seed data keeps status and deadline decoupled; record 3 stays
    // "open" even though its deadline has long passed.
    let service = service();
    let now = Utc::now();
    let record = service
        .list()
        .iter()
        .find(|r| r.id == "3")
        .expect("record 3");
    assert_eq!(record.status, ScholarshipStatus::Open);
    assert!(days_remaining(record.deadline, now) < 0);
}
