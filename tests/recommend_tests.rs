//! Integration tests for job matching and attendance metrics against the
//! built-in role catalog.

use edu_insights::core::models::{AttendanceRecord, RoleCatalog, SkillProficiency};
use edu_insights::core::{
    compute_attendance_percentage, compute_job_matches, AggregatorError, JobMatcher,
    MATCH_SCORE_CAP, MAX_MATCHES,
};

const ALL_SKILLS: [&str; 5] = ["Python", "JavaScript", "Java", "C++", "Rust"];

fn attendance(flags: &[bool]) -> Vec<AttendanceRecord> {
    flags
        .iter()
        .map(|&present| AttendanceRecord::new("S1", present))
        .collect()
}

#[test]
fn scores_stay_within_cap_and_results_are_bounded() {
    let catalog = RoleCatalog::reference();
    for proficiency in (0..=100).step_by(5) {
        for skill in ALL_SKILLS {
            let matches = compute_job_matches(&catalog, &[skill], &[proficiency]).unwrap();
            assert!(matches.len() <= MAX_MATCHES);
            for m in &matches {
                assert!(m.match_score <= MATCH_SCORE_CAP);
            }
        }
    }
}

#[test]
fn results_are_sorted_non_increasing() {
    let catalog = RoleCatalog::reference();
    let matches =
        compute_job_matches(&catalog, &["JavaScript", "C++", "Java"], &[76, 100, 60]).unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches
        .windows(2)
        .all(|pair| pair[0].match_score >= pair[1].match_score));
}

#[test]
fn roles_below_threshold_never_appear() {
    let catalog = RoleCatalog::reference();
    for skill in ALL_SKILLS {
        for proficiency in [0_u8, 50, 74, 75, 79, 80, 84, 85, 89, 90, 100] {
            let matches = compute_job_matches(&catalog, &[skill], &[proficiency]).unwrap();
            for m in &matches {
                let entry = catalog
                    .roles_for(skill)
                    .iter()
                    .find(|e| e.role == m.role && e.company == m.company)
                    .expect("match must come from the catalog");
                assert!(proficiency >= entry.min_score);
            }
        }
    }
}

#[test]
fn empty_inputs_give_empty_outputs() {
    let catalog = RoleCatalog::reference();
    let none: [&str; 0] = [];
    assert!(compute_job_matches(&catalog, &none, &[]).unwrap().is_empty());
    let no_records: Vec<AttendanceRecord> = Vec::new();
    assert_eq!(compute_attendance_percentage(&no_records), 0);
}

#[test]
fn skill_missing_from_catalog_has_no_matches() {
    let catalog = RoleCatalog::reference();
    assert!(compute_job_matches(&catalog, &["Rust"], &[95])
        .unwrap()
        .is_empty());
}

#[test]
fn strong_python_matches_backend_and_data_science() {
    let catalog = RoleCatalog::reference();
    let matches = compute_job_matches(&catalog, &["Python"], &[90]).unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].role, "Backend Developer");
    assert_eq!(matches[0].company, "TechStack Inc");
    assert_eq!(matches[0].match_score, 98);
    assert_eq!(matches[1].role, "Data Scientist");
    assert_eq!(matches[1].company, "DataCorp Analytics");
    assert_eq!(matches[1].match_score, 98);
    assert!(matches[0].recommendation.contains("Python"));
    assert!(matches[0].recommendation.contains("90%"));
}

#[test]
fn qualifying_roles_score_at_the_cap() {
    let catalog = RoleCatalog::reference();
    // Both C++ roles need at least 80
    assert!(compute_job_matches(&catalog, &["C++"], &[70]).unwrap().is_empty());

    let matches = compute_job_matches(&catalog, &["JavaScript"], &[75]).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].role, "Frontend Developer");
    assert_eq!(matches[0].match_score, MATCH_SCORE_CAP);
}

#[test]
fn three_of_four_sessions_is_seventy_five_percent() {
    let records = attendance(&[true, false, true, true]);
    assert_eq!(compute_attendance_percentage(&records), 75);
}

#[test]
fn attendance_rounds_half_up() {
    assert_eq!(compute_attendance_percentage(&attendance(&[true, true, false])), 67);
    assert_eq!(compute_attendance_percentage(&attendance(&[true, false, false])), 33);
    assert_eq!(compute_attendance_percentage(&attendance(&[false; 8])), 0);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let catalog = RoleCatalog::reference();
    let err = compute_job_matches(&catalog, &["Python", "Java"], &[90]).unwrap_err();
    assert!(matches!(err, AggregatorError::InvalidArgument(_)));
}

#[test]
fn out_of_range_proficiency_is_rejected() {
    let catalog = RoleCatalog::reference();
    let matcher = JobMatcher::new(&catalog);
    let err = matcher
        .match_skills(&[
            SkillProficiency::new("Python", 90),
            SkillProficiency::new("Java", 101),
        ])
        .unwrap_err();
    assert!(matches!(err, AggregatorError::InvalidArgument(_)));
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let catalog = RoleCatalog::reference();
    let first = compute_job_matches(&catalog, &["Java", "Python"], &[80, 88]).unwrap();
    let second = compute_job_matches(&catalog, &["Java", "Python"], &[80, 88]).unwrap();
    assert_eq!(first, second);

    let records = attendance(&[true, false, true]);
    assert_eq!(
        compute_attendance_percentage(&records),
        compute_attendance_percentage(&records)
    );
}

#[test]
fn matcher_and_free_function_agree() {
    let catalog = RoleCatalog::reference();
    let matcher = JobMatcher::new(&catalog);
    let paired = vec![
        SkillProficiency::new("Java", 85),
        SkillProficiency::new("C++", 90),
    ];
    assert_eq!(
        matcher.match_skills(&paired).unwrap(),
        compute_job_matches(&catalog, &["Java", "C++"], &[85, 90]).unwrap()
    );
}

#[test]
fn shared_catalog_serves_many_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_sync<T: Sync>() {}
    assert_send_sync::<JobMatcher<'static>>();
    assert_sync::<RoleCatalog>();

    let catalog = RoleCatalog::reference();
    let expected = compute_job_matches(&catalog, &["Python", "Java"], &[90, 85]).unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = &catalog;
                scope.spawn(move || {
                    compute_job_matches(catalog, &["Python", "Java"], &[90, 85]).unwrap()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results.len(), 8);
    for result in results {
        assert_eq!(result, expected);
    }
}
