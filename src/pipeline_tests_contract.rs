// =========================================================================
// FALSIFY-CF: user-based collaborative filtering contract (sugerir)
//
// Each test tries to falsify one load-bearing property of the pipeline.
// The asymmetric-norm and drop-on-zero-denominator behaviors look like
// bugs at first read; these tests pin them down so nobody "fixes" them.
//
// References:
//   - Bell & Koren (2007) "Scalable Collaborative Filtering with Jointly
//     Derived Neighborhood Interpolation Weights" (shrinkage damping)
// =========================================================================

use super::*;
use crate::similarity::shrinkage;

fn store(lines: &[&str]) -> RatingStore {
    let rows = lines
        .iter()
        .enumerate()
        .map(|(i, l)| (i + 1, (*l).to_string()));
    RatingStore::build(rows).0
}

/// FALSIFY-CF-001: similarities(target) never contains the target itself
#[test]
fn falsify_cf_001_self_exclusion() {
    let s = store(&["U1,I1,5", "U2,I1,4", "U3,I2,3"]);
    for user in ["U1", "U2", "U3"] {
        let sims = similarities(&s, user);
        assert!(
            !sims.contains_key(user),
            "FALSIFIED CF-001: {user} appears in its own similarity map"
        );
        assert_eq!(sims.len(), 2);
    }
}

/// FALSIFY-CF-002: dot product is symmetric, norms are NOT swapped between
/// directions (each direction uses its own full profile for its own norm)
#[test]
fn falsify_cf_002_norms_follow_profiles() {
    // U1 has 2 items, U2 has 4; overlap is {I1}. If an implementation
    // swapped the norms (or used overlap-only norms), the hand-computed
    // value below would not match.
    let s = store(&["U1,I1,4", "U1,I2,3", "U2,I1,4", "U2,I3,5", "U2,I4,5", "U2,I5,2"]);
    let ab = similarities(&s, "U1")["U2"];
    let ba = similarities(&s, "U2")["U1"];

    let dot = 16.0; // symmetric
    let norm_u1 = (16.0_f64 + 9.0).sqrt();
    let norm_u2 = (16.0_f64 + 25.0 + 25.0 + 4.0).sqrt();
    let expected = dot / (norm_u1 * norm_u2) * shrinkage(1);

    assert!(
        (ab - expected).abs() < 1e-12,
        "FALSIFIED CF-002: sim(U1→U2)={ab}, expected {expected}"
    );
    assert!(
        (ba - expected).abs() < 1e-12,
        "FALSIFIED CF-002: sim(U2→U1)={ba}, expected {expected}"
    );
}

/// FALSIFY-CF-003: at fixed raw cosine, the final score strictly increases
/// with overlap size and stays below the unshrunk cosine
#[test]
fn falsify_cf_003_shrinkage_monotone_bounded() {
    // Identical profiles of growing size: raw cosine is exactly 1.0, so
    // the final score equals the shrinkage factor.
    let mut prev = 0.0;
    for n in 1..=30 {
        let mut lines = Vec::new();
        for i in 0..n {
            lines.push(format!("U1,I{i},4"));
            lines.push(format!("U2,I{i},4"));
        }
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let s = store(&refs);
        let sim = similarities(&s, "U1")["U2"];
        assert!(
            sim > prev,
            "FALSIFIED CF-003: score did not increase at overlap {n} ({prev} -> {sim})"
        );
        assert!(
            sim < 1.0,
            "FALSIFIED CF-003: score {sim} reached the unshrunk cosine at overlap {n}"
        );
        prev = sim;
    }
}

/// FALSIFY-CF-004: an item whose only rater has similarity <= 0 is absent
/// from predictions entirely, not scored 0
#[test]
fn falsify_cf_004_no_negative_leakage() {
    let neighbors = vec![
        Neighbor {
            user_id: "U2".to_string(),
            similarity: -0.4,
        },
        Neighbor {
            user_id: "U3".to_string(),
            similarity: 0.0,
        },
    ];
    let s = store(&["U1,I1,5", "U2,I2,4", "U3,I3,2"]);
    let recs = predict(&s, "U1", &neighbors, 10);
    assert!(
        recs.is_empty(),
        "FALSIFIED CF-004: non-positive neighbors produced predictions {recs:?}"
    );
}

/// FALSIFY-CF-005: the popularity fallback never recommends an item the
/// target already rated
#[test]
fn falsify_cf_005_fallback_excludes_seen() {
    let s = store(&["U1,I1,5", "U1,I2,1", "U2,I1,5", "U2,I3,4", "U3,I2,5"]);
    let recs = popular(&s, "U1", 10);
    for rec in &recs {
        assert!(
            !s.ratings_of("U1").contains_key(&rec.item_id),
            "FALSIFIED CF-005: fallback recommended already-rated {}",
            rec.item_id
        );
    }
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].item_id, "I3");
}

/// FALSIFY-CF-006: two runs over identical input and parameters produce
/// byte-identical reports
#[test]
fn falsify_cf_006_determinism() {
    let lines = [
        "U1,I1,5", "U1,I2,4", "U1,I3,2", "U1,I4,1", "U2,I1,5", "U2,I2,5", "U2,I3,1", "U2,I5,4",
        "U3,I2,4", "U3,I3,5", "U3,I4,2", "U3,I6,5", "U4,I1,1", "U4,I3,4", "U4,I5,5", "U4,I7,4",
    ];
    let cf = UserCf::new().with_k(3).with_top_n(5);
    let a = cf.recommend(&store(&lines), "U3").unwrap();
    let b = cf.recommend(&store(&lines), "U3").unwrap();
    assert_eq!(
        format!("{a:?}"),
        format!("{b:?}"),
        "FALSIFIED CF-006: repeated runs differ"
    );
}

/// FALSIFY-CF-007: the worked three-user scenario reproduces exactly
/// (similarities to full double precision, single-rater scores collapse
/// to the neighbor's rating)
#[test]
fn falsify_cf_007_reference_scenario() {
    let s = store(&[
        "U1,I1,5", "U1,I2,4", "U1,I3,2", "U1,I4,1", "U2,I1,5", "U2,I2,5", "U2,I3,1", "U2,I5,4",
        "U3,I2,4", "U3,I3,5", "U3,I4,2", "U3,I6,5",
    ]);
    let report = UserCf::new().with_k(3).with_top_n(5).recommend(&s, "U3").unwrap();

    assert!(report.personalized);
    assert_eq!(report.neighbors.len(), 2);
    assert_eq!(report.neighbors[0].user_id, "U1");
    assert!(
        (report.neighbors[0].similarity - 0.185_038_186_423_188).abs() < 1e-12,
        "FALSIFIED CF-007: sim(U3,U1)={}",
        report.neighbors[0].similarity
    );
    assert_eq!(report.neighbors[1].user_id, "U2");
    assert!(
        (report.neighbors[1].similarity - 0.104_300_296_486_530).abs() < 1e-12,
        "FALSIFIED CF-007: sim(U3,U2)={}",
        report.neighbors[1].similarity
    );

    // Candidates are {I1, I5}. I1 was rated 5 by both positive neighbors,
    // so the weighted average is exactly 5; I5 has a single positive-
    // similarity rater, so the score collapses to that rating (4).
    assert_eq!(report.recommendations.len(), 2);
    assert_eq!(report.recommendations[0].item_id, "I1");
    assert!((report.recommendations[0].score - 5.0).abs() < 1e-12);
    assert_eq!(report.recommendations[1].item_id, "I5");
    assert!((report.recommendations[1].score - 4.0).abs() < 1e-12);
}

/// FALSIFY-CF-008: empty store yields UnknownUser for any target
#[test]
fn falsify_cf_008_empty_store() {
    let s = store(&[]);
    for user in ["U1", "anyone", ""] {
        let err = UserCf::new().recommend(&s, user).unwrap_err();
        assert!(
            matches!(err, SugerirError::UnknownUser { .. }),
            "FALSIFIED CF-008: expected UnknownUser for '{user}', got {err}"
        );
    }
}
