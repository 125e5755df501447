use minigolf_scorecard::model::{HOLE_COUNT, ScoreMatrix, players_from_names};
use minigolf_scorecard::score::{
    GameSummary, delta_series, holes_counted, relative_to_par, round_relative, round_total,
    score_tally, session_average,
};

fn matrix(rounds: usize) -> ScoreMatrix {
    ScoreMatrix::new(players_from_names(["W", "A", "D"]), rounds).expect("valid matrix")
}

fn fill_round(matrix: &mut ScoreMatrix, player: usize, round: usize, scores: &[&str]) {
    for (hole, score) in scores.iter().enumerate() {
        matrix.set_cell(player, hole, round, score);
    }
}

#[test]
fn test2_round_total_skips_unset() {
    let mut m = matrix(2);
    fill_round(&mut m, 0, 0, &["1", "", "4", "x", "2"]);
    assert_eq!(round_total(&m, 0, 0), 7);
    assert_eq!(holes_counted(&m, 0, 0), 3);
    // other rounds and players are untouched
    assert_eq!(round_total(&m, 0, 1), 0);
    assert_eq!(round_total(&m, 1, 0), 0);
}

#[test]
fn test2_relative_to_par_counts_only_played_holes() {
    assert_eq!(relative_to_par(0, 0, 2), 0);
    assert_eq!(relative_to_par(36, 18, 2), 0);
    assert_eq!(relative_to_par(30, 18, 2), -6);
    assert_eq!(relative_to_par(7, 3, 2), 1);
    assert_eq!(relative_to_par(5, 2, 3), -1);

    let mut m = matrix(1);
    fill_round(&mut m, 1, 0, &["1", "1", "2"]);
    assert_eq!(round_relative(&m, 1, 0), -2);
}

#[test]
fn test2_tally_ignores_high_scores() {
    let mut m = matrix(2);
    fill_round(&mut m, 2, 0, &["1", "2", "3", "3", "5", "7"]);
    fill_round(&mut m, 2, 1, &["2", "4"]);
    let tally = score_tally(&m, 2);
    assert_eq!((tally.ones, tally.twos, tally.threes), (1, 2, 2));
    assert_eq!(tally.count_of(5), 0);

    let before = score_tally(&m, 2);
    m.set_cell(2, 10, 1, "5");
    assert_eq!(score_tally(&m, 2), before);
}

#[test]
fn test2_delta_series_reads_first_round_only() {
    let mut m = matrix(2);
    fill_round(&mut m, 0, 0, &["3", "1", "", "2"]);
    // second round must not move the curve
    fill_round(&mut m, 0, 1, &["9", "9", "9", "9"]);

    let delta = delta_series(&m, 0);
    assert_eq!(delta.len(), HOLE_COUNT);
    assert_eq!(&delta[..4], &[1.0, 0.0, -2.0, -2.0]);
    // unset holes after that keep costing par
    assert_eq!(delta[HOLE_COUNT - 1], 6.0 - 36.0);

    let empty = delta_series(&m, 1);
    assert_eq!(empty[0], -2.0);
    assert_eq!(empty[HOLE_COUNT - 1], -36.0);
}

#[test]
fn test2_session_average() {
    let mut m = matrix(2);
    fill_round(&mut m, 0, 0, &["2", "2", "3"]);
    fill_round(&mut m, 0, 1, &["4"]);
    assert!((session_average(&m, 0) - 5.5).abs() < f64::EPSILON);
    assert!(session_average(&m, 1).abs() < f64::EPSILON);
}

#[test]
fn test2_summary_matches_queries() {
    let mut m = matrix(2);
    fill_round(&mut m, 0, 0, &["3", "2"]);
    fill_round(&mut m, 1, 1, &["1", "1", "1"]);

    let summary = GameSummary::from_matrix(&m);
    assert_eq!(summary.players.len(), 3);
    assert_eq!(summary.round_count, 2);

    let w = summary.player("W").expect("W present");
    assert_eq!(w.rounds[0].round, 1);
    assert_eq!(w.rounds[0].total, 5);
    assert_eq!(w.rounds[0].holes_counted, 2);
    assert_eq!(w.rounds[0].relative, 1);
    assert_eq!(w.rounds[1].total, 0);
    assert_eq!(w.tally.threes, 1);
    assert_eq!(w.delta.len(), HOLE_COUNT);

    let a = summary.player("A").expect("A present");
    assert_eq!(a.rounds[1].relative, -3);
    assert_eq!(a.tally.ones, 3);
    assert!((a.average - 1.5).abs() < f64::EPSILON);

    let json = serde_json::to_value(&summary).expect("serializes");
    assert_eq!(json["players"][0]["name"], "W");
    assert_eq!(json["players"][0]["rounds"][0]["relative"], 1);
    assert_eq!(json["players"][1]["tally"]["ones"], 3);
}

#[test]
fn test2_oversized_scores_leave_sums_intact() {
    let mut m = matrix(2);
    fill_round(&mut m, 0, 0, &["4000000000", "4000000000", "3"]);
    fill_round(&mut m, 0, 1, &["99", "99"]);
    assert_eq!(m.cell(0, 0, 0), None);
    assert_eq!(m.cell(0, 1, 0), None);

    assert_eq!(round_total(&m, 0, 0), 3);
    assert_eq!(holes_counted(&m, 0, 0), 1);
    assert_eq!(round_total(&m, 0, 1), 198);
    assert!((session_average(&m, 0) - 100.5).abs() < f64::EPSILON);
    // unset round-0 holes add par only
    assert_eq!(delta_series(&m, 0)[..3], [-2.0, -4.0, -3.0]);

    let summary = GameSummary::from_matrix(&m);
    assert_eq!(summary.players[0].rounds[0].total, 3);
    assert_eq!(summary.players[0].rounds[1].relative, 194);
}
