use minigolf_scorecard::model::{Cursor, HOLE_COUNT, ScoreMatrix, players_from_names};
use minigolf_scorecard::score::GameSummary;
use minigolf_scorecard::view::types::Direction;
use minigolf_scorecard::view::{
    player_background, preprocess_delta_bars, render_results_page, render_scorecard,
};
use scraper::{Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

fn sample_matrix() -> ScoreMatrix {
    let mut matrix = ScoreMatrix::new(players_from_names(["W", "Kim"]), 2).expect("valid");
    matrix.set_cell(0, 0, 0, "3");
    matrix.set_cell(0, 1, 0, "2");
    matrix.set_cell(0, 0, 1, "1");
    matrix.set_cell(1, 0, 0, "1");
    matrix.set_cell(1, 1, 0, "1");
    matrix
}

fn text_of(doc: &Html, css: &str) -> Vec<String> {
    doc.select(&selector(css))
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn test6_results_page_cards() {
    let summary = GameSummary::from_matrix(&sample_matrix());
    let html = render_results_page(&summary).into_string();
    let doc = Html::parse_document(&html);

    assert_eq!(text_of(&doc, "h1"), vec!["Resultat"]);
    assert_eq!(doc.select(&selector("div.player-card")).count(), 2);

    let w_rounds = text_of(&doc, r#"div.player-card[data-player="W"] .round .total"#);
    assert_eq!(w_rounds, vec!["5", "1"]);
    let w_relative = text_of(&doc, r#"div.player-card[data-player="W"] .relative"#);
    assert_eq!(w_relative, vec!["+1", "-1"]);
    assert_eq!(
        doc.select(&selector(r#"div.player-card[data-player="W"] .relative.over"#))
            .count(),
        1
    );

    assert_eq!(
        text_of(&doc, r#"div.player-card[data-player="W"] .average"#),
        vec!["Snitt: 3.0"]
    );
    assert_eq!(
        text_of(&doc, r#"div.player-card[data-player="Kim"] .tally"#),
        vec!["2 / 0 / 0"]
    );
}

#[test]
fn test6_player_backgrounds() {
    assert_eq!(player_background("W"), player_background("w"));
    assert_ne!(player_background("W"), player_background("A"));
    assert_ne!(player_background("A"), player_background("D"));
    assert_eq!(player_background("Kim"), player_background("Someone else"));

    let summary = GameSummary::from_matrix(&sample_matrix());
    let html = render_results_page(&summary).into_string();
    let doc = Html::parse_document(&html);
    let style = doc
        .select(&selector(r#"div.player-card[data-player="Kim"]"#))
        .next()
        .and_then(|el| el.value().attr("style"))
        .unwrap_or_default()
        .to_string();
    assert!(style.contains(player_background("Kim")));
}

#[test]
fn test6_delta_chart_bars() {
    let summary = GameSummary::from_matrix(&sample_matrix());
    let w = summary.player("W").expect("W present");
    let chart = preprocess_delta_bars(w);
    assert_eq!(chart.bars.len(), HOLE_COUNT);
    assert_eq!(chart.bars[0].direction, Direction::Right);
    assert_eq!(chart.bars[1].direction, Direction::Right);
    assert_eq!(chart.bars[2].direction, Direction::Left);
    assert_eq!(chart.bars[3].direction, Direction::Left);
    assert!((chart.final_delta - (5.0 - 36.0)).abs() < f64::EPSILON);

    for bar in &chart.bars {
        assert!(bar.start_position >= 0.0);
        assert!(bar.start_position + bar.width <= 100.0 + 1e-9);
    }

    let mut even = ScoreMatrix::new(players_from_names(["A", "D"]), 1).expect("valid");
    even.set_cell(0, 0, 0, "2");
    let even_summary = GameSummary::from_matrix(&even);
    let even_chart = preprocess_delta_bars(&even_summary.players[0]);
    assert_eq!(even_chart.bars[0].direction, Direction::Center);
    assert!(even_chart.bars[0].width.abs() < f64::EPSILON);

    let html = render_results_page(&summary).into_string();
    let doc = Html::parse_document(&html);
    let bars = doc.select(&selector(r#".delta-chart[data-player="W"] .bar"#)).count();
    assert_eq!(bars, HOLE_COUNT);
}

#[test]
fn test6_scorecard_grid() {
    let matrix = sample_matrix();
    let html = render_scorecard(&matrix, 0, &Cursor::new(0, 1, 0)).into_string();
    let doc = Html::parse_fragment(&html);

    let headers = text_of(&doc, "thead th");
    assert_eq!(headers, vec!["Hål", "Runda 1", "Runda 2"]);
    assert_eq!(doc.select(&selector("tbody tr")).count(), HOLE_COUNT);

    let focused: Vec<_> = doc.select(&selector("td.cell.focused")).collect();
    assert_eq!(focused.len(), 1);
    assert_eq!(focused[0].value().attr("data-hole"), Some("2"));
    assert_eq!(focused[0].value().attr("data-round"), Some("1"));

    assert_eq!(text_of(&doc, "tfoot .relative"), vec!["+1", "-1"]);

    // unknown player index renders nothing
    assert!(render_scorecard(&matrix, 5, &Cursor::default())
        .into_string()
        .is_empty());
}
