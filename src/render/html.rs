//! The live status page.

use crate::{
    commands::gameweek::{
        FixturePairing, GameweekView, ManagerCard, MatchupView, NextFixtures, PlayerRow,
        ResourceStatus, StandingRow,
    },
    engine::{
        fixtures::{FixtureReport, FixtureSummary, StatAnnotation},
        squad::{BonusSource, RowEmphasis},
    },
};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
    <title>Live Draft Stats</title>
    <style>
        body { font-size: 9pt; }
        .table-condensed td, .table-condensed th { padding: 1px; }
    </style>
</head>
"#;

const SQUAD_HEADER: &str = "<tr><th>PLAYER</th><th>TM</th><th>POS</th><th>MP</th><th>GS</th>\
<th>AS</th><th>GA</th><th>YC</th><th>BO</th><th>PT</th></tr>";

/// Escape text for element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn row_attrs(emphasis: RowEmphasis) -> &'static str {
    match emphasis {
        RowEmphasis::Active => r#" class="table-dark text-light""#,
        RowEmphasis::Idle => "",
        RowEmphasis::BenchStrong => r#" class="table-danger fw-bold""#,
        RowEmphasis::BenchLight => r#" class="table-danger fst-italic""#,
        RowEmphasis::BenchNeutral => r#" class="table-danger""#,
    }
}

fn unavailable_banner(what: &str, reason: &str) -> String {
    format!(
        r#"<div class="alert alert-warning py-0 my-1">{} data unavailable: {}</div>"#,
        escape(what),
        escape(reason)
    )
}

fn player_row(row: &PlayerRow) -> String {
    // Provisional bonus may still change once the upstream finalises it.
    let bonus = match row.bonus_source {
        BonusSource::Provisional => format!("{}*", row.bonus),
        BonusSource::Official | BonusSource::None => row.bonus.to_string(),
    };
    format!(
        "<tr{}><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        row_attrs(row.emphasis),
        escape(&row.name),
        escape(&row.team),
        escape(&row.position),
        row.minutes,
        row.goals_scored,
        row.assists,
        row.goals_conceded,
        row.yellow_cards,
        bonus,
        row.points
    )
}

fn manager_card(card: &ManagerCard) -> String {
    let mut html = format!(
        "<div><b>{} [Total Points: {}]</b></div>",
        escape(&card.name),
        card.total
    );
    if let ResourceStatus::Unavailable(reason) = &card.status {
        html.push_str(&unavailable_banner("Squad", reason));
    }
    html.push_str(r#"<table class="table table-condensed table-striped table-bordered">"#);
    html.push_str(SQUAD_HEADER);
    for row in &card.rows {
        html.push_str(&player_row(row));
    }
    html.push_str("</table>");
    html
}

fn matchup(view: &MatchupView) -> String {
    format!(
        r#"<div class="row bg-success text-white"><div class="col-lg-6">{}</div><div class="col-lg-6">{}</div></div><hr class="hr">"#,
        manager_card(&view.home),
        manager_card(&view.away)
    )
}

fn standings(rows: &[StandingRow]) -> String {
    let mut html = String::from(
        r#"<table class="table table-condensed table-striped table-bordered"><tr><th>#</th><th>Player</th><th>W-D-L</th><th>PTS</th></tr>"#,
    );
    for row in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}-{}-{}</td><td>{}</td></tr>",
            row.rank,
            escape(&row.name),
            row.won,
            row.drawn,
            row.lost,
            row.total
        ));
    }
    html.push_str("</table>");
    html
}

fn pairing(p: &FixturePairing) -> String {
    format!("<div>{} VS {}</div>", escape(&p.home), escape(&p.away))
}

fn next_fixtures(next: &NextFixtures) -> String {
    match next {
        NextFixtures::Available { pairings, .. } => format!(
            r#"<div class="bg-secondary text-light text-center">{}</div>"#,
            pairings.iter().map(pairing).collect::<String>()
        ),
        NextFixtures::Unavailable => "<div>Could not load</div>".to_string(),
    }
}

fn annotations(side: &str, list: &[StatAnnotation]) -> String {
    let text = list
        .iter()
        .map(|a| escape(&a.to_string()))
        .collect::<Vec<_>>()
        .join(" ");
    format!("<div><b>{}</b> {}</div>", side, text)
}

fn fixture(report: &FixtureReport) -> String {
    let mut html = format!("<div><b>{}</b></div>", escape(&report.headline()));
    if report.state.has_events() {
        html.push_str(&annotations("HOME", &report.home));
        html.push_str(&annotations("AWAY", &report.away));
    }
    html
}

fn fixture_summary(summary: &FixtureSummary) -> String {
    summary
        .fixtures
        .iter()
        .map(|r| format!("{}<hr class=\"hr\">", fixture(r)))
        .collect()
}

/// Render the whole status page for one gameweek.
pub fn render_page(view: &GameweekView) -> String {
    let mut body = String::new();
    for (what, reason) in view.status.degraded() {
        body.push_str(&unavailable_banner(what, reason));
    }

    let mut html = String::from(HEAD);
    html.push_str("<body>");
    html.push_str(&format!(
        "<h1 class=\"text-center\">GAMEWEEK {}</h1>",
        view.gameweek
    ));
    if !view.league_name.is_empty() {
        html.push_str(&format!(
            "<h5 class=\"text-center\">{}</h5>",
            escape(&view.league_name)
        ));
    }
    html.push_str(r#"<div class="container">"#);
    html.push_str(&body);
    html.push_str(r#"<div class="row"><div class="col-lg-10">"#);
    for m in &view.matchups {
        html.push_str(&matchup(m));
    }
    html.push_str(r#"</div><div class="col-lg-2">"#);
    html.push_str(r#"<div class="bg-primary text-light text-center"><b>STANDINGS (Last GW)</b></div>"#);
    html.push_str(&standings(&view.standings));
    html.push_str(r#"<hr class="hr"><div class="bg-warning text-light text-center"><b>FIXTURES (Next GW)</b></div>"#);
    html.push_str(&next_fixtures(&view.next_fixtures));
    html.push_str(r#"<hr class="hr"><div class="bg-warning text-light text-center"><b>Gameweek Stats (This GW)</b></div>"#);
    html.push_str(&fixture_summary(&view.fixtures));
    html.push_str("</div></div></div></body></html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::{Gameweek, ManagerId, PlayerId},
        engine::{fixtures::FixtureState, squad::Slot},
    };

    fn row(name: &str, emphasis: RowEmphasis, bonus_source: BonusSource) -> PlayerRow {
        PlayerRow {
            player: PlayerId::new(1),
            name: name.to_string(),
            team: "ARS".to_string(),
            position: "MID".to_string(),
            minutes: 90,
            goals_scored: 1,
            assists: 0,
            goals_conceded: 0,
            yellow_cards: 0,
            bonus: 3,
            bonus_source,
            points: 11,
            slot: Slot::Starter,
            emphasis,
        }
    }

    fn card(name: &str, status: ResourceStatus) -> ManagerCard {
        ManagerCard {
            manager: ManagerId::new(1),
            name: name.to_string(),
            total: 42,
            rows: vec![row("Saka", RowEmphasis::Active, BonusSource::Provisional)],
            status,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_row_emphasis_classes() {
        let strong = player_row(&row("A", RowEmphasis::BenchStrong, BonusSource::None));
        assert!(strong.contains("table-danger fw-bold"));
        let idle = player_row(&row("A", RowEmphasis::Idle, BonusSource::None));
        assert!(idle.starts_with("<tr><td>"));
        let active = player_row(&row("A", RowEmphasis::Active, BonusSource::Official));
        assert!(active.contains("table-dark"));
    }

    #[test]
    fn test_provisional_bonus_is_marked() {
        let provisional = player_row(&row("A", RowEmphasis::Idle, BonusSource::Provisional));
        assert!(provisional.contains("<td>3*</td>"));
        let official = player_row(&row("A", RowEmphasis::Idle, BonusSource::Official));
        assert!(official.contains("<td>3</td>"));
    }

    #[test]
    fn test_page_sections() {
        let mut view = GameweekView::unavailable(Gameweek::new(12), "x");
        view.status.game = ResourceStatus::Ready;
        view.status.league = ResourceStatus::Ready;
        view.status.catalogue = ResourceStatus::Ready;
        view.status.live = ResourceStatus::Ready;
        view.status.fixtures = ResourceStatus::Ready;
        view.league_name = "Office <League>".to_string();
        view.matchups = vec![MatchupView {
            home: card("Ann", ResourceStatus::Ready),
            away: card("Ben", ResourceStatus::Unavailable("timed out".to_string())),
        }];
        view.next_fixtures = NextFixtures::Available {
            gameweek: Gameweek::new(13),
            pairings: vec![FixturePairing {
                home: "Ann".to_string(),
                away: "Ben".to_string(),
            }],
        };

        let page = render_page(&view);
        assert!(page.contains("GAMEWEEK 12"));
        assert!(page.contains("Office &lt;League&gt;"));
        assert!(page.contains("Ann [Total Points: 42]"));
        assert!(page.contains("Squad data unavailable: timed out"));
        assert!(page.contains("<div>Ann VS Ben</div>"));
        assert!(!page.contains("Could not load"));
    }

    #[test]
    fn test_fixture_headline_matches_text_summary() {
        let report = FixtureReport {
            id: 9,
            state: FixtureState::NotStarted,
            home_team: "BHA".to_string(),
            away_team: "NFO".to_string(),
            home_score: None,
            away_score: None,
            home: Vec::new(),
            away: Vec::new(),
        };

        let html = fixture(&report);
        assert_eq!(html, "<div><b>NA:: BHA [- - -] NFO</b></div>");
        assert_eq!(report.to_string(), "NA:: BHA [- - -] NFO");
    }

    #[test]
    fn test_degraded_page_shows_banners() {
        let view = GameweekView::unavailable(Gameweek::new(3), "cycle exceeded 30s deadline");
        let page = render_page(&view);

        assert!(page.contains("Could not load"));
        assert!(page.contains("live stats data unavailable: cycle exceeded 30s deadline"));
        assert!(page.contains("league data unavailable"));
        assert!(page.ends_with("</html>\n"));
    }
}
