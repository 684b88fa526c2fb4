use anyhow::{Context, Result, bail};
use clap::Args;
use invert_application::{DrawReport, InvertSession, SessionFactory};
use invert_core::{ToggleOutcome, game_label};
use invert_infrastructure::ConfigService;
use std::io::Write;

use super::utils::parse_numbers;

#[derive(Args, Debug, Default)]
pub struct DrawArgs {
    /// Marked numbers of one game, e.g. `-g 1,2,3`. Repeat for games B, C, ...
    #[arg(short = 'g', long = "game", value_name = "NUMBERS")]
    pub games: Vec<String>,

    /// Number of recommendations (overrides the config)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for reproducible draws (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Marks the requested games, draws and writes the report to `out`.
///
/// Capacity notices go to stderr.
pub fn run(service: &ConfigService, args: &DrawArgs, out: &mut impl Write) -> Result<()> {
    let mut config = service.get_config().context("Failed to load configuration")?;
    if let Some(count) = args.count {
        config.draw.count = count;
    }
    if args.seed.is_some() {
        config.draw.seed = args.seed;
    }
    tracing::debug!(?config, "Effective draw configuration");

    let factory = SessionFactory::new(config)?;
    let mut session = factory.create_session();

    mark_games(&mut session, &args.games, &mut std::io::stderr())?;
    let report = session.generate()?;

    render(&report, args.json, out)

}

/// Applies each `--game` list to the board, game A first.
///
/// Marks that do not fit a full game are reported to `notices` and skipped.
pub fn mark_games(
    session: &mut InvertSession,
    games: &[String],
    notices: &mut impl Write,
) -> Result<()> {
    let available = session.rules().games;
    if games.len() > available {
        bail!("{} games given, the board has {}", games.len(), available);
    }

    for (game_index, list) in games.iter().enumerate() {
        let label = game_label(game_index);
        let numbers =
            parse_numbers(list).with_context(|| format!("Invalid numbers for game {}", label))?;

        for number in numbers {
            let outcome = session
                .toggle(game_index, number)
                .with_context(|| format!("Cannot mark {} in game {}", number, label))?;
            if let ToggleOutcome::CapacityReached { capacity } = outcome {
                writeln!(
                    notices,
                    "Game {} already has {} numbers; {} was not marked",
                    label, capacity, number
                )?;
            }
        }
    }

    Ok(())
}

/// Writes the report as plain lines or as JSON.
pub fn render(report: &DrawReport, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    writeln!(out, "{} numbers remaining", report.remaining)?;
    for pick in &report.recommendations {
        writeln!(out, "{:?}", pick.numbers())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invert_core::InverseDrawer;
    use invert_core::config::RootConfig;
    use tempfile::TempDir;

    fn seeded_session() -> InvertSession {
        let mut config = RootConfig::default();
        config.draw.seed = Some(8);
        SessionFactory::new(config).unwrap().create_session()
    }

    #[test]
    fn test_mark_games_in_order() {
        let mut session = seeded_session();
        let mut notices = Vec::new();

        mark_games(
            &mut session,
            &["1,2,3".to_string(), "45".to_string()],
            &mut notices,
        )
        .unwrap();

        assert_eq!(session.selection_of(0).unwrap().len(), 3);
        assert!(session.selection_of(1).unwrap().contains(&45));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_full_game_produces_notice() {
        let mut session = seeded_session();
        let mut notices = Vec::new();

        mark_games(&mut session, &["1,2,3,4,5,6,7".to_string()], &mut notices).unwrap();

        let text = String::from_utf8(notices).unwrap();
        assert_eq!(
            text.trim(),
            "Game A already has 6 numbers; 7 was not marked"
        );
        assert_eq!(session.used_numbers().len(), 6);
    }

    #[test]
    fn test_out_of_range_number_fails() {
        let mut session = seeded_session();
        let err = mark_games(&mut session, &["46".to_string()], &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("game A"));
    }

    #[test]
    fn test_too_many_games_fails() {
        let mut session = seeded_session();
        let games = vec!["1".to_string(); 6];
        assert!(mark_games(&mut session, &games, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_run_json_output() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let args = DrawArgs {
            games: vec!["1,2".to_string(), "2,3".to_string()],
            count: Some(1),
            seed: Some(5),
            json: true,
        };

        let mut out = Vec::new();
        run(&service, &args, &mut out).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["remaining"], 42);
        assert_eq!(report["recommendations"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_render_plain() {
        let mut session = InvertSession::new(
            invert_core::LotteryRules {
                universe_max: 6,
                games: 1,
                capacity: 6,
            },
            InverseDrawer::seeded(1),
            2,
        );
        let report = session.generate().unwrap();

        let mut out = Vec::new();
        render(&report, false, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "6 numbers remaining\n[1, 2, 3, 4, 5, 6]\n[1, 2, 3, 4, 5, 6]\n"
        );
    }

    #[test]
    fn test_run_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        let args = DrawArgs {
            games: vec!["1,2,3,4,5,6".to_string()],
            count: Some(2),
            seed: Some(3),
            json: false,
        };

        let mut out = Vec::new();
        run(&service, &args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("39 numbers remaining"));
        let picks: Vec<&str> = lines.collect();
        assert_eq!(picks.len(), 2);
        for pick in picks {
            let numbers: Vec<u8> = pick
                .trim_matches(|c| c == '[' || c == ']')
                .split(", ")
                .map(|n| n.parse().unwrap())
                .collect();
            assert_eq!(numbers.len(), 6);
            assert!(numbers.iter().all(|&n| n > 6));
        }

        // Overrides apply to this run only
        assert_eq!(service.get_config().unwrap().draw.count, 5);
    }
}
