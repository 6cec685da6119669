//! Unit tests for trade evaluation

use super::*;

/// A player whose ROS score is exactly `points` (1 game played, 1 remaining,
/// full usage, neutral matchup).
fn worth(id: &str, points: f64) -> Player {
    Player {
        season_points: points,
        games_played: 1,
        remaining_games: 1,
        usage_rate: 1.0,
        ..Player::new(id, format!("Player {id}"), Position::WR)
    }
}

fn pool() -> PlayerPool {
    PlayerPool::new(vec![
        worth("a1", 90.0),
        worth("a2", 60.0),
        worth("b1", 100.0),
        worth("b2", 48.0),
        worth("z0", 0.0),
    ])
}

fn thresholds() -> VerdictThresholds {
    VerdictThresholds::default()
}

#[cfg(test)]
mod verdict_tests {
    use super::*;

    #[test]
    fn test_big_win_reference_scenario() {
        let (relative, verdict) = classify_verdict(150.0, 100.0, &thresholds());
        assert!((relative - 50.0 / 150.0).abs() < 1e-12);
        assert_eq!(
            verdict,
            Verdict::BigWin {
                favors: TradeSide::TeamA
            }
        );
        assert_eq!(verdict.to_string(), "Big Win for Team A");
    }

    #[test]
    fn test_band_edges() {
        // 4.99% -> Fair, exactly 5% -> Slight Edge
        assert_eq!(classify_verdict(100.0, 95.01, &thresholds()).1, Verdict::Fair);
        assert_eq!(
            classify_verdict(100.0, 95.0, &thresholds()).1,
            Verdict::SlightEdge {
                favors: TradeSide::TeamA
            }
        );
        // Exactly 20% stays a Slight Edge, anything above is a Big Win
        assert_eq!(
            classify_verdict(80.0, 100.0, &thresholds()).1,
            Verdict::SlightEdge {
                favors: TradeSide::TeamB
            }
        );
        assert_eq!(
            classify_verdict(79.0, 100.0, &thresholds()).1,
            Verdict::BigWin {
                favors: TradeSide::TeamB
            }
        );
    }

    #[test]
    fn test_zero_totals_are_fair() {
        let (relative, verdict) = classify_verdict(0.0, 0.0, &thresholds());
        assert_eq!(relative, 0.0);
        assert_eq!(verdict, Verdict::Fair);
        assert!(verdict.favors().is_none());
    }

    #[test]
    fn test_something_for_nothing_is_big_win() {
        let (relative, verdict) = classify_verdict(0.0, 12.0, &thresholds());
        assert_eq!(relative, 1.0);
        assert_eq!(verdict.favors(), Some(TradeSide::TeamB));
        assert_eq!(verdict.to_string(), "Big Win for Team B");
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_value(Verdict::SlightEdge {
            favors: TradeSide::TeamB,
        })
        .unwrap();
        assert_eq!(json["kind"], "slight_edge");
        assert_eq!(json["favors"], "team_b");
    }
}

#[cfg(test)]
mod evaluate_tests {
    use super::*;

    #[test]
    fn test_totals_and_delta() {
        let request = TradeRequest::new(["a1", "a2"], ["b1"]);
        let result = evaluate_request(&pool(), &request, &thresholds()).unwrap();

        assert!((result.team_a_total - 150.0).abs() < 1e-9);
        assert!((result.team_b_total - 100.0).abs() < 1e-9);
        assert!((result.delta_a - 50.0).abs() < 1e-9);
        assert_eq!(result.verdict.to_string(), "Big Win for Team A");
        assert_eq!(result.team_a.len(), 2);
        assert_eq!(result.team_a[0].id.as_str(), "a1");
        assert_eq!(result.team_b[0].name, "Player b1");
    }

    #[test]
    fn test_swapping_sides_negates_delta() {
        let pool = pool();
        let forward = TradeRequest::new(["a1", "b2"], ["b1", "z0"]);
        let backward = TradeRequest::new(["b1", "z0"], ["a1", "b2"]);

        let ab = evaluate_request(&pool, &forward, &thresholds()).unwrap();
        let ba = evaluate_request(&pool, &backward, &thresholds()).unwrap();

        assert_eq!(ab.delta_a, -ba.delta_a);
        assert_eq!(ab.relative_delta, ba.relative_delta);
        assert_eq!(
            ab.verdict.favors(),
            ba.verdict.favors().map(|side| match side {
                TradeSide::TeamA => TradeSide::TeamB,
                TradeSide::TeamB => TradeSide::TeamA,
            })
        );
    }

    #[test]
    fn test_duplicate_ids_count_twice() {
        let request = TradeRequest::new(["b2", "b2"], ["a1"]);
        let result = evaluate_request(&pool(), &request, &thresholds()).unwrap();
        assert!((result.team_a_total - 96.0).abs() < 1e-9);
        assert_eq!(result.verdict.favors(), Some(TradeSide::TeamA));
    }

    #[test]
    fn test_empty_team_a_is_rejected_first() {
        let request = TradeRequest::new(Vec::<&str>::new(), Vec::<&str>::new());
        match evaluate_request(&pool(), &request, &thresholds()).unwrap_err() {
            EngineError::EmptyRoster { side } => assert_eq!(side, TradeSide::TeamA),
            other => panic!("Expected EmptyRoster, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_team_b() {
        let request = TradeRequest::new(["a1"], Vec::<&str>::new());
        match evaluate_request(&pool(), &request, &thresholds()).unwrap_err() {
            EngineError::EmptyRoster { side } => assert_eq!(side, TradeSide::TeamB),
            other => panic!("Expected EmptyRoster, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_ids_from_both_sides_are_listed() {
        let request = TradeRequest::new(["a1", "ghost"], ["b1", "phantom", "ghost"]);
        match evaluate_request(&pool(), &request, &thresholds()).unwrap_err() {
            EngineError::UnknownPlayers { ids } => {
                assert_eq!(ids, vec![PlayerId::from("ghost"), PlayerId::from("phantom")]);
            }
            other => panic!("Expected UnknownPlayers, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_owned_players() {
        let a = vec![worth("x", 10.0)];
        let b = vec![worth("y", 10.0)];
        let result = evaluate(&a, &b, &thresholds()).unwrap();
        assert_eq!(result.delta_a, 0.0);
        assert_eq!(result.verdict, Verdict::Fair);

        let empty: Vec<Player> = Vec::new();
        assert!(evaluate(&empty, &b, &thresholds()).is_err());
    }
}
