use golf_engine::{
    api::{
        commands::{AllocateStrokesCommand, Command, EvaluateThirtyTenTenCommand},
        dto::{CommandResponse, HoleStrokesDto},
        errors::ApiError,
        handler::{execute, execute_json, parse_stake_config},
    },
    domain::{Player, Segment, Side, StakeConfig},
    engine::errors::EngineError,
};

/// Утилита: классический вход 12 против 9 на трёх сегментах.
fn allocate_command() -> AllocateStrokesCommand {
    AllocateStrokesCommand {
        players: vec![
            Player::new(1, "Alice", 12, Side::A),
            Player::new(2, "Boris", 9, Side::B),
        ],
        segments: vec![
            Segment::from_pairs(1, &[(1, 1), (2, 5), (3, 9)]),
            Segment::from_pairs(2, &[(4, 2), (5, 6), (6, 8)]),
            Segment::from_pairs(3, &[(7, 3), (8, 7), (9, 4)]),
        ],
    }
}

fn codes(s: &str) -> Vec<String> {
    s.chars().map(|c| c.to_string()).collect()
}

// ----------------------
// execute
// ----------------------

#[test]
fn allocate_command_returns_plan_dto() {
    let response = execute(Command::AllocateStrokes(allocate_command())).unwrap();

    let dto = match response {
        CommandResponse::Plan(dto) => dto,
        other => panic!("Expected CommandResponse::Plan, got {other:?}"),
    };

    assert_eq!(dto.total_a, 3);
    assert_eq!(dto.total_b, 0);
    assert_eq!(dto.receiving_side, Some(Side::A));
    assert_eq!(dto.holes.len(), 9);
    assert_eq!(
        dto.holes[3],
        HoleStrokesDto {
            hole: 4,
            strokes_a: 1,
            strokes_b: 0,
        }
    );
}

#[test]
fn equal_handicaps_have_no_receiving_side() {
    let mut cmd = allocate_command();
    cmd.players[1].course_handicap = 12;

    match execute(Command::AllocateStrokes(cmd)).unwrap() {
        CommandResponse::Plan(dto) => {
            assert_eq!(dto.receiving_side, None);
            assert!(dto.holes.iter().all(|h| h.strokes_a == 0 && h.strokes_b == 0));
        }
        other => panic!("Expected CommandResponse::Plan, got {other:?}"),
    }
}

#[test]
fn evaluate_command_uses_default_stakes() {
    let cmd = EvaluateThirtyTenTenCommand {
        outcomes: codes("AAHBAAABB"),
        stakes: None,
    };

    match execute(Command::EvaluateThirtyTenTen(cmd)).unwrap() {
        CommandResponse::ThirtyTenTen(dto) => {
            assert_eq!(dto.main.winner, Some(Side::A));
            assert_eq!(dto.dormie.winner, Some(Side::B));
            assert_eq!(dto.bye.winner, Some(Side::B));
            assert_eq!(dto.net_a, 10);
            assert_eq!(dto.net_b, -10);
        }
        other => panic!("Expected CommandResponse::ThirtyTenTen, got {other:?}"),
    }
}

#[test]
fn engine_errors_map_to_invalid_input() {
    let mut cmd = allocate_command();
    cmd.players.pop();

    let err = execute(Command::AllocateStrokes(cmd)).unwrap_err();
    assert_eq!(err, ApiError::from(EngineError::WrongPlayerCount(1)));
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let bad_code = EvaluateThirtyTenTenCommand {
        outcomes: codes("AAHBAAQBB"),
        stakes: None,
    };
    assert_eq!(
        execute(Command::EvaluateThirtyTenTen(bad_code)).unwrap_err(),
        ApiError::from(EngineError::InvalidOutcome("Q".into()))
    );

    let short = EvaluateThirtyTenTenCommand {
        outcomes: codes("AAH"),
        stakes: None,
    };
    assert_eq!(
        execute(Command::EvaluateThirtyTenTen(short)).unwrap_err(),
        ApiError::from(EngineError::WrongOutcomeCount {
            expected: 9,
            found: 3,
        })
    );

    let bad_stakes = EvaluateThirtyTenTenCommand {
        outcomes: codes("AAHBAAABB"),
        stakes: Some(StakeConfig::new(0, 10, 10)),
    };
    assert!(matches!(
        execute(Command::EvaluateThirtyTenTen(bad_stakes)),
        Err(ApiError::InvalidInput(_))
    ));
}

// ----------------------
// execute_json
// ----------------------

#[test]
fn json_round_trip_for_thirty_ten_ten() {
    let request = r#"{
        "EvaluateThirtyTenTen": {
            "outcomes": ["H", "B", "H", "A", "H", "A", "H", "H", "A"],
            "stakes": { "main": 30, "dormie": 10, "bye": 10 }
        }
    }"#;

    let response = execute_json(request).unwrap();
    let decoded: CommandResponse = serde_json::from_str(&response).unwrap();

    match decoded {
        CommandResponse::ThirtyTenTen(dto) => {
            assert_eq!(dto.main.winner, None);
            assert_eq!(dto.main.trigger_hole, None);
            assert_eq!(dto.dormie.winner, Some(Side::A));
        }
        other => panic!("Expected CommandResponse::ThirtyTenTen, got {other:?}"),
    }
}

#[test]
fn json_allocate_accepts_numeric_hole_keys() {
    let request = r#"{
        "AllocateStrokes": {
            "players": [
                { "id": 1, "name": "Alice", "course_handicap": 5, "side": "A" },
                { "id": 2, "name": "Boris", "course_handicap": 7, "side": "B" }
            ],
            "segments": [
                { "id": 1, "holes": [1, 2, 3], "stroke_index_by_hole": { "1": 3, "2": 1, "3": 2 } }
            ]
        }
    }"#;

    let response = execute_json(request).unwrap();
    let decoded: CommandResponse = serde_json::from_str(&response).unwrap();

    match decoded {
        CommandResponse::Plan(dto) => {
            assert_eq!(dto.receiving_side, Some(Side::B));
            assert_eq!(dto.plan.strokes_on(Side::B, 2), 1);
            assert_eq!(dto.plan.strokes_on(Side::B, 3), 1);
            assert_eq!(dto.plan.strokes_on(Side::B, 1), 0);
        }
        other => panic!("Expected CommandResponse::Plan, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_bad_request() {
    assert!(matches!(
        execute_json("{ not json"),
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(
        execute_json(r#"{"Unknown": {}}"#),
        Err(ApiError::BadRequest(_))
    ));
}

#[test]
fn stake_config_parsing_reports_bad_request() {
    assert_eq!(
        parse_stake_config(r#"{"bye": 5}"#).unwrap(),
        StakeConfig::new(30, 10, 5)
    );
    assert!(matches!(
        parse_stake_config(r#"{"main": 0}"#),
        Err(ApiError::BadRequest(_))
    ));
}
