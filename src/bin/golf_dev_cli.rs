// src/bin/golf_dev_cli.rs

use std::fs;

use anyhow::Context;
use log::{error, info};

use golf_engine::api::{execute_json, ApiError};
use golf_engine::domain::outcome::parse_outcomes;
use golf_engine::domain::{Player, Segment, Side, StakeConfig};
use golf_engine::{allocate_strokes, evaluate_thirty_ten_ten, settle_thirty_ten_ten};

fn main() -> anyhow::Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    // С аргументом: JSON-команда из файла -> JSON-ответ в stdout.
    if let Some(path) = std::env::args().nth(1) {
        let json = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
        let response = execute_json(&json).map_err(|err: ApiError| {
            error!("command rejected: {err}");
            err
        })?;
        println!("{response}");
        return Ok(());
    }

    println!("=== GOLF ENGINE DEV CLI ===\n");
    demo_allocation()?;
    demo_thirty_ten_ten("AAHBAAABB")?;
    demo_thirty_ten_ten("HBHAHAHHA")?;

    info!("done");
    Ok(())
}

/// Классический пример: 12 против 9, три сегмента по три лунки.
fn demo_allocation() -> anyhow::Result<()> {
    let players = vec![
        Player::new(1, "Alice", 12, Side::A),
        Player::new(2, "Boris", 9, Side::B),
    ];
    let segments = vec![
        Segment::from_pairs(1, &[(1, 1), (2, 5), (3, 9)]),
        Segment::from_pairs(2, &[(4, 2), (5, 6), (6, 8)]),
        Segment::from_pairs(3, &[(7, 3), (8, 7), (9, 4)]),
    ];

    let plan = allocate_strokes(&players, &segments)?;

    println!(
        "Удары гандикапа (A = {}, B = {}):",
        players[0].course_handicap, players[1].course_handicap
    );
    for side in Side::ALL {
        let row: Vec<String> = plan
            .strokes(side)
            .iter()
            .map(|(hole, strokes)| format!("{hole}:{strokes}"))
            .collect();
        println!("  {side}: {}", row.join(" "));
    }
    println!();
    Ok(())
}

fn demo_thirty_ten_ten(codes: &str) -> anyhow::Result<()> {
    let outcomes = parse_outcomes(codes).map_err(anyhow::Error::msg)?;
    let outcome = evaluate_thirty_ten_ten(&outcomes)?;
    let settlement = settle_thirty_ten_ten(&outcome, &StakeConfig::default())?;

    let show = |winner: Option<Side>| winner.map_or("void".to_string(), |s| s.to_string());

    println!("30-10-10 для {codes}:");
    println!("  main:   {}", show(outcome.main.winner));
    println!("  dormie: {}", show(outcome.dormie.winner));
    println!("  bye:    {}", show(outcome.bye.winner));
    println!(
        "  итог: A {:+}, B {:+}\n",
        settlement.net_for(Side::A),
        settlement.net_for(Side::B)
    );
    Ok(())
}
