use log::debug;

use crate::domain::stakes::StakeConfig;
use crate::engine::validation::parse_outcome_codes;
use crate::engine::{allocate_strokes, evaluate_thirty_ten_ten, settle_thirty_ten_ten};

use super::commands::Command;
use super::dto::{map_plan_to_dto, map_thirty_ten_ten_to_dto, CommandResponse};
use super::errors::ApiError;

/// Выполнить команду. Ошибка валидации не даёт частичного ответа.
pub fn execute(command: Command) -> Result<CommandResponse, ApiError> {
    match command {
        Command::AllocateStrokes(cmd) => {
            debug!(
                "AllocateStrokes: {} players, {} segments",
                cmd.players.len(),
                cmd.segments.len()
            );
            let plan = allocate_strokes(&cmd.players, &cmd.segments)?;
            Ok(CommandResponse::Plan(map_plan_to_dto(plan)))
        }

        Command::EvaluateThirtyTenTen(cmd) => {
            debug!("EvaluateThirtyTenTen: {} outcomes", cmd.outcomes.len());
            let outcomes = parse_outcome_codes(&cmd.outcomes)?;
            let stakes = cmd.stakes.unwrap_or_default();
            let outcome = evaluate_thirty_ten_ten(&outcomes)?;
            let settlement = settle_thirty_ten_ten(&outcome, &stakes)?;
            Ok(CommandResponse::ThirtyTenTen(map_thirty_ten_ten_to_dto(
                outcome, settlement,
            )))
        }
    }
}

/// JSON-обёртка над `execute`: команда в JSON -> ответ в JSON.
pub fn execute_json(json: &str) -> Result<String, ApiError> {
    let command: Command =
        serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let response = execute(command)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}

/// Разобрать конфиг ставок из JSON (для вызывающих, которые держат его в файле).
pub fn parse_stake_config(json: &str) -> Result<StakeConfig, ApiError> {
    StakeConfig::from_json_str(json).map_err(ApiError::BadRequest)
}
