use go_rules::{GameConfig, GameSession, GoError, Stone};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Outcome string for a play attempt, as the front end expects it.
fn play_outcome(result: Result<u32, GoError>) -> &'static str {
    match result {
        Ok(_) => "accepted",
        Err(GoError::Occupied) => "occupied",
        Err(GoError::KoViolation) => "ko",
        Err(GoError::Suicide) => "suicide",
        Err(GoError::NotOnBoard) => "not_on_board",
        Err(GoError::NotInProgress) => "not_in_progress",
        Err(GoError::EmptyHistory | GoError::InvalidBoardSize(_)) => "rejected",
    }
}

fn undo_outcome(result: Result<(), GoError>) -> &'static str {
    match result {
        Ok(()) => "accepted",
        Err(GoError::EmptyHistory) => "empty_history",
        Err(GoError::NotInProgress) => "not_in_progress",
        Err(_) => "rejected",
    }
}

#[derive(Serialize)]
struct ScoreView {
    black: f64,
    white: f64,
    komi: f64,
    result: String,
}

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game with default komi. `size` must be 9, 13 or 19.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Result<WasmGame, String> {
        let inner = GameSession::with_side(size).map_err(|e| e.to_string())?;
        Ok(Self { inner })
    }

    /// Create a game from a JSON config: `{ "board_size": 9, "komi": 6.5 }`.
    /// Missing fields take their defaults.
    pub fn from_config(json: &str) -> Result<WasmGame, String> {
        let config: GameConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(Self {
            inner: GameSession::new(config),
        })
    }

    // -- Lifecycle --

    pub fn start(&mut self) -> bool {
        self.inner.start().is_ok()
    }

    pub fn end(&mut self) -> bool {
        self.inner.end().is_ok()
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    // -- Game actions --

    /// Returns "accepted", "occupied", "ko", "suicide", "not_on_board" or
    /// "not_in_progress".
    pub fn play(&mut self, row: u8, col: u8) -> String {
        play_outcome(self.inner.play((row, col))).to_string()
    }

    /// Returns "accepted", "empty_history" or "not_in_progress".
    pub fn undo(&mut self) -> String {
        undo_outcome(self.inner.undo()).to_string()
    }

    pub fn is_legal(&self, row: u8, col: u8) -> bool {
        self.inner.is_legal((row, col))
    }

    // -- Accessors (WASM-friendly types) --

    pub fn size(&self) -> u8 {
        self.inner.size().side()
    }

    pub fn board(&self) -> js_sys::Int8Array {
        let cells: Vec<i8> = self.inner.grid().cells().iter().map(|c| c.to_int()).collect();
        js_sys::Int8Array::from(cells.as_slice())
    }

    /// 1 = Black, -1 = White, 0 = empty or off the board.
    pub fn cell_at(&self, row: u8, col: u8) -> i8 {
        self.inner.stone_at((row, col)).map_or(0, Stone::to_int)
    }

    pub fn current_player(&self) -> i8 {
        self.inner.current_player().to_int()
    }

    pub fn captures_black(&self) -> u32 {
        self.inner.capture_counts().0
    }

    pub fn captures_white(&self) -> u32 {
        self.inner.capture_counts().1
    }

    pub fn last_move_row(&self) -> i8 {
        self.inner.last_move().map(|(row, _)| row as i8).unwrap_or(-1)
    }

    pub fn last_move_col(&self) -> i8 {
        self.inner.last_move().map(|(_, col)| col as i8).unwrap_or(-1)
    }

    /// Row of the point the current player is barred from by ko, or -1.
    pub fn ko_row(&self) -> i8 {
        let stone = self.inner.current_player();
        match self.inner.ko().forbidden_point(stone) {
            Some((row, _)) => row as i8,
            None => -1,
        }
    }

    pub fn ko_col(&self) -> i8 {
        let stone = self.inner.current_player();
        match self.inner.ko().forbidden_point(stone) {
            Some((_, col)) => col as i8,
            None => -1,
        }
    }

    pub fn history_len(&self) -> usize {
        self.inner.history_len()
    }

    // -- Scoring --

    /// Ownership per cell (1 = Black, -1 = White, 0 = unclaimed).
    pub fn territory(&self) -> js_sys::Int8Array {
        let ownership: Vec<i8> = self.inner.territory().iter().map(|c| c.to_int()).collect();
        js_sys::Int8Array::from(ownership.as_slice())
    }

    /// Returns JSON: `{"black":n,"white":n,"komi":n,"result":"B+3.5"}`
    pub fn score_json(&self) -> String {
        let gs = self.inner.game_score();
        let view = ScoreView {
            black: gs.black_total(),
            white: gs.white_total(),
            komi: gs.komi,
            result: gs.result(),
        };
        serde_json::to_string(&view).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }

    /// Full session state as JSON.
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.inner.game_state())
            .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
