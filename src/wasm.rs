//! JavaScript bindings, enabled by the `wasm` feature.
//!
//! Pieces cross the boundary as numbers. A generator result which is falsy in JavaScript (`0`, `null`, `undefined`, `false`, `NaN`)
//! becomes an empty cell, and empty cells come back out as `null`.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::event::{BoardEvent, BoardEventKind, Listener};
use crate::grid::Cell;
use crate::position::Position;
use crate::Board;

type Piece = u32;

fn piece_from_js(value: JsValue) -> Cell<Piece> {
    value.as_f64()
        .filter(|n| *n != 0.0 && n.is_finite() && *n >= 0.0)
        .map(|n| n as Piece)
}

fn position_to_js(position: &Position) -> JsValue {
    Array::of2(&JsValue::from(position.row as f64), &JsValue::from(position.col as f64)).into()
}

fn event_to_js(event: &BoardEvent<Piece>) -> JsValue {
    let object = Object::new();
    let kind: &'static str = BoardEventKind::from(event).into();
    // setting properties on a fresh plain object cannot fail
    let _ = Reflect::set(&object, &"kind".into(), &kind.into());

    if let BoardEvent::Match(found) = event {
        let positions = found.positions.iter().map(position_to_js).collect::<Array>();
        let _ = Reflect::set(&object, &"matched".into(), &found.matched.into());
        let _ = Reflect::set(&object, &"positions".into(), &positions.into());
    }

    object.into()
}

struct JsListener(Function);

impl Listener<Piece> for JsListener {
    fn notify(&mut self, event: &BoardEvent<Piece>) {
        // a throwing listener must not stop the others from hearing about the event
        let _ = self.0.call1(&JsValue::NULL, &event_to_js(event));
    }
}

/// A [`Board`] of numeric pieces, exported to JavaScript.
#[wasm_bindgen]
pub struct WasmBoard {
    board: Board<Piece>,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Make a board, calling `generator()` once per cell in row-major order.
    #[wasm_bindgen(constructor)]
    pub fn new(generator: &Function, width: usize, height: usize) -> WasmBoard {
        WasmBoard {
            board: Board::new(|| piece_from_js(generator.call0(&JsValue::NULL).unwrap_or(JsValue::UNDEFINED)), width, height),
        }
    }

    /// Number of columns.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Number of rows.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Every position, row-major, as `[row, col]` pairs.
    pub fn positions(&self) -> Array {
        self.board.positions().map(|p| position_to_js(&p)).collect()
    }

    /// The piece at `(row, col)`; `null` for an empty cell and `undefined` off the board.
    pub fn piece(&self, row: isize, col: isize) -> JsValue {
        match self.board.piece(Position::new(row, col)) {
            Some(Some(piece)) => JsValue::from(*piece),
            Some(None) => JsValue::NULL,
            None => JsValue::UNDEFINED,
        }
    }

    /// See [`Board::can_move`].
    #[wasm_bindgen(js_name = canMove)]
    pub fn can_move(&self, first_row: isize, first_col: isize, second_row: isize, second_col: isize) -> bool {
        self.board.can_move(Position::new(first_row, first_col), Position::new(second_row, second_col))
    }

    /// See [`Board::make_move`].
    #[wasm_bindgen(js_name = "move")]
    pub fn make_move(&mut self, first_row: isize, first_col: isize, second_row: isize, second_col: isize) -> bool {
        self.board.make_move(Position::new(first_row, first_col), Position::new(second_row, second_col))
    }

    /// Register `listener`, called with `{ kind, matched?, positions? }` objects.
    #[wasm_bindgen(js_name = addListener)]
    pub fn add_listener(&mut self, listener: Function) {
        self.board.add_listener(JsListener(listener))
    }
}
