#![warn(missing_docs)]

//! # `tilematch`
//!
//! The board of a "match-3" tile puzzle: a fixed grid of pieces, swaps between pieces sharing a row or column,
//! and detection of runs of three or more identical pieces.
//! Begin by making a [`Board`], either directly with [`Board::new`] and a piece [`Generator`] or through a [`BoardBuilder`].
//! Register listeners with [`Board::add_listener`], then call [`Board::make_move`] to swap pieces and hear about the results.
//!
//! Pieces can be any type with [`PartialEq`]; the board never looks inside them.
//! Empty cells are [`None`] in a [`Cell`] and never match anything.
//!
//! # Events
//! A successful move reports, in order:
//! 1. every horizontal window of three identical pieces, then every vertical one, as [`BoardEvent::Match`]es.
//! Runs longer than three are reported once per overlapping window;
//! 2. every empty cell which would hold a match if the piece above it fell in, as a [`BoardEvent::Match`] naming only that cell;
//! 3. a [`BoardEvent::Refill`], only if step 2 found nothing.
//!
//! The board never clears, drops or refills pieces itself.
//! Those are left to listeners, which is why a move changes nothing but the two swapped cells.
//!
//! # Example
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use tilematch::{BoardBuilder, BoardEvent, BoardEventKind, Position};
//!
//! let mut board = BoardBuilder::from_text("
//!     ABAA
//!     BBBC
//!     CCAC
//!     AACA
//! ").build().unwrap();
//!
//! let heard = Rc::new(RefCell::new(Vec::new()));
//! let sink = heard.clone();
//! board.add_listener(move |event: &BoardEvent<char>| sink.borrow_mut().push(BoardEventKind::from(event)));
//!
//! assert!(board.make_move(Position::new(1, 3), Position::new(0, 3)));
//! assert_eq!(heard.borrow()[0], BoardEventKind::Match);
//! assert_eq!(format!("{}", board), "ABAC\nBBBA\nCCAC\nAACA\n");
//! ```

pub use board::Board;
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use event::{BoardEvent, BoardEventKind, Listener};
pub use generator::Generator;
pub use grid::{Cell, MIN_RUN};
pub use position::Position;
pub use scanner::Match;
pub use step::{Axis, Step};

pub(crate) mod board;
pub mod builder;
pub(crate) mod cascade;
pub(crate) mod event;
pub(crate) mod generator;
pub(crate) mod grid;
pub(crate) mod position;
pub(crate) mod scanner;
pub(crate) mod step;
#[cfg(feature = "wasm")]
pub mod wasm;
