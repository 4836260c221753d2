//! Dungeon scenario tests

mod support;
