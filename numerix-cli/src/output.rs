//! Table and JSON output for the demo

use std::fmt;

use numerix::{Evaluator, Numeric, NumericError, Operator};
use serde_json::{json, Value};

/// Outcome of one operation, already rendered
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Value(String),
    Bool(bool),
    Error(String),
}

impl Cell {
    pub fn from_value(ev: &Evaluator, result: Result<Numeric, NumericError>) -> Self {
        match result {
            Ok(v) => Cell::Value(ev.render(&v)),
            Err(e) => Cell::Error(e.to_string()),
        }
    }

    pub fn from_bool(result: Result<bool, NumericError>) -> Self {
        match result {
            Ok(b) => Cell::Bool(b),
            Err(e) => Cell::Error(e.to_string()),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Cell::Value(s) => json!(s),
            Cell::Bool(b) => json!(b),
            Cell::Error(e) => json!({ "error": e }),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Value(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Error(e) => write!(f, "error: {e}"),
        }
    }
}

/// All operations for one ordered pair
#[derive(Debug, Clone)]
pub struct Row {
    pub lhs: String,
    pub rhs: String,
    pub cells: Vec<(Operator, Cell)>,
}

pub fn print_rows(rows: &[Row]) {
    for row in rows {
        println!("\n{} and {}:", row.lhs, row.rhs);
        for (op, cell) in &row.cells {
            println!("  {} {} {} = {}", row.lhs, op.symbol(), row.rhs, cell);
        }
    }
}

/// JSON document with the pairwise table and the sorted values
pub fn to_json(ev: &Evaluator, rows: &[Row], sorted: &[Numeric]) -> Value {
    let pairs: Vec<Value> = rows
        .iter()
        .map(|row| {
            let ops: serde_json::Map<String, Value> = row
                .cells
                .iter()
                .map(|(op, cell)| (op.method_name().to_string(), cell.to_json()))
                .collect();
            json!({
                "lhs": row.lhs,
                "rhs": row.rhs,
                "ops": ops
            })
        })
        .collect();

    let sorted: Vec<Value> = sorted
        .iter()
        .map(|v| {
            json!({
                "variant": v.variant().name(),
                "value": ev.render(v)
            })
        })
        .collect();

    json!({
        "pairs": pairs,
        "sorted": sorted
    })
}
