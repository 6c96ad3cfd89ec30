//! Demo commands
//!
//! The driver catches and reports every error; the core never prints.

use std::time::Instant;

use numerix::{
    logger, promotion_target, Complex32, Evaluator, Numeric, Operator, Phase, Variant,
};
use tracing::{debug, info};

use crate::output::{self, Cell, Row};

/// The demo vector: one value of each non-Complex64 variant
pub fn demo_values() -> Vec<Numeric> {
    vec![
        Numeric::from(10),
        Numeric::from(5.5f32),
        Numeric::from(3.75),
        Numeric::from(Complex32::new(1.0, 2.0)),
        Numeric::from('A'),
    ]
}

/// Evaluate every operator for every ordered pair of distinct positions
pub fn pairwise(ev: &Evaluator, values: &[Numeric]) -> Vec<Row> {
    let mut rows = Vec::new();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            if i == j {
                continue;
            }
            let cells = Operator::ARITHMETIC
                .iter()
                .map(|&op| (op, Cell::from_value(ev, ev.apply(op, a, b))))
                .chain(
                    Operator::COMPARISON
                        .iter()
                        .map(|&op| (op, Cell::from_bool(ev.check(op, a, b)))),
                )
                .collect();
            rows.push(Row {
                lhs: ev.render(a),
                rhs: ev.render(b),
                cells,
            });
        }
    }
    rows
}

/// Sort ascending; the result is non-decreasing under `less_than`
pub fn sort_ascending(values: &mut [Numeric]) {
    values.sort_by(Numeric::total_cmp);
}

pub fn demo(ev: &Evaluator, json: bool) {
    let mut values = demo_values();
    log_promotion_matrix();

    let rows = pairwise(ev, &values);
    sort_ascending(&mut values);

    if json {
        println!("{:#}", output::to_json(ev, &rows, &values));
        return;
    }

    println!("Initial values:");
    for v in demo_values() {
        println!("  {}", ev.render(&v));
    }
    output::print_rows(&rows);

    println!("\nSorted values (ascending):");
    for v in &values {
        println!("  {}", ev.render(v));
    }
}

pub fn showcase(ev: &Evaluator) {
    let groups: [(&str, [Numeric; 3]); 5] = [
        ("Integer", [Numeric::from(10), Numeric::from(20), Numeric::from(0)]),
        (
            "Float32",
            [Numeric::from(5.5f32), Numeric::from(10.5f32), Numeric::from(0.0f32)],
        ),
        (
            "Float64",
            [Numeric::from(5.5), Numeric::from(10.5), Numeric::from(0.0)],
        ),
        (
            "Complex",
            [
                Numeric::complex32(3.0, 4.0),
                Numeric::complex32(5.0, 6.0),
                Numeric::complex32(0.0, 0.0),
            ],
        ),
        (
            "Char",
            [Numeric::from('a'), Numeric::from('b'), Numeric::from('\0')],
        ),
    ];

    for (name, [x, y, zero]) in &groups {
        println!("\n== {name} ==");
        for op in Operator::ARITHMETIC {
            println!(
                "{} {} {} = {}",
                ev.render(x),
                op.symbol(),
                ev.render(y),
                Cell::from_value(ev, ev.apply(op, x, y))
            );
        }
        println!(
            "{} / {} = {}",
            ev.render(x),
            ev.render(zero),
            Cell::from_value(ev, ev.quotient(x, zero))
        );
        for op in Operator::COMPARISON {
            println!(
                "{} {} {} = {}",
                ev.render(x),
                op.symbol(),
                ev.render(y),
                Cell::from_bool(ev.check(op, x, y))
            );
        }
    }

    println!("\n== Unsupported type ==");
    match Numeric::create("UnsupportedType") {
        Ok(v) => println!("created {}", ev.render(&v)),
        Err(e) => println!("error: {e}"),
    }
}

pub fn bench(ev: &Evaluator, count: usize, seed: u64) {
    let mut values = generate(count, seed);
    info!(target: "numerix::cli", count, seed, "sorting generated values");

    let start = Instant::now();
    sort_ascending(&mut values);
    let elapsed = start.elapsed();

    let ordered = values.windows(2).all(|w| !w[1].less_than(&w[0]));
    println!("Sorted {count} values in {elapsed:?} (ordered: {ordered})");
    if let (Some(first), Some(last)) = (values.first(), values.last()) {
        println!("min = {}, max = {}", ev.render(first), ev.render(last));
    }
}

/// Deterministic mixed sequence (xorshift64*)
pub fn generate(count: usize, seed: u64) -> Vec<Numeric> {
    let mut state = seed | 1;
    let mut next = move || {
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    };

    (0..count)
        .map(|_| {
            let r = next();
            // Small magnitudes keep Integer to Float32 promotion exact
            let n = ((r >> 8) % 2001) as i32 - 1000;
            let m = ((r >> 24) % 2001) as i32 - 1000;
            match r % 6 {
                0 => Numeric::Integer(n),
                1 => Numeric::Float32(n as f32 / 4.0),
                2 => Numeric::Float64(f64::from(n) / 8.0),
                3 => Numeric::complex32(n as f32 / 2.0, m as f32 / 2.0),
                4 => Numeric::complex64(f64::from(n), f64::from(m) / 16.0),
                _ => Numeric::CharCode(char::from(b'A' + (r >> 40) as u8 % 58)),
            }
        })
        .collect()
}

fn log_promotion_matrix() {
    if !logger::is_enabled(Phase::Promotion) {
        return;
    }
    for a in Variant::ALL {
        for b in Variant::ALL {
            if let Ok(target) = promotion_target(a, b) {
                debug!(target: "numerix::promotion", lhs = %a, rhs = %b, to = %target, "rule");
            }
        }
    }
}
