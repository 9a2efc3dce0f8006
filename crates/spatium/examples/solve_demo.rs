//! Composes interval expressions, solves them, and prints the results.

use spatium::prelude::*;

fn main() -> Result<(), AlgebraError> {
    // A fully constant tree folds to a single interval:
    // [0,1] / [2,5] + [0,1] * [2,0]
    let expr = Expr::constant(Interval::from_i64(0, 1)) / Expr::constant(Interval::from_i64(2, 5))
        + Expr::constant(Interval::from_i64(0, 1)) * Expr::constant(Interval::from_i64(2, 0));
    println!("{}", expr.render()?);

    // x * [3,4] - y, solved partially and then fully.
    let x = Expr::variable("x")?;
    let y = Expr::variable("y")?;
    let expr = x * Expr::constant(Interval::from_i64(3, 4)) - y;

    let mut bindings = Bindings::new();
    bindings.insert("x", Interval::from_i64(1, 2));
    println!("{}", expr.solve(&bindings)?);

    bindings.insert("y", Interval::from_i64(0, 1));
    println!("{}", expr.solve(&bindings)?);

    Ok(())
}
