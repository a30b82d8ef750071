//! Case-insensitive substring conditions.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ColumnTrait, Condition,
};

/// `LOWER(col) LIKE '%term%'` with LIKE wildcards in `term` escaped
pub fn contains_ci<C: ColumnTrait>(col: C, term: &str) -> Expr {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    Expr::expr(Func::lower(Expr::col(col.as_column_ref()))).like(LikeExpr::new(pattern).escape('\\'))
}

/// Matches when any of `cols` contains `term`
pub fn any_contains_ci<C: ColumnTrait>(cols: &[C], term: &str) -> Condition {
    cols.iter()
        .fold(Condition::any(), |cond, col| cond.add(contains_ci(*col, term)))
}

/// `LOWER(col) = term`, used for exact filters such as country
pub fn equals_ci<C: ColumnTrait>(col: C, term: &str) -> Expr {
    Expr::expr(Func::lower(Expr::col(col.as_column_ref()))).eq(term.to_lowercase())
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());

    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    escaped
}
