use sqlparser::ast::{Expr, Function, FunctionArg, FunctionArgExpr, FunctionArguments, UnaryOperator};

/// Strip any number of enclosing parentheses.
pub fn unwrap_nested(expr: &Expr) -> &Expr {
    match expr {
        Expr::Nested(inner) => unwrap_nested(inner),
        _ => expr,
    }
}

/// Extract the expression payload from a SQL function argument.
pub fn function_arg_expr(arg: &FunctionArg) -> Option<&Expr> {
    match arg {
        FunctionArg::Unnamed(FunctionArgExpr::Expr(expr))
        | FunctionArg::Named {
            arg: FunctionArgExpr::Expr(expr),
            ..
        }
        | FunctionArg::ExprNamed {
            arg: FunctionArgExpr::Expr(expr),
            ..
        } => Some(expr),
        _ => None,
    }
}

/// Uppercased function name, schema qualification included.
pub fn function_name_upper(func: &Function) -> String {
    func.name.to_string().to_uppercase()
}

/// Textual form of the first argument of a function call.
///
/// `COUNT(*)` yields `"*"`. Returns `None` for calls without an argument list
/// (`CURRENT_DATE`) or with an empty one (`NOW()`).
pub fn first_argument_text(func: &Function) -> Option<String> {
    let FunctionArguments::List(arg_list) = &func.args else {
        return None;
    };
    let first = arg_list.args.first()?;
    Some(match function_arg_expr(first) {
        Some(expr) => expr.to_string(),
        None => first.to_string(),
    })
}

/// Function call wrapped by `expr`, looking through parentheses.
pub fn as_function(expr: &Expr) -> Option<&Function> {
    match unwrap_nested(expr) {
        Expr::Function(func) => Some(func),
        _ => None,
    }
}

/// True for SQL literals, including signed numbers such as `-5`.
pub fn is_literal(expr: &Expr) -> bool {
    match unwrap_nested(expr) {
        Expr::Value(_) => true,
        Expr::UnaryOp {
            op: UnaryOperator::Minus | UnaryOperator::Plus,
            expr,
        } => matches!(unwrap_nested(expr), Expr::Value(_)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::dialect::GenericDialect;
    use sqlparser::parser::Parser;

    fn parse_expr(sql: &str) -> Expr {
        Parser::new(&GenericDialect {})
            .try_with_sql(sql)
            .unwrap()
            .parse_expr()
            .unwrap()
    }

    #[test]
    fn unwrap_nested_strips_every_paren_layer() {
        let expr = parse_expr("((a = 1))");
        assert_eq!(unwrap_nested(&expr).to_string(), "a = 1");
    }

    #[test]
    fn first_argument_text_handles_columns_wildcards_and_empty_calls() {
        let sum = parse_expr("sum(o.amount, 2)");
        let count = parse_expr("count(*)");
        let now = parse_expr("now()");

        assert_eq!(
            first_argument_text(as_function(&sum).unwrap()).as_deref(),
            Some("o.amount")
        );
        assert_eq!(
            first_argument_text(as_function(&count).unwrap()).as_deref(),
            Some("*")
        );
        assert_eq!(first_argument_text(as_function(&now).unwrap()), None);
    }

    #[test]
    fn function_name_is_uppercased() {
        let expr = parse_expr("avg(salary)");
        assert_eq!(function_name_upper(as_function(&expr).unwrap()), "AVG");
    }

    #[test]
    fn is_literal_accepts_values_and_signed_numbers_only() {
        assert!(is_literal(&parse_expr("10")));
        assert!(is_literal(&parse_expr("'open'")));
        assert!(is_literal(&parse_expr("-5")));
        assert!(!is_literal(&parse_expr("other_col")));
        assert!(!is_literal(&parse_expr("1 + 1")));
    }
}
