use crate::ast::Expr;

/// Tolerance used to recognise `pi` and `e` when labelling number nodes.
const CONSTANT_TOLERANCE: f64 = 1e-6;

/// Renders an expression tree vertically, root first, one node per line.
///
/// Operators are shown as `[op]`, calls as `name()`, variables by name and
/// numbers in their shortest form, with `π` and `e` shown symbolically.
///
/// # Example
/// ```
/// use trigcalc::{display::render_tree, parse_str};
///
/// let expr = parse_str("3 + 4 * sin(x)").unwrap();
/// assert_eq!(render_tree(&expr),
///            "[+]\n\
///             ├── 3\n\
///             └── [*]\n    \
///                 ├── 4\n    \
///                 └── sin()\n        \
///                     └── x\n");
/// ```
#[must_use]
pub fn render_tree(expr: &Expr) -> String {
    let mut out = node_label(expr);
    out.push('\n');
    render_children(expr, "", &mut out);
    out
}

fn render_children(expr: &Expr, prefix: &str, out: &mut String) {
    let children = children(expr);
    let last = children.len().saturating_sub(1);

    for (i, child) in children.into_iter().enumerate() {
        let (branch, extension) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&node_label(child));
        out.push('\n');
        render_children(child, &format!("{prefix}{extension}"), out);
    }
}

/// Direct children of a node, left to right.
fn children(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Number { .. } | Expr::Variable { .. } => Vec::new(),
        Expr::UnaryOp { expr, .. } => vec![&**expr],
        Expr::BinaryOp { left, right, .. } => vec![&**left, &**right],
        Expr::FunctionCall { argument, .. } => vec![&**argument],
    }
}

/// Short label for a single node, without its children.
///
/// # Example
/// ```
/// use trigcalc::{ast::Expr, display::node_label};
///
/// assert_eq!(node_label(&Expr::number(2.0)), "2");
/// assert_eq!(node_label(&Expr::number(0.25)), "0.25");
/// assert_eq!(node_label(&Expr::number(std::f64::consts::PI)), "π");
/// assert_eq!(node_label(&Expr::negate(Expr::variable("x"))), "[-]");
/// ```
#[must_use]
pub fn node_label(expr: &Expr) -> String {
    match expr {
        Expr::Number { value, .. } => format_number(*value),
        Expr::Variable { name, .. } => name.clone(),
        Expr::UnaryOp { op, .. } => format!("[{}]", op.symbol()),
        Expr::BinaryOp { op, .. } => format!("[{}]", op.symbol()),
        Expr::FunctionCall { function, .. } => format!("{}()", function.name()),
    }
}

#[allow(clippy::float_cmp)]
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    if (value - std::f64::consts::PI).abs() < CONSTANT_TOLERANCE {
        return "π".to_string();
    }
    if (value - std::f64::consts::E).abs() < CONSTANT_TOLERANCE {
        return "e".to_string();
    }
    value.to_string()
}
