use super::SymExpr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`SymExpr::post_order_iter`]. Sub-trees shared between several
/// nodes are yielded once per occurrence.
pub struct ExprIter<'a> {
    /// Each expression on the stack, and whether its children have been pushed.
    stack: Vec<(&'a SymExpr, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a SymExpr) -> Self {
        Self {
            stack: vec![(expr, false)],
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a SymExpr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.last_mut()?;
            let expr = *expr;
            if *expanded {
                self.stack.pop();
                return Some(expr);
            }
            *expanded = true;

            match expr {
                SymExpr::Number(_) | SymExpr::Variable(_) | SymExpr::Infinity(_) => (),
                SymExpr::Sqrt(radicand) => self.stack.push((&**radicand, false)),
                SymExpr::Power(lhs, rhs) | SymExpr::Mul(lhs, rhs) | SymExpr::Add(lhs, rhs) => {
                    self.stack.push((&**rhs, false));
                    self.stack.push((&**lhs, false));
                },
            }
        }
    }
}
