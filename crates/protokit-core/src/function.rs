//! Native functions
//!
//! A function is a scalar from the duplication point of view: cloning or
//! copying one hands back the very same function.

use crate::error::Result;
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

/// Signature of a native function body: `(this, args) -> result`
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value>;

struct FunctionInner {
    name: String,
    body: Box<NativeFn>,
}

/// Reference-counted callable with identity semantics
#[derive(Clone)]
pub struct Function(Rc<FunctionInner>);

impl Function {
    /// Wrap a closure as a function value
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + 'static,
    {
        Self(Rc::new(FunctionInner {
            name: name.into(),
            body: Box::new(body),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Invoke with an explicit receiver
    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value> {
        (self.0.body)(this, args)
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Function").field(&self.0.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_passes_receiver_and_args() {
        let first_or_this = Function::new("pick", |this, args| {
            Ok(args.first().cloned().unwrap_or_else(|| this.clone()))
        });

        assert_eq!(
            first_or_this.call(&Value::from("this"), &[]).unwrap(),
            Value::from("this")
        );
        assert_eq!(
            first_or_this
                .call(&Value::Undefined, &[Value::from(1)])
                .unwrap(),
            Value::from(1)
        );
    }

    #[test]
    fn test_identity() {
        let f = Function::new("f", |_, _| Ok(Value::Undefined));
        let g = Function::new("f", |_, _| Ok(Value::Undefined));
        assert!(f.ptr_eq(&f.clone()));
        assert!(!f.ptr_eq(&g));
    }
}
