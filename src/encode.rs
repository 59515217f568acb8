//! Conversion of host values into expressions.
//!
//! [`Encode`] is the catch-all entry point behind [`query::value`](crate::query::value).
//! Implementations exist only for host values with a deterministic encoding:
//! ordered maps (`BTreeMap`, `serde_json::Map`) are supported, `HashMap` is not,
//! because its iteration order would leak into the wire document.

use std::collections::BTreeMap;

use crate::ast::{Expr, arr, obj};
use crate::error::{Error, Result};
use crate::value::Value;

/// Encodes a host value as an expression.
pub trait Encode {
    fn encode(&self) -> Result<Expr>;
}

impl Encode for Expr {
    fn encode(&self) -> Result<Expr> {
        Ok(self.clone())
    }
}

impl Encode for Value {
    fn encode(&self) -> Result<Expr> {
        Ok(Expr::Literal(self.clone()))
    }
}

impl Encode for str {
    fn encode(&self) -> Result<Expr> {
        Ok(self.into())
    }
}

impl Encode for String {
    fn encode(&self) -> Result<Expr> {
        Ok(self.as_str().into())
    }
}

impl Encode for bool {
    fn encode(&self) -> Result<Expr> {
        Ok((*self).into())
    }
}

impl Encode for i32 {
    fn encode(&self) -> Result<Expr> {
        Ok((*self).into())
    }
}

impl Encode for i64 {
    fn encode(&self) -> Result<Expr> {
        Ok((*self).into())
    }
}

impl Encode for u32 {
    fn encode(&self) -> Result<Expr> {
        Ok((*self).into())
    }
}

impl Encode for u64 {
    fn encode(&self) -> Result<Expr> {
        i64::try_from(*self)
            .map(Expr::from)
            .map_err(|_| Error::invalid_literal("long", format!("{self} exceeds i64::MAX")))
    }
}

impl Encode for f64 {
    fn encode(&self) -> Result<Expr> {
        Value::double(*self).map(Expr::Literal)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Result<Expr> {
        (**self).encode()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Result<Expr> {
        match self {
            Some(value) => value.encode(),
            None => Ok(Expr::Literal(Value::Null)),
        }
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self) -> Result<Expr> {
        let items = self.iter().map(|item| item.encode()).collect::<Result<Vec<_>>>()?;
        Ok(arr(items))
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> Result<Expr> {
        self.as_slice().encode()
    }
}

impl<T: Encode> Encode for BTreeMap<String, T> {
    fn encode(&self) -> Result<Expr> {
        let pairs = self
            .iter()
            .map(|(k, v)| Ok((k.clone(), v.encode()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(obj(pairs))
    }
}

impl Encode for serde_json::Value {
    fn encode(&self) -> Result<Expr> {
        match self {
            serde_json::Value::Null => Ok(Expr::Literal(Value::Null)),
            serde_json::Value::Bool(b) => Ok((*b).into()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i.into())
                } else if let Some(u) = n.as_u64() {
                    u.encode()
                } else {
                    let f = n
                        .as_f64()
                        .ok_or_else(|| Error::invalid_literal("double", format!("{n}")))?;
                    f.encode()
                }
            }
            serde_json::Value::String(s) => Ok(s.as_str().into()),
            serde_json::Value::Array(items) => items.as_slice().encode(),
            serde_json::Value::Object(map) => {
                let pairs = map
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), v.encode()?)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(obj(pairs))
            }
        }
    }
}
