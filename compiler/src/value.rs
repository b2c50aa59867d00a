use std::{fmt, rc::Rc};

use crate::chunk::Chunk;

/// A string object. Immutable once allocated; uniqueness is a property the
/// [`crate::heap::Heap`] intern table maintains, not this type itself.
pub struct ObjString {
    pub chars: String,
    pub hash: u32,
}

impl ObjString {
    pub fn new(chars: String) -> Self {
        let hash = fnv1a(chars.as_bytes());
        Self { chars, hash }
    }
}

/// `hash ← 2166136261; for each byte b: hash ← (hash XOR b) × 16777619`, all
/// arithmetic wrapping at 32 bits.
pub fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 2166136261;
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(16777619);
    }
    hash
}

pub struct ObjFunction {
    pub arity: u8,
    pub chunk: Chunk,
    /// `None` for the synthetic top-level script function.
    pub name: Option<Rc<ObjString>>,
}

impl ObjFunction {
    pub fn new(name: Option<Rc<ObjString>>) -> Self {
        Self {
            arity: 0,
            chunk: Chunk::new(),
            name,
        }
    }
}

pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

pub struct ObjNative {
    pub function: NativeFn,
}

pub enum Obj {
    String(Rc<ObjString>),
    Function(Rc<ObjFunction>),
    Native(Rc<ObjNative>),
}

impl Clone for Obj {
    fn clone(&self) -> Self {
        match self {
            Obj::String(s) => Obj::String(Rc::clone(s)),
            Obj::Function(f) => Obj::Function(Rc::clone(f)),
            Obj::Native(n) => Obj::Native(Rc::clone(n)),
        }
    }
}

/// Objects compare by reference identity: strings are interned, so equal
/// content already implies the same allocation (§3, §8 property 1).
impl PartialEq for Obj {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Obj::String(a), Obj::String(b)) => Rc::ptr_eq(a, b),
            (Obj::Function(a), Obj::Function(b)) => Rc::ptr_eq(a, b),
            (Obj::Native(a), Obj::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obj::String(s) => write!(f, "{}", s.chars),
            Obj::Function(func) => match &func.name {
                Some(name) => write!(f, "<fn {}>", name.chars),
                None => write!(f, "<script>"),
            },
            Obj::Native(_) => write!(f, "<native fn>"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Obj(Obj),
}

impl Value {
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&Rc<ObjString>> {
        match self {
            Value::Obj(Obj::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<ObjFunction>> {
        match self {
            Value::Obj(Obj::Function(f)) => Some(f),
            _ => None,
        }
    }

    pub fn as_native(&self) -> Option<&Rc<ObjNative>> {
        match self {
            Value::Obj(Obj::Native(n)) => Some(n),
            _ => None,
        }
    }
}

impl From<Rc<ObjString>> for Value {
    fn from(s: Rc<ObjString>) -> Self {
        Value::Obj(Obj::String(s))
    }
}

impl From<Rc<ObjFunction>> for Value {
    fn from(f: Rc<ObjFunction>) -> Self {
        Value::Obj(Obj::Function(f))
    }
}

impl From<Rc<ObjNative>> for Value {
    fn from(n: Rc<ObjNative>) -> Self {
        Value::Obj(Obj::Native(n))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Obj(o) => write!(f, "{o}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_matches_spec() {
        assert!(!Value::Nil.truthy());
        assert!(!Value::Bool(false).truthy());
        assert!(Value::Bool(true).truthy());
        assert!(Value::Number(0.0).truthy());
        assert!(Value::from(Rc::new(ObjString::new(String::new()))).truthy());
    }

    #[test]
    fn fnv1a_matches_reference_vector() {
        assert_eq!(fnv1a(b""), 2166136261);
        assert_eq!(fnv1a(b"a"), 0x050c5d7f);
    }

    #[test]
    fn strings_compare_by_reference_identity() {
        let a = Rc::new(ObjString::new("hi".to_string()));
        let b = Rc::new(ObjString::new("hi".to_string()));
        assert_ne!(Value::from(Rc::clone(&a)), Value::from(b));
        assert_eq!(Value::from(Rc::clone(&a)), Value::from(a));
    }

    #[test]
    fn number_display_is_compact() {
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
    }
}
