use std::rc::Rc;

use crate::table::Table;
use crate::value::{fnv1a, NativeFn, Obj, ObjFunction, ObjNative, ObjString, Value};

/// Owns every heap allocation made during a run, replacing the source's
/// intrusive object list: objects live in `objects` until the `Heap` itself
/// is dropped (§9 DESIGN NOTES — "all live objects reachable from one place
/// for O(n) bulk free"), at which point the `Vec` drop releases every `Rc`
/// this store is keeping alive.
#[derive(Default)]
pub struct Heap {
    strings: Table,
    objects: Vec<Obj>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// `copy_string`/`take_string` collapsed into one entry point: look the
    /// bytes up in the intern set, and allocate only on a miss (§4.3).
    pub fn intern(&mut self, chars: &str) -> Rc<ObjString> {
        let hash = fnv1a(chars.as_bytes());
        if let Some(existing) = self.strings.find_string(chars, hash) {
            return existing;
        }
        let obj = Rc::new(ObjString::new(chars.to_string()));
        self.strings.set(Rc::clone(&obj), Value::Nil);
        self.objects.push(Obj::String(Rc::clone(&obj)));
        obj
    }

    /// Registers a fully-compiled function (built up directly by the
    /// compiler, field by field, rather than through this `Heap`) for bulk
    /// reclamation, and hands back the owning reference.
    pub fn adopt_function(&mut self, function: ObjFunction) -> Rc<ObjFunction> {
        let obj = Rc::new(function);
        self.objects.push(Obj::Function(Rc::clone(&obj)));
        obj
    }

    pub fn alloc_native(&mut self, function: NativeFn) -> Rc<ObjNative> {
        let obj = Rc::new(ObjNative { function });
        self.objects.push(Obj::Native(Rc::clone(&obj)));
        obj
    }

    /// Number of allocations this heap has ever made (not "currently live" —
    /// `Rc` strong counts govern liveness; this is purely for the teardown
    /// test below, which drops the whole `Heap` and checks nothing panics).
    pub fn allocation_count(&self) -> usize {
        self.objects.len()
    }
}
