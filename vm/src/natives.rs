use std::time::{SystemTime, UNIX_EPOCH};

use compiler::value::{NativeFn, Value};

/// The one native the core ships (§4.8): wall-clock seconds as a float.
/// Ignores whatever arguments it was called with, like the reference `clock`.
fn clock(_args: &[Value]) -> Result<Value, String> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| "system clock is before the Unix epoch".to_string())?;
    Ok(Value::Number(elapsed.as_secs_f64()))
}

/// `(name, implementation)` pairs the VM installs into `globals` at startup.
pub fn builtins() -> &'static [(&'static str, NativeFn)] {
    &[("clock", clock)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_returns_a_number() {
        let result = clock(&[]).unwrap();
        assert!(matches!(result, Value::Number(_)));
    }
}
