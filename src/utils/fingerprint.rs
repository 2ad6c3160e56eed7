// ============================================================================
// FINGERPRINT - Identificador simple del dispositivo para el login
// ============================================================================

/// User-agent del navegador (se envía junto con las credenciales)
#[cfg(target_arch = "wasm32")]
pub fn user_agent() -> String {
    web_sys::window()
        .map(|win| win.navigator())
        .and_then(|nav| nav.user_agent().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn user_agent() -> String {
    "test-agent".to_string()
}

/// Fingerprint del dispositivo: hash FNV del user-agent + idioma.
/// No identifica de forma única, solo da una señal estable por navegador.
pub fn device_fingerprint() -> String {
    let material = format!("{}|{}", user_agent(), language());
    format!("{:016x}", fnv1a(material.as_bytes()))
}

#[cfg(target_arch = "wasm32")]
fn language() -> String {
    web_sys::window()
        .map(|win| win.navigator())
        .and_then(|nav| nav.language())
        .unwrap_or_else(|| "und".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn language() -> String {
    "und".to_string()
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in bytes {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_es_estable() {
        assert_eq!(device_fingerprint(), device_fingerprint());
        assert_eq!(device_fingerprint().len(), 16);
    }
}
