//! src/builders/encrypt_options.rs
//! Encryption options builder

use crate::aliases::DeviceSeed32;
use crate::keys::Scheme;
use std::fmt;

/// Options for [`encrypt`](crate::encrypt) that the key file cannot express.
///
/// Both settings only matter when no key is supplied:
/// - `fallback_scheme` picks the scheme (default ECC-256);
/// - `device_seed` controls the device key generated for ECC. Without a seed
///   a fresh one is drawn from the OS and returned in the
///   [`EncryptSummary`](crate::EncryptSummary) so the caller can provision it.
///
/// The seed is the device's long-term secret. Pass one explicitly only when
/// the device is provisioned from it.
#[derive(Default)]
pub struct EncryptOptions {
    fallback_scheme: Scheme,
    device_seed: Option<DeviceSeed32>,
}

impl fmt::Debug for EncryptOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptOptions")
            .field("fallback_scheme", &self.fallback_scheme)
            .field("device_seed", &self.device_seed.as_ref().map(|_| ".."))
            .finish()
    }
}

impl EncryptOptions {
    /// Options with defaults: ECC-256 fallback, random device seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme to use when no key is given.
    #[must_use]
    pub fn with_fallback_scheme(mut self, scheme: Scheme) -> Self {
        self.fallback_scheme = scheme;
        self
    }

    /// Seed for the generated device key (ECC, no key given).
    #[must_use]
    pub fn with_device_seed(mut self, seed: DeviceSeed32) -> Self {
        self.device_seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn fallback_scheme(&self) -> Scheme {
        self.fallback_scheme
    }

    #[must_use]
    pub fn device_seed(&self) -> Option<&DeviceSeed32> {
        self.device_seed.as_ref()
    }
}
