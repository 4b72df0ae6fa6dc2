// SPDX-License-Identifier: MPL-2.0
//! Entry points that build a toast and attach it to a host.

use super::host::Host;
use super::instance::Toast;
use super::options::{ToastConfig, ToastDefaults, ToastOptions};
use crate::config::Config;

/// Builds toasts with a fixed host and set of defaults.
#[derive(Debug, Clone)]
pub struct Factory {
    host: Host,
    defaults: ToastDefaults,
}

impl Factory {
    #[must_use]
    pub fn new(host: Host, defaults: ToastDefaults) -> Self {
        Self { host, defaults }
    }

    /// Factory over the global host with built-in defaults.
    #[must_use]
    pub fn global() -> Self {
        Self::new(Host::global().clone(), ToastDefaults::default())
    }

    /// Factory over the global host with the defaults from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Host::global().clone(), config.toast.defaults())
    }

    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[must_use]
    pub fn defaults(&self) -> ToastDefaults {
        self.defaults
    }

    /// Shows `message`, normalizing `options` against this factory's defaults.
    pub fn show(&self, message: impl Into<String>, options: &ToastOptions) -> Toast {
        let config = ToastConfig::resolve(options, &self.defaults);
        self.spawn(message.into(), config)
    }

    /// Shows a toast described by markup attributes.
    ///
    /// Unlike [`Factory::show`], a missing `duration` attribute means the
    /// toast stays until dismissed; the factory defaults do not apply.
    pub fn declare(
        &self,
        message: impl Into<String>,
        class_list: Option<&str>,
        duration_attr: Option<&str>,
    ) -> Toast {
        let config = ToastConfig::from_attributes(class_list, duration_attr);
        self.spawn(message.into(), config)
    }

    fn spawn(&self, message: String, config: ToastConfig) -> Toast {
        let toast = Toast::create(message, config);
        self.host.attach(&toast);
        toast
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::global()
    }
}

/// Shows `message` on the global host with the built-in defaults.
///
/// Must be called from within a Tokio runtime.
pub fn show(message: impl Into<String>, options: &ToastOptions) -> Toast {
    Factory::global().show(message, options)
}
