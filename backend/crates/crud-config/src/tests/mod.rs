
use std::env;

use tempfile::TempDir;

/// Variables that would leak the host environment into a test
const AMBIENT_VARS: &[&str] = &[
    "PORT",
    "APP_ENV",
    "CRUD_ENVIRONMENT",
    "CRUD_SERVER_HOST",
    "CRUD_SERVER_PORT",
    "CRUD_DATABASE_PATH",
    "CRUD_DATABASE_MAX_CONNECTIONS",
    "CRUD_DATABASE_SEED_DEMO_DATA",
    "CRUD_LOG_LEVEL",
    "CRUD_LOG_COLORED",
    "CRUD_LOG_FILE",
    "CRUD_PAGINATION_DEFAULT_LIMIT",
    "CRUD_PAGINATION_MAX_LIMIT",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point CRUD_CONFIG_DIR at it and clear
/// ambient overrides.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = AMBIENT_VARS.iter().map(|k| EnvGuard::remove(k)).collect();
    guards.push(EnvGuard::set(
        "CRUD_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));
    (temp, guards)
}
