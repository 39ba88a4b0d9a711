use std::fmt;
use std::path::{Path, PathBuf};

/// Environment type enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Local,
    Development,
    Staging,
    Production,
    Testing,
    Custom(String),
}

impl Environment {
    /// Detect environment from APP_ENV or default to Local
    pub fn detect() -> Self {
        match std::env::var("APP_ENV") {
            Ok(name) => Self::from_name(&name),
            Err(_) => Self::Local,
        }
    }

    /// Map an `APP_ENV` value to an environment; unknown names become `Custom`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "local" => Self::Local,
            "development" | "dev" => Self::Development,
            "staging" => Self::Staging,
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The suffix used for `.env.{suffix}` files
    pub fn env_file_suffix(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Testing => "testing",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Local or development
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Local | Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_file_suffix())
    }
}

/// Load environment variables from .env files with proper precedence
///
/// Precedence (later entries override earlier ones):
/// 1. `.env`
/// 2. `.env.local`
/// 3. `.env.{environment}`
/// 4. `.env.{environment}.local`
/// 5. Variables already set in the process environment
///
/// dotenvy never overwrites a variable that is already set, so files are
/// applied most specific first. Returns the files that were found.
pub fn load_dotenv(project_root: &Path) -> Vec<PathBuf> {
    let suffix = Environment::detect().env_file_suffix().to_string();

    let candidates = [
        project_root.join(format!(".env.{}.local", suffix)),
        project_root.join(format!(".env.{}", suffix)),
        project_root.join(".env.local"),
        project_root.join(".env"),
    ];

    let mut loaded = Vec::new();
    for path in candidates {
        if loaded.contains(&path) {
            continue;
        }
        if dotenvy::from_path(&path).is_ok() {
            loaded.push(path);
        }
    }
    loaded
}

/// Get an environment variable with a default value
///
/// A variable that is set but does not parse falls back to the default.
///
/// ```
/// use todolist_web::config::env;
///
/// let port: u16 = env("SERVER_PORT", 3030);
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_optional(key).unwrap_or(default)
}

/// Get an optional environment variable; unset, empty or unparsable is `None`
pub fn env_optional<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}
