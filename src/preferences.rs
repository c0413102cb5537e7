//! Persisted UI preferences. The dashboard keeps exactly one: the theme
//! flag, stored under a fixed key and replaced on every toggle.

use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use thiserror::Error;

const THEME_KEY: &str = "dashboard.theme";

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    LightMode,
    DarkMode,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::LightMode => "light-mode",
            Theme::DarkMode => "dark-mode",
        }
    }

    fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light-mode" => Some(Theme::LightMode),
            "dark-mode" => Some(Theme::DarkMode),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::LightMode
    }
}

pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init_tables(&self) -> Result<(), PreferencesError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ui_preferences (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Stored theme, or the light default when nothing was saved yet. An
    /// unrecognized stored value also falls back to the default rather
    /// than failing the startup read.
    pub async fn theme(&self) -> Result<Theme, PreferencesError> {
        let row = sqlx::query("SELECT value FROM ui_preferences WHERE name = ?")
            .bind(THEME_KEY)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row
            .and_then(|row| Theme::from_stored(row.get::<String, _>(0).as_str()))
            .unwrap_or_default())
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), PreferencesError> {
        sqlx::query(
            r#"
            INSERT INTO ui_preferences (name, value, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(THEME_KEY)
        .bind(theme.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
