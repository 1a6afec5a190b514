//! In-memory stand-in for the divination backend.
//!
//! Serves the same JSON contract under `/api` so the client can be exercised
//! end-to-end without the real service. Interpretations are canned text
//! built from the request; nothing is persisted beyond the process.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Interpretation {
    pub interpretation: String,
    pub advice: String,
}

#[derive(Deserialize)]
pub struct InterpretRequest {
    pub matter: String,
    pub hexagram: String,
    pub lines: Vec<String>,
}

/// One served interpretation, kept so tests can inspect what arrived.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DivinationRecord {
    pub id: Uuid,
    pub matter: String,
    pub hexagram: String,
    pub lines: Vec<String>,
    pub interpretation: String,
    pub advice: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub hexagram: Option<String>,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub hexagram: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Default)]
pub struct Store {
    pub todos: Vec<Todo>,
    pub divinations: Vec<DivinationRecord>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let api = Router::new()
        .route("/divination/interpret", post(interpret))
        .route("/divinations", get(list_divinations))
        .route("/todos", get(list_todos).post(create_todo))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Deterministic reading for a matter and hexagram.
pub fn canned_interpretation(matter: &str, hexagram: &str) -> Interpretation {
    Interpretation {
        interpretation: format!("For '{matter}', {hexagram} signals change and opportunity together."),
        advice: "Keep a steady mind and follow the natural course of change.".to_string(),
    }
}

async fn interpret(State(db): State<Db>, Json(input): Json<InterpretRequest>) -> Json<Interpretation> {
    let reading = canned_interpretation(&input.matter, &input.hexagram);
    let record = DivinationRecord {
        id: Uuid::new_v4(),
        matter: input.matter,
        hexagram: input.hexagram,
        lines: input.lines,
        interpretation: reading.interpretation.clone(),
        advice: reading.advice.clone(),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    info!(id = %record.id, hexagram = %record.hexagram, "interpretation served");
    db.write().await.divinations.push(record);
    Json(reading)
}

async fn list_divinations(State(db): State<Db>) -> Json<Vec<DivinationRecord>> {
    Json(db.read().await.divinations.clone())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.todos.clone())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> Json<Todo> {
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
        hexagram: input.hexagram,
        completed: input.completed,
        created_at: input.created_at,
    };
    info!(id = %todo.id, "todo created");
    db.write().await.todos.push(todo.clone());
    Json(todo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_timestamp() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "Test".to_string(),
            description: "desc".to_string(),
            hexagram: None,
            completed: false,
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["createdAt"], "2025-01-01T00:00:00.000Z");
        assert!(json["hexagram"].is_null());
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_defaults_optional_fields() {
        let input: CreateTodo = serde_json::from_str(
            r#"{"title":"t","description":"d","createdAt":"2025-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert!(input.hexagram.is_none());
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_requires_created_at() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":"t","description":"d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn canned_interpretation_mentions_matter_and_hexagram() {
        let reading = canned_interpretation("moving house", "泰");
        assert!(reading.interpretation.contains("moving house"));
        assert!(reading.interpretation.contains("泰"));
        assert!(!reading.advice.is_empty());
    }
}
