#![doc = "The `taskdeck` library crate."]
#![doc = ""]
#![doc = "Client-side layer for the TaskDeck task management backend: the"]
#![doc = "authentication session lifecycle (token storage, request/response"]
#![doc = "interception, 401-triggered teardown, rehydration at startup) plus"]
#![doc = "typed CRUD access to tasks and categories."]
#![doc = ""]
#![doc = "Data flows one direction: UI -> `AuthFacade` -> `SessionStore` ->"]
#![doc = "`AuthService` -> `HttpClient` -> backend. Responses flow back and"]
#![doc = "mutate store state, which the UI observes."]

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod storage;
