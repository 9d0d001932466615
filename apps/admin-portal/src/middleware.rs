//! # ミドルウェア
//!
//! Admin Portal 用のミドルウェアを提供する。

mod basic_auth;

pub use basic_auth::{AuthenticatedAdmin, GateState, extract_credentials, require_basic_auth};
